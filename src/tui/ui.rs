use crate::core::nav::form::{StudentForm, display_value};
use crate::core::nav::{DisplayFrame, Frame as NavFrame, Notice, SearchFrame};
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{OptionList, RecordPicker, Screen, StudentTable};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

const MAIN_TITLE: &str = "Student Management System";
const NAVIGATE: &str = "Use arrow keys to navigate, Enter to select.";
const NAVIGATE_BELOW: &str = "Use arrow keys to navigate options below, PgUp/PgDn to scroll.";
const ANY_KEY: &str = "Press any key to continue.";
pub const DELETE_CONFIRM: &str = "Are you sure you want to delete? (y/n)";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let area = frame.area();
    let Some(active) = app.nav.active() else {
        let menu = app.nav.root_menu();
        let labels = menu.labels().into_iter().map(String::from).collect();
        let options = OptionList::new(labels, menu.highlight()).centered();
        draw_menu_page(frame, area, MAIN_TITLE, options);
        return;
    };

    let title = active.title();
    match active {
        NavFrame::View(menu) => {
            let labels = active.option_labels().unwrap_or_default();
            let options = OptionList::new(labels, menu.highlight()).centered();
            draw_menu_page(frame, area, title, options);
        }
        NavFrame::Sorted { menu, .. } => {
            let labels = active.option_labels().unwrap_or_default();
            draw_menu_page(frame, area, title, OptionList::new(labels, menu.highlight()));
        }
        NavFrame::Display(display) => draw_display(frame, area, display),
        NavFrame::Search(SearchFrame::Prompt) => {
            draw_prompt_page(frame, area, title, Vec::new(), tui);
        }
        NavFrame::Search(miss @ SearchFrame::Miss { menu, .. }) => {
            let message = miss.miss_message().unwrap_or_default();
            let labels = active.option_labels().unwrap_or_default();
            let options = OptionList::new(labels, menu.highlight());
            draw_message_with_options(frame, area, title, message, options);
        }
        NavFrame::Register(form) | NavFrame::Edit { form, .. } => {
            draw_prompt_page(frame, area, title, form_lines(form), tui);
        }
        NavFrame::Modify { highlight } => {
            let instructions = "Use arrow keys to select, Enter to modify, 'q' to go back.";
            draw_picker_page(frame, area, title, instructions, app, tui, *highlight, None);
        }
        NavFrame::Delete {
            highlight,
            confirming,
        } => {
            let (instructions, question) = if *confirming {
                ("Press 'y' to delete, 'n' or 'q' to cancel.", Some(DELETE_CONFIRM))
            } else {
                ("Use arrow keys to select, Enter to delete, 'q' to go back.", None)
            };
            draw_picker_page(frame, area, title, instructions, app, tui, *highlight, question);
        }
        NavFrame::Notice(notice) => draw_notice(frame, area, notice),
    }
}

fn draw_menu_page(frame: &mut Frame, area: Rect, title: &str, mut options: OptionList) {
    Screen::new(title, NAVIGATE).render(frame, area);
    options.render(frame, Screen::body(area));
}

fn draw_display(frame: &mut Frame, area: Rect, display: &DisplayFrame) {
    Screen::new(display.title, NAVIGATE_BELOW).render(frame, area);

    let mut options = OptionList::new(
        display.menu.labels().into_iter().map(String::from).collect(),
        display.menu.highlight(),
    );
    let [table_area, _, options_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(options.height()),
    ])
    .areas(Screen::body(area));

    StudentTable::new(&display.records)
        .scrolled(display.offset)
        .render(frame, table_area);
    options.render(frame, options_area);
}

fn draw_message_with_options(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    mut options: OptionList,
) {
    Screen::new(title, NAVIGATE).render(frame, area);
    let [message_area, _, options_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(Screen::body(area));
    frame.render_widget(Paragraph::new(message), message_area);
    options.render(frame, options_area);
}

/// Lines above the prompt: what has been entered so far and, when editing,
/// the value the current field will replace.
fn form_lines(form: &StudentForm) -> Vec<Line<'static>> {
    let prefix = if form.is_edit() { "New " } else { "" };
    let mut lines = vec![
        Line::raw("Please enter the following information:"),
        Line::raw(""),
    ];
    lines.extend(
        form.answered()
            .into_iter()
            .map(|(field, value)| Line::raw(format!("{prefix}{}: {value}", field.label()))),
    );
    if let (Some(current), Some(field)) = (form.current(), form.field()) {
        lines.push(Line::styled(
            format!("Current {}: {}", field.label(), display_value(current, field)),
            Style::default().add_modifier(Modifier::DIM),
        ));
    }
    lines
}

fn draw_prompt_page(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line<'static>>,
    tui: &mut TuiState,
) {
    Screen::new(title, "Type a value and press Enter.").render(frame, area);
    let [lines_area, input_area] = Layout::vertical([
        Constraint::Length(lines.len() as u16),
        Constraint::Length(tui.line_input.height()),
    ])
    .areas(Screen::body(area));
    frame.render_widget(Paragraph::new(lines), lines_area);
    tui.line_input.render(frame, input_area);
}

#[allow(clippy::too_many_arguments)]
fn draw_picker_page(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    instructions: &str,
    app: &App,
    tui: &mut TuiState,
    highlight: usize,
    question: Option<&str>,
) {
    Screen::new(title, instructions).render(frame, area);
    let [list_area, question_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(if question.is_some() { 2 } else { 0 }),
    ])
    .areas(Screen::body(area));

    RecordPicker::new(&mut tui.picker, app.roster.all(), highlight).render(frame, list_area);
    if let Some(question) = question {
        let [_, line] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(question_area);
        let question = Line::styled(question, Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(question, line);
    }
}

fn draw_notice(frame: &mut Frame, area: Rect, notice: &Notice) {
    Screen::new(notice.title, ANY_KEY).render(frame, area);
    frame.render_widget(Paragraph::new(notice.message.as_str()), Screen::body(area));
}
