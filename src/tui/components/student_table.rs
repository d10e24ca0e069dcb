//! # StudentTable Component
//!
//! Fixed-column listing of student records:
//!
//! ```text
//! ID  Number    Name            Korean         English        ...  Total  Average
//! 1   1001      Ann              95 (A)         85 (B)        ...  425    85.00
//! ```
//!
//! Rows start at `offset`; whatever does not fit below is summarized as
//! "... and N more".
//!
//! Columns are padded by display width, not byte or char count, so names
//! with wide characters keep the columns lined up. Names longer than their
//! column are cut with an ellipsis.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::student::{Student, Subject};
use crate::tui::component::Component;

const ID_WIDTH: usize = 4;
const NUMBER_WIDTH: usize = 10;
const NAME_WIDTH: usize = 16;
const SUBJECT_WIDTH: usize = 15;
const TOTAL_WIDTH: usize = 7;
const AVERAGE_WIDTH: usize = 8;

pub struct StudentTable<'a> {
    pub records: &'a [Student],
    pub offset: usize,
}

impl<'a> StudentTable<'a> {
    pub fn new(records: &'a [Student]) -> Self {
        Self { records, offset: 0 }
    }

    pub fn scrolled(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

impl Component for StudentTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.records.is_empty() {
            frame.render_widget(Paragraph::new("No registered students."), area);
            return;
        }

        let mut lines = vec![
            Line::styled(header_row(), Style::default().add_modifier(Modifier::BOLD)),
            Line::raw("─".repeat(row_width())),
        ];

        let offset = self.offset.min(self.records.len() - 1);
        let rest = &self.records[offset..];

        // Header and rule take two rows; keep one for the overflow note.
        let room = (area.height as usize).saturating_sub(2);
        let shown = if rest.len() > room {
            room.saturating_sub(1)
        } else {
            rest.len()
        };
        lines.extend(rest[..shown].iter().map(|s| Line::raw(record_row(s))));
        if shown < rest.len() {
            lines.push(Line::styled(
                format!("... and {} more", rest.len() - shown),
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}

fn row_width() -> usize {
    ID_WIDTH + NUMBER_WIDTH + NAME_WIDTH + SUBJECT_WIDTH * Subject::ALL.len() + TOTAL_WIDTH
        + AVERAGE_WIDTH
}

fn header_row() -> String {
    let mut row = String::new();
    row.push_str(&fit("ID", ID_WIDTH));
    row.push_str(&fit("Number", NUMBER_WIDTH));
    row.push_str(&fit("Name", NAME_WIDTH));
    for subject in Subject::ALL {
        row.push_str(&fit(subject.label(), SUBJECT_WIDTH));
    }
    row.push_str(&fit("Total", TOTAL_WIDTH));
    row.push_str(&fit("Average", AVERAGE_WIDTH));
    row
}

fn record_row(student: &Student) -> String {
    let mut row = String::new();
    row.push_str(&fit(&student.id().to_string(), ID_WIDTH));
    row.push_str(&fit(&student.student_number.to_string(), NUMBER_WIDTH));
    row.push_str(&fit(&student.name, NAME_WIDTH));
    for (grade, letter) in student.grades().iter().zip(student.letter_grades()) {
        row.push_str(&fit(&format!("{grade:>3} ({letter})"), SUBJECT_WIDTH));
    }
    row.push_str(&fit(&student.total_score().to_string(), TOTAL_WIDTH));
    row.push_str(&fit(&format!("{:.2}", student.average()), AVERAGE_WIDTH));
    row
}

/// Cut `text` to leave at least one column of gap inside `width`, then pad
/// it out to exactly `width` display columns.
fn fit(text: &str, width: usize) -> String {
    let budget = width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;

    if text.width() > budget {
        for c in text.chars() {
            let w = c.width().unwrap_or(0);
            // Leave a column for the ellipsis.
            if used + w > budget.saturating_sub(1) {
                break;
            }
            out.push(c);
            used += w;
        }
        out.push('…');
        used += 1;
    } else {
        out.push_str(text);
        used = text.width();
    }

    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}
