//! # Screen Component
//!
//! The chrome every page shares: a bordered box, a centered bold title,
//! a separator under it, and a dim instruction line along the bottom.
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │              View Students           │
//! │──────────────────────────────────────│
//! │                                      │
//! │  body                                │
//! │                                      │
//! │ Use arrow keys to navigate, Enter... │
//! └──────────────────────────────────────┘
//! ```
//!
//! Stateless. The body area is exposed through [`Screen::body`] so the
//! caller can lay its own content out inside the frame.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

pub struct Screen<'a> {
    pub title: &'a str,
    pub instructions: &'a str,
}

/// The four rows of the inside of a screen.
struct ScreenAreas {
    title: Rect,
    separator: Rect,
    body: Rect,
    instructions: Rect,
}

impl<'a> Screen<'a> {
    pub fn new(title: &'a str, instructions: &'a str) -> Self {
        Self {
            title,
            instructions,
        }
    }

    /// Where page content goes, given the full screen area.
    pub fn body(area: Rect) -> Rect {
        Self::areas(area).body
    }

    fn areas(area: Rect) -> ScreenAreas {
        let inner = Block::bordered().inner(area);
        let [title, separator, _, body, instructions] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);
        let [_, body] = Layout::horizontal([Constraint::Length(1), Constraint::Min(0)]).areas(body);
        ScreenAreas {
            title,
            separator,
            body,
            instructions,
        }
    }
}

impl Component for Screen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let areas = Self::areas(area);

        frame.render_widget(Block::bordered(), area);

        let title = Line::from(self.title)
            .centered()
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
        frame.render_widget(title, areas.title);

        let rule = "─".repeat(areas.separator.width as usize);
        frame.render_widget(Paragraph::new(rule), areas.separator);

        let instructions =
            Line::from(self.instructions).style(Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(instructions, areas.instructions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_screen_renders_title_and_instructions() {
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                Screen::new("View Students", "Press any key to return.").render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains("View Students"));
        assert!(text.contains("Press any key to return."));
        assert!(text.contains("──────"));
    }

    #[test]
    fn test_body_sits_inside_the_chrome() {
        let area = Rect::new(0, 0, 40, 10);
        let body = Screen::body(area);
        // Border, title, separator, gap above; instructions and border below.
        assert_eq!(body.y, 4);
        assert_eq!(body.x, 2);
        assert_eq!(body.height, 4);
    }
}
