//! # OptionList Component
//!
//! A fixed list of menu rows with one highlighted. Purely presentational:
//! which row is highlighted lives in the core `Menu`, and arrow keys are
//! handled there too.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct OptionList {
    pub labels: Vec<String>,
    pub highlight: usize,
    /// Center rows horizontally instead of hugging the left edge.
    pub centered: bool,
}

impl OptionList {
    pub fn new(labels: Vec<String>, highlight: usize) -> Self {
        Self {
            labels,
            highlight,
            centered: false,
        }
    }

    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    /// Rows needed to show every option.
    pub fn height(&self) -> u16 {
        self.labels.len() as u16
    }
}

impl Component for OptionList {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let highlighted = Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD);
        let lines: Vec<Line> = self
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                if i == self.highlight {
                    Line::styled(label.as_str(), highlighted)
                } else {
                    Line::raw(label.as_str())
                }
            })
            .collect();

        let alignment = if self.centered {
            Alignment::Center
        } else {
            Alignment::Left
        };
        frame.render_widget(Paragraph::new(lines).alignment(alignment), area);
    }
}
