//! # LineInput Component
//!
//! One line of echoed input behind a prompt label, e.g. `Name: Ann_`.
//!
//! ## Responsibilities
//!
//! - Capture typed and pasted characters, up to a bound
//! - Handle Backspace
//! - On Enter, hand the line back as text, or as a validated integer when
//!   the prompt wants one
//! - Show "Invalid input. Please enter a valid integer." under the line
//!   until a valid integer is entered
//!
//! ## State Management
//!
//! The buffer and the error are internal state. The label and the prompt
//! kind are props, synced from the core `Prompt` before each draw.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::nav::{Prompt, PromptKind};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const INVALID_INTEGER: &str = "Invalid input. Please enter a valid integer.";

/// Integer lines are bounded like names.
const MAX_INTEGER_LINE: usize = 49;

/// High-level events emitted by the LineInput
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// A free-text line was submitted.
    Text(String),
    /// An integer line was submitted and parsed.
    Integer(i32),
    /// An integer line failed to parse; the line was cleared.
    Rejected,
    /// The buffer changed.
    Edited,
}

/// Parse a line as `-?[0-9]+` that fits in an `i32`.
pub fn parse_integer_line(line: &str) -> Option<i32> {
    let digits = line.strip_prefix('-').unwrap_or(line);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    line.parse().ok()
}

#[derive(Debug)]
pub struct LineInput {
    /// Text typed so far (Internal State)
    pub buffer: String,
    /// Shown under the line after a rejected submit (Internal State)
    pub error: Option<&'static str>,
    /// Prompt text before the buffer (Prop)
    pub label: String,
    /// What the line must parse as (Prop)
    pub kind: PromptKind,
}

impl Default for LineInput {
    fn default() -> Self {
        Self::new()
    }
}

impl LineInput {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            error: None,
            label: String::new(),
            kind: PromptKind::Integer,
        }
    }

    /// Sync props from the active prompt.
    pub fn set_prompt(&mut self, prompt: &Prompt) {
        self.label.clone_from(&prompt.label);
        self.kind = prompt.kind;
    }

    fn max_len(&self) -> usize {
        match self.kind {
            PromptKind::Text { max_len } => max_len,
            PromptKind::Integer => MAX_INTEGER_LINE,
        }
    }

    /// Append as much of `text` as the bound allows. Returns whether
    /// anything was added.
    fn push_bounded(&mut self, text: impl Iterator<Item = char>) -> bool {
        let room = self.max_len().saturating_sub(self.buffer.chars().count());
        let before = self.buffer.len();
        self.buffer.extend(text.filter(|c| !c.is_control()).take(room));
        self.buffer.len() != before
    }

    fn submit(&mut self) -> LineEvent {
        match self.kind {
            PromptKind::Text { .. } => {
                self.error = None;
                LineEvent::Text(std::mem::take(&mut self.buffer))
            }
            PromptKind::Integer => match parse_integer_line(&self.buffer) {
                Some(value) => {
                    self.buffer.clear();
                    self.error = None;
                    LineEvent::Integer(value)
                }
                None => {
                    log::debug!("Rejected integer line {:?}", self.buffer);
                    self.buffer.clear();
                    self.error = Some(INVALID_INTEGER);
                    LineEvent::Rejected
                }
            },
        }
    }

    /// Rows the input needs: the line plus room for an error.
    pub fn height(&self) -> u16 {
        2
    }
}

impl Component for LineInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(vec![
            Span::raw(self.label.as_str()),
            Span::styled(self.buffer.as_str(), Style::default().fg(Color::Green)),
        ])];
        if let Some(error) = self.error {
            lines.push(Line::styled(error, Style::default().fg(Color::Red)));
        }
        frame.render_widget(Paragraph::new(lines), area);

        let typed = (self.label.width() + self.buffer.width()) as u16;
        let cursor_x = area.x + typed.min(area.width.saturating_sub(1));
        frame.set_cursor_position((cursor_x, area.y));
    }
}

impl EventHandler for LineInput {
    type Event = LineEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => self
                .push_bounded(std::iter::once(*c))
                .then_some(LineEvent::Edited),
            TuiEvent::Paste(text) => self.push_bounded(text.chars()).then_some(LineEvent::Edited),
            TuiEvent::Backspace => self.buffer.pop().map(|_| LineEvent::Edited),
            TuiEvent::Submit => Some(self.submit()),
            _ => None,
        }
    }
}
