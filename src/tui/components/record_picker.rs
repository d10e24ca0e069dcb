//! # RecordPicker Component
//!
//! Selectable list of students (`"{id}. {name}"`) for the modify and delete
//! pages. The highlighted position itself is owned by the core frame; the
//! picker only keeps the `ListState` so the scroll offset stays put between
//! draws when the roster is longer than the screen.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `RecordPickerState` lives in `TuiState`
//! - `RecordPicker` is created each frame with borrowed state and props

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{List, ListItem, ListState};

use crate::core::student::Student;

/// Persistent state for the record picker.
#[derive(Debug, Default)]
pub struct RecordPickerState {
    pub list_state: ListState,
}

/// Transient render wrapper for the record picker.
pub struct RecordPicker<'a> {
    state: &'a mut RecordPickerState,
    records: &'a [Student],
    highlight: usize,
}

impl<'a> RecordPicker<'a> {
    pub fn new(state: &'a mut RecordPickerState, records: &'a [Student], highlight: usize) -> Self {
        Self {
            state,
            records,
            highlight,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .records
            .iter()
            .map(|student| ListItem::new(format!("{}. {}", student.id(), student.name)))
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD));

        let selected = (!self.records.is_empty())
            .then(|| self.highlight.min(self.records.len() - 1));
        self.state.list_state.select(selected);

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
