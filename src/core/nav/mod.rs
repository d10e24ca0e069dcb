//! # Navigation
//!
//! The menu hierarchy is a stack of frames sitting on top of the main menu.
//! The main menu itself is never on the stack: an empty stack *is* the root.
//!
//! ```text
//! Root (main menu)                 stack = []
//! ├── Register form
//! ├── View menu                    stack = [View]
//! │   ├── Display (all)            stack = [View, Display]
//! │   ├── Sorted output            stack = [View, Sorted]
//! │   │   └── Display (sorted)     stack = [View, Sorted, Display]
//! │   └── Search
//! │       └── Display (matches)    replaces Search
//! ├── Modify list
//! │   └── Edit form
//! └── Delete list (+ y/n confirm)
//! ```
//!
//! Backward moves pop one frame. "Return to Main Menu" is a single
//! `return_to_root`: the stack is cleared in one step no matter how deep it
//! is, and the main menu starts over from its first option.
//!
//! Frames that need a line of input publish a [`Prompt`]; everything else
//! is driven by classified keys. See `core::action::update`.

pub mod form;
pub mod menu;

use log::debug;

use crate::core::search::SearchOutcome;
use crate::core::sort::SortOrder;
use crate::core::student::{MAX_NAME_LEN, Student};

use form::StudentForm;
use menu::{DisplayOption, MainOption, Menu, SearchMissOption, SortedOption, ViewOption};

/// What kind of line the active frame is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Free text, at most `max_len` characters.
    Text { max_len: usize },
    /// `-?[0-9]+`, re-asked until valid.
    Integer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub label: String,
    pub kind: PromptKind,
}

/// A message screen dismissed by any key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: String,
}

/// A list of records with Go-Back / Return-to-Main-Menu below it.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayFrame {
    pub title: &'static str,
    pub records: Vec<Student>,
    pub menu: Menu<DisplayOption>,
    /// Index of the first record row on screen.
    pub offset: usize,
}

impl DisplayFrame {
    pub fn new(title: &'static str, records: Vec<Student>) -> Self {
        Self {
            title,
            records,
            menu: Menu::new(),
            offset: 0,
        }
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    /// Stops with the last record on the top row.
    pub fn scroll_down(&mut self) {
        let last = self.records.len().saturating_sub(1);
        self.offset = (self.offset + 1).min(last);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchFrame {
    /// Waiting for a name.
    Prompt,
    /// Nothing found; offer to search again or leave.
    Miss {
        outcome: SearchOutcome,
        menu: Menu<SearchMissOption>,
    },
}

impl SearchFrame {
    pub fn miss_message(&self) -> Option<&'static str> {
        match self {
            SearchFrame::Miss {
                outcome: SearchOutcome::EmptyRoster,
                ..
            } => Some("No registered students."),
            SearchFrame::Miss { .. } => Some("No students found with that name."),
            SearchFrame::Prompt => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Register(StudentForm),
    View(Menu<ViewOption>),
    Sorted {
        menu: Menu<SortedOption>,
        order: SortOrder,
    },
    Display(DisplayFrame),
    Search(SearchFrame),
    Modify {
        highlight: usize,
    },
    Edit {
        position: usize,
        form: StudentForm,
    },
    Delete {
        highlight: usize,
        confirming: bool,
    },
    Notice(Notice),
}

impl Frame {
    pub fn sorted() -> Self {
        // Highlight starts on the first sort key, not the order toggle.
        Frame::Sorted {
            menu: Menu::starting_at(1),
            order: SortOrder::Ascending,
        }
    }

    pub fn notice(title: &'static str, message: impl Into<String>) -> Self {
        Frame::Notice(Notice {
            title,
            message: message.into(),
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Frame::Register(_) => "Register",
            Frame::View(_) => "View",
            Frame::Sorted { .. } => "Sorted",
            Frame::Display(_) => "Display",
            Frame::Search(_) => "Search",
            Frame::Modify { .. } => "Modify",
            Frame::Edit { .. } => "Edit",
            Frame::Delete { .. } => "Delete",
            Frame::Notice(_) => "Notice",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Frame::Register(_) => "Student Registration",
            Frame::View(_) => "View Students",
            Frame::Sorted { .. } => "Sorted Output",
            Frame::Display(display) => display.title,
            Frame::Search(SearchFrame::Prompt) => "Search Student by Name",
            Frame::Search(SearchFrame::Miss { .. }) => "Search Results",
            Frame::Modify { .. } => "Modify Student Info",
            Frame::Edit { .. } => "Edit Student Information",
            Frame::Delete { .. } => "Delete Student",
            Frame::Notice(notice) => notice.title,
        }
    }

    /// Menu rows as shown, for frames that are a fixed menu.
    pub fn option_labels(&self) -> Option<Vec<String>> {
        let owned = |labels: Vec<&'static str>| -> Vec<String> {
            labels.into_iter().map(String::from).collect()
        };
        match self {
            Frame::View(menu) => Some(owned(menu.labels())),
            Frame::Sorted { menu, order } => {
                let mut labels: Vec<String> = owned(menu.labels());
                labels[0] = format!("Sort Order: {}", order.label());
                Some(labels)
            }
            Frame::Display(display) => Some(owned(display.menu.labels())),
            Frame::Search(SearchFrame::Miss { menu, .. }) => Some(owned(menu.labels())),
            _ => None,
        }
    }

    pub fn prompt(&self) -> Option<Prompt> {
        match self {
            Frame::Register(form) | Frame::Edit { form, .. } => form.prompt(),
            Frame::Search(SearchFrame::Prompt) => Some(Prompt {
                label: "Enter Name: ".to_string(),
                kind: PromptKind::Text {
                    max_len: MAX_NAME_LEN,
                },
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    root: Menu<MainOption>,
    stack: Vec<Frame>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root_menu(&self) -> &Menu<MainOption> {
        &self.root
    }

    pub(crate) fn root_menu_mut(&mut self) -> &mut Menu<MainOption> {
        &mut self.root
    }

    pub fn is_at_root(&self) -> bool {
        self.stack.is_empty()
    }

    /// Frames above the root, bottom first.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The frame on top, `None` at the root.
    pub fn active(&self) -> Option<&Frame> {
        self.stack.last()
    }

    pub(crate) fn active_mut(&mut self) -> Option<&mut Frame> {
        self.stack.last_mut()
    }

    /// Input the active frame is waiting on, if it wants a line.
    pub fn prompt(&self) -> Option<Prompt> {
        self.active().and_then(Frame::prompt)
    }

    pub fn push(&mut self, frame: Frame) {
        debug!("Nav push {} (depth {})", frame.name(), self.stack.len() + 1);
        self.stack.push(frame);
    }

    pub fn pop(&mut self) -> Option<Frame> {
        let popped = self.stack.pop();
        if let Some(ref frame) = popped {
            debug!("Nav pop {} (depth {})", frame.name(), self.stack.len());
        }
        popped
    }

    /// Swap the active frame for another at the same depth. At the root
    /// this is a push.
    pub fn replace(&mut self, frame: Frame) {
        match self.stack.last_mut() {
            Some(top) => {
                debug!("Nav replace {} with {}", top.name(), frame.name());
                *top = frame;
            }
            None => self.push(frame),
        }
    }

    /// Drop every frame and land on a fresh main menu.
    pub fn return_to_root(&mut self) {
        debug!("Nav return to root from depth {}", self.stack.len());
        self.stack.clear();
        self.root = Menu::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_navigator_is_at_root() {
        let nav = Navigator::new();
        assert!(nav.is_at_root());
        assert_eq!(nav.depth(), 0);
        assert!(nav.active().is_none());
        assert!(nav.prompt().is_none());
    }

    #[test]
    fn test_push_pop() {
        let mut nav = Navigator::new();
        nav.push(Frame::View(Menu::new()));
        nav.push(Frame::sorted());
        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.active().map(Frame::name), Some("Sorted"));
        assert_eq!(nav.pop().map(|f| f.name()), Some("Sorted"));
        assert_eq!(nav.active().map(Frame::name), Some("View"));
    }

    #[test]
    fn test_replace_keeps_depth() {
        let mut nav = Navigator::new();
        nav.push(Frame::View(Menu::new()));
        nav.push(Frame::Search(SearchFrame::Prompt));
        nav.replace(Frame::Display(DisplayFrame::new("Search Results", Vec::new())));
        assert_eq!(nav.active().map(Frame::title), Some("Search Results"));
        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.active().map(Frame::name), Some("Display"));
    }

    #[test]
    fn test_return_to_root_clears_any_depth_and_resets_highlight() {
        let mut nav = Navigator::new();
        nav.root_menu_mut().handle_key(crate::core::action::Key::Down);
        for _ in 0..50 {
            nav.push(Frame::View(Menu::new()));
        }
        nav.return_to_root();
        assert!(nav.is_at_root());
        assert_eq!(nav.root_menu().highlight(), 0);
    }

    #[test]
    fn test_sorted_frame_starts_on_first_key() {
        match Frame::sorted() {
            Frame::Sorted { menu, order } => {
                assert_eq!(menu.highlighted(), SortedOption::ByName);
                assert_eq!(order, SortOrder::Ascending);
            }
            other => panic!("unexpected frame {other:?}"),
        }
    }

    #[test]
    fn test_sorted_labels_show_order() {
        let frame = Frame::Sorted {
            menu: Menu::new(),
            order: SortOrder::Descending,
        };
        let labels = frame.option_labels().unwrap();
        assert_eq!(labels[0], "Sort Order: Descending");
        assert_eq!(labels[4], "4. Go Back");
    }

    #[test]
    fn test_search_prompt_is_text() {
        let frame = Frame::Search(SearchFrame::Prompt);
        let prompt = frame.prompt().unwrap();
        assert_eq!(prompt.label, "Enter Name: ");
        assert_eq!(prompt.kind, PromptKind::Text { max_len: MAX_NAME_LEN });
    }

    #[test]
    fn test_miss_messages() {
        let empty = SearchFrame::Miss {
            outcome: SearchOutcome::EmptyRoster,
            menu: Menu::new(),
        };
        let none = SearchFrame::Miss {
            outcome: SearchOutcome::NoMatches,
            menu: Menu::new(),
        };
        assert_eq!(empty.miss_message(), Some("No registered students."));
        assert_eq!(none.miss_message(), Some("No students found with that name."));
        assert_eq!(SearchFrame::Prompt.miss_message(), None);
    }

    #[test]
    fn test_display_scroll_stays_in_range() {
        let roster = crate::test_support::roster_of(&[
            crate::test_support::fields(1, "A", [0; 5]),
            crate::test_support::fields(2, "B", [0; 5]),
            crate::test_support::fields(3, "C", [0; 5]),
        ]);
        let mut display = DisplayFrame::new("Student List", roster.all().to_vec());
        display.scroll_up();
        assert_eq!(display.offset, 0);
        for _ in 0..5 {
            display.scroll_down();
        }
        assert_eq!(display.offset, 2);
        display.scroll_up();
        assert_eq!(display.offset, 1);

        let mut empty = DisplayFrame::new("Student List", Vec::new());
        empty.scroll_down();
        assert_eq!(empty.offset, 0);
    }
}
