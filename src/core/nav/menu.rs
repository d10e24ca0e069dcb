//! # Menus
//!
//! A `Menu<T>` is a fixed list of options with one highlighted row.
//! Highlight movement wraps in both directions; only `Confirm` commits.

use std::marker::PhantomData;

use crate::core::action::Key;

/// An option enum that can back a `Menu`.
pub trait MenuOption: Copy + 'static {
    /// Every option, in display order.
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;
}

/// Step a highlight one row up, wrapping from the first row to the last.
pub fn wrap_up(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (index + len - 1) % len }
}

/// Step a highlight one row down, wrapping from the last row to the first.
pub fn wrap_down(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (index + 1) % len }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu<T: MenuOption> {
    highlight: usize,
    _options: PhantomData<T>,
}

impl<T: MenuOption> Default for Menu<T> {
    fn default() -> Self {
        Self::starting_at(0)
    }
}

impl<T: MenuOption> Menu<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(highlight: usize) -> Self {
        Self {
            highlight: highlight.min(T::ALL.len().saturating_sub(1)),
            _options: PhantomData,
        }
    }

    pub fn highlight(&self) -> usize {
        self.highlight
    }

    pub fn highlighted(&self) -> T {
        T::ALL[self.highlight]
    }

    pub fn labels(&self) -> Vec<&'static str> {
        T::ALL.iter().map(T::label).collect()
    }

    /// Move on Up/Down, commit on Confirm, ignore everything else.
    pub fn handle_key(&mut self, key: Key) -> Option<T> {
        match key {
            Key::Up => {
                self.highlight = wrap_up(self.highlight, T::ALL.len());
                None
            }
            Key::Down => {
                self.highlight = wrap_down(self.highlight, T::ALL.len());
                None
            }
            Key::Confirm => Some(self.highlighted()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainOption {
    Register,
    View,
    Modify,
    Delete,
    Exit,
}

impl MenuOption for MainOption {
    const ALL: &'static [Self] = &[
        MainOption::Register,
        MainOption::View,
        MainOption::Modify,
        MainOption::Delete,
        MainOption::Exit,
    ];

    fn label(&self) -> &'static str {
        match self {
            MainOption::Register => "1. Register Student",
            MainOption::View => "2. View Students",
            MainOption::Modify => "3. Modify Student Info",
            MainOption::Delete => "4. Delete Student",
            MainOption::Exit => "5. Exit Program",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewOption {
    DisplayAll,
    DisplaySorted,
    Search,
    Return,
}

impl MenuOption for ViewOption {
    const ALL: &'static [Self] = &[
        ViewOption::DisplayAll,
        ViewOption::DisplaySorted,
        ViewOption::Search,
        ViewOption::Return,
    ];

    fn label(&self) -> &'static str {
        match self {
            ViewOption::DisplayAll => "1. Display All",
            ViewOption::DisplaySorted => "2. Display Sorted",
            ViewOption::Search => "3. Search and Display",
            ViewOption::Return => "4. Return to Menu",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortedOption {
    ToggleOrder,
    ByName,
    ByNumber,
    ByTotalScore,
    GoBack,
}

impl MenuOption for SortedOption {
    const ALL: &'static [Self] = &[
        SortedOption::ToggleOrder,
        SortedOption::ByName,
        SortedOption::ByNumber,
        SortedOption::ByTotalScore,
        SortedOption::GoBack,
    ];

    /// The toggle row's real label carries the current order; see
    /// `Frame::Sorted` for the rendered text.
    fn label(&self) -> &'static str {
        match self {
            SortedOption::ToggleOrder => "Sort Order",
            SortedOption::ByName => "1. Sort by Name",
            SortedOption::ByNumber => "2. Sort by Student Number",
            SortedOption::ByTotalScore => "3. Sort by Total Score",
            SortedOption::GoBack => "4. Go Back",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayOption {
    GoBack,
    MainMenu,
}

impl MenuOption for DisplayOption {
    const ALL: &'static [Self] = &[DisplayOption::GoBack, DisplayOption::MainMenu];

    fn label(&self) -> &'static str {
        match self {
            DisplayOption::GoBack => "1. Go Back",
            DisplayOption::MainMenu => "2. Return to Main Menu",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMissOption {
    SearchAgain,
    ReturnToView,
    MainMenu,
}

impl MenuOption for SearchMissOption {
    const ALL: &'static [Self] = &[
        SearchMissOption::SearchAgain,
        SearchMissOption::ReturnToView,
        SearchMissOption::MainMenu,
    ];

    fn label(&self) -> &'static str {
        match self {
            SearchMissOption::SearchAgain => "1. Search Again",
            SearchMissOption::ReturnToView => "2. Return to View Students",
            SearchMissOption::MainMenu => "3. Return to Menu",
        }
    }
}
