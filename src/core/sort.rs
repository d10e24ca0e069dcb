//! # Sort Engine
//!
//! Reorders the roster in place by name, student number, or total score.
//!
//! The order has to match a bubble sort that only swaps neighbours when
//! `order * cmp(a, b) > 0`: records that compare equal never trade places,
//! in either direction. `slice::sort_by` is stable, so flipping the
//! comparator (rather than reversing the result) gives exactly that.

use std::cmp::Ordering;

use log::info;

use crate::core::roster::Roster;
use crate::core::student::Student;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Byte-wise comparison of the name.
    Name,
    StudentNumber,
    TotalScore,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::StudentNumber => "Student Number",
            SortKey::TotalScore => "Total Score",
        }
    }

    fn compare(self, a: &Student, b: &Student) -> Ordering {
        match self {
            SortKey::Name => a.name.as_bytes().cmp(b.name.as_bytes()),
            SortKey::StudentNumber => a.student_number.cmp(&b.student_number),
            SortKey::TotalScore => a.total_score().cmp(&b.total_score()),
        }
    }
}

/// Stable in-place sort of the whole roster.
pub fn sort(roster: &mut Roster, key: SortKey, order: SortOrder) {
    info!(
        "Sorting {} students by {} ({})",
        roster.len(),
        key.label(),
        order.label()
    );
    roster
        .records_mut()
        .sort_by(|a, b| order.apply(key.compare(a, b)));
}

pub fn sort_by_name(roster: &mut Roster, order: SortOrder) {
    sort(roster, SortKey::Name, order);
}

pub fn sort_by_number(roster: &mut Roster, order: SortOrder) {
    sort(roster, SortKey::StudentNumber, order);
}

pub fn sort_by_total_score(roster: &mut Roster, order: SortOrder) {
    sort(roster, SortKey::TotalScore, order);
}
