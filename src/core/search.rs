//! # Search Engine
//!
//! Exact, case-sensitive, whole-string lookup by name.

use log::info;

use crate::core::roster::Roster;
use crate::core::student::Student;

/// What a search turned up. "Nobody is registered" and "nobody matched" are
/// reported differently, so they are different variants.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    EmptyRoster,
    NoMatches,
    Matches(Vec<Student>),
}

/// All records whose name equals `query`, in storage order.
pub fn find_by_name(roster: &Roster, query: &str) -> Vec<Student> {
    roster
        .all()
        .iter()
        .filter(|s| s.name == query)
        .cloned()
        .collect()
}

pub fn search(roster: &Roster, query: &str) -> SearchOutcome {
    if roster.is_empty() {
        info!("Search for {:?} on an empty roster", query);
        return SearchOutcome::EmptyRoster;
    }
    let matches = find_by_name(roster, query);
    info!("Search for {:?}: {} match(es)", query, matches.len());
    if matches.is_empty() {
        SearchOutcome::NoMatches
    } else {
        SearchOutcome::Matches(matches)
    }
}
