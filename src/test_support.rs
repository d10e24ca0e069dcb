//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::roster::Roster;
use crate::core::state::App;
use crate::core::student::{NUM_SUBJECTS, StudentFields};

pub fn fields(student_number: i32, name: &str, grades: [i32; NUM_SUBJECTS]) -> StudentFields {
    StudentFields {
        student_number,
        name: name.to_string(),
        grades,
    }
}

/// A default roster with `students` inserted in order.
pub fn roster_of(students: &[StudentFields]) -> Roster {
    let mut roster = Roster::default();
    for student in students {
        roster
            .insert(student.clone())
            .expect("test roster over capacity");
    }
    roster
}

/// Creates a test App with an empty roster.
pub fn test_app() -> App {
    App::new(Roster::default())
}

/// Creates a test App whose roster already holds `students`.
pub fn test_app_with(students: &[StudentFields]) -> App {
    App::new(roster_of(students))
}
