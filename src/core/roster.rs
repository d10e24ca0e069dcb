//! # Roster Store
//!
//! Owns the ordered collection of student records. Order is insertion order
//! until a sort rewrites it; deletion shifts later records down one slot.
//!
//! ## Id assignment
//!
//! Two schemes, chosen at construction:
//!
//! - [`IdScheme::Count`]: `id = len + 1` at insert time. After a delete this
//!   can hand out an id a surviving record already holds (insert 1,2,3;
//!   delete 2; next insert gets 3 again). Kept as the default because that is
//!   how the roster has always numbered students.
//! - [`IdScheme::Monotonic`]: `id = highest id ever handed out + 1`. Ids
//!   never repeat within a run.

use std::fmt;

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::student::{Student, StudentFields};

/// Maximum number of records the roster will hold.
pub const CAPACITY: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IdScheme {
    #[default]
    Count,
    Monotonic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Insert attempted with the roster already full.
    CapacityExceeded { capacity: usize },
    /// Position outside `0..len`.
    NotFound { position: usize, len: usize },
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::CapacityExceeded { capacity } => {
                write!(f, "roster is full ({capacity} students)")
            }
            RosterError::NotFound { position, len } => {
                write!(f, "no student at position {position} (roster holds {len})")
            }
        }
    }
}

impl std::error::Error for RosterError {}

#[derive(Debug, Clone)]
pub struct Roster {
    students: Vec<Student>,
    capacity: usize,
    id_scheme: IdScheme,
    last_id: u32,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(IdScheme::default())
    }
}

impl Roster {
    pub fn new(id_scheme: IdScheme) -> Self {
        Self::with_capacity(CAPACITY, id_scheme)
    }

    pub fn with_capacity(capacity: usize, id_scheme: IdScheme) -> Self {
        Self {
            students: Vec::with_capacity(capacity),
            capacity,
            id_scheme,
            last_id: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.students.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn id_scheme(&self) -> IdScheme {
        self.id_scheme
    }

    /// Read-only view in storage order. Empty is a valid answer.
    pub fn all(&self) -> &[Student] {
        &self.students
    }

    pub fn get(&self, position: usize) -> Option<&Student> {
        self.students.get(position)
    }

    /// Append a new record and return its id.
    pub fn insert(&mut self, fields: StudentFields) -> Result<u32, RosterError> {
        if self.is_full() {
            return Err(RosterError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let id = match self.id_scheme {
            IdScheme::Count => self.students.len() as u32 + 1,
            IdScheme::Monotonic => self.last_id + 1,
        };
        self.last_id = self.last_id.max(id);

        info!(
            "Registered student id={} number={} name={:?}",
            id, fields.student_number, fields.name
        );
        self.students.push(Student::new(id, fields));
        Ok(id)
    }

    /// Rewrite number, name, and all grades of the record at `position`.
    pub fn update(&mut self, position: usize, fields: StudentFields) -> Result<(), RosterError> {
        let len = self.students.len();
        let student = self
            .students
            .get_mut(position)
            .ok_or(RosterError::NotFound { position, len })?;
        student.rewrite(fields);
        info!(
            "Updated student id={} at position {} (number={} name={:?})",
            student.id(),
            position,
            student.student_number,
            student.name
        );
        Ok(())
    }

    /// Remove the record at `position`; survivors keep their relative order.
    pub fn delete_at(&mut self, position: usize) -> Result<Student, RosterError> {
        let len = self.students.len();
        if position >= len {
            return Err(RosterError::NotFound { position, len });
        }
        let removed = self.students.remove(position);
        info!(
            "Deleted student id={} from position {} ({} remain)",
            removed.id(),
            position,
            self.students.len()
        );
        Ok(removed)
    }

    /// Storage for in-place reordering. Length and contents stay the caller's
    /// to preserve; only the sort engine uses this.
    pub(crate) fn records_mut(&mut self) -> &mut [Student] {
        &mut self.students
    }
}
