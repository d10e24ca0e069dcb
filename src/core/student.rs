//! # Student Records
//!
//! ```text
//! Student
//! ├── id: u32                     // assigned once by the roster
//! ├── student_number: i32         // operator-supplied, not unique
//! ├── name: String
//! ├── grades: [i32; 5]            // Subject order
//! ├── letter_grades: [char; 5]    // classify(grades[i])
//! ├── total_score: i64            // sum(grades)
//! └── average: f64                // total_score / 5
//! ```
//!
//! Derived fields are private and only rewritten through `set_grades`, so the
//! letter grades, total, and average can never drift from the grades.

use crate::core::grading::classify;

pub const NUM_SUBJECTS: usize = 5;

/// Longest name (in characters) the line editor accepts.
pub const MAX_NAME_LEN: usize = 49;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Korean,
    English,
    Math,
    Science,
    KoreanHistory,
}

impl Subject {
    pub const ALL: [Subject; NUM_SUBJECTS] = [
        Subject::Korean,
        Subject::English,
        Subject::Math,
        Subject::Science,
        Subject::KoreanHistory,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Subject::Korean => "Korean",
            Subject::English => "English",
            Subject::Math => "Math",
            Subject::Science => "Science",
            Subject::KoreanHistory => "Korean History",
        }
    }

    /// Position in `ALL`, and in every per-subject array.
    pub fn index(self) -> usize {
        match self {
            Subject::Korean => 0,
            Subject::English => 1,
            Subject::Math => 2,
            Subject::Science => 3,
            Subject::KoreanHistory => 4,
        }
    }
}

/// Operator-editable part of a record: what registration collects and what
/// an edit rewrites in full.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StudentFields {
    pub student_number: i32,
    pub name: String,
    pub grades: [i32; NUM_SUBJECTS],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    id: u32,
    pub student_number: i32,
    pub name: String,
    grades: [i32; NUM_SUBJECTS],
    letter_grades: [char; NUM_SUBJECTS],
    total_score: i64,
    average: f64,
}

impl Student {
    pub(crate) fn new(id: u32, fields: StudentFields) -> Self {
        let mut student = Self {
            id,
            student_number: fields.student_number,
            name: fields.name,
            grades: [0; NUM_SUBJECTS],
            letter_grades: ['F'; NUM_SUBJECTS],
            total_score: 0,
            average: 0.0,
        };
        student.set_grades(fields.grades);
        student
    }

    /// Rewrite number, name, and every grade. The id is left alone.
    pub(crate) fn rewrite(&mut self, fields: StudentFields) {
        self.student_number = fields.student_number;
        self.name = fields.name;
        self.set_grades(fields.grades);
    }

    fn set_grades(&mut self, grades: [i32; NUM_SUBJECTS]) {
        self.grades = grades;
        self.letter_grades = grades.map(classify);
        // i64 so five arbitrary i32 scores cannot overflow.
        self.total_score = grades.iter().map(|&g| i64::from(g)).sum();
        self.average = self.total_score as f64 / NUM_SUBJECTS as f64;
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn grades(&self) -> &[i32; NUM_SUBJECTS] {
        &self.grades
    }

    pub fn letter_grades(&self) -> &[char; NUM_SUBJECTS] {
        &self.letter_grades
    }

    pub fn total_score(&self) -> i64 {
        self.total_score
    }

    pub fn average(&self) -> f64 {
        self.average
    }

    pub fn fields(&self) -> StudentFields {
        StudentFields {
            student_number: self.student_number,
            name: self.name.clone(),
            grades: self.grades,
        }
    }
}
