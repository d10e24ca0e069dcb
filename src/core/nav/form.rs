//! # Student Form
//!
//! Collects a full `StudentFields` one prompt at a time: number, name, then
//! one grade per subject. Registration starts blank; editing carries the
//! record's current values so each prompt can show what it replaces.

use crate::core::nav::{Prompt, PromptKind};
use crate::core::student::{MAX_NAME_LEN, NUM_SUBJECTS, StudentFields, Subject};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    StudentNumber,
    Name,
    Grade(Subject),
}

impl FormField {
    const STEPS: usize = 2 + NUM_SUBJECTS;

    fn at(step: usize) -> Option<Self> {
        match step {
            0 => Some(FormField::StudentNumber),
            1 => Some(FormField::Name),
            n => Subject::ALL.get(n - 2).copied().map(FormField::Grade),
        }
    }

    pub fn label(&self) -> String {
        match self {
            FormField::StudentNumber => "Student Number".to_string(),
            FormField::Name => "Name".to_string(),
            FormField::Grade(subject) => format!("{} Grade", subject.label()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentForm {
    step: usize,
    draft: StudentFields,
    /// Values being replaced (edit only).
    current: Option<StudentFields>,
}

impl StudentForm {
    pub fn registration() -> Self {
        Self {
            step: 0,
            draft: StudentFields::default(),
            current: None,
        }
    }

    pub fn edit(current: StudentFields) -> Self {
        Self {
            step: 0,
            draft: StudentFields::default(),
            current: Some(current),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&StudentFields> {
        self.current.as_ref()
    }

    /// Field awaiting input, `None` once every field is in.
    pub fn field(&self) -> Option<FormField> {
        FormField::at(self.step)
    }

    pub fn is_complete(&self) -> bool {
        self.step >= FormField::STEPS
    }

    /// Fields already entered, in order, with their display values.
    pub fn answered(&self) -> Vec<(FormField, String)> {
        (0..self.step.min(FormField::STEPS))
            .filter_map(FormField::at)
            .map(|field| {
                let value = display_value(&self.draft, field);
                (field, value)
            })
            .collect()
    }

    pub fn prompt(&self) -> Option<Prompt> {
        let field = self.field()?;
        let prefix = if self.is_edit() { "New " } else { "" };
        let label = format!("{prefix}{}: ", field.label());
        let kind = match field {
            FormField::Name => PromptKind::Text {
                max_len: MAX_NAME_LEN,
            },
            _ => PromptKind::Integer,
        };
        Some(Prompt { label, kind })
    }

    /// Accept a line for the name field. Returns false if the form is not
    /// waiting on text.
    pub fn submit_text(&mut self, text: String) -> bool {
        if self.field() != Some(FormField::Name) {
            return false;
        }
        self.draft.name = text;
        self.step += 1;
        true
    }

    /// Accept an integer for the number or a grade. Returns false if the
    /// form is waiting on text or already complete.
    pub fn submit_integer(&mut self, value: i32) -> bool {
        match self.field() {
            Some(FormField::StudentNumber) => self.draft.student_number = value,
            Some(FormField::Grade(subject)) => self.draft.grades[subject.index()] = value,
            _ => return false,
        }
        self.step += 1;
        true
    }

    /// The collected fields, once complete.
    pub fn finish(&self) -> Option<StudentFields> {
        self.is_complete().then(|| self.draft.clone())
    }
}

/// Render one field's value from a set of fields, grades with their letter.
pub fn display_value(fields: &StudentFields, field: FormField) -> String {
    match field {
        FormField::StudentNumber => fields.student_number.to_string(),
        FormField::Name => fields.name.clone(),
        FormField::Grade(subject) => {
            let grade = fields.grades[subject.index()];
            format!("{} ({})", grade, crate::core::grading::classify(grade))
        }
    }
}
