//! Form input for the create and edit flows.

use super::{TaskDomainError, TaskField};

/// Raw title and date text as entered by the user.
///
/// The form is a plain data source: it holds untrimmed text and performs no
/// validation until it is turned into a [`TaskDraft`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    title: String,
    due_date: String,
}

impl TaskForm {
    /// Creates a form from raw field values.
    #[must_use]
    pub fn new(title: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            due_date: due_date.into(),
        }
    }

    /// Returns the raw title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the raw due date text.
    #[must_use]
    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    /// Trims and validates the form fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyInput`] naming the first field that is
    /// empty after trimming.
    pub fn to_draft(&self) -> Result<TaskDraft, TaskDomainError> {
        TaskDraft::new(&self.title, &self.due_date)
    }
}

/// Validated, trimmed task fields ready to be written to a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    due_date: String,
}

impl TaskDraft {
    /// Creates a draft from untrimmed field values.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyInput`] with [`TaskField::Title`] when
    /// the title is blank, otherwise with [`TaskField::DueDate`] when the due
    /// date is blank.
    pub fn new(title: &str, due_date: &str) -> Result<Self, TaskDomainError> {
        let title_trimmed = title.trim();
        if title_trimmed.is_empty() {
            return Err(TaskDomainError::EmptyInput(TaskField::Title));
        }
        let due_date_trimmed = due_date.trim();
        if due_date_trimmed.is_empty() {
            return Err(TaskDomainError::EmptyInput(TaskField::DueDate));
        }
        Ok(Self {
            title: title_trimmed.to_owned(),
            due_date: due_date_trimmed.to_owned(),
        })
    }

    /// Returns the trimmed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the trimmed due date.
    #[must_use]
    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    /// Splits the draft into its title and due date.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.title, self.due_date)
    }
}
