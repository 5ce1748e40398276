//! Error types for task domain validation and lookup.

use super::TaskId;
use std::fmt;
use thiserror::Error;

/// Form field checked by input validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    /// The task title.
    Title,
    /// The task due date.
    DueDate,
}

impl TaskField {
    /// Returns the field name used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::DueDate => "due date",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by task domain operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// A required field is empty after trimming.
    #[error("task {0} must not be empty")]
    EmptyInput(TaskField),

    /// No task with the identifier exists in the collection.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

impl TaskDomainError {
    /// Returns `true` when the error reports blank form input.
    #[must_use]
    pub const fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput(_))
    }

    /// Returns `true` when the error reports a missing task.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Error returned while parsing a task identifier from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid task id '{0}', expected a non-negative integer")]
pub struct ParseTaskIdError(pub String);
