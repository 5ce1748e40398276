//! Task record and its in-place mutations.

use super::{TaskDraft, TaskId};
use serde::{Deserialize, Serialize};

/// A single to-do record.
///
/// The serialized field names (`task`, `timestamp`, `isCompleted`) are the
/// storage format shared with existing saved boards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    #[serde(rename = "task")]
    title: String,
    #[serde(rename = "timestamp")]
    due_date: String,
    #[serde(rename = "isCompleted")]
    completed: bool,
}

impl Task {
    /// Creates a pending task from validated input.
    #[must_use]
    pub fn new(id: TaskId, draft: TaskDraft) -> Self {
        let (title, due_date) = draft.into_parts();
        Self {
            id,
            title,
            due_date,
            completed: false,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the due date text.
    #[must_use]
    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Overwrites the title and due date.
    pub fn revise(&mut self, draft: TaskDraft) {
        let (title, due_date) = draft.into_parts();
        self.title = title;
        self.due_date = due_date;
    }

    /// Marks the task completed.
    pub const fn complete(&mut self) {
        self.completed = true;
    }

    /// Returns the task to the pending list.
    pub const fn uncomplete(&mut self) {
        self.completed = false;
    }
}
