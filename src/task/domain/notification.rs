//! User-visible messages emitted after task list changes.

use std::fmt;

/// Message shown to the user once the triggering action has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    /// A task was created.
    TaskAdded,
    /// A task's title or due date was changed.
    TaskUpdated,
    /// A task moved to the completed list.
    TaskCompleted,
    /// A completed task moved back to the pending list.
    TaskRestored,
    /// A task was deleted.
    TaskDeleted,
    /// The submitted form had a blank field.
    EmptyInput,
}

impl Notification {
    /// Returns the message text shown to the user.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::TaskAdded => "Task added!",
            Self::TaskUpdated => "Task updated!",
            Self::TaskCompleted => "Task completed!",
            Self::TaskRestored => "Task restored to the list!",
            Self::TaskDeleted => "Task deleted!",
            Self::EmptyInput => "Input must not be empty!",
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
