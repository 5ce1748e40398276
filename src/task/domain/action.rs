//! User actions dispatched to the board.

use super::{TaskForm, TaskId};

/// One user interaction, handled to completion before the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    /// Submit the create form.
    Submit(TaskForm),
    /// Open the edit dialog for a pending task.
    OpenEdit(TaskId),
    /// Save the edit dialog for the task currently being edited.
    SaveEdit(TaskForm),
    /// Close the edit dialog without saving.
    CancelEdit,
    /// Move a pending task to the completed list.
    Complete(TaskId),
    /// Move a completed task back to the pending list.
    Restore(TaskId),
    /// Delete a completed task.
    Delete(TaskId),
}
