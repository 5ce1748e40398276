//! Edit dialog state machine.

use mockable::Clock;
use tracing::debug;

use super::store::TaskStore;
use crate::task::{
    domain::{TaskDomainError, TaskForm, TaskId},
    ports::KeyValueStore,
};

/// Whether an edit is in progress, and for which task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditState {
    /// No edit dialog is open.
    #[default]
    Idle,
    /// The edit dialog is open for the task.
    Editing(TaskId),
}

/// The single edit dialog.
///
/// `Idle` moves to `Editing(id)` when the dialog opens. Opening again while
/// editing retargets the dialog. Saving returns to `Idle` unless the input is
/// blank, in which case the dialog stays open. Cancelling always returns to
/// `Idle`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditFlow {
    state: EditState,
    form: TaskForm,
}

impl EditFlow {
    /// Creates an idle edit flow.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> EditState {
        self.state
    }

    /// Returns the task being edited, if any.
    #[must_use]
    pub const fn editing(&self) -> Option<TaskId> {
        match self.state {
            EditState::Idle => None,
            EditState::Editing(id) => Some(id),
        }
    }

    /// Returns the dialog's pre-filled fields.
    #[must_use]
    pub const fn form(&self) -> &TaskForm {
        &self.form
    }

    /// Opens the dialog for a task, pre-filled with its current fields.
    ///
    /// Returns the pre-filled form, or `None` (leaving the state unchanged)
    /// when no task has the identifier.
    pub fn open<S, C>(&mut self, store: &TaskStore<S, C>, id: TaskId) -> Option<&TaskForm>
    where
        S: KeyValueStore,
        C: Clock,
    {
        let task = store.find(id)?;
        self.form = TaskForm::new(task.title(), task.due_date());
        self.state = EditState::Editing(id);
        debug!(task_id = %id, "edit dialog opened");
        Some(&self.form)
    }

    /// Commits the dialog's form to the task being edited.
    ///
    /// Returns `None` when no edit is in progress. Blank input keeps the
    /// dialog open; success or a missing task closes it.
    pub fn save<S, C>(
        &mut self,
        store: &mut TaskStore<S, C>,
        form: &TaskForm,
    ) -> Option<Result<(), TaskDomainError>>
    where
        S: KeyValueStore,
        C: Clock,
    {
        let id = self.editing()?;
        let result = store.edit(id, form.title(), form.due_date());
        match &result {
            Err(TaskDomainError::EmptyInput(_)) => {
                self.form = form.clone();
            }
            Ok(()) | Err(TaskDomainError::NotFound(_)) => self.close(),
        }
        Some(result)
    }

    /// Closes the dialog without saving.
    pub fn cancel(&mut self) {
        self.close();
    }

    fn close(&mut self) {
        if let EditState::Editing(id) = self.state {
            debug!(task_id = %id, "edit dialog closed");
        }
        self.state = EditState::Idle;
        self.form = TaskForm::default();
    }
}
