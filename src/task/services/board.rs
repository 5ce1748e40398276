//! Task board: composes the store, edit flow and deferred notifications.

use mockable::Clock;
use std::sync::Arc;
use tracing::debug;

use super::{
    edit_flow::EditFlow,
    persistence::{PersistenceAdapter, PersistenceError},
    render::RenderSynchronizer,
    store::TaskStore,
};
use crate::task::{
    adapters::notify::DeferredNotifier,
    domain::{BoardAction, Task, TaskDomainError, TaskForm},
    ports::{DisplaySurface, KeyValueStore, NotificationSink, StoreObserver},
};

/// Result of dispatching one [`BoardAction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A task was created.
    Created(Task),
    /// The action changed the collection.
    Applied,
    /// The edit dialog opened with these pre-filled fields.
    EditOpened(TaskForm),
    /// The edit dialog closed without saving.
    EditCancelled,
    /// The action was rejected and changed nothing.
    Rejected(TaskDomainError),
    /// The action had nothing to act on (saving with no dialog open).
    Ignored,
}

/// The task list application.
///
/// Each call to [`TaskBoard::dispatch`] runs one action to completion and
/// only then delivers the notifications it raised.
pub struct TaskBoard<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    store: TaskStore<S, C>,
    edit_flow: EditFlow,
    notifier: DeferredNotifier,
}

impl<S, C> TaskBoard<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    /// Builds the board, wires `surface` to the store's render signal, and
    /// rehydrates the collection from storage.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when stored data cannot be read or
    /// decoded.
    pub fn start<D>(
        persistence: PersistenceAdapter<S>,
        clock: Arc<C>,
        surface: Arc<D>,
    ) -> Result<Self, PersistenceError>
    where
        D: DisplaySurface + 'static,
    {
        let notifier = DeferredNotifier::new();
        let stored = persistence.load_all()?;
        let mut store = TaskStore::new(persistence, clock, Arc::new(notifier.clone()));
        store.subscribe(Box::new(RenderSynchronizer::new(surface)));
        store.load(stored);
        debug!(count = store.len(), "task board started");
        Ok(Self {
            store,
            edit_flow: EditFlow::new(),
            notifier,
        })
    }

    /// Registers an additional observer for render and saved signals.
    pub fn subscribe(&mut self, observer: Box<dyn StoreObserver>) {
        self.store.subscribe(observer);
    }

    /// Returns the task store.
    #[must_use]
    pub const fn store(&self) -> &TaskStore<S, C> {
        &self.store
    }

    /// Returns the edit flow.
    #[must_use]
    pub const fn edit_flow(&self) -> &EditFlow {
        &self.edit_flow
    }

    /// Runs one action, then delivers the notifications it raised to `sink`.
    pub fn dispatch(&mut self, action: BoardAction, sink: &dyn NotificationSink) -> DispatchOutcome {
        let outcome = self.apply(action);
        let delivered = self.notifier.drain_into(sink);
        debug!(delivered, "notifications delivered");
        outcome
    }

    fn apply(&mut self, action: BoardAction) -> DispatchOutcome {
        match action {
            BoardAction::Submit(form) => self
                .store
                .create(form.title(), form.due_date())
                .map_or_else(DispatchOutcome::Rejected, DispatchOutcome::Created),
            BoardAction::OpenEdit(id) => match self.edit_flow.open(&self.store, id) {
                Some(form) => DispatchOutcome::EditOpened(form.clone()),
                None => DispatchOutcome::Rejected(TaskDomainError::NotFound(id)),
            },
            BoardAction::SaveEdit(form) => match self.edit_flow.save(&mut self.store, &form) {
                None => DispatchOutcome::Ignored,
                Some(result) => applied(result),
            },
            BoardAction::CancelEdit => {
                self.edit_flow.cancel();
                DispatchOutcome::EditCancelled
            }
            BoardAction::Complete(id) => applied(self.store.complete(id)),
            BoardAction::Restore(id) => applied(self.store.uncomplete(id)),
            BoardAction::Delete(id) => applied(self.store.remove(id).map(|_| ())),
        }
    }
}

fn applied(result: Result<(), TaskDomainError>) -> DispatchOutcome {
    match result {
        Ok(()) => DispatchOutcome::Applied,
        Err(err) => DispatchOutcome::Rejected(err),
    }
}
