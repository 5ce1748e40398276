//! Task store owning the canonical in-memory collection.

use mockable::Clock;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

use super::persistence::{PersistenceAdapter, SaveOutcome};
use crate::task::{
    domain::{Notification, Task, TaskDomainError, TaskDraft, TaskId, TaskIdGenerator},
    ports::{KeyValueStore, Notifier, StoreObserver},
};

/// Owns the task collection and keeps storage and observers in step with it.
///
/// Every successful mutation, in one synchronous step, signals observers to
/// render, saves the full collection, and queues a notification. Failed
/// operations change nothing: blank input queues [`Notification::EmptyInput`]
/// and an unknown identifier is silent.
pub struct TaskStore<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    tasks: Vec<Task>,
    ids: TaskIdGenerator,
    persistence: PersistenceAdapter<S>,
    clock: Arc<C>,
    notifier: Arc<dyn Notifier>,
    observers: Vec<Box<dyn StoreObserver>>,
    last_save: Option<SaveOutcome>,
}

impl<S, C> TaskStore<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    /// Creates an empty store.
    #[must_use]
    pub fn new(persistence: PersistenceAdapter<S>, clock: Arc<C>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            tasks: Vec::new(),
            ids: TaskIdGenerator::new(),
            persistence,
            clock,
            notifier,
            observers: Vec::new(),
            last_save: None,
        }
    }

    /// Registers an observer for render and saved signals.
    pub fn subscribe(&mut self, observer: Box<dyn StoreObserver>) {
        self.observers.push(observer);
    }

    /// Returns the collection in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the persistence adapter.
    #[must_use]
    pub const fn persistence(&self) -> &PersistenceAdapter<S> {
        &self.persistence
    }

    /// Returns the outcome of the most recent save, if any save ran.
    #[must_use]
    pub const fn last_save(&self) -> Option<SaveOutcome> {
        self.last_save
    }

    /// Finds the first task with the identifier.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Creates a pending task and appends it to the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyInput`] when the title or due date is
    /// blank after trimming.
    pub fn create(&mut self, title: &str, due_date: &str) -> Result<Task, TaskDomainError> {
        let draft = self.validate(title, due_date)?;
        let id = self.ids.next_id(&*self.clock);
        let task = Task::new(id, draft);
        self.tasks.push(task.clone());
        debug!(task_id = %id, "task created");
        self.commit(Notification::TaskAdded);
        Ok(task)
    }

    /// Overwrites the title and due date of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyInput`] when the title or due date is
    /// blank after trimming, or [`TaskDomainError::NotFound`] when no task
    /// has the identifier.
    pub fn edit(&mut self, id: TaskId, title: &str, due_date: &str) -> Result<(), TaskDomainError> {
        let draft = self.validate(title, due_date)?;
        self.task_mut(id)?.revise(draft);
        debug!(task_id = %id, "task edited");
        self.commit(Notification::TaskUpdated);
        Ok(())
    }

    /// Moves a task to the completed partition.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotFound`] when no task has the identifier.
    pub fn complete(&mut self, id: TaskId) -> Result<(), TaskDomainError> {
        self.task_mut(id)?.complete();
        debug!(task_id = %id, "task completed");
        self.commit(Notification::TaskCompleted);
        Ok(())
    }

    /// Moves a task back to the pending partition.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotFound`] when no task has the identifier.
    pub fn uncomplete(&mut self, id: TaskId) -> Result<(), TaskDomainError> {
        self.task_mut(id)?.uncomplete();
        debug!(task_id = %id, "task restored");
        self.commit(Notification::TaskRestored);
        Ok(())
    }

    /// Removes a task, keeping the relative order of the others.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotFound`] when no task has the identifier.
    pub fn remove(&mut self, id: TaskId) -> Result<Task, TaskDomainError> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or(TaskDomainError::NotFound(id))?;
        let removed = self.tasks.remove(index);
        debug!(task_id = %id, "task removed");
        self.commit(Notification::TaskDeleted);
        Ok(removed)
    }

    /// Replaces the collection wholesale with previously stored tasks.
    ///
    /// Signals observers to render but does not save: the data has just been
    /// read from storage. Identifier generation resumes above the largest
    /// loaded identifier. Records repeating an earlier identifier are
    /// dropped.
    pub fn load(&mut self, tasks: Vec<Task>) {
        let mut seen = HashSet::with_capacity(tasks.len());
        let total = tasks.len();
        self.tasks = tasks
            .into_iter()
            .filter(|task| seen.insert(task.id()))
            .collect();
        if self.tasks.len() < total {
            warn!(
                dropped = total - self.tasks.len(),
                "dropped stored tasks with duplicate ids"
            );
        }
        for task in &self.tasks {
            self.ids.observe(task.id());
        }
        debug!(count = self.tasks.len(), "tasks loaded into store");
        self.signal_render();
    }

    fn validate(&self, title: &str, due_date: &str) -> Result<TaskDraft, TaskDomainError> {
        TaskDraft::new(title, due_date).inspect_err(|_| {
            self.notifier.notify(Notification::EmptyInput);
        })
    }

    fn task_mut(&mut self, id: TaskId) -> Result<&mut Task, TaskDomainError> {
        self.tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(TaskDomainError::NotFound(id))
    }

    fn signal_render(&self) {
        for observer in &self.observers {
            observer.on_render(&self.tasks);
        }
    }

    fn commit(&mut self, notification: Notification) {
        self.signal_render();
        let outcome = self.persistence.save(&self.tasks);
        if outcome.is_saved() {
            for observer in &self.observers {
                observer.on_saved();
            }
        }
        self.last_save = Some(outcome);
        self.notifier.notify(notification);
    }
}
