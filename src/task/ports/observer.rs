//! Observer port for task store change signals.

use crate::task::domain::Task;

/// Receives the store's change signals.
///
/// Observers are called synchronously from inside the mutating store
/// operation, once per mutation.
pub trait StoreObserver {
    /// The collection changed; `tasks` is its full current contents.
    fn on_render(&self, tasks: &[Task]);

    /// The collection was just written to storage.
    fn on_saved(&self) {}
}
