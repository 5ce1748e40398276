//! Persistence adapter that stores the task collection as one JSON value.

use thiserror::Error;
use tracing::{debug, warn};

use crate::task::{
    domain::Task,
    ports::{KeyValueStore, StorageError},
};

/// Key the task collection is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "TODO_APPS";

/// Result of a best-effort save.
///
/// Saving never fails the mutation that triggered it; the outcome reports
/// whether storage now matches memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The full collection was written.
    Saved,
    /// Storage is unavailable; nothing was written.
    StorageUnavailable,
    /// The write was attempted and failed.
    Failed,
}

impl SaveOutcome {
    /// Returns `true` when storage now holds the in-memory collection.
    #[must_use]
    pub const fn is_saved(self) -> bool {
        matches!(self, Self::Saved)
    }
}

/// Errors raised while reading or encoding the stored collection.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The storage backend failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The stored value is not a valid task collection.
    #[error("failed to decode stored tasks: {0}")]
    Decode(#[source] serde_json::Error),

    /// The collection could not be serialized.
    #[error("failed to encode tasks: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Serializes a task collection to its stored JSON form.
///
/// # Errors
///
/// Returns [`PersistenceError::Encode`] when serialization fails.
pub fn encode_tasks(tasks: &[Task]) -> Result<String, PersistenceError> {
    serde_json::to_string(tasks).map_err(PersistenceError::Encode)
}

/// Deserializes a task collection from its stored JSON form.
///
/// # Errors
///
/// Returns [`PersistenceError::Decode`] when the value is not a JSON array of
/// task records.
pub fn decode_tasks(serialized: &str) -> Result<Vec<Task>, PersistenceError> {
    serde_json::from_str(serialized).map_err(PersistenceError::Decode)
}

/// Saves and restores the task collection under a single storage key.
#[derive(Debug, Clone)]
pub struct PersistenceAdapter<S>
where
    S: KeyValueStore,
{
    storage: S,
    key: String,
}

impl<S> PersistenceAdapter<S>
where
    S: KeyValueStore,
{
    /// Creates an adapter writing under `key`.
    #[must_use]
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Creates an adapter writing under [`DEFAULT_STORAGE_KEY`].
    #[must_use]
    pub fn with_default_key(storage: S) -> Self {
        Self::new(storage, DEFAULT_STORAGE_KEY)
    }

    /// Returns the storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the underlying storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Writes the full collection when storage is available.
    pub fn save(&self, tasks: &[Task]) -> SaveOutcome {
        if !self.storage.is_available() {
            warn!(key = %self.key, "storage unavailable, tasks not saved");
            return SaveOutcome::StorageUnavailable;
        }
        let result = encode_tasks(tasks)
            .and_then(|serialized| Ok(self.storage.set(&self.key, &serialized)?));
        match result {
            Ok(()) => {
                debug!(key = %self.key, count = tasks.len(), "tasks saved");
                SaveOutcome::Saved
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to save tasks");
                SaveOutcome::Failed
            }
        }
    }

    /// Reads the stored collection.
    ///
    /// Returns an empty collection when storage is unavailable or nothing has
    /// been stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Storage`] when the read fails and
    /// [`PersistenceError::Decode`] when the stored value is corrupt.
    pub fn load_all(&self) -> Result<Vec<Task>, PersistenceError> {
        if !self.storage.is_available() {
            return Ok(Vec::new());
        }
        let Some(serialized) = self.storage.get(&self.key)? else {
            return Ok(Vec::new());
        };
        let tasks = decode_tasks(&serialized)?;
        debug!(key = %self.key, count = tasks.len(), "tasks loaded");
        Ok(tasks)
    }
}
