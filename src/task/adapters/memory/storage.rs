//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::ports::{KeyValueStore, StorageError, StorageResult};

/// Thread-safe in-memory key-value store.
///
/// Clones share the same entries, so a test can keep a handle and inspect
/// what the task store wrote.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
    available: bool,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Creates an empty, available store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::default(),
            available: true,
        }
    }

    /// Creates a store that reports itself unavailable and rejects all
    /// access.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            entries: Arc::default(),
            available: false,
        }
    }

    /// Creates an available store pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.write() {
            entries.insert(key.into(), value.into());
        }
        store
    }

    /// Returns a copy of the value under `key`, bypassing availability.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }
}

fn poisoned(err: &impl ToString) -> StorageError {
    StorageError::backend(std::io::Error::other(err.to_string()))
}

impl KeyValueStore for InMemoryStore {
    fn is_available(&self) -> bool {
        self.available
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        let entries = self.entries.read().map_err(|err| poisoned(&err))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        let mut entries = self.entries.write().map_err(|err| poisoned(&err))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
