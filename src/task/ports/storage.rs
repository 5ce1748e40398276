//! Key-value storage port used to persist the task collection.

use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Durable string storage addressed by key.
///
/// Implementations may be unavailable (no backing store could be opened);
/// callers check [`KeyValueStore::is_available`] before writing.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Returns whether the backing store can be used.
    fn is_available(&self) -> bool;

    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when nothing has been stored under the key.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store cannot be read.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Errors returned by key-value storage implementations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The backing store is not available.
    #[error("storage is unavailable")]
    Unavailable,

    /// The key cannot be used by the backing store.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    /// Backend-layer failure.
    #[error("storage backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl StorageError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
