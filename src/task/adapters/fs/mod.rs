//! Filesystem adapters.

mod storage;

pub use storage::DirectoryStore;
