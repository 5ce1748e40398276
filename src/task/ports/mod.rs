//! Port contracts for the task list.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod display;
pub mod notifier;
pub mod observer;
pub mod storage;

pub use display::DisplaySurface;
pub use notifier::{NotificationSink, Notifier};
pub use observer::StoreObserver;
pub use storage::{KeyValueStore, StorageError, StorageResult};
