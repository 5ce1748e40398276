//! Taskboard: a single-user task list with durable storage.
//!
//! The crate keeps three views of the same task collection consistent: the
//! in-memory list owned by the task store, the serialized copy held by a
//! key-value storage backend, and the two display partitions (pending and
//! completed) rebuilt after every change.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Tasks, form input, notifications and view models
//! - **Ports**: Storage, display, observer and notification traits
//! - **Adapters**: In-memory, directory-backed and markup implementations
//! - **Services**: Task store, persistence, render synchronizer, edit flow
//!   and the board that dispatches user actions
//!
//! # Modules
//!
//! - [`task`]: Task list domain, ports, adapters and services
//! - [`config`]: Layered board configuration
//! - [`logging`]: Tracing subscriber installation for binaries

pub mod config;
pub mod logging;
pub mod task;
