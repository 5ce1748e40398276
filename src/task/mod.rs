//! Task list management for Taskboard.
//!
//! This module implements the task store and its render-sync mechanism:
//! creating, editing, completing, restoring and deleting tasks, persisting the
//! collection after every change, and rebuilding the pending and completed
//! display partitions from the current collection. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
