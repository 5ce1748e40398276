//! Unit tests for the task module.
//!
//! Tests are organised by component, covering the store's mutation rules,
//! persistence, rendering, the edit dialog and board dispatch.

mod store_tests;
