//! Adapter implementations for task list ports.

pub mod fs;
pub mod markup;
pub mod memory;
pub mod notify;
