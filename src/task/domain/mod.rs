//! Domain model for the task list.
//!
//! The task domain models the task record, its identifier, user form input,
//! user-facing notifications, and the view model rendered for each display
//! partition. Storage and display concerns stay outside the domain boundary.

mod action;
mod error;
mod form;
mod ids;
mod notification;
mod task;
mod view;

pub use action::BoardAction;
pub use error::{ParseTaskIdError, TaskDomainError, TaskField};
pub use form::{TaskDraft, TaskForm};
pub use ids::{TaskId, TaskIdGenerator};
pub use notification::Notification;
pub use task::Task;
pub use view::{BoardView, Control, ControlKind, Partition, TaskView};
