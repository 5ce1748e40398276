//! Application services for the task list.

mod board;
mod edit_flow;
mod persistence;
mod render;
mod store;

pub use board::{DispatchOutcome, TaskBoard};
pub use edit_flow::{EditFlow, EditState};
pub use persistence::{
    DEFAULT_STORAGE_KEY, PersistenceAdapter, PersistenceError, SaveOutcome, decode_tasks,
    encode_tasks,
};
pub use render::{RenderSynchronizer, build_view};
pub use store::TaskStore;
