//! In-memory adapters for embedding and tests.

mod sink;
mod storage;
mod surface;

pub use sink::CollectingSink;
pub use storage::InMemoryStore;
pub use surface::InMemorySurface;
