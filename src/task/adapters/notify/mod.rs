//! Notification adapters.

mod deferred;
mod tracing_sink;

pub use deferred::DeferredNotifier;
pub use tracing_sink::TracingSink;
