//! Notifier that defers delivery until the current action has returned.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::task::{
    domain::Notification,
    ports::{NotificationSink, Notifier},
};

/// Queue of notifications waiting for the end of the current action.
///
/// The task store holds one clone and only enqueues. The board holds another
/// and drains the queue into a sink once the action that raised the
/// notifications has finished, so delivery never interleaves with a
/// mutation.
#[derive(Debug, Clone, Default)]
pub struct DeferredNotifier {
    queue: Arc<Mutex<VecDeque<Notification>>>,
}

impl DeferredNotifier {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of queued notifications.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.lock().map(|queue| queue.len()).unwrap_or_default()
    }

    /// Delivers every queued notification to `sink` in FIFO order and
    /// returns how many were delivered.
    pub fn drain_into(&self, sink: &dyn NotificationSink) -> usize {
        let drained: Vec<Notification> = match self.queue.lock() {
            Ok(mut queue) => queue.drain(..).collect(),
            Err(_) => return 0,
        };
        for notification in &drained {
            sink.show(*notification);
        }
        drained.len()
    }
}

impl Notifier for DeferredNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut queue) = self.queue.lock() {
            queue.push_back(notification);
        }
    }
}
