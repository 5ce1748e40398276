//! Notification sink that records delivered messages.

use std::sync::{Arc, Mutex};

use crate::task::{domain::Notification, ports::NotificationSink};

/// Records every notification shown, in delivery order.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    shown: Arc<Mutex<Vec<Notification>>>,
}

impl CollectingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the notifications shown so far.
    #[must_use]
    pub fn shown(&self) -> Vec<Notification> {
        self.shown
            .lock()
            .map(|shown| shown.clone())
            .unwrap_or_default()
    }

    /// Removes and returns the notifications shown so far.
    #[must_use]
    pub fn take(&self) -> Vec<Notification> {
        self.shown
            .lock()
            .map(|mut shown| std::mem::take(&mut *shown))
            .unwrap_or_default()
    }
}

impl NotificationSink for CollectingSink {
    fn show(&self, notification: Notification) {
        if let Ok(mut shown) = self.shown.lock() {
            shown.push(notification);
        }
    }
}
