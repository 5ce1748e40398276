//! Notification ports: the store's outgoing messages and the final sink.

use crate::task::domain::Notification;

/// Accepts notifications raised by task store operations.
///
/// Implementations must not deliver to the user synchronously; delivery
/// happens after the triggering action returns.
pub trait Notifier {
    /// Queues a notification.
    fn notify(&self, notification: Notification);
}

/// Delivers notifications to the user.
pub trait NotificationSink {
    /// Shows a notification.
    fn show(&self, notification: Notification);
}
