//! Notification sink that writes to the tracing log.

use tracing::debug;

use crate::task::{domain::Notification, ports::NotificationSink};

/// Logs each notification at `debug` level.
///
/// Hosts that already show notifications to the user can pair it with their
/// own sink without duplicating output at the default `info` filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn show(&self, notification: Notification) {
        debug!(text = notification.message(), "notification shown");
    }
}
