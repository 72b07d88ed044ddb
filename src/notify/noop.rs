use super::traits::{Notification, NotificationSink};

/// Zero-overhead sink — drops every notification. For embedders that want
/// the mutations without the presentation.
pub struct NoopSink;

impl NotificationSink for NoopSink {
    #[inline(always)]
    fn notify(&self, _notification: Notification) {}
}
