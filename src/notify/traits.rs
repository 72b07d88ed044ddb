use std::time::Duration;

use strum::Display;

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Info,
    Error,
}

/// A transient user-facing message.
///
/// `key` identifies the notification family: a new notification replaces any
/// currently-showing one with the same key instead of stacking, when
/// `replace` is set. The message auto-dismisses after `auto_dismiss`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub key: &'static str,
    pub replace: bool,
    pub severity: Severity,
    pub label: String,
    pub auto_dismiss: Duration,
    pub hide_button: bool,
}

/// Presentation seam for notifications — implement for any snackbar/toast
/// surface. Emission is fire-and-forget: the sink has no return value the
/// core consumes, and it must accept notifications regardless of whether
/// the editing surface that produced them is still visible.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_displays_lowercase() {
        assert_eq!(Severity::Info.to_string(), "info");
        assert_eq!(Severity::Error.to_string(), "error");
    }
}
