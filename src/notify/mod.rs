pub mod noop;
pub mod traits;

pub use noop::NoopSink;
pub use traits::{Notification, NotificationSink, Severity};

use std::time::Duration;

/// How long a notification stays on screen before auto-dismissing.
pub const DEFAULT_AUTO_DISMISS: Duration = Duration::from_millis(3000);
