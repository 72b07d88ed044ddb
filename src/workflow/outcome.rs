use std::sync::Arc;
use std::time::Duration;

use crate::notify::{DEFAULT_AUTO_DISMISS, Notification, NotificationSink, Severity};

/// Terminal result of a workflow session. Closed set; each maps 1:1 to a
/// notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Tag created, no target contact.
    Created { name: String },
    /// Tag created and attached to the target contact. Carries the name
    /// the server reported back, not the locally-typed one.
    CreatedAndApplied { name: String },
    /// Creation failed; no tag exists.
    CreateFailed,
    /// Tag created but the contact association failed. The tag stays.
    ApplyFailed,
    Updated,
    UpdateFailed,
}

impl Outcome {
    /// Stable notification family: a notice replaces the currently-showing
    /// one with the same key instead of stacking.
    pub fn family_key(&self) -> &'static str {
        match self {
            Self::Created { .. } | Self::CreateFailed => "new-tag",
            Self::CreatedAndApplied { .. } | Self::ApplyFailed => "tag",
            Self::Updated => "update-tag",
            Self::UpdateFailed => "update-tag-error",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::Created { .. } | Self::CreatedAndApplied { .. } | Self::Updated => {
                Severity::Info
            }
            Self::CreateFailed | Self::ApplyFailed | Self::UpdateFailed => Severity::Error,
        }
    }

    fn label(&self) -> String {
        match self {
            Self::Created { name } => t!("snackbar.tag_created", name = name).into_owned(),
            Self::CreatedAndApplied { name } => {
                t!("snackbar.tag_applied", tag = name).into_owned()
            }
            // Creation and application failures share the generic retry
            // wording; the apply case must not claim the tag was not
            // created, because it was.
            Self::CreateFailed | Self::ApplyFailed => {
                t!("label.error_try_again").into_owned()
            }
            Self::Updated => t!("snackbar.tag_updated").into_owned(),
            Self::UpdateFailed => t!("snackbar.tag_not_updated").into_owned(),
        }
    }
}

/// Maps a session's terminal outcome to exactly one notification on the
/// injected sink. Emission is the sole side effect.
pub struct OutcomeNotifier {
    sink: Arc<dyn NotificationSink>,
    auto_dismiss: Duration,
}

impl OutcomeNotifier {
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self::with_auto_dismiss(sink, DEFAULT_AUTO_DISMISS)
    }

    pub fn with_auto_dismiss(sink: Arc<dyn NotificationSink>, auto_dismiss: Duration) -> Self {
        Self { sink, auto_dismiss }
    }

    /// Fire-and-forget: not tied to the editing surface's visibility.
    pub fn notify(&self, outcome: &Outcome) {
        let notification = Notification {
            key: outcome.family_key(),
            replace: true,
            severity: outcome.severity(),
            label: outcome.label(),
            auto_dismiss: self.auto_dismiss,
            hide_button: true,
        };
        tracing::debug!(key = notification.key, severity = %notification.severity, "notifying outcome");
        self.sink.notify(notification);
    }
}
