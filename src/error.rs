use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `tagsmith`.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; internal plumbing continues to use
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum TagsmithError {
    // ── Validation ───────────────────────────────────────────────────────
    #[error("validation: {0}")]
    Validation(#[from] ValidationError),

    // ── Remote mutation ──────────────────────────────────────────────────
    #[error("mutation: {0}")]
    Mutation(#[from] MutationError),

    // ── Workflow session ─────────────────────────────────────────────────
    #[error("workflow: {0}")]
    Workflow(#[from] WorkflowError),

    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Validation errors ───────────────────────────────────────────────────────

/// Local, synchronous rejections of a proposed tag name. These block
/// submission; they never reach the mutation layer and are never surfaced
/// as notifications.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("tag name is empty")]
    EmptyName,

    #[error("tag name exceeds the maximum length")]
    NameTooLong,

    #[error("tag name contains reserved characters")]
    ReservedCharacters,
}

// ─── Mutation errors ─────────────────────────────────────────────────────────

/// Opaque failure from a remote mutation call. The workflow consumes these
/// only as "failed" — no subtype distinction drives behavior.
#[derive(Debug, Error)]
pub enum MutationError {
    #[error("{operation} rejected by server (status {status}): {message}")]
    Rejected {
        operation: &'static str,
        status: u16,
        message: String,
    },

    #[error("{operation} transport failure: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },

    #[error("{operation} returned a malformed payload: {message}")]
    MalformedResponse {
        operation: &'static str,
        message: String,
    },
}

// ─── Workflow errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("cannot edit a tag that has not been created yet")]
    MissingTagId,
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Convenience re-exports ──────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, TagsmithError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_correctly() {
        let err = TagsmithError::Validation(ValidationError::NameTooLong);
        assert!(err.to_string().contains("maximum length"));
    }

    #[test]
    fn mutation_rejected_displays_operation_and_status() {
        let err = TagsmithError::Mutation(MutationError::Rejected {
            operation: "create_tag",
            status: 500,
            message: "internal error".into(),
        });
        assert!(err.to_string().contains("create_tag"));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn workflow_missing_id_displays_correctly() {
        let err = TagsmithError::Workflow(WorkflowError::MissingTagId);
        assert!(err.to_string().contains("has not been created"));
    }

    #[test]
    fn anyhow_interop() {
        let anyhow_err = anyhow::anyhow!("something went wrong");
        let err: TagsmithError = anyhow_err.into();
        assert!(err.to_string().contains("something went wrong"));
    }
}
