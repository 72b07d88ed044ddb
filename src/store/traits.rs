use async_trait::async_trait;

use crate::error::MutationError;
use crate::tags::{ColorIndex, ContactId, Tag, TagId};

/// Remote persistence seam for tag mutations — implement for any backend.
///
/// Callers are expected to have validated names before reaching this layer;
/// implementations do not re-validate. Errors are opaque to the workflow:
/// it only distinguishes "succeeded" from "failed".
#[async_trait]
pub trait TagStore: Send + Sync {
    /// Create a new tag. The only operation that produces a tag id.
    async fn create_tag(&self, name: &str, color: ColorIndex) -> Result<Tag, MutationError>;

    /// Rename an existing tag. Idempotent on success.
    async fn rename_tag(&self, id: &TagId, name: &str) -> Result<(), MutationError>;

    /// Change an existing tag's palette slot. Idempotent on success.
    async fn recolor_tag(&self, id: &TagId, color: ColorIndex) -> Result<(), MutationError>;
}

/// Contact-side seam: associate a tag with a contact.
///
/// Association is by tag *name*, matching the backend's current contract.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn apply_tag(
        &self,
        contact_id: &ContactId,
        tag_name: &str,
    ) -> Result<(), MutationError>;
}
