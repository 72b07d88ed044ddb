use std::sync::Arc;

use crate::error::MutationError;
use crate::store::ContactStore;
use crate::tags::ContactId;

/// Attaches a newly created tag to a contact.
///
/// Best-effort follow-up to a successful create: if this fails, the tag
/// nonetheless exists and is not rolled back. Association is by tag name,
/// matching the backend's current contract.
pub struct ApplicationController {
    contacts: Arc<dyn ContactStore>,
}

impl ApplicationController {
    pub fn new(contacts: Arc<dyn ContactStore>) -> Self {
        Self { contacts }
    }

    pub async fn apply_to_contact(
        &self,
        contact_id: &ContactId,
        tag_name: &str,
    ) -> Result<(), MutationError> {
        match self.contacts.apply_tag(contact_id, tag_name).await {
            Ok(()) => {
                tracing::info!(contact_id = %contact_id, tag = %tag_name, "tag applied to contact");
                Ok(())
            }
            Err(e) => {
                // The tag stays created; only the association failed.
                tracing::warn!(
                    contact_id = %contact_id,
                    tag = %tag_name,
                    error = %e,
                    "tag application failed"
                );
                Err(e)
            }
        }
    }
}
