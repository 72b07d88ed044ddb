use std::sync::Arc;

use futures_util::future;

use crate::error::MutationError;
use crate::store::TagStore;
use crate::tags::{ColorIndex, Tag, TagId};

/// Issues the remote tag mutations for a workflow session.
///
/// Create is a single call; update is two independent calls (rename,
/// recolor) joined into one logical result. Neither sub-operation is
/// retried here — retry, if any, belongs to the surrounding session
/// boundary.
pub struct TagMutationController {
    store: Arc<dyn TagStore>,
}

impl TagMutationController {
    pub fn new(store: Arc<dyn TagStore>) -> Self {
        Self { store }
    }

    /// Create a new tag. The only path that produces a tag id.
    pub async fn create_tag(
        &self,
        name: &str,
        color: ColorIndex,
    ) -> Result<Tag, MutationError> {
        let tag = self.store.create_tag(name, color).await?;
        tracing::info!(tag_id = ?tag.id, name = %tag.name, "tag created");
        Ok(tag)
    }

    /// Rename and recolor an existing tag as one logical unit.
    ///
    /// Both mutations are issued concurrently and both run to settlement;
    /// there is no ordering guarantee between them. The composite succeeds
    /// iff both succeed.
    pub async fn update_tag(
        &self,
        id: &TagId,
        name: &str,
        color: ColorIndex,
    ) -> Result<(), MutationError> {
        let (renamed, recolored) = future::join(
            self.store.rename_tag(id, name),
            self.store.recolor_tag(id, color),
        )
        .await;

        let result = all_succeed([renamed, recolored]);
        match &result {
            Ok(()) => tracing::info!(tag_id = %id, "tag updated"),
            Err(e) => tracing::warn!(tag_id = %id, error = %e, "tag update failed"),
        }
        result
    }
}

/// Fold settled mutation results into one: success iff all succeed. The
/// first failure wins; later results have still run to settlement.
fn all_succeed(
    results: impl IntoIterator<Item = Result<(), MutationError>>,
) -> Result<(), MutationError> {
    results.into_iter().collect()
}
