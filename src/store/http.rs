use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::MutationError;
use crate::store::http_client::build_store_client_with_timeout;
use crate::store::traits::{ContactStore, TagStore};
use crate::tags::{ColorIndex, ContactId, Tag, TagId};

/// HTTP-backed tag/contact store.
///
/// Speaks a small JSON protocol against the contact-management backend:
/// tag creation returns the created tag inside a `tag` list (first element
/// wins), rename/recolor are independent idempotent PUTs, and association
/// is a POST carrying the tag *name*.
#[derive(Debug)]
pub struct HttpStore {
    cached_auth: Option<String>,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct CreateTagRequest<'a> {
    name: &'a str,
    color: ColorIndex,
}

#[derive(Debug, Deserialize)]
struct CreateTagResponse {
    #[serde(default)]
    tag: Option<Vec<WireTag>>,
}

#[derive(Debug, Deserialize)]
struct WireTag {
    id: String,
    name: String,
    #[serde(default)]
    color: ColorIndex,
}

#[derive(Debug, Serialize)]
struct RenameTagRequest<'a> {
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct RecolorTagRequest {
    color: ColorIndex,
}

#[derive(Debug, Serialize)]
struct ApplyTagRequest<'a> {
    op: &'static str,
    tag_name: &'a str,
}

impl HttpStore {
    pub fn new(base_url: &str, auth_token: Option<&str>) -> Self {
        Self::with_timeout(base_url, auth_token, 30)
    }

    pub fn with_timeout(base_url: &str, auth_token: Option<&str>, timeout_secs: u64) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let cached_auth = auth_token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| format!("Bearer {t}"));
        Self {
            cached_auth,
            base_url,
            client: build_store_client_with_timeout(timeout_secs),
        }
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.cached_auth {
            Some(auth) => builder.header("Authorization", auth),
            None => builder,
        }
    }

    /// Issue a mutation and fold transport/status failures into
    /// `MutationError`. Returns the response for callers that read a body.
    async fn send(
        &self,
        operation: &'static str,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, MutationError> {
        let resp = self
            .request(builder)
            .send()
            .await
            .map_err(|e| MutationError::Transport {
                operation,
                message: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            tracing::warn!(operation, status = status.as_u16(), "mutation rejected");
            return Err(MutationError::Rejected {
                operation,
                status: status.as_u16(),
                message,
            });
        }
        Ok(resp)
    }
}

#[async_trait]
impl TagStore for HttpStore {
    async fn create_tag(&self, name: &str, color: ColorIndex) -> Result<Tag, MutationError> {
        let operation = "create_tag";
        let url = format!("{}/tags", self.base_url);
        let resp = self
            .send(
                operation,
                self.client
                    .post(&url)
                    .json(&CreateTagRequest { name, color }),
            )
            .await?;

        let body: CreateTagResponse =
            resp.json()
                .await
                .map_err(|e| MutationError::MalformedResponse {
                    operation,
                    message: e.to_string(),
                })?;

        let wire = body
            .tag
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| MutationError::MalformedResponse {
                operation,
                message: "create response carried no tag".into(),
            })?;

        tracing::debug!(tag_id = %wire.id, "tag created");
        Ok(Tag {
            id: Some(TagId::new(wire.id)),
            name: wire.name,
            color: wire.color,
        })
    }

    async fn rename_tag(&self, id: &TagId, name: &str) -> Result<(), MutationError> {
        let url = format!("{}/tags/{}/name", self.base_url, id);
        self.send(
            "rename_tag",
            self.client.put(&url).json(&RenameTagRequest { name }),
        )
        .await?;
        Ok(())
    }

    async fn recolor_tag(&self, id: &TagId, color: ColorIndex) -> Result<(), MutationError> {
        let url = format!("{}/tags/{}/color", self.base_url, id);
        self.send(
            "recolor_tag",
            self.client.put(&url).json(&RecolorTagRequest { color }),
        )
        .await?;
        Ok(())
    }
}

#[async_trait]
impl ContactStore for HttpStore {
    async fn apply_tag(
        &self,
        contact_id: &ContactId,
        tag_name: &str,
    ) -> Result<(), MutationError> {
        let url = format!("{}/contacts/{}/tags", self.base_url, contact_id);
        self.send(
            "apply_tag",
            self.client
                .post(&url)
                .json(&ApplyTagRequest { op: "tag", tag_name }),
        )
        .await?;
        Ok(())
    }
}
