use std::sync::Arc;

use anyhow::{Context, Result};
use url::Url;

use crate::config::StoreConfig;
use crate::store::http::HttpStore;

/// Factory: build the remote store from config.
///
/// A bad endpoint is an error, not a fallback; there is no no-op backend
/// for mutations.
pub fn build_store(config: &StoreConfig) -> Result<Arc<HttpStore>> {
    let url = Url::parse(&config.base_url)
        .with_context(|| format!("invalid store base URL '{}'", config.base_url))?;
    anyhow::ensure!(
        matches!(url.scheme(), "http" | "https"),
        "store base URL must be http(s), got '{}'",
        url.scheme()
    );

    Ok(Arc::new(HttpStore::with_timeout(
        &config.base_url,
        config.auth_token.as_deref(),
        config.timeout_secs,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> StoreConfig {
        StoreConfig {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_https_url_builds() {
        assert!(build_store(&config("https://mail.example.com/api")).is_ok());
    }

    #[test]
    fn garbage_url_is_rejected() {
        let err = build_store(&config("not a url")).unwrap_err();
        assert!(err.to_string().contains("invalid store base URL"));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let err = build_store(&config("ftp://example.com")).unwrap_err();
        assert!(err.to_string().contains("must be http(s)"));
    }
}
