//! Networked provider: `GET {base_url}/config/{kind}-config.json`.

use crate::documents::ConfigDocument;
use crate::error::{ConfigError, Result};
use crate::kind::ConfigKind;
use crate::provider::ConfigProvider;
use async_trait::async_trait;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct NetworkedProvider {
    client: reqwest::Client,
    base_url: String,
}

impl NetworkedProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, kind: ConfigKind) -> String {
        format!("{}{}", self.base_url, kind.static_path())
    }
}

#[async_trait]
impl ConfigProvider for NetworkedProvider {
    fn name(&self) -> &'static str {
        "networked"
    }

    async fn fetch(&self, kind: ConfigKind) -> Result<ConfigDocument> {
        let url = self.url_for(kind);
        debug!(kind = %kind, url = %url, "Requesting config");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(kind = %kind, error = %e, "Config request failed");
            ConfigError::fetch(kind, format!("request failed: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(kind = %kind, status = %status, "Config request returned non-success status");
            return Err(ConfigError::fetch(
                kind,
                format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("unknown status")
                ),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ConfigError::fetch(kind, format!("failed to read body: {e}")))?;

        ConfigDocument::from_slice(kind, &body)
    }
}
