use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::{RegistryError, Result};

pub const DEFAULT_API_BASE_URL: &str = "https://recherche-entreprises.api.gouv.fr";
const SEARCH_PATH: &str = "/search";

/// HTTP access to the registry `/search` endpoint.
#[async_trait]
pub trait RegistryHttpClient: Send + Sync {
    /// Sends `GET /search?<query>` and decodes the body as JSON.
    /// `query` must already be percent-encoded.
    async fn search(&self, query: &str) -> Result<Value>;
}

#[derive(Debug, Clone)]
pub struct RegistryClientConfig {
    pub base_url: String,
    /// Request timeout, reqwest defaults apply when unset.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for RegistryClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: None,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReqwestRegistryClient {
    client: reqwest::Client,
    config: RegistryClientConfig,
}

impl ReqwestRegistryClient {
    pub fn new(config: RegistryClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| RegistryError::ClientBuild(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn search_url(&self, query: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        format!("{base}{SEARCH_PATH}?{query}")
    }
}

#[async_trait]
impl RegistryHttpClient for ReqwestRegistryClient {
    async fn search(&self, query: &str) -> Result<Value> {
        let url = self.search_url(query);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RegistryError::Transport {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| RegistryError::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;

        Ok(serde_json::from_str(&body)?)
    }
}
