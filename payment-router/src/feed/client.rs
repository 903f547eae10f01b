//! Fetching the routing table document over HTTP.

use std::time::Duration;

use tracing::info;

use crate::routing::RoutingTable;

use super::error::FeedError;
use super::file::parse_document;

/// Default request timeout, in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the routing table client.
#[derive(Debug, Clone)]
pub struct RoutingTableClientConfig {
    /// Full URL of the routing table document
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RoutingTableClientConfig {
    /// Create a new config for the document at `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client that fetches the routing table document.
#[derive(Debug, Clone)]
pub struct RoutingTableClient {
    http: reqwest::Client,
    url: String,
}

impl RoutingTableClient {
    /// Create a new client.
    pub fn new(config: RoutingTableClientConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// Fetch and convert the document.
    pub async fn fetch(&self) -> Result<RoutingTable, FeedError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let table = parse_document(&body)?;
        info!(rows = table.len(), url = %self.url, "fetched routing table");
        Ok(table)
    }
}
