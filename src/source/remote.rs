//! Provider API client.

use std::time::Duration;

use tracing::info;

use crate::catalog::{ServerRecord, StatsMap};
use crate::config::ApiConfig;
use crate::source::SourceResult;

/// Fetches the catalog and stats documents from the provider API.
pub struct ApiClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a client with the configured fetch timeout.
    pub fn new(config: ApiConfig) -> SourceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Fetch both input documents.
    pub async fn fetch(&self) -> SourceResult<(Vec<ServerRecord>, StatsMap)> {
        info!(
            server_list_url = %self.config.server_list_url,
            server_stats_url = %self.config.server_stats_url,
            "Downloading server list/stats"
        );
        let servers = self.fetch_servers().await?;
        let stats = self.fetch_stats().await?;
        Ok((servers, stats))
    }

    async fn fetch_servers(&self) -> SourceResult<Vec<ServerRecord>> {
        let response = self
            .client
            .get(&self.config.server_list_url)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn fetch_stats(&self) -> SourceResult<StatsMap> {
        let response = self
            .client
            .get(&self.config.server_stats_url)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}
