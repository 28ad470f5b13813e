//! HTTP client for the TerritoryResults endpoint.
//!
//! One GET per (territory, election): results must be fresh on every
//! allocation request, so responses are requested with `no-store` and the
//! client holds no state between calls beyond the connection pool.

use std::time::Duration;

use reqwest::header::CACHE_CONTROL;

use hc_core::TerritoryKey;

use crate::api::TerritoryResults;
use crate::{FetchError, FetchResult, ResultsSource, LOG_TARGET};

pub const DEFAULT_BASE_URL: &str = "https://www.legislativas2025.mai.gov.pt/frontend/data";
pub const DEFAULT_ELECTION_ID: &str = "AR";
/// The upstream enforces no timeout of its own; a hung region would
/// otherwise stall its whole fan-out branch.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Reqwest-backed `ResultsSource`.
#[derive(Clone, Debug)]
pub struct TerritoryClient {
    http: reqwest::Client,
    base_url: String,
    election_id: String,
}

#[derive(Clone, Debug)]
pub struct TerritoryClientBuilder {
    base_url: String,
    election_id: String,
    timeout: Duration,
}

impl Default for TerritoryClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            election_id: DEFAULT_ELECTION_ID.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl TerritoryClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn election_id(mut self, election_id: impl Into<String>) -> Self {
        self.election_id = election_id.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> FetchResult<TerritoryClient> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()?;
        Ok(TerritoryClient {
            http,
            base_url: self.base_url,
            election_id: self.election_id,
        })
    }
}

impl TerritoryClient {
    pub fn builder() -> TerritoryClientBuilder {
        TerritoryClientBuilder::default()
    }

    /// Client with default endpoint, election id and timeout.
    pub fn new() -> FetchResult<Self> {
        Self::builder().build()
    }
}

impl ResultsSource for TerritoryClient {
    async fn territory_results(&self, key: &TerritoryKey) -> FetchResult<TerritoryResults> {
        let url = format!("{}/TerritoryResults", self.base_url);
        log::debug!(target: LOG_TARGET, "GET {url} territoryKey={key}");

        let response = self
            .http
            .get(&url)
            .header(CACHE_CONTROL, "no-store")
            .query(&[
                ("territoryKey", key.as_str()),
                ("electionId", self.election_id.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { code: status.as_u16() });
        }

        Ok(response.json().await?)
    }
}
