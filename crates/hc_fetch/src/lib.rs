//! hc_fetch — Upstream results contract and the failure-to-zero boundary.
//!
//! - Wire models for the TerritoryResults JSON feed (`api`)
//! - The reqwest-backed `TerritoryClient` (`client`)
//! - `ResultsSource`, the seam the pipeline and tests plug into
//! - `region_snapshot`, which absorbs every fetch/shape failure into a
//!   zeroed `RegionSnapshot` — nothing above this boundary ever observes
//!   an error, only degraded data.

#![forbid(unsafe_code)]

use std::future::Future;

use thiserror::Error;

use hc_core::{RegionSnapshot, RegionSpec, TerritoryKey};

pub mod api;
pub mod client;

pub(crate) const LOG_TARGET: &str = "hc_fetch";

/// Unified error for the fetch layer. Never escapes `region_snapshot`.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport/build/deserialize errors from the HTTP client.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("unexpected status code: {code}")]
    Status { code: u16 },
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Source of per-territory results. `TerritoryClient` is the production
/// implementation; tests substitute in-memory fakes.
pub trait ResultsSource {
    fn territory_results(
        &self,
        key: &TerritoryKey,
    ) -> impl Future<Output = FetchResult<api::TerritoryResults>> + Send;
}

/// Fetch one region and convert to a snapshot, applying the fallback policy:
/// a failed fetch or malformed payload yields the zeroed snapshot for that
/// region (logged, never propagated).
pub async fn region_snapshot<S: ResultsSource>(source: &S, spec: &RegionSpec) -> RegionSnapshot {
    match source.territory_results(&spec.territory_key()).await {
        Ok(results) => api::snapshot_from_results(spec, results),
        Err(err) => {
            log::warn!(
                target: LOG_TARGET,
                "fetch failed for {} ({}): {err}; substituting zeroed region",
                spec.name,
                spec.key,
            );
            RegionSnapshot::unavailable(spec)
        }
    }
}

// Commonly used items (stable symbols used across the workspace)
pub use api::{snapshot_from_results, CurrentResults, PartyRow, TerritoryResults};
pub use client::{TerritoryClient, TerritoryClientBuilder, DEFAULT_BASE_URL, DEFAULT_ELECTION_ID};

#[cfg(test)]
mod tests {
    use super::*;
    use hc_core::district_roster;

    struct AlwaysFails;

    impl ResultsSource for AlwaysFails {
        async fn territory_results(&self, _key: &TerritoryKey) -> FetchResult<TerritoryResults> {
            Err(FetchError::Status { code: 503 })
        }
    }

    struct Empty;

    impl ResultsSource for Empty {
        async fn territory_results(&self, _key: &TerritoryKey) -> FetchResult<TerritoryResults> {
            Ok(TerritoryResults::default())
        }
    }

    #[tokio::test]
    async fn fetch_failure_degrades_to_zeroed_snapshot() {
        let spec = &district_roster()[0];
        let snap = region_snapshot(&AlwaysFails, spec).await;
        assert!(!snap.data_available);
        assert_eq!(snap.name, spec.name);
        assert_eq!(snap.physical_mandates(), 0);
    }

    #[tokio::test]
    async fn empty_payload_degrades_to_zeroed_snapshot() {
        let spec = &district_roster()[0];
        let snap = region_snapshot(&Empty, spec).await;
        assert!(!snap.data_available);
        assert!(snap.parties.is_empty());
    }
}
