//! Wire models for the TerritoryResults feed.
//!
//! Every field the upstream may omit carries `#[serde(default)]`: a missing
//! count reads as 0, a missing party list as empty (the feed treats all of
//! them as optional in practice). Percentage fields are parsed but never
//! consumed by the core.

use serde::Deserialize;

use hc_core::{Acronym, PartyStanding, RegionSnapshot, RegionSpec};

use crate::LOG_TARGET;

/// Top-level response. `currentResults` missing means the payload is
/// malformed for our purposes; conversion falls back to the zeroed region.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerritoryResults {
    #[serde(default)]
    pub current_results: Option<CurrentResults>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentResults {
    #[serde(default)]
    pub results_party: Vec<PartyRow>,
    #[serde(default)]
    pub territory_full_name: Option<String>,
    /// Seats still open for allocation (simulated by this engine).
    #[serde(default)]
    pub available_mandates: u32,
    /// Seats already attributed; the feed calls this `totalMandates`.
    #[serde(default)]
    pub total_mandates: u32,
    #[serde(default)]
    pub number_voters: u64,
    #[serde(default)]
    pub subscribed_voters: u64,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyRow {
    #[serde(default)]
    pub acronym: String,
    #[serde(default)]
    pub votes: u64,
    #[serde(default)]
    pub mandates: u32,
    // Computed upstream; ignored by the core.
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub valid_votes_percentage: f64,
}

/// Convert a parsed payload into the core snapshot.
///
/// Missing `currentResults` is treated like a fetch failure (zeroed region).
/// Party rows whose acronym fails token validation are skipped with a
/// warning rather than poisoning the whole region.
pub fn snapshot_from_results(spec: &RegionSpec, results: TerritoryResults) -> RegionSnapshot {
    let Some(current) = results.current_results else {
        log::warn!(
            target: LOG_TARGET,
            "payload for {} has no currentResults; substituting zeroed region",
            spec.name,
        );
        return RegionSnapshot::unavailable(spec);
    };

    let mut parties = Vec::with_capacity(current.results_party.len());
    for row in current.results_party {
        match row.acronym.parse::<Acronym>() {
            Ok(acronym) => parties.push(PartyStanding {
                acronym,
                votes: row.votes,
                attributed_mandates: row.mandates,
            }),
            Err(err) => {
                log::warn!(
                    target: LOG_TARGET,
                    "skipping party row with bad acronym {:?} in {}: {err}",
                    row.acronym,
                    spec.name,
                );
            }
        }
    }

    RegionSnapshot {
        name: current
            .territory_full_name
            .unwrap_or_else(|| spec.name.to_string()),
        territory_key: spec.territory_key(),
        available_mandates: current.available_mandates,
        attributed_mandates: current.total_mandates,
        subscribed_voters: current.subscribed_voters,
        number_voters: current.number_voters,
        parties,
        data_available: true,
    }
}
