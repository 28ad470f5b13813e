//! Party/region model as consumed by the allocator.
//!
//! Values are immutable once fetched for a given region/fetch cycle; a new
//! allocation request always starts from a fresh `RegionSnapshot`.

use crate::roster::RegionSpec;
use crate::tokens::{Acronym, TerritoryKey};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One party's standing within a region.
///
/// `attributed_mandates` counts seats already finalized by the authoritative
/// source; they are never recomputed here.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartyStanding {
    pub acronym: Acronym,
    pub votes: u64,
    pub attributed_mandates: u32,
}

/// A region's results as of one fetch cycle.
///
/// `parties` preserves the upstream list order; the quotient tie-break
/// depends on it (see `hc_algo::quotients`).
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegionSnapshot {
    pub name: String,
    pub territory_key: TerritoryKey,
    /// Seats still open, subject to simulation.
    pub available_mandates: u32,
    /// Seats already attributed by the authoritative source.
    pub attributed_mandates: u32,
    /// Registered voters; display only, never feeds allocation.
    pub subscribed_voters: u64,
    /// Voters who cast ballots; display only, never feeds allocation.
    pub number_voters: u64,
    pub parties: Vec<PartyStanding>,
    /// False when the upstream fetch failed and this snapshot is the zeroed
    /// substitute. Allocation math is identical either way.
    pub data_available: bool,
}

impl RegionSnapshot {
    /// Total seats for the region: attributed + available.
    pub fn physical_mandates(&self) -> u32 {
        self.attributed_mandates + self.available_mandates
    }

    /// Zero-valued substitute for a region whose fetch failed or returned a
    /// malformed payload. Keeps the roster name/key so downstream output can
    /// still label the region.
    pub fn unavailable(spec: &RegionSpec) -> Self {
        Self {
            name: spec.name.to_string(),
            territory_key: spec.territory_key(),
            available_mandates: 0,
            attributed_mandates: 0,
            subscribed_voters: 0,
            number_voters: 0,
            parties: Vec::new(),
            data_available: false,
        }
    }
}
