//! National aggregation: pure merge of independently computed regions.
//!
//! Aggregation only ever sums — never averages or rescales — so merge order
//! cannot matter. Runs strictly after the fan-out has joined; no concurrent
//! writes to any accumulator.

use std::collections::BTreeMap;

use hc_core::{Acronym, RegionSnapshot, TerritoryKey};

use crate::allocate::RegionAllocation;

/// Per-party national seat totals plus summed roster counters.
#[derive(Clone, Debug, Default)]
pub struct NationalTally {
    /// Party → summed (attributed + simulated) seats across all regions.
    /// Zero-total parties never appear.
    pub totals: BTreeMap<Acronym, u32>,
    pub attributed_mandates: u32,
    pub available_mandates: u32,
    pub number_voters: u64,
    pub subscribed_voters: u64,
    /// Display names of regions that fell back to zeroed data this cycle.
    pub unavailable_regions: Vec<String>,
}

impl NationalTally {
    pub fn physical_mandates(&self) -> u32 {
        self.attributed_mandates + self.available_mandates
    }
}

/// Sum per-region allocations into the national tally.
///
/// A zeroed (failed) region contributes 0 to every party and to every
/// counter; it is recorded in `unavailable_regions` but never aborts the
/// merge.
pub fn merge_allocations(allocations: &[RegionAllocation]) -> NationalTally {
    let mut tally = NationalTally::default();

    for alloc in allocations {
        for (acronym, seats) in alloc.positive_totals() {
            *tally.totals.entry(acronym.clone()).or_insert(0) += seats;
        }

        let snap = &alloc.snapshot;
        tally.attributed_mandates += snap.attributed_mandates;
        tally.available_mandates += snap.available_mandates;
        tally.number_voters += snap.number_voters;
        tally.subscribed_voters += snap.subscribed_voters;
        if !snap.data_available {
            tally.unavailable_regions.push(snap.name.clone());
        }
    }

    tally
}

/// Roster-level summary row for one region.
#[derive(Clone, Debug)]
pub struct RegionOverview {
    pub name: String,
    pub territory_key: TerritoryKey,
    pub available_mandates: u32,
    pub attributed_mandates: u32,
    pub number_voters: u64,
    pub subscribed_voters: u64,
    pub data_available: bool,
}

impl RegionOverview {
    pub fn physical_mandates(&self) -> u32 {
        self.attributed_mandates + self.available_mandates
    }

    fn from_snapshot(snap: &RegionSnapshot) -> Self {
        Self {
            name: snap.name.clone(),
            territory_key: snap.territory_key.clone(),
            available_mandates: snap.available_mandates,
            attributed_mandates: snap.attributed_mandates,
            number_voters: snap.number_voters,
            subscribed_voters: snap.subscribed_voters,
            data_available: snap.data_available,
        }
    }
}

/// Build the overview table: a synthesized national `Total` row first, then
/// every region sorted by physical mandates descending (stable, so roster
/// order breaks ties).
pub fn overview_table(snapshots: &[RegionSnapshot]) -> Vec<RegionOverview> {
    let mut rows: Vec<RegionOverview> =
        snapshots.iter().map(RegionOverview::from_snapshot).collect();
    rows.sort_by(|a, b| b.physical_mandates().cmp(&a.physical_mandates()));

    let total = RegionOverview {
        name: "Total".to_string(),
        territory_key: hc_core::NATIONAL_KEY.parse().expect("reserved key is well-formed"),
        available_mandates: rows.iter().map(|r| r.available_mandates).sum(),
        attributed_mandates: rows.iter().map(|r| r.attributed_mandates).sum(),
        number_voters: rows.iter().map(|r| r.number_voters).sum(),
        subscribed_voters: rows.iter().map(|r| r.subscribed_voters).sum(),
        data_available: rows.iter().all(|r| r.data_available),
    };

    let mut table = Vec::with_capacity(rows.len() + 1);
    table.push(total);
    table.extend(rows);
    table
}
