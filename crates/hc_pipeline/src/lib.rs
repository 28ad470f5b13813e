//! hc_pipeline — fetch → allocate → aggregate orchestration.
//!
//! Fan-out/fan-in over the fixed region roster: one fetch per region, all
//! issued concurrently and independently, joined before any merging. A
//! failed branch degrades to a zeroed region at the fetch boundary
//! (`hc_fetch::region_snapshot`), so one slow or erroring region never
//! blocks or aborts the others. Merging is pure summation after the join;
//! there is no shared mutable state between branches.

#![forbid(unsafe_code)]

use futures::future::join_all;

use hc_core::{RegionSnapshot, RegionSpec};
use hc_fetch::{region_snapshot, ResultsSource};

pub mod aggregate;
pub mod allocate;

pub use aggregate::{merge_allocations, overview_table, NationalTally, RegionOverview};
pub use allocate::RegionAllocation;

pub(crate) const LOG_TARGET: &str = "hc_pipeline";

/// Fetch every roster region concurrently. Output order follows the roster;
/// failed regions come back as zeroed snapshots.
pub async fn fetch_roster<S: ResultsSource>(
    source: &S,
    roster: &[RegionSpec],
) -> Vec<RegionSnapshot> {
    join_all(roster.iter().map(|spec| region_snapshot(source, spec))).await
}

/// Fetch and allocate a single region.
pub async fn allocate_region<S: ResultsSource>(
    source: &S,
    spec: &RegionSpec,
    y_axis: u32,
) -> RegionAllocation {
    let snapshot = region_snapshot(source, spec).await;
    RegionAllocation::allocate(snapshot, y_axis)
}

/// The national view: fetch all regions in parallel, allocate each, then sum
/// per-party totals. Tolerates any subset of regions failing to fetch.
pub async fn national_tally<S: ResultsSource>(
    source: &S,
    roster: &[RegionSpec],
    y_axis: u32,
) -> NationalTally {
    let snapshots = fetch_roster(source, roster).await;
    let allocations: Vec<RegionAllocation> = snapshots
        .into_iter()
        .map(|snap| RegionAllocation::allocate(snap, y_axis))
        .collect();

    let tally = merge_allocations(&allocations);
    if !tally.unavailable_regions.is_empty() {
        log::warn!(
            target: LOG_TARGET,
            "national tally degraded: no data for {}",
            tally.unavailable_regions.join(", "),
        );
    }
    tally
}

/// Roster summary rows for region selection: national total first,
/// then regions by physical mandates descending.
pub async fn region_overviews<S: ResultsSource>(
    source: &S,
    roster: &[RegionSpec],
) -> Vec<RegionOverview> {
    let snapshots = fetch_roster(source, roster).await;
    overview_table(&snapshots)
}
