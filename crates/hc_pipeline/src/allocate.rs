//! Per-region allocation: attributed seats + simulated seats.
//!
//! Pure stage — the snapshot is already fetched. Runs the quotient engine
//! over the region's party list and combines the simulated award with the
//! upstream-attributed counts into one per-party total.

use std::collections::BTreeMap;

use hc_algo::{allocate_seats, classify_cells, compute_quotients, CellClass, QuotientCell};
use hc_core::{Acronym, RegionSnapshot};

/// A region's resolved seat picture for one fetch cycle.
///
/// The sorted `cells` sequence is shared with the classifier so both see the
/// exact same ordering; `totals` covers the union of acronyms present in the
/// party list or awarded a simulated seat (a party can appear in either
/// alone). Zero-total parties stay in `totals` for detail views; national
/// aggregation reads `positive_totals`.
#[derive(Clone, Debug)]
pub struct RegionAllocation {
    pub snapshot: RegionSnapshot,
    /// Full sorted quotient sequence for the divisor table.
    pub cells: Vec<QuotientCell>,
    /// Divisor axis length actually used: `max(y_axis, physical_mandates)`.
    pub max_divisor: u32,
    /// Seats won in simulation, per acronym.
    pub simulated: BTreeMap<Acronym, u32>,
    /// Attributed + simulated, per acronym, over the union of both.
    pub totals: BTreeMap<Acronym, u32>,
}

impl RegionAllocation {
    /// Allocate a fetched region. `y_axis` is the minimum divisor-axis
    /// length (defaults to `hc_algo::DEFAULT_Y_AXIS_LEN` at the callers);
    /// the axis is stretched to the physical seat count when larger.
    pub fn allocate(snapshot: RegionSnapshot, y_axis: u32) -> Self {
        let max_divisor = y_axis.max(snapshot.physical_mandates());
        let cells = compute_quotients(&snapshot.parties, max_divisor);
        let simulated = allocate_seats(&cells, snapshot.available_mandates);

        let mut totals: BTreeMap<Acronym, u32> = BTreeMap::new();
        for party in &snapshot.parties {
            *totals.entry(party.acronym.clone()).or_insert(0) += party.attributed_mandates;
        }
        for (acronym, seats) in &simulated {
            *totals.entry(acronym.clone()).or_insert(0) += seats;
        }

        Self { snapshot, cells, max_divisor, simulated, totals }
    }

    /// Per-party totals with zero-total parties dropped; this is the view
    /// national aggregation sums over.
    pub fn positive_totals(&self) -> impl Iterator<Item = (&Acronym, u32)> {
        self.totals.iter().filter(|(_, &n)| n > 0).map(|(a, &n)| (a, n))
    }

    /// Display categories for the divisor table, keyed by (acronym, divisor).
    pub fn cell_classes(&self) -> BTreeMap<(Acronym, u32), CellClass> {
        classify_cells(
            &self.cells,
            self.snapshot.attributed_mandates,
            self.snapshot.available_mandates,
        )
    }
}
