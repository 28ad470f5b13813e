//! D'Hondt (highest averages) quotient table and seat selection.
//!
//! Contract:
//! - `compute_quotients` materializes every (party, divisor) cell for
//!   divisors 1..=max_divisor and sorts by descending quotient.
//! - Equal quotients retain generation order: parties in upstream list
//!   order, divisors ascending within a party. This is the documented
//!   tie-break policy, not incidental (stable sort).
//! - `allocate_seats` takes the top `seat_count` cells and counts them per
//!   acronym. `seat_count == 0` yields an empty map, never an error.
//! - Pure integers; no division in comparisons (cross-multiply in u128).
//!   `QuotientCell::value` is the only float and exists for display.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use hc_core::{Acronym, PartyStanding};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Default length of the divisor axis shown in the table. The effective
/// range for a region is `max(DEFAULT_Y_AXIS_LEN, physical_mandates)`.
pub const DEFAULT_Y_AXIS_LEN: u32 = 20;

/// One cell of the divisor table: `votes / divisor` for a party.
///
/// Stores the operands rather than the quotient so ordering stays exact.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct QuotientCell {
    pub acronym: Acronym,
    /// Always >= 1.
    pub divisor: u32,
    pub votes: u64,
}

impl QuotientCell {
    /// Real-valued quotient, for display formatting only.
    pub fn value(&self) -> f64 {
        self.votes as f64 / self.divisor as f64
    }
}

/// Compare quotients v_a/d_a vs v_b/d_b without floats.
/// Returns `Ordering::Greater` if a's quotient is larger.
fn cmp_quotients(v_a: u64, d_a: u32, v_b: u64, d_b: u32) -> Ordering {
    // v_a/d_a ? v_b/d_b  <=>  v_a*d_b ? v_b*d_a (divisors are positive).
    let lhs = (v_a as u128) * (d_b as u128);
    let rhs = (v_b as u128) * (d_a as u128);
    lhs.cmp(&rhs)
}

/// Build the full sorted quotient sequence for a party list.
///
/// Produces exactly `parties.len() * max_divisor` cells, ordered by quotient
/// descending. Zero-vote parties produce all-zero quotients that sort last.
/// `max_divisor == 0` yields an empty sequence.
pub fn compute_quotients(parties: &[PartyStanding], max_divisor: u32) -> Vec<QuotientCell> {
    let mut cells = Vec::with_capacity(parties.len().saturating_mul(max_divisor as usize));
    for party in parties {
        for divisor in 1..=max_divisor {
            cells.push(QuotientCell {
                acronym: party.acronym.clone(),
                divisor,
                votes: party.votes,
            });
        }
    }
    // Stable: ties keep generation order (upstream party order, divisor asc).
    cells.sort_by(|a, b| cmp_quotients(b.votes, b.divisor, a.votes, a.divisor));
    cells
}

/// Award the first `seat_count` cells of a sorted quotient sequence.
///
/// Clamped: if `seat_count` exceeds the sequence length, every cell is taken.
/// Returns per-acronym seat counts; only parties that won a seat appear.
pub fn allocate_seats(cells: &[QuotientCell], seat_count: u32) -> BTreeMap<Acronym, u32> {
    let take = (seat_count as usize).min(cells.len());
    let mut seats: BTreeMap<Acronym, u32> = BTreeMap::new();
    for cell in &cells[..take] {
        *seats.entry(cell.acronym.clone()).or_insert(0) += 1;
    }
    seats
}
