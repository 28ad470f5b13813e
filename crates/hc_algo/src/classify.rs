//! Classification of quotient cells for the divisor table.
//!
//! Given the sorted quotient sequence of a region and its attributed (A) /
//! available (S) mandate counts (T = A + S), each of the first T + 2 ranks
//! gets a display category:
//!
//! - rank 0..A          → finalized (already attributed upstream)
//! - rank A..T          → simulated; the last one or two simulated ranks
//!                        (T-1, and T-2 when S >= 2) are flagged borderline
//! - rank T and T+1     → contender: next in line if one more seat opened;
//!                        pulsing whenever simulation is active (S > 0)
//! - anything beyond    → unclassified
//!
//! The classification is derived solely from rank position and the A/S/T
//! counts; sequences shorter than T + 2 are handled by bounds, never panics.

use std::collections::BTreeMap;

use hc_core::Acronym;

use crate::quotients::QuotientCell;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Display category of one (acronym, divisor) cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", tag = "kind"))]
pub enum CellClass {
    /// Seat already attributed by the authoritative source.
    Finalized,
    /// Seat won in simulation; `borderline` marks the one or two seats most
    /// sensitive to small vote changes.
    Simulated { borderline: bool },
    /// Just outside the physical seat count; `pulsing` while simulation is
    /// active.
    Contender { pulsing: bool },
}

/// Label the first T + 2 cells of a sorted quotient sequence.
///
/// Keys are (acronym, divisor); each key appears at most once because the
/// sequence holds each (party, divisor) pair exactly once.
pub fn classify_cells(
    cells: &[QuotientCell],
    attributed_mandates: u32,
    available_mandates: u32,
) -> BTreeMap<(Acronym, u32), CellClass> {
    let attributed = attributed_mandates as usize;
    let physical = attributed + available_mandates as usize;

    let mut classes = BTreeMap::new();

    for (rank, cell) in cells.iter().enumerate().take(physical) {
        let class = if rank < attributed {
            CellClass::Finalized
        } else {
            // Borderline: last simulated rank, and the one before it when at
            // least two seats are simulated.
            let borderline = (available_mandates >= 1 && rank + 1 == physical)
                || (available_mandates >= 2 && rank + 2 == physical);
            CellClass::Simulated { borderline }
        };
        classes.insert((cell.acronym.clone(), cell.divisor), class);
    }

    let pulsing = available_mandates > 0;
    for rank in [physical, physical + 1] {
        if let Some(cell) = cells.get(rank) {
            classes.insert((cell.acronym.clone(), cell.divisor), CellClass::Contender { pulsing });
        }
    }

    classes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotients::compute_quotients;
    use hc_core::PartyStanding;

    fn party(acronym: &str, votes: u64) -> PartyStanding {
        PartyStanding {
            acronym: acronym.parse().unwrap(),
            votes,
            attributed_mandates: 0,
        }
    }

    fn count_of(classes: &BTreeMap<(Acronym, u32), CellClass>, pred: fn(&CellClass) -> bool) -> usize {
        classes.values().filter(|c| pred(c)).count()
    }

    #[test]
    fn coverage_counts_match_bands() {
        // A=2 attributed, S=3 simulated, T=5; plenty of cells.
        let cells = compute_quotients(&[party("A", 3000), party("B", 2000), party("C", 900)], 10);
        let classes = classify_cells(&cells, 2, 3);

        assert_eq!(count_of(&classes, |c| matches!(c, CellClass::Finalized)), 2);
        assert_eq!(
            count_of(&classes, |c| matches!(c, CellClass::Simulated { .. })),
            3
        );
        assert_eq!(
            count_of(&classes, |c| matches!(c, CellClass::Simulated { borderline: true })),
            2
        );
        assert_eq!(
            count_of(&classes, |c| matches!(c, CellClass::Contender { pulsing: true })),
            2
        );
        // T + 2 cells classified, no more.
        assert_eq!(classes.len(), 7);
    }

    #[test]
    fn borderline_follows_the_simulated_band() {
        let cells = compute_quotients(&[party("A", 3000), party("B", 2000)], 10);
        let classes = classify_cells(&cells, 2, 3);

        // Ranks 3 and 4 (T-2, T-1) are borderline; rank 2 is plain simulated.
        let key = |rank: usize| (cells[rank].acronym.clone(), cells[rank].divisor);
        assert_eq!(classes.get(&key(2)), Some(&CellClass::Simulated { borderline: false }));
        assert_eq!(classes.get(&key(3)), Some(&CellClass::Simulated { borderline: true }));
        assert_eq!(classes.get(&key(4)), Some(&CellClass::Simulated { borderline: true }));
    }

    #[test]
    fn single_simulated_seat_has_one_borderline() {
        let cells = compute_quotients(&[party("A", 3000), party("B", 2000)], 10);
        let classes = classify_cells(&cells, 2, 1);
        assert_eq!(
            count_of(&classes, |c| matches!(c, CellClass::Simulated { borderline: true })),
            1
        );
    }

    #[test]
    fn contenders_do_not_pulse_without_simulation() {
        let cells = compute_quotients(&[party("A", 3000), party("B", 2000)], 10);
        let classes = classify_cells(&cells, 4, 0);
        assert_eq!(
            count_of(&classes, |c| matches!(c, CellClass::Contender { pulsing: false })),
            2
        );
        assert_eq!(count_of(&classes, |c| matches!(c, CellClass::Simulated { .. })), 0);
    }

    #[test]
    fn short_sequences_are_guarded() {
        // Only 2 cells exist but T = 3: no simulated rank beyond the
        // sequence, no contenders, and no panic.
        let cells = compute_quotients(&[party("A", 100)], 2);
        let classes = classify_cells(&cells, 1, 2);
        assert_eq!(classes.len(), 2);

        // T cells exist exactly: no contender fits.
        let cells = compute_quotients(&[party("A", 100)], 3);
        let classes = classify_cells(&cells, 1, 2);
        assert_eq!(
            count_of(&classes, |c| matches!(c, CellClass::Contender { .. })),
            0
        );

        // T + 1 cells: exactly one contender.
        let cells = compute_quotients(&[party("A", 100), party("B", 50)], 2);
        let classes = classify_cells(&cells, 1, 2);
        assert_eq!(
            count_of(&classes, |c| matches!(c, CellClass::Contender { .. })),
            1
        );
    }

    #[test]
    fn empty_sequence_classifies_nothing() {
        assert!(classify_cells(&[], 3, 2).is_empty());
    }
}
