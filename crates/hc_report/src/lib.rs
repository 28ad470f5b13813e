//! hc_report — Pure offline view models + renderers (JSON/text).
//!
//! No network, no I/O here. Callers supply already-computed allocations and
//! tallies; this crate shapes them for presentation: the classified divisor
//! table, bar rows with palette colors, contender/at-risk summaries, and
//! turnout strings. Stable field names and section order; floats appear only
//! inside formatted display strings.

#![deny(unsafe_code)]

use serde::Serialize;
use std::fmt;

use hc_algo::CellClass;
use hc_core::Acronym;
use hc_pipeline::{NationalTally, RegionAllocation};

pub mod palette;
pub mod render_text;

pub use palette::{PartyPalette, FALLBACK_COLOR};
pub use render_text::{render_national_text, render_region_text};

// ===== Errors =====

#[derive(Debug)]
pub enum ReportError {
    Serialize(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Serialize(msg) => write!(f, "serialize error: {msg}"),
        }
    }
}

impl std::error::Error for ReportError {}

// ===== Model =====

/// One table column: a party in upstream list order, with its display color.
#[derive(Clone, Debug, Serialize)]
pub struct PartyColumn {
    pub acronym: Acronym,
    pub votes: u64,
    pub color: String,
}

/// One divisor-table cell, annotated with its classification (if any).
#[derive(Clone, Debug, Serialize)]
pub struct CellView {
    pub acronym: Acronym,
    pub divisor: u32,
    /// `votes / divisor` at two decimals.
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<CellClass>,
}

/// A single quotient reference for the contender / at-risk summaries.
#[derive(Clone, Debug, Serialize)]
pub struct QuotientLine {
    pub acronym: Acronym,
    pub divisor: u32,
    pub value: String,
}

/// Bar-chart source row: party, seat total, hex color.
#[derive(Clone, Debug, Serialize)]
pub struct BarRow {
    pub acronym: Acronym,
    pub seats: u32,
    pub color: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegionView {
    pub name: String,
    pub territory_key: String,
    pub attributed_mandates: u32,
    pub available_mandates: u32,
    pub physical_mandates: u32,
    pub number_voters: u64,
    pub subscribed_voters: u64,
    /// Two-decimal percentage, absent when no subscribed-voter figure exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turnout_pct: Option<String>,
    pub data_available: bool,
    pub max_divisor: u32,
    pub parties: Vec<PartyColumn>,
    /// Full table in row-major order: divisor 1..=max_divisor, parties in
    /// upstream order within each row.
    pub cells: Vec<CellView>,
    /// Seats (attributed + simulated) per party, seats > 0 only.
    pub bar_rows: Vec<BarRow>,
    /// Next highest quotients after all physical mandates (up to two).
    pub contenders: Vec<QuotientLine>,
    /// The borderline simulated seats (up to two, second-last first).
    pub at_risk: Vec<QuotientLine>,
}

#[derive(Clone, Debug, Serialize)]
pub struct NationalView {
    pub name: String,
    pub attributed_mandates: u32,
    pub available_mandates: u32,
    pub physical_mandates: u32,
    pub number_voters: u64,
    pub subscribed_voters: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turnout_pct: Option<String>,
    /// Regions whose data degraded to zero this cycle.
    pub unavailable_regions: Vec<String>,
    pub bar_rows: Vec<BarRow>,
}

// ===== API =====

/// Shape a region allocation for presentation.
pub fn region_view(alloc: &RegionAllocation, palette: &PartyPalette) -> RegionView {
    let snap = &alloc.snapshot;
    let classes = alloc.cell_classes();

    let parties: Vec<PartyColumn> = snap
        .parties
        .iter()
        .map(|p| PartyColumn {
            acronym: p.acronym.clone(),
            votes: p.votes,
            color: palette.color_of(&p.acronym).to_string(),
        })
        .collect();

    // Row-major table: the renderer walks divisors down, parties across.
    let mut cells = Vec::with_capacity(parties.len() * alloc.max_divisor as usize);
    for divisor in 1..=alloc.max_divisor {
        for party in &snap.parties {
            cells.push(CellView {
                acronym: party.acronym.clone(),
                divisor,
                value: format_quotient(party.votes, divisor),
                class: classes.get(&(party.acronym.clone(), divisor)).copied(),
            });
        }
    }

    let physical = snap.physical_mandates() as usize;
    let contenders = quotient_lines(alloc, [physical, physical + 1]);

    // Borderline simulated ranks (T-2, T-1), second-last first.
    let mut at_risk_ranks = Vec::new();
    if snap.available_mandates >= 2 && physical >= 2 {
        at_risk_ranks.push(physical - 2);
    }
    if snap.available_mandates >= 1 && physical >= 1 {
        at_risk_ranks.push(physical - 1);
    }
    let at_risk = quotient_lines(alloc, at_risk_ranks);

    RegionView {
        name: snap.name.clone(),
        territory_key: snap.territory_key.to_string(),
        attributed_mandates: snap.attributed_mandates,
        available_mandates: snap.available_mandates,
        physical_mandates: snap.physical_mandates(),
        number_voters: snap.number_voters,
        subscribed_voters: snap.subscribed_voters,
        turnout_pct: format_turnout(snap.number_voters, snap.subscribed_voters),
        data_available: snap.data_available,
        max_divisor: alloc.max_divisor,
        parties,
        cells,
        bar_rows: bar_rows(alloc.positive_totals(), palette),
        contenders,
        at_risk,
    }
}

/// Shape the national tally for presentation.
pub fn national_view(tally: &NationalTally, palette: &PartyPalette) -> NationalView {
    NationalView {
        name: "Total (National Results)".to_string(),
        attributed_mandates: tally.attributed_mandates,
        available_mandates: tally.available_mandates,
        physical_mandates: tally.physical_mandates(),
        number_voters: tally.number_voters,
        subscribed_voters: tally.subscribed_voters,
        turnout_pct: format_turnout(tally.number_voters, tally.subscribed_voters),
        unavailable_regions: tally.unavailable_regions.clone(),
        bar_rows: bar_rows(tally.totals.iter().map(|(a, &n)| (a, n)), palette),
    }
}

/// Serialize a view as JSON (deterministic field order courtesy of struct
/// layout).
pub fn render_json<T: Serialize>(view: &T) -> Result<String, ReportError> {
    serde_json::to_string_pretty(view).map_err(|e| ReportError::Serialize(e.to_string()))
}

// ===== Helpers (pure) =====

fn bar_rows<'a>(
    totals: impl Iterator<Item = (&'a Acronym, u32)>,
    palette: &PartyPalette,
) -> Vec<BarRow> {
    let mut rows: Vec<BarRow> = totals
        .filter(|(_, seats)| *seats > 0)
        .map(|(acronym, seats)| BarRow {
            acronym: acronym.clone(),
            seats,
            color: palette.color_of(acronym).to_string(),
        })
        .collect();
    // Seats descending; acronym breaks ties so output is stable across runs.
    rows.sort_by(|a, b| b.seats.cmp(&a.seats).then_with(|| a.acronym.cmp(&b.acronym)));
    rows
}

fn quotient_lines(
    alloc: &RegionAllocation,
    ranks: impl IntoIterator<Item = usize>,
) -> Vec<QuotientLine> {
    ranks
        .into_iter()
        .filter_map(|rank| alloc.cells.get(rank))
        .map(|cell| QuotientLine {
            acronym: cell.acronym.clone(),
            divisor: cell.divisor,
            value: format_quotient(cell.votes, cell.divisor),
        })
        .collect()
}

fn format_quotient(votes: u64, divisor: u32) -> String {
    format!("{:.2}", votes as f64 / divisor as f64)
}

/// Turnout as a two-decimal percentage; `None` when no subscribed figure is
/// known (rendered as "n/a").
fn format_turnout(number_voters: u64, subscribed_voters: u64) -> Option<String> {
    if subscribed_voters == 0 {
        return None;
    }
    Some(format!(
        "{:.2}",
        number_voters as f64 / subscribed_voters as f64 * 100.0
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hc_core::{PartyStanding, RegionSnapshot};

    fn ac(s: &str) -> Acronym {
        s.parse().unwrap()
    }

    fn sample_alloc() -> RegionAllocation {
        let snapshot = RegionSnapshot {
            name: "Testland".into(),
            territory_key: "LOCAL-990000".parse().unwrap(),
            available_mandates: 2,
            attributed_mandates: 1,
            subscribed_voters: 1000,
            number_voters: 617,
            parties: vec![
                PartyStanding { acronym: ac("A"), votes: 300, attributed_mandates: 1 },
                PartyStanding { acronym: ac("B"), votes: 200, attributed_mandates: 0 },
            ],
            data_available: true,
        };
        RegionAllocation::allocate(snapshot, 20)
    }

    #[test]
    fn region_view_shapes_table_and_summaries() {
        let view = region_view(&sample_alloc(), &PartyPalette::portuguese_2025());

        assert_eq!(view.physical_mandates, 3);
        assert_eq!(view.max_divisor, 20);
        assert_eq!(view.cells.len(), 2 * 20);
        assert_eq!(view.turnout_pct.as_deref(), Some("61.70"));

        // Classified cells: 3 in-band + 2 contenders.
        let classified = view.cells.iter().filter(|c| c.class.is_some()).count();
        assert_eq!(classified, 5);

        // Sorted sequence: A/1=300, B/1=200, A/2=150, then the 100-tie with
        // A/3 generated before B/2. Contenders are ranks 3 and 4.
        assert_eq!(view.contenders.len(), 2);
        assert_eq!(view.contenders[0].acronym, ac("A"));
        assert_eq!(view.contenders[0].divisor, 3);
        assert_eq!(view.contenders[1].acronym, ac("B"));
        assert_eq!(view.contenders[1].divisor, 2);

        // Borderline simulated: ranks 1 and 2, second-last first.
        assert_eq!(view.at_risk.len(), 2);
        assert_eq!(view.at_risk[0].acronym, ac("B"));
        assert_eq!(view.at_risk[0].divisor, 1);
        assert_eq!(view.at_risk[1].acronym, ac("A"));
        assert_eq!(view.at_risk[1].divisor, 2);

        // Bar rows: A has 1 attributed + simulated from {A,B}: top2 cells are
        // A/1 and B/1, so A=2, B=1.
        assert_eq!(view.bar_rows.len(), 2);
        assert_eq!(view.bar_rows[0].acronym, ac("A"));
        assert_eq!(view.bar_rows[0].seats, 2);
        assert_eq!(view.bar_rows[1].seats, 1);
    }

    #[test]
    fn no_turnout_without_subscribed_voters() {
        assert_eq!(format_turnout(100, 0), None);
        assert_eq!(format_turnout(0, 100).as_deref(), Some("0.00"));
    }

    #[test]
    fn region_view_serializes() {
        let view = region_view(&sample_alloc(), &PartyPalette::new());
        let json = render_json(&view).unwrap();
        assert!(json.contains("\"territory_key\": \"LOCAL-990000\""));
        assert!(json.contains("\"turnout_pct\": \"61.70\""));
    }

    #[test]
    fn national_view_orders_bar_rows() {
        let mut tally = NationalTally::default();
        tally.totals.insert(ac("PS"), 70);
        tally.totals.insert(ac("CH"), 48);
        tally.totals.insert(ac("AD"), 70);
        tally.attributed_mandates = 100;
        tally.available_mandates = 88;

        let view = national_view(&tally, &PartyPalette::portuguese_2025());
        let order: Vec<&str> = view.bar_rows.iter().map(|r| r.acronym.as_str()).collect();
        assert_eq!(order, vec!["AD", "PS", "CH"]);
        assert_eq!(view.physical_mandates, 188);
        assert_eq!(view.turnout_pct, None);
    }
}
