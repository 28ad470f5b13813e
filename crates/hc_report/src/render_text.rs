//! Compact terminal rendering of the view models.
//!
//! Plain text, no styling deps: classification marks are single characters
//! appended to the quotient (`#` finalized, `+` simulated, `~` borderline,
//! `?` contender), and bar charts scale to a fixed width.

use std::fmt::Write as _;

use hc_algo::CellClass;

use crate::{BarRow, NationalView, RegionView};

const BAR_WIDTH: usize = 40;

fn class_mark(class: Option<&CellClass>) -> &'static str {
    match class {
        None => " ",
        Some(CellClass::Finalized) => "#",
        Some(CellClass::Simulated { borderline: false }) => "+",
        Some(CellClass::Simulated { borderline: true }) => "~",
        Some(CellClass::Contender { .. }) => "?",
    }
}

fn push_bar_rows(out: &mut String, rows: &[BarRow]) {
    let widest_name = rows.iter().map(|r| r.acronym.as_str().len()).max().unwrap_or(0);
    let max_seats = rows.iter().map(|r| r.seats).max().unwrap_or(0).max(1);
    for row in rows {
        let bar_len = (row.seats as usize * BAR_WIDTH).div_ceil(max_seats as usize);
        let _ = writeln!(
            out,
            "  {:<name_w$}  {:<bar_w$} {}",
            row.acronym.as_str(),
            "█".repeat(bar_len),
            row.seats,
            name_w = widest_name,
            bar_w = BAR_WIDTH,
        );
    }
}

fn push_turnout_line(
    out: &mut String,
    number_voters: u64,
    subscribed_voters: u64,
    turnout_pct: Option<&str>,
) {
    let turnout = match turnout_pct {
        Some(pct) => format!("{pct}%"),
        None => "n/a".to_string(),
    };
    let _ = writeln!(
        out,
        "Voters: {number_voters} | Subscribed: {subscribed_voters} | Turnout: {turnout}"
    );
}

/// Render a region: header, seat bars, contender/at-risk summaries, and the
/// full classified divisor table.
pub fn render_region_text(view: &RegionView) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} ({}) - {}/{} allocated, {} simulated",
        view.name,
        view.territory_key,
        view.attributed_mandates,
        view.physical_mandates,
        view.available_mandates,
    );
    push_turnout_line(&mut out, view.number_voters, view.subscribed_voters, view.turnout_pct.as_deref());
    if !view.data_available {
        let _ = writeln!(out, "warning: no data available for this region (fetch degraded)");
    }
    out.push('\n');

    if view.bar_rows.is_empty() {
        let _ = writeln!(out, "No party has any seat in this region.");
    } else {
        let _ = writeln!(out, "Seats (attributed + simulated):");
        push_bar_rows(&mut out, &view.bar_rows);
    }
    out.push('\n');

    let _ = writeln!(
        out,
        "Next highest quotients (after all {} physical mandates):",
        view.physical_mandates
    );
    if view.contenders.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for line in &view.contenders {
        let _ = writeln!(out, "  {} (votes / {}): {}", line.acronym, line.divisor, line.value);
    }
    let _ = writeln!(out, "Seats at risk (borderline simulated):");
    if view.at_risk.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for line in &view.at_risk {
        let _ = writeln!(out, "  {} (votes / {}): {}", line.acronym, line.divisor, line.value);
    }
    out.push('\n');

    if view.parties.is_empty() {
        let _ = writeln!(out, "No party data available for this region.");
        return out;
    }

    // Divisor table. Column width fits the widest of acronym and values;
    // every value carries its classification mark.
    let columns = view.parties.len();
    let mut widths: Vec<usize> = view.parties.iter().map(|p| p.acronym.as_str().len()).collect();
    for (i, cell) in view.cells.iter().enumerate() {
        let col = i % columns;
        widths[col] = widths[col].max(cell.value.len() + 1);
    }

    let _ = writeln!(out, "Quotient table (# finalized, + simulated, ~ borderline, ? contender):");
    let mut header = String::from(" div");
    for (party, &width) in view.parties.iter().zip(&widths) {
        let _ = write!(header, " | {:>width$}", party.acronym.as_str());
    }
    let _ = writeln!(out, "{header}");

    for row in view.cells.chunks(columns) {
        let divisor = row.first().map(|c| c.divisor).unwrap_or(0);
        let _ = write!(out, "{divisor:>4}");
        for (cell, &width) in row.iter().zip(&widths) {
            let marked = format!("{}{}", cell.value, class_mark(cell.class.as_ref()));
            let _ = write!(out, " | {marked:>width$}");
        }
        out.push('\n');
    }

    out
}

/// Render the national aggregate: header plus the summed seat bars.
pub fn render_national_text(view: &NationalView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} - {} mandates nationally", view.name, view.physical_mandates);
    push_turnout_line(&mut out, view.number_voters, view.subscribed_voters, view.turnout_pct.as_deref());
    if !view.unavailable_regions.is_empty() {
        let _ = writeln!(out, "warning: no data for {}", view.unavailable_regions.join(", "));
    }
    out.push('\n');

    if view.bar_rows.is_empty() {
        let _ = writeln!(out, "No seats allocated yet.");
    } else {
        let _ = writeln!(out, "Total physical mandates (attributed + simulated) by party:");
        push_bar_rows(&mut out, &view.bar_rows);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{national_view, region_view, PartyPalette};
    use hc_core::{PartyStanding, RegionSnapshot};
    use hc_pipeline::{NationalTally, RegionAllocation};

    fn sample_region() -> RegionView {
        let snapshot = RegionSnapshot {
            name: "Testland".into(),
            territory_key: "LOCAL-990000".parse().unwrap(),
            available_mandates: 2,
            attributed_mandates: 1,
            subscribed_voters: 1000,
            number_voters: 617,
            parties: vec![
                PartyStanding { acronym: "A".parse().unwrap(), votes: 300, attributed_mandates: 1 },
                PartyStanding { acronym: "B".parse().unwrap(), votes: 200, attributed_mandates: 0 },
            ],
            data_available: true,
        };
        region_view(&RegionAllocation::allocate(snapshot, 20), &PartyPalette::new())
    }

    #[test]
    fn region_text_contains_header_table_and_marks() {
        let text = render_region_text(&sample_region());
        assert!(text.contains("Testland (LOCAL-990000) - 1/3 allocated, 2 simulated"));
        assert!(text.contains("Turnout: 61.70%"));
        // Finalized top quotient and a contender mark appear somewhere.
        assert!(text.contains("300.00#"));
        assert!(text.contains('?'));
        // One table row per divisor, 1 through 20.
        assert!(text.contains("\n   1 |"));
        assert!(text.contains("\n  20 |"));
    }

    #[test]
    fn empty_region_renders_placeholder() {
        let snapshot = RegionSnapshot::unavailable(&hc_core::district_roster()[0]);
        let view = region_view(&RegionAllocation::allocate(snapshot, 20), &PartyPalette::new());
        let text = render_region_text(&view);
        assert!(text.contains("warning: no data available"));
        assert!(text.contains("No party data available"));
    }

    #[test]
    fn national_text_lists_bars() {
        let mut tally = NationalTally::default();
        tally.totals.insert("PS".parse().unwrap(), 70);
        tally.attributed_mandates = 70;
        let text = render_national_text(&national_view(&tally, &PartyPalette::new()));
        assert!(text.contains("70 mandates nationally"));
        assert!(text.contains("PS"));
        assert!(text.contains('█'));
    }
}
