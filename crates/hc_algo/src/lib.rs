//! hc_algo — Quotient engine and cell classification for D'Hondt allocation.
//!
//! Pure and deterministic: no I/O, no RNG, no floats in any decision path.
//! `hc_fetch`/`hc_pipeline` feed it fresh `RegionSnapshot` data; `hc_report`
//! consumes its output as display annotations.

#![forbid(unsafe_code)]

pub mod classify;
pub mod quotients;

// Tight, explicit re-exports (avoid wildcard export drift).
pub use classify::{classify_cells, CellClass};
pub use quotients::{allocate_seats, compute_quotients, QuotientCell, DEFAULT_Y_AXIS_LEN};
