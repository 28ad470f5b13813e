//! CLI argument surface for the `hemiciclo` binary.

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "hemiciclo", version, about = "D'Hondt seat allocation over the live legislative results feed")]
pub struct Args {
    /// Show one region: territory key (LOCAL-110000) or display name (Lisboa).
    #[arg(long, conflicts_with_all = ["national", "list_regions"])]
    pub region: Option<String>,

    /// Show the national aggregate across every region (default action).
    #[arg(long)]
    pub national: bool,

    /// List configured regions with seat counts and turnout, national total first.
    #[arg(long, conflicts_with = "national")]
    pub list_regions: bool,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Base URL of the results feed.
    #[arg(long, default_value = hc_fetch::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Election identifier sent upstream.
    #[arg(long, default_value = hc_fetch::DEFAULT_ELECTION_ID)]
    pub election_id: String,

    /// Upstream request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Minimum divisor-axis length of the quotient table (stretched to the
    /// region's physical seat count when that is larger).
    #[arg(long, default_value_t = hc_algo::DEFAULT_Y_AXIS_LEN)]
    pub y_axis: u32,

    /// Log filter, e.g. `-l hc_fetch=debug`. Levels: error, warn, info,
    /// debug, trace.
    #[arg(long, short = 'l', default_value = "info")]
    pub log: String,
}
