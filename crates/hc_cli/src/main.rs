//! hemiciclo CLI: fetch live per-region results, simulate the remaining
//! seats with D'Hondt, and print the classified quotient table or the
//! national aggregate.
//!
//! Fetch failures never fail the process: regions degrade to zeroed data
//! (flagged in the output) and the command still exits 0.

mod args;

mod exitcodes {
    pub const OK: i32 = 0;
    /// Argument/lookup problems (matches clap's usage exit code).
    pub const USAGE: i32 = 2;
    /// Client construction or output errors.
    pub const IO: i32 = 4;
}

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hc_core::{district_roster, find_region};
use hc_fetch::TerritoryClient;
use hc_pipeline::{allocate_region, national_tally, region_overviews};
use hc_report::{
    national_view, region_view, render_json, render_national_text, render_region_text,
    PartyPalette,
};

use args::Args;

const LOG_TARGET: &str = "hc_cli";

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    /// Bad arguments or an unknown region.
    Usage(String),
    /// HTTP client construction (TLS setup etc.).
    Client(String),
    /// Output serialization.
    Render(String),
}

impl std::fmt::Display for MainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MainError::Usage(m) => write!(f, "{m}"),
            MainError::Client(m) => write!(f, "client: {m}"),
            MainError::Render(m) => write!(f, "render: {m}"),
        }
    }
}

fn map_error(e: &MainError) -> i32 {
    use exitcodes::*;
    match e {
        MainError::Usage(_) => USAGE,
        MainError::Client(_) => IO,
        MainError::Render(_) => IO,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(&args.log) {
        eprintln!("hemiciclo: error: invalid log filter {:?}: {e}", args.log);
        return ExitCode::from(exitcodes::USAGE as u8);
    }

    match run(args).await {
        Ok(()) => ExitCode::from(exitcodes::OK as u8),
        Err(e) => {
            eprintln!("hemiciclo: error: {e}");
            ExitCode::from(map_error(&e) as u8)
        }
    }
}

fn init_logging(filter: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::from_default_env().add_directive(filter.parse()?);
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

async fn run(args: Args) -> Result<(), MainError> {
    // Resolve the requested action before touching the network.
    let region_spec = match &args.region {
        Some(needle) => Some(
            find_region(needle)
                .ok_or_else(|| MainError::Usage(format!("unknown region {needle:?}")))?,
        ),
        None => None,
    };

    let client = TerritoryClient::builder()
        .base_url(args.base_url.clone())
        .election_id(args.election_id.clone())
        .timeout(Duration::from_secs(args.timeout))
        .build()
        .map_err(|e| MainError::Client(e.to_string()))?;

    let palette = PartyPalette::portuguese_2025();
    let roster = district_roster();

    if args.list_regions {
        log::info!(target: LOG_TARGET, "fetching overview for {} regions", roster.len());
        let overviews = region_overviews(&client, roster).await;
        if args.json {
            let rows: Vec<serde_json::Value> = overviews
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "name": r.name,
                        "territory_key": r.territory_key.as_str(),
                        "attributed_mandates": r.attributed_mandates,
                        "available_mandates": r.available_mandates,
                        "physical_mandates": r.physical_mandates(),
                        "number_voters": r.number_voters,
                        "subscribed_voters": r.subscribed_voters,
                        "data_available": r.data_available,
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&rows)
                    .map_err(|e| MainError::Render(e.to_string()))?
            );
        } else {
            for r in &overviews {
                let flag = if r.data_available { "" } else { "  [no data]" };
                println!(
                    "{:<18} {:<14} {:>3} mandates ({} attributed, {} open){flag}",
                    r.name,
                    r.territory_key.as_str(),
                    r.physical_mandates(),
                    r.attributed_mandates,
                    r.available_mandates,
                );
            }
        }
        return Ok(());
    }

    if let Some(spec) = region_spec {
        log::info!(target: LOG_TARGET, "allocating region {}", spec.name);
        let alloc = allocate_region(&client, spec, args.y_axis).await;
        let view = region_view(&alloc, &palette);
        if args.json {
            println!("{}", render_json(&view).map_err(|e| MainError::Render(e.to_string()))?);
        } else {
            print!("{}", render_region_text(&view));
        }
        return Ok(());
    }

    // Default: national aggregate.
    log::info!(target: LOG_TARGET, "aggregating {} regions", roster.len());
    let tally = national_tally(&client, roster, args.y_axis).await;
    let view = national_view(&tally, &palette);
    if args.json {
        println!("{}", render_json(&view).map_err(|e| MainError::Render(e.to_string()))?);
    } else {
        print!("{}", render_national_text(&view));
    }
    Ok(())
}
