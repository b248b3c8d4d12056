//! VPN Endpoint Selector (vpnselect)
//!
//! Picks the best VPN endpoints from a provider catalog: filter by country,
//! service tier and protocol support, rank by reported load and distance
//! from the user, emit the top N as deterministic JSON.
//!
//! # Architecture Overview
//!
//! ```text
//!   config file + CLI flags          provider API or local files
//!            │                                  │
//!            ▼                                  ▼
//!   ┌─────────────────┐             ┌───────────────────────┐
//!   │     config      │             │        source         │
//!   │ schema/loader/  │             │  remote (reqwest) or  │
//!   │   validation    │             │   local (files)       │
//!   └────────┬────────┘             └───────────┬───────────┘
//!            │ SelectionCriteria                │ servers + stats
//!            ▼                                  ▼
//!   ┌──────────────────────────────────────────────────────┐
//!   │                      selector                         │
//!   │  country → category → feature → enrich → rank/top-N   │
//!   └───────────────────────────┬──────────────────────────┘
//!                               │ ranked selection
//!                               ▼
//!                    ┌────────────────────┐
//!                    │       output       │
//!                    │ sorted-key JSON →  │
//!                    │  file or stdout    │
//!                    └────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vpnselect::catalog::Coordinates;
use vpnselect::config::loader::{load_config, ConfigError};
use vpnselect::config::validation::{validate_criteria, ValidationError};
use vpnselect::config::SelectConfig;
use vpnselect::source::{local, ApiClient};
use vpnselect::{output, SelectionCriteria, Selector};

#[derive(Parser)]
#[command(name = "vpnselect")]
#[command(about = "Select the best VPN endpoints by country, load and distance", long_about = None)]
struct Cli {
    /// GPS location to measure server distance from
    #[arg(short = 'g', long, value_name = "LAT,LONG", value_parser = parse_location)]
    location: Option<Coordinates>,

    /// Country for the VPN endpoint
    #[arg(short, long)]
    country: Option<String>,

    /// Max distance for a VPN endpoint (miles)
    #[arg(short = 'm', long, value_name = "MILES")]
    max_distance: Option<u32>,

    /// Max load for a VPN endpoint (percent)
    #[arg(short = 'l', long, value_name = "PERCENT")]
    max_load: Option<u16>,

    /// Number of endpoints to include
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// File to write the selection to; stdout when not given
    #[arg(short = 'o', long, value_name = "FILE")]
    output_file: Option<PathBuf>,

    /// File containing the server list; fetched from the API when not given
    #[arg(long, value_name = "FILE", requires = "server_stats")]
    server_list: Option<PathBuf>,

    /// File containing the server stats; fetched from the API when not given
    #[arg(long, value_name = "FILE", requires = "server_list")]
    server_stats: Option<PathBuf>,

    /// Config file with criteria defaults and API settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Parse "LAT,LONG" into coordinates.
fn parse_location(raw: &str) -> Result<Coordinates, String> {
    let (lat, long) = raw.split_once(',').ok_or("expected LAT,LONG")?;
    let lat: f64 = lat.trim().parse().map_err(|e| format!("bad latitude: {e}"))?;
    let long: f64 = long.trim().parse().map_err(|e| format!("bad longitude: {e}"))?;
    Ok(Coordinates { lat, long })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SelectConfig::default(),
    };

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "vpnselect={}",
                    config.observability.log_level
                ))
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("vpnselect v0.1.0 starting");

    // Merge CLI overrides onto config defaults
    let location = match cli.location.or(config.selection.location) {
        Some(location) => location,
        None => return Err(ConfigError::Validation(vec![ValidationError::MissingLocation]).into()),
    };
    let criteria = SelectionCriteria {
        location,
        country: cli.country.unwrap_or(config.selection.country),
        max_distance_miles: cli.max_distance.unwrap_or(config.selection.max_distance_miles),
        max_load_percent: cli.max_load.unwrap_or(config.selection.max_load_percent),
        count: cli.count.unwrap_or(config.selection.count),
    };
    validate_criteria(&criteria).map_err(ConfigError::Validation)?;

    tracing::info!(
        country = %criteria.country,
        max_distance_miles = criteria.max_distance_miles,
        max_load_percent = criteria.max_load_percent,
        count = criteria.count,
        "Criteria resolved"
    );

    // Acquire the two input documents
    let (servers, stats) = match (&cli.server_list, &cli.server_stats) {
        (Some(server_list), Some(server_stats)) => {
            tracing::info!(
                server_list = %server_list.display(),
                server_stats = %server_stats.display(),
                "Loading server list/stats from files"
            );
            (local::load_servers(server_list)?, local::load_stats(server_stats)?)
        }
        _ => ApiClient::new(config.api.clone())?.fetch().await?,
    };
    tracing::info!(servers = servers.len(), stats = stats.len(), "Inputs loaded");

    let selected = Selector::new(criteria).select(servers, &stats);

    output::write(&selected, cli.output_file.as_deref())?;

    Ok(())
}
