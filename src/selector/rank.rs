//! Enrichment and ranking.
//!
//! # Responsibilities
//! - Attach distance-from-origin and reported load to each survivor
//! - Order candidates by (load, distance), both ascending
//! - Apply the distance and load ceilings, truncate to the result cap
//!
//! # Design Decisions
//! - Enrichment wraps records in a new type; inputs are never mutated
//! - Ceilings are strict upper bounds (boundary value rejected)
//! - Stable sort keeps ties in input order, so output is deterministic

use serde::Serialize;
use tracing::info;

use crate::catalog::stats::SENTINEL_LOAD;
use crate::catalog::{Coordinates, ServerRecord, StatsMap};
use crate::selector::geo;

/// A server with its derived ranking fields attached.
#[derive(Debug, Clone, Serialize)]
pub struct RankedServer {
    #[serde(flatten)]
    pub server: ServerRecord,

    /// Great-circle distance from the requested location.
    pub distance_miles: f64,

    /// Reported load, or [`SENTINEL_LOAD`] when the stats map has no entry.
    pub load_percent: u16,
}

/// Attach distance and load to every record. Never drops records.
pub fn enrich(servers: Vec<ServerRecord>, stats: &StatsMap, origin: Coordinates) -> Vec<RankedServer> {
    servers
        .into_iter()
        .map(|server| {
            let distance_miles = geo::haversine_miles(origin, server.location);
            let load_percent = stats.get(&server.domain).map(|s| s.percent).unwrap_or(SENTINEL_LOAD);
            RankedServer { server, distance_miles, load_percent }
        })
        .collect()
}

/// Sort by (load, distance) ascending, drop entries at or beyond either
/// ceiling, and keep the first `count`.
pub fn select_top(
    mut servers: Vec<RankedServer>,
    max_distance_miles: u32,
    max_load_percent: u16,
    count: usize,
) -> Vec<RankedServer> {
    servers.sort_by(|a, b| {
        a.load_percent
            .cmp(&b.load_percent)
            .then_with(|| a.distance_miles.total_cmp(&b.distance_miles))
    });

    let before = servers.len();
    servers.retain(|s| s.distance_miles < f64::from(max_distance_miles));
    info!(removed = before - servers.len(), max_distance_miles, "Filtered servers too far away");

    let before = servers.len();
    servers.retain(|s| s.load_percent < max_load_percent);
    info!(removed = before - servers.len(), max_load_percent, "Filtered servers with load too high");

    info!(candidates = servers.len(), "Selecting from remaining servers");
    servers.truncate(count);
    servers
}
