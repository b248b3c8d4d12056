//! Endpoint selection pipeline.
//!
//! # Data Flow
//! ```text
//! Vec<ServerRecord> + StatsMap + SelectionCriteria
//!     → filters.rs  (country → category → feature, each a pure subset)
//!     → rank.rs     (attach distance via geo.rs and load via stats,
//!                    sort by (load, distance), apply ceilings, truncate)
//!     → Vec<RankedServer>, best first
//! ```
//!
//! # Design Decisions
//! - Each stage is a total function; an empty list flows through silently
//! - Enrichment builds a new record type instead of mutating inputs
//! - Ordering is deterministic: stable sort, no randomness, no clock

pub mod criteria;
pub mod filters;
pub mod geo;
pub mod rank;

pub use criteria::SelectionCriteria;
pub use rank::RankedServer;

use tracing::info;

use crate::catalog::{ServerRecord, StatsMap};

/// Runs the selection pipeline for one set of criteria.
#[derive(Debug, Clone)]
pub struct Selector {
    criteria: SelectionCriteria,
}

impl Selector {
    /// Create a selector over validated criteria.
    pub fn new(criteria: SelectionCriteria) -> Self {
        Self { criteria }
    }

    /// Select up to `criteria.count` endpoints, best first.
    ///
    /// Holds no state between calls; the same inputs always produce the
    /// same ordered output.
    pub fn select(&self, servers: Vec<ServerRecord>, stats: &StatsMap) -> Vec<RankedServer> {
        let c = &self.criteria;

        let servers = filters::by_country(servers, &c.country);
        let servers = filters::by_required_categories(servers);
        let servers = filters::by_required_features(servers);

        let enriched = rank::enrich(servers, stats, c.location);

        let selected = rank::select_top(enriched, c.max_distance_miles, c.max_load_percent, c.count);

        info!(selected = selected.len(), count = c.count, "Selection complete");
        selected
    }
}
