//! Selection criteria bundle.

use crate::catalog::Coordinates;

/// Immutable inputs for one selection run.
///
/// Built by merging config-file defaults with CLI overrides, then validated
/// by [`crate::config::validation::validate_criteria`] before the pipeline
/// runs. Both ceilings are exclusive upper bounds.
#[derive(Debug, Clone)]
pub struct SelectionCriteria {
    /// Where distance is measured from.
    pub location: Coordinates,

    /// Country code the endpoint must carry (exact match).
    pub country: String,

    /// Endpoints at or beyond this distance are rejected.
    pub max_distance_miles: u32,

    /// Endpoints at or beyond this load are rejected.
    pub max_load_percent: u16,

    /// Maximum number of endpoints to return.
    pub count: usize,
}
