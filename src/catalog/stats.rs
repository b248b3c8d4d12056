//! Load statistics, keyed by server domain.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Load assigned to a server with no stats entry. Larger than any valid
/// ceiling, so such servers fall out of the load filter instead of being
/// special-cased.
pub const SENTINEL_LOAD: u16 = 999;

/// Reported utilization for one server.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LoadStats {
    /// Percentage load, 0-100.
    pub percent: u16,
}

/// Domain → load map. Not every catalog entry has one.
pub type StatsMap = HashMap<String, LoadStats>;
