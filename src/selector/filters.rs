//! Candidate filtering stages.
//!
//! # Responsibilities
//! - Country filter: exact, case-sensitive match on the country code
//! - Category filter: require the standard AND peer-to-peer tiers
//! - Feature filter: exact-match every required feature flag
//!
//! # Design Decisions
//! - Filters never fail; a record lacking data is excluded, not an error
//! - Feature requirements are a table; AND across all entries, so adding
//!   a requirement is adding a row

use tracing::info;

use crate::catalog::server::{CATEGORY_P2P, CATEGORY_STANDARD};
use crate::catalog::ServerRecord;

/// Feature flags an endpoint must carry, with the exact required value.
pub const REQUIRED_FEATURES: &[(&str, bool)] = &[("openvpn_udp", true)];

/// Keep servers in the requested country.
pub fn by_country(servers: Vec<ServerRecord>, country: &str) -> Vec<ServerRecord> {
    let before = servers.len();
    let kept: Vec<_> = servers.into_iter().filter(|s| s.flag == country).collect();
    info!(removed = before - kept.len(), country, "Filtered non-matching countries");
    kept
}

/// Keep servers carrying both the standard and peer-to-peer tiers.
pub fn by_required_categories(servers: Vec<ServerRecord>) -> Vec<ServerRecord> {
    let before = servers.len();
    let kept: Vec<_> = servers
        .into_iter()
        .filter(|s| s.has_category(CATEGORY_STANDARD) && s.has_category(CATEGORY_P2P))
        .collect();
    info!(removed = before - kept.len(), "Filtered non-standard servers");
    kept
}

/// Keep servers matching every entry of [`REQUIRED_FEATURES`] exactly.
pub fn by_required_features(servers: Vec<ServerRecord>) -> Vec<ServerRecord> {
    let before = servers.len();
    let kept: Vec<_> = servers
        .into_iter()
        .filter(|s| REQUIRED_FEATURES.iter().all(|&(name, value)| s.supports(name, value)))
        .collect();
    info!(removed = before - kept.len(), "Filtered servers missing required features");
    kept
}
