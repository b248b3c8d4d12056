//! Shared fixtures for integration tests.

use vpnselect::catalog::server::{Category, CATEGORY_P2P, CATEGORY_STANDARD};
use vpnselect::catalog::{Coordinates, LoadStats, ServerRecord, StatsMap};

/// Mean Earth radius used by the distance stage, in miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Latitude offset from the equator that is `miles` away along a meridian.
pub fn lat_degrees_for(miles: f64) -> f64 {
    (miles / EARTH_RADIUS_MILES).to_degrees()
}

/// Origin used by the test scenarios.
pub fn origin() -> Coordinates {
    Coordinates { lat: 0.0, long: 0.0 }
}

/// A server that passes every filter: requested country, both required
/// tiers, the required protocol feature.
pub fn qualifying_server(domain: &str, country: &str, miles_from_origin: f64) -> ServerRecord {
    ServerRecord {
        flag: country.to_string(),
        categories: vec![
            Category { name: CATEGORY_STANDARD.to_string() },
            Category { name: CATEGORY_P2P.to_string() },
        ],
        features: [("openvpn_udp".to_string(), true)].into_iter().collect(),
        domain: domain.to_string(),
        location: Coordinates { lat: lat_degrees_for(miles_from_origin), long: 0.0 },
    }
}

/// Build a stats map from (domain, percent) pairs.
pub fn stats(entries: &[(&str, u16)]) -> StatsMap {
    entries
        .iter()
        .map(|&(domain, percent)| (domain.to_string(), LoadStats { percent }))
        .collect()
}
