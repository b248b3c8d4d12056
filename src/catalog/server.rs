//! Typed view of one catalog entry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Category marker for standard VPN service.
pub const CATEGORY_STANDARD: &str = "Standard VPN servers";

/// Category marker for peer-to-peer capable servers.
pub const CATEGORY_P2P: &str = "P2P";

/// GPS coordinates in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub long: f64,
}

/// One service category attached to a server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

/// A single candidate endpoint from the provider catalog.
///
/// `flag`, `domain` and `location` are required on the wire; a document
/// missing them is malformed. `categories` and `features` default to empty
/// when absent, which simply means the record fails the corresponding
/// filters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerRecord {
    /// Country code, matched exactly against the requested country.
    pub flag: String,

    /// Service categories this server belongs to.
    #[serde(default)]
    pub categories: Vec<Category>,

    /// Feature name → supported flag.
    #[serde(default)]
    pub features: BTreeMap<String, bool>,

    /// Hostname, the join key against the stats map.
    pub domain: String,

    /// Server position.
    pub location: Coordinates,
}

impl ServerRecord {
    /// Returns true if the server carries the named category.
    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }

    /// Returns true if the named feature is present with exactly `required`.
    /// A missing feature never matches.
    pub fn supports(&self, feature: &str, required: bool) -> bool {
        self.features.get(feature) == Some(&required)
    }
}
