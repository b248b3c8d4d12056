//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the tool.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::catalog::Coordinates;

/// Root configuration for the selection tool.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SelectConfig {
    /// Default selection criteria, overridable per invocation.
    pub selection: SelectionDefaults,

    /// Provider API endpoints and fetch settings.
    pub api: ApiConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Default criteria applied when the CLI does not override them.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SelectionDefaults {
    /// GPS location distance is measured from. No sensible default exists,
    /// so it must come from the config file or the CLI.
    pub location: Option<Coordinates>,

    /// Country code the endpoint must carry.
    pub country: String,

    /// Exclusive distance ceiling in miles.
    pub max_distance_miles: u32,

    /// Exclusive load ceiling in percent.
    pub max_load_percent: u16,

    /// Number of endpoints to emit.
    pub count: usize,
}

impl Default for SelectionDefaults {
    fn default() -> Self {
        Self {
            location: None,
            country: "US".to_string(),
            max_distance_miles: 500,
            max_load_percent: 30,
            count: 5,
        }
    }
}

/// Provider API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// URL serving the server catalog document.
    pub server_list_url: String,

    /// URL serving the load statistics document.
    pub server_stats_url: String,

    /// Fetch timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            server_list_url: "https://nordvpn.com/api/server".to_string(),
            server_stats_url: "https://nordvpn.com/api/server/stats".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self { log_level: "info".to_string() }
    }
}
