//! Local file inputs.

use std::fs;
use std::path::Path;

use crate::catalog::{ServerRecord, StatsMap};
use crate::source::SourceResult;

/// Read a server catalog document from disk.
pub fn load_servers(path: &Path) -> SourceResult<Vec<ServerRecord>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Read a load statistics document from disk.
pub fn load_stats(path: &Path) -> SourceResult<StatsMap> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
