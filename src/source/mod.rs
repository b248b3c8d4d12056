//! Input acquisition.
//!
//! # Data Flow
//! ```text
//! --server-list/--server-stats given?
//!     yes → local.rs  (read both JSON documents from disk)
//!     no  → remote.rs (fetch both from the provider API, with timeout)
//!         → (Vec<ServerRecord>, StatsMap) handed to the selector
//! ```
//!
//! # Design Decisions
//! - Local and remote paths produce the identical typed pair
//! - Unreadable or unparsable input is fatal; everything past this
//!   boundary is the pipeline's silent-exclusion policy
//! - No retries or caching; one fetch per invocation

pub mod local;
pub mod remote;

pub use remote::ApiClient;

use thiserror::Error;

/// Errors that can occur while acquiring the input documents.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Reading a local input file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Fetching from the provider API failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// An input document did not match the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for input acquisition.
pub type SourceResult<T> = Result<T, SourceError>;
