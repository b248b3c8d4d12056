//! Server catalog data model.
//!
//! # Data Flow
//! ```text
//! provider JSON (API or local file)
//!     → server.rs (typed server records, tolerant of absent
//!       category/feature data)
//!     → stats.rs (domain → load map, absent entries are normal)
//!     → consumed read-only by one selector invocation
//! ```
//!
//! # Design Decisions
//! - Records are typed at the boundary; the pipeline never touches raw JSON
//! - Absence of categories, features or a stats entry is data, not an error
//! - Unknown wire fields are ignored on deserialization

pub mod server;
pub mod stats;

pub use server::Coordinates;
pub use server::ServerRecord;
pub use stats::LoadStats;
pub use stats::StatsMap;
