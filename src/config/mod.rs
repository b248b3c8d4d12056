//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, built-in defaults when absent)
//!     → validation.rs (semantic checks)
//!     → SelectConfig (validated, immutable defaults)
//!     → merged with CLI overrides into SelectionCriteria
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Criteria are validated on the merged result, after CLI overrides

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::ApiConfig;
pub use schema::ObservabilityConfig;
pub use schema::SelectConfig;
pub use schema::SelectionDefaults;
