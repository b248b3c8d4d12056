//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (ceilings and count positive, coordinates sane)
//! - Check API URLs actually parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function over the value being checked
//! - Criteria are validated after CLI overrides are merged in, so a bad
//!   value is caught no matter where it came from

use thiserror::Error;
use url::Url;

use crate::catalog::Coordinates;
use crate::config::schema::SelectConfig;
use crate::selector::SelectionCriteria;

/// A single semantic violation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field}: not a valid URL: {reason}")]
    InvalidUrl { field: &'static str, reason: String },

    #[error("{field} must be positive")]
    NotPositive { field: &'static str },

    #[error("country must not be empty")]
    EmptyCountry,

    #[error("location is required; set selection.location in the config or pass --location")]
    MissingLocation,

    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// Validate the API and observability sections of a loaded config.
///
/// Selection defaults are deliberately not checked here; they are checked
/// as part of the merged criteria via [`validate_criteria`].
pub fn validate_config(config: &SelectConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (field, value) in [
        ("api.server_list_url", &config.api.server_list_url),
        ("api.server_stats_url", &config.api.server_stats_url),
    ] {
        if let Err(e) = Url::parse(value) {
            errors.push(ValidationError::InvalidUrl { field, reason: e.to_string() });
        }
    }

    if config.api.timeout_secs == 0 {
        errors.push(ValidationError::NotPositive { field: "api.timeout_secs" });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate merged selection criteria before the pipeline runs.
pub fn validate_criteria(criteria: &SelectionCriteria) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if criteria.country.is_empty() {
        errors.push(ValidationError::EmptyCountry);
    }
    if criteria.max_distance_miles == 0 {
        errors.push(ValidationError::NotPositive { field: "max_distance_miles" });
    }
    if criteria.max_load_percent == 0 {
        errors.push(ValidationError::NotPositive { field: "max_load_percent" });
    }
    if criteria.count == 0 {
        errors.push(ValidationError::NotPositive { field: "count" });
    }
    errors.extend(check_coordinates(criteria.location));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_coordinates(location: Coordinates) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if !(-90.0..=90.0).contains(&location.lat) {
        errors.push(ValidationError::LatitudeOutOfRange(location.lat));
    }
    if !(-180.0..=180.0).contains(&location.long) {
        errors.push(ValidationError::LongitudeOutOfRange(location.long));
    }
    errors
}
