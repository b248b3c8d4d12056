//! Deterministic JSON output.
//!
//! # Responsibilities
//! - Serialize the selection with sorted keys and stable indentation
//! - Write to the requested file, or stdout when none is given
//!
//! # Design Decisions
//! - Rendering goes through `serde_json::Value`, whose object keys are
//!   ordered, so two runs over the same selection emit identical bytes
//! - Four-space indent, trailing newline on file output

use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::selector::RankedServer;

/// Errors that can occur while writing the selection.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render the selection as a JSON array, keys sorted, four-space indent.
pub fn render(selected: &[RankedServer]) -> Result<String, OutputError> {
    let value = serde_json::to_value(selected)?;

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    Ok(String::from_utf8(buf).expect("serde_json emits UTF-8"))
}

/// Write the rendered selection to `output_file`, or stdout when `None`.
pub fn write(selected: &[RankedServer], output_file: Option<&Path>) -> Result<(), OutputError> {
    let rendered = render(selected)?;
    match output_file {
        Some(path) => {
            fs::write(path, rendered + "\n")?;
            info!(path = %path.display(), "Wrote selection");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
