//! Error types for building and reading model data.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelDataError {
    /// Overrides must be a JSON object; `found` names what was passed instead.
    #[error("Invalid configuration: overrides must be an object, got {found}")]
    InvalidConfiguration { found: &'static str },

    #[error("Missing required model data key: {key}")]
    MissingRequiredDefault { key: String },

    #[error("Malformed value for key {key}: {source}")]
    MalformedValue {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid assignment {0:?}, expected KEY=VALUE")]
    InvalidAssignment(String),

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelDataError>;
