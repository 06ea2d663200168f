//! Error types for penmark
//!
//! Engine queries and mutations never fail for data-quality reasons:
//! malformed metadata falls back to defaults, missing documents report as
//! empty results, and out-of-range query parameters are clamped. Errors
//! exist for the configuration and serialization boundaries only.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PenmarkError>;

/// Errors that can occur at the engine's edges
#[derive(Error, Debug)]
pub enum PenmarkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{0}")]
    Other(String),
}

impl PenmarkError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PenmarkError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }
}
