//! Error types for generator configuration.

use thiserror::Error;

use crate::palette::CatalogKind;

/// Errors raised when a generator configuration cannot be used.
///
/// Every variant is fatal: generation must not start with a configuration
/// that fails validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A palette list is empty, so no color can be sampled from it.
    #[error("palette catalog '{0}' is empty")]
    EmptyCatalog(CatalogKind),

    /// A probability is not a finite value in [0, 1].
    #[error("'{field}' must be a probability in [0, 1], got {value}")]
    ProbabilityOutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The configured stripe count bound lies outside `[min, limit]`.
    #[error("max_stripes ({max}) must be between {min} and {limit}")]
    InvalidStripeRange {
        /// Fixed lower bound.
        min: u32,
        /// Configured upper bound.
        max: u32,
        /// Largest accepted upper bound.
        limit: u32,
    },

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::JsonParse(err.to_string())
    }
}
