// src/error.rs

//! Unified error handling for the curator tools.

use thiserror::Error;

/// Result type alias for curator operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
///
/// The first four variants carry user-facing messages and display them
/// verbatim; the wrappers exist for `?` at the IO and parser boundaries.
#[derive(Error, Debug)]
pub enum AppError {
    /// A candidate record failed validation (missing field, bad URL, bad date)
    #[error("{0}")]
    Validation(String),

    /// A candidate record collides with an existing entry under the
    /// applicable uniqueness rule
    #[error("{0}")]
    Conflict(String),

    /// Persisted data is malformed where well-formed data was expected
    #[error("{0}")]
    DataIntegrity(String),

    /// The feed could not be fetched or parsed, or yielded no entries
    #[error("{0}")]
    Feed(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization failed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// RSS parsing failed
    #[error("RSS error: {0}")]
    Rss(#[from] rss::Error),
}

impl AppError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Create a data-integrity error.
    pub fn integrity(message: impl Into<String>) -> Self {
        Self::DataIntegrity(message.into())
    }

    /// Create a feed error.
    pub fn feed(message: impl Into<String>) -> Self {
        Self::Feed(message.into())
    }
}
