//! Error types for Yiield
//!
//! The scoring functions are total and never fail. Errors only exist at
//! the edges: loading directory data and reading configuration.

use thiserror::Error;

/// Result type alias using YiieldError
pub type Result<T> = std::result::Result<T, YiieldError>;

/// Unified error type for Yiield operations
#[derive(Debug, Error)]
pub enum YiieldError {
    // Directory data errors
    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // File system errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Protocol directory validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Duplicate protocol slug: {0}")]
    DuplicateSlug(String),

    #[error("Invalid protocol slug {slug:?}: must be lowercase words joined by hyphens")]
    InvalidSlug { slug: String },

    #[error("Alias {alias:?} points at unknown slug {target:?}")]
    DanglingAlias { alias: String, target: String },

    #[error("Alias key {key:?} maps to both {first:?} and {second:?}")]
    DuplicateAlias {
        key: String,
        first: String,
        second: String,
    },

    #[error("Failed to parse directory data: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for YiieldError {
    fn from(err: serde_json::Error) -> Self {
        YiieldError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for YiieldError {
    fn from(err: std::io::Error) -> Self {
        YiieldError::Io(err.to_string())
    }
}
