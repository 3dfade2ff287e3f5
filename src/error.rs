//! Error types for the scaffold CLI
//!
//! Subprocess failures are never represented here: a command that exits
//! non-zero or times out is a `CommandOutcome`, not an error. These types
//! cover the filesystem, configuration and rendering failures that do stop
//! a command.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for every CLI command
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while loading `.scaffold.toml`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },
}

/// Result type alias used across the crate
pub type Result<T> = std::result::Result<T, ScaffoldError>;
