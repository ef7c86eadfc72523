//! Error types for manifest generation.

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem scanning errors
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to walk directory {path:?}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

/// Tree aggregation errors
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Path conflict at {path}: a file and a directory share this name")]
    PathConflict { path: String },

    #[error("Duplicate path: {path}")]
    DuplicatePath { path: String },

    #[error("Top-level key collision: {key}")]
    KeyCollision { key: String },
}

/// Errors surfaced by report generation
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("Background task failed: {0}")]
    Task(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for ManifestError {
    fn from(err: config::ConfigError) -> Self {
        ManifestError::Config(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ManifestError {
    fn from(err: tokio::task::JoinError) -> Self {
        ManifestError::Task(err.to_string())
    }
}
