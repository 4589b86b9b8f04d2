//! Unified error types for the caliper-nodes workspace.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum CaliperNodesError {
    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// Strict mode found a number of container blocks other than the expected one.
    #[error("expected {expected} container block(s) in {path}, found {found}")]
    BlockCount {
        /// File that was inspected.
        path: PathBuf,
        /// Number of blocks required.
        expected: usize,
        /// Number of blocks actually matched.
        found: usize,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, CaliperNodesError>;
