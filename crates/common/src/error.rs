//! Error types for loading the type graph and emitter options.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain a type graph snapshot.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The snapshot file could not be read.
    #[error("failed to read type graph {}: {source}", .path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The snapshot is not valid JSON for a namespace tree.
    #[error("failed to parse type graph: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure to load emitter options from a config file.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The config file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The config file is not valid YAML or has mistyped options.
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        /// Path that was parsed.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },
}
