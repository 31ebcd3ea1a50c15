//! Emission errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while producing or writing the generated files.
///
/// Translation itself never fails; only the hand-off to the output sink and
/// the auxiliary package files can.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The output sink refused a file.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// A templated package file could not be rendered.
    #[error("failed to render {file}: {source}")]
    Template {
        /// Name of the generated file.
        file: &'static str,
        /// Template engine error.
        source: tera::Error,
    },
    /// A JSON package file could not be serialized.
    #[error("failed to serialize {file}: {source}")]
    Serialize {
        /// Name of the generated file.
        file: &'static str,
        /// Serializer error.
        source: serde_json::Error,
    },
}
