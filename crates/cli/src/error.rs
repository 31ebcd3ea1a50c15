//! Command errors.

use thiserror::Error;
use zodspec_common::{GraphError, OptionsError};
use zodspec_core::EmitError;

/// Anything a command can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    /// The type graph could not be loaded.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// The config file could not be loaded.
    #[error(transparent)]
    Options(#[from] OptionsError),
    /// Generated files could not be produced or written.
    #[error(transparent)]
    Emit(#[from] EmitError),
}
