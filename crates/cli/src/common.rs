//! Arguments and helpers shared across commands

use std::path::PathBuf;

use clap::Args;
use tracing::debug;
use zodspec_common::{EmitterOptions, Namespace, load_graph_file};

use crate::error::CliError;

/// Where the validator module goes when neither the config nor the flags say.
pub const DEFAULT_OUTPUT_DIR: &str = "tsp-output/zodspec";

/// Input graph, config file and option overrides.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Graph JSON path.
    #[arg(
        long = "graph",
        value_name = "GRAPH_JSON",
        help = "Type graph snapshot exported by the TypeSpec compiler"
    )]
    pub graph: PathBuf,
    /// Optional config file.
    #[arg(
        long = "config",
        value_name = "CONFIG_YAML",
        help = "tspconfig.yaml with an `options.zodspec` section"
    )]
    pub config: Option<PathBuf>,
    /// Overrides `output-file`.
    #[arg(long = "output-file", help = "File name of the generated module")]
    pub output_file: Option<String>,
    /// Overrides `package-name`.
    #[arg(long = "package-name", help = "npm package name")]
    pub package_name: Option<String>,
    /// Overrides `package-version`.
    #[arg(long = "package-version", help = "npm package version")]
    pub package_version: Option<String>,
}

impl InputArgs {
    /// Load the graph and resolve options, flags overriding the config file.
    pub fn load(&self, output_dir: Option<PathBuf>) -> Result<(Namespace, EmitterOptions), CliError> {
        let base = match &self.config {
            Some(path) => EmitterOptions::from_config_file(path)?,
            None => EmitterOptions::default(),
        };
        let options = base.merge(EmitterOptions {
            output_dir,
            output_file: self.output_file.clone(),
            package_name: self.package_name.clone(),
            package_version: self.package_version.clone(),
        });
        debug!(options = ?options, "Resolved emitter options.");

        let root = load_graph_file(&self.graph)?;
        Ok((root, options))
    }
}

/// Run a command body, printing any error to stderr and mapping it to an exit code.
pub fn run_command<F>(f: F) -> i32
where
    F: FnOnce() -> Result<(), CliError>,
{
    match f() {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}
