//! `zodspec compile`: write the generated files to disk.

use clap::Args;
use std::path::{Path, PathBuf};

use zodspec_core::{EmitOutcome, FsSink, emit_program};

use crate::common::{DEFAULT_OUTPUT_DIR, InputArgs, run_command};
use crate::error::CliError;

/// Arguments of `zodspec compile`.
#[derive(Args, Debug, Clone)]
pub struct CompileArgs {
    /// Graph, config and overrides.
    #[command(flatten)]
    pub input: InputArgs,
    /// Overrides `output-dir`.
    #[arg(
        long = "output-dir",
        value_name = "DIR",
        help = "Directory to write to. Defaults to tsp-output/zodspec"
    )]
    pub output_dir: Option<PathBuf>,
}

/// Emit the program and list the written paths. Returns the exit code.
pub fn run(args: CompileArgs) -> i32 {
    run_command(|| run_inner(args))
}

fn run_inner(args: CompileArgs) -> Result<(), CliError> {
    let (root, options) = args.input.load(args.output_dir)?;

    match emit_program(&root, &options, Path::new(DEFAULT_OUTPUT_DIR), &mut FsSink)? {
        EmitOutcome::NothingToEmit => println!("No models or enums to emit."),
        EmitOutcome::Written(paths) => {
            for path in paths {
                println!("{}", path.display());
            }
        }
    }
    Ok(())
}
