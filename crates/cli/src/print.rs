//! `zodspec print`: write the validator module to stdout.

use clap::Args;

use zodspec_core::generate;

use crate::common::{InputArgs, run_command};
use crate::error::CliError;

/// Arguments of `zodspec print`.
#[derive(Args, Debug, Clone)]
pub struct PrintArgs {
    /// Graph, config and overrides.
    #[command(flatten)]
    pub input: InputArgs,
}

/// Print the document, or a notice on stderr when there is nothing to emit.
pub fn run(args: PrintArgs) -> i32 {
    run_command(|| run_inner(args))
}

fn run_inner(args: PrintArgs) -> Result<(), CliError> {
    let (root, options) = args.input.load(None)?;

    match generate(&root, &options) {
        // The document already ends with a newline
        Some(document) => print!("{document}"),
        None => eprintln!("No models or enums to emit."),
    }
    Ok(())
}
