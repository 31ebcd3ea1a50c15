//! Command-line front end for zodspec.

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

pub mod common;
pub mod compile;
pub mod error;
pub mod print;

pub use error::CliError;

/// Environment variable selecting the log level or filter.
pub const LOG_ENV: &str = "ZODSPEC_LOG";

/// Crates whose logs a plain level applies to.
const LOG_TARGETS: [&str; 3] = ["zodspec_cli", "zodspec_core", "zodspec_common"];

/// Top-level command line.
#[derive(Parser, Debug)]
#[command(
    name = "zodspec",
    version,
    about = "Compile TypeSpec type graphs into Zod validator modules"
)]
pub struct Cli {
    /// Selected command; help is printed when absent.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the validator module (and package files) on disk
    Compile(compile::CompileArgs),
    /// Print the validator module to stdout
    Print(print::PrintArgs),
}

/// Parse `args` (program name first) and run the selected command.
///
/// Returns the process exit code.
pub fn run_cli(args: Vec<String>) -> i32 {
    match Cli::try_parse_from(args) {
        Ok(cli) => {
            init_tracing();
            match cli.command {
                Some(Commands::Compile(args)) => compile::run(args),
                Some(Commands::Print(args)) => print::run(args),
                None => {
                    let mut cmd = Cli::command();
                    let _ = cmd.print_help();
                    println!();
                    0
                }
            }
        }
        Err(e) => {
            let code = e.exit_code();
            let _ = e.print();
            code
        }
    }
}

fn init_tracing() {
    let filter = log_filter(std::env::var(LOG_ENV).ok().as_deref());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

// ZODSPEC_LOG takes either a plain level ("debug") applied to our crates,
// or a full tracing filter spec like "zodspec_core=trace,warn"
fn log_filter(value: Option<&str>) -> String {
    let level = match value {
        Some(level) if is_plain_level(level) => level,
        Some(spec) => return spec.to_string(),
        None => "info",
    };
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    const GRAPH: &str = r#"{
      "name": "",
      "models": [ { "name": "Tag", "properties": [
        { "name": "label", "type": { "kind": "scalar", "name": "string" } } ] } ]
    }"#;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn write(dir: &Path, name: &str, contents: &str) -> String {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_is_plain_level() {
        assert!(is_plain_level("debug"));
        assert!(is_plain_level("WARN"));
        assert!(!is_plain_level("zodspec_core=debug"));
    }

    #[test]
    fn test_log_filter() {
        assert_eq!(
            log_filter(None),
            "zodspec_cli=info,zodspec_core=info,zodspec_common=info"
        );
        assert_eq!(
            log_filter(Some("debug")),
            "zodspec_cli=debug,zodspec_core=debug,zodspec_common=debug"
        );
        assert_eq!(log_filter(Some("zodspec_core=trace")), "zodspec_core=trace");
    }

    #[test]
    fn test_parse_compile_flags() {
        let cli = Cli::try_parse_from(args(&[
            "zodspec",
            "compile",
            "--graph",
            "graph.json",
            "--output-dir",
            "out",
            "--package-name",
            "@acme/models",
        ]))
        .unwrap();
        let Some(Commands::Compile(compile)) = cli.command else {
            panic!("expected the compile command");
        };
        assert_eq!(compile.input.graph, Path::new("graph.json"));
        assert_eq!(compile.output_dir.as_deref(), Some(Path::new("out")));
        assert_eq!(compile.input.package_name.as_deref(), Some("@acme/models"));
        assert!(compile.input.config.is_none());
    }

    #[test]
    fn test_graph_is_required() {
        assert!(Cli::try_parse_from(args(&["zodspec", "print"])).is_err());
    }

    #[test]
    fn test_compile_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let graph = write(dir.path(), "graph.json", GRAPH);
        let config = write(
            dir.path(),
            "tspconfig.yaml",
            "options:\n  zodspec:\n    output-file: tags.ts\n    package-name: \"@acme/tags\"\n",
        );
        let out = dir.path().join("out");

        let code = compile::run(compile::CompileArgs {
            input: common::InputArgs {
                graph: graph.into(),
                config: Some(config.into()),
                output_file: None,
                package_name: None,
                package_version: Some("0.1.0".into()),
            },
            output_dir: Some(out.clone()),
        });

        assert_eq!(code, 0);
        let doc = fs::read_to_string(out.join("tags.ts")).unwrap();
        assert!(doc.contains(" * Package: @acme/tags\n * Version: 0.1.0\n"));
        assert!(doc.contains("export const TagSchema = z.object({\n  label: z.string(),\n});\n"));
        assert!(out.join("package.json").exists());
    }

    #[test]
    fn test_flags_override_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = write(
            dir.path(),
            "tspconfig.yaml",
            "options:\n  zodspec:\n    output-file: from-config.ts\n",
        );
        let input = common::InputArgs {
            graph: write(dir.path(), "graph.json", GRAPH).into(),
            config: Some(config.into()),
            output_file: Some("from-flag.ts".into()),
            package_name: None,
            package_version: None,
        };

        let (_, options) = input.load(None).unwrap();
        assert_eq!(options.output_file(), "from-flag.ts");
    }

    #[test]
    fn test_missing_graph_fails() {
        let code = print::run(print::PrintArgs {
            input: common::InputArgs {
                graph: "/definitely/not/here.json".into(),
                config: None,
                output_file: None,
                package_name: None,
                package_version: None,
            },
        });
        assert_eq!(code, 1);
    }

    #[test]
    fn test_print_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let code = run_cli(args(&[
            "zodspec",
            "print",
            "--graph",
            &write(dir.path(), "graph.json", GRAPH),
        ]));
        assert_eq!(code, 0);
    }
}
