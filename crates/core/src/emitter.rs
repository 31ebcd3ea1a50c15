//! Zod validator emitter for TypeSpec type graphs.
//!
//! This module is a thin wrapper around the IR-based code generation.
//! The pipeline is:
//! 1. Collect: Namespace tree -> CollectedTypes (filtered, flattened)
//! 2. Codegen: CollectedTypes -> ZodModule (ordered, translated)
//! 3. Emit: ZodModule -> String (via Emit trait)
//! 4. Write: document and package files -> OutputSink

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zodspec_common::{EmitterOptions, Namespace};

use crate::collector::collect_types;
use crate::error::EmitError;
use crate::ir::utils::schema_ident;
use crate::ir::{Emit, codegen_module};
use crate::package::package_files;
use crate::sink::OutputSink;

/// A file produced by one emission pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Destination, under the output directory.
    pub path: PathBuf,
    /// File text.
    pub contents: String,
}

/// Result of an emission pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitOutcome {
    /// The graph held no emittable declarations; nothing was written.
    NothingToEmit,
    /// Files handed to the sink, validator module first.
    Written(Vec<PathBuf>),
}

/// Generate the validator document for a type graph.
///
/// Returns `None` when the graph has no emittable declarations.
pub fn generate(root: &Namespace, options: &EmitterOptions) -> Option<String> {
    let collected = collect_types(root);
    if collected.is_empty() {
        return None;
    }
    Some(codegen_module(&collected, options).emit())
}

/// Produce every file of an emission pass without writing anything.
///
/// Paths are relative to the output directory.
pub fn generate_files(
    root: &Namespace,
    options: &EmitterOptions,
) -> Result<Vec<GeneratedFile>, EmitError> {
    let collected = collect_types(root);
    if collected.is_empty() {
        return Ok(Vec::new());
    }

    let module = codegen_module(&collected, options);
    let document = module.emit();
    let output_file = options.output_file();

    let mut files = vec![GeneratedFile {
        path: PathBuf::from(output_file),
        contents: document,
    }];

    if let Some(package) = options.package() {
        let schemas: Vec<_> = module
            .enums
            .iter()
            .chain(&module.models)
            .map(|def| schema_ident(&def.name))
            .collect();
        for file in package_files(package, output_file, &schemas)? {
            files.push(GeneratedFile {
                path: PathBuf::from(file.name),
                contents: file.contents,
            });
        }
    } else {
        debug!("Package name or version missing, skipping package files.");
    }

    Ok(files)
}

/// Run one emission pass and hand the results to `sink`.
///
/// `host_output_dir` is used when no `output-dir` option is set.
pub fn emit_program(
    root: &Namespace,
    options: &EmitterOptions,
    host_output_dir: &Path,
    sink: &mut dyn OutputSink,
) -> Result<EmitOutcome, EmitError> {
    let files = generate_files(root, options)?;
    if files.is_empty() {
        info!("No models or enums to emit.");
        return Ok(EmitOutcome::NothingToEmit);
    }

    let output_dir = options.output_dir(host_output_dir);
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = output_dir.join(&file.path);
        sink.write_file(&path, &file.contents)
            .map_err(|source| EmitError::Write {
                path: path.clone(),
                source,
            })?;
        written.push(path);
    }

    info!(
        output_dir = %output_dir.display(),
        files = written.len(),
        "Zod validators generated."
    );
    Ok(EmitOutcome::Written(written))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use std::io;
    use zodspec_common::parse_graph;

    struct FailingSink;

    impl OutputSink for FailingSink {
        fn write_file(&mut self, _path: &Path, _contents: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }
    }

    fn single_model() -> Namespace {
        parse_graph(r#"{ "name": "", "models": [ { "name": "Item" } ] }"#).unwrap()
    }

    #[test]
    fn test_generate_empty_graph() {
        assert_eq!(generate(&Namespace::default(), &EmitterOptions::default()), None);
    }

    #[test]
    fn test_generate_document() {
        let doc = generate(&single_model(), &EmitterOptions::default()).unwrap();
        assert_eq!(
            doc,
            "import { z } from \"zod\";\n\nexport const ItemSchema = z.object({});\n"
        );
    }

    #[test]
    fn test_emit_to_host_directory() {
        let mut sink = MemorySink::new();
        let outcome = emit_program(
            &single_model(),
            &EmitterOptions::default(),
            Path::new("tsp-output/zodspec"),
            &mut sink,
        )
        .unwrap();

        let expected = PathBuf::from("tsp-output/zodspec/schemas.ts");
        assert_eq!(outcome, EmitOutcome::Written(vec![expected.clone()]));
        assert!(sink.get(&expected).is_some());
    }

    #[test]
    fn test_output_options() {
        let options = EmitterOptions {
            output_dir: Some(PathBuf::from("out")),
            output_file: Some("models.ts".into()),
            ..EmitterOptions::default()
        };
        let mut sink = MemorySink::new();
        emit_program(&single_model(), &options, Path::new("ignored"), &mut sink).unwrap();

        let paths: Vec<_> = sink.files.keys().cloned().collect();
        assert_eq!(paths, [PathBuf::from("out/models.ts")]);
    }

    #[test]
    fn test_nothing_to_emit_writes_nothing() {
        let mut sink = MemorySink::new();
        let outcome = emit_program(
            &Namespace::default(),
            &EmitterOptions::default(),
            Path::new("out"),
            &mut sink,
        )
        .unwrap();
        assert_eq!(outcome, EmitOutcome::NothingToEmit);
        assert!(sink.files.is_empty());
    }

    #[test]
    fn test_sink_failure_is_reported() {
        let err = emit_program(
            &single_model(),
            &EmitterOptions::default(),
            Path::new("out"),
            &mut FailingSink,
        )
        .unwrap_err();
        assert!(matches!(err, EmitError::Write { .. }));
        assert!(err.to_string().contains("out/schemas.ts"));
    }
}
