//! Auxiliary npm package files.
//!
//! When a package name and version are both configured, the validator module
//! is accompanied by what is needed to publish it: a manifest, a README, a
//! TypeScript build configuration and a publish-exclusion list.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use tera::Context;
use zodspec_common::PackageInfo;

use crate::error::EmitError;

/// npm manifest.
pub const PACKAGE_JSON: &str = "package.json";
/// Usage notes.
pub const README: &str = "README.md";
/// Compiler settings for building the module.
pub const TSCONFIG_JSON: &str = "tsconfig.json";
/// Keeps sources out of the published tarball.
pub const NPMIGNORE: &str = ".npmignore";

/// Zod release line the generated code targets.
const ZOD_VERSION: &str = "^3.23.8";
const TYPESCRIPT_VERSION: &str = "^5.4.0";
const BUILD_DIR: &str = "dist";

const README_TEMPLATE: &str = include_str!("../templates/README.md.jinja2");

const NPMIGNORE_CONTENTS: &str = "*.ts\n!*.d.ts\ntsconfig.json\n";

/// A generated package file, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFile {
    /// File name, one of the constants above.
    pub name: &'static str,
    /// Rendered file text.
    pub contents: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PackageManifest<'a> {
    name: &'a str,
    version: &'a str,
    description: String,
    #[serde(rename = "type")]
    module_type: &'static str,
    main: String,
    types: String,
    files: Vec<&'static str>,
    scripts: BTreeMap<&'static str, &'static str>,
    peer_dependencies: BTreeMap<&'static str, &'static str>,
    dev_dependencies: BTreeMap<&'static str, &'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TsConfig<'a> {
    compiler_options: CompilerOptions,
    include: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompilerOptions {
    target: &'static str,
    module: &'static str,
    module_resolution: &'static str,
    declaration: bool,
    out_dir: &'static str,
    strict: bool,
    skip_lib_check: bool,
}

/// Render every package file for the module written to `output_file`.
///
/// `schemas` lists the exported schema constants, in document order.
pub fn package_files(
    package: PackageInfo<'_>,
    output_file: &str,
    schemas: &[String],
) -> Result<Vec<PackageFile>, EmitError> {
    Ok(vec![
        PackageFile {
            name: PACKAGE_JSON,
            contents: render_manifest(package, output_file)?,
        },
        PackageFile {
            name: README,
            contents: render_readme(package, output_file, schemas)?,
        },
        PackageFile {
            name: TSCONFIG_JSON,
            contents: render_tsconfig(output_file)?,
        },
        PackageFile {
            name: NPMIGNORE,
            contents: NPMIGNORE_CONTENTS.to_string(),
        },
    ])
}

fn render_manifest(package: PackageInfo<'_>, output_file: &str) -> Result<String, EmitError> {
    let stem = Path::new(output_file)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("index");

    let manifest = PackageManifest {
        name: package.name,
        version: package.version,
        description: format!("Zod validators for {}", package.name),
        module_type: "module",
        main: format!("{BUILD_DIR}/{stem}.js"),
        types: format!("{BUILD_DIR}/{stem}.d.ts"),
        files: vec![BUILD_DIR],
        scripts: BTreeMap::from([("build", "tsc")]),
        peer_dependencies: BTreeMap::from([("zod", ZOD_VERSION)]),
        dev_dependencies: BTreeMap::from([("typescript", TYPESCRIPT_VERSION), ("zod", ZOD_VERSION)]),
    };
    to_json(PACKAGE_JSON, &manifest)
}

fn render_tsconfig(output_file: &str) -> Result<String, EmitError> {
    let config = TsConfig {
        compiler_options: CompilerOptions {
            target: "ES2020",
            module: "ESNext",
            module_resolution: "bundler",
            declaration: true,
            out_dir: BUILD_DIR,
            strict: true,
            skip_lib_check: true,
        },
        include: vec![output_file],
    };
    to_json(TSCONFIG_JSON, &config)
}

fn render_readme(
    package: PackageInfo<'_>,
    output_file: &str,
    schemas: &[String],
) -> Result<String, EmitError> {
    let mut context = Context::new();
    context.insert("package_name", package.name);
    context.insert("package_version", package.version);
    context.insert("source_file", output_file);
    context.insert("schemas", schemas);
    context.insert("example_schema", &schemas.first());

    tera::Tera::one_off(README_TEMPLATE, &context, false)
        .map_err(|source| EmitError::Template { file: README, source })
}

fn to_json<T: Serialize>(file: &'static str, value: &T) -> Result<String, EmitError> {
    let mut json = serde_json::to_string_pretty(value)
        .map_err(|source| EmitError::Serialize { file, source })?;
    json.push('\n');
    Ok(json)
}
