//! Emitter options.
//!
//! Options come from a `tspconfig.yaml`-style file (under
//! `options.<emitter-name>`) and from command-line flags, which take
//! precedence.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::OptionsError;

/// Key of this emitter's section under `options:` in the config file.
pub const EMITTER_NAME: &str = "zodspec";

/// File name used for the validator module when none is configured.
pub const DEFAULT_OUTPUT_FILE: &str = "schemas.ts";

/// Recognized emitter options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EmitterOptions {
    /// Directory the files are written to.
    pub output_dir: Option<PathBuf>,
    /// File name of the validator module.
    pub output_file: Option<String>,
    /// npm package name, used in the header and the package artifacts.
    pub package_name: Option<String>,
    /// npm package version, used in the header and the package artifacts.
    pub package_version: Option<String>,
}

/// Package coordinates, available once both name and version are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageInfo<'a> {
    /// Package name.
    pub name: &'a str,
    /// Package version.
    pub version: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    options: HashMap<String, serde_yaml::Value>,
}

impl EmitterOptions {
    /// Parse options from config-file text.
    ///
    /// Sections belonging to other emitters are ignored; a missing section
    /// yields the defaults.
    pub fn from_config_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let config: Option<ConfigFile> = serde_yaml::from_str(yaml)?;
        match config.and_then(|mut c| c.options.remove(EMITTER_NAME)) {
            Some(section) if !section.is_null() => serde_yaml::from_value(section),
            _ => Ok(Self::default()),
        }
    }

    /// Read options from a config file on disk.
    pub fn from_config_file(path: &Path) -> Result<Self, OptionsError> {
        let contents = fs::read_to_string(path).map_err(|source| OptionsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_config_str(&contents).map_err(|source| OptionsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overlay `overrides` on top of `self`; values set in `overrides` win.
    pub fn merge(self, overrides: Self) -> Self {
        Self {
            output_dir: overrides.output_dir.or(self.output_dir),
            output_file: overrides.output_file.or(self.output_file),
            package_name: overrides.package_name.or(self.package_name),
            package_version: overrides.package_version.or(self.package_version),
        }
    }

    /// The configured output file name, or [`DEFAULT_OUTPUT_FILE`].
    pub fn output_file(&self) -> &str {
        self.output_file.as_deref().unwrap_or(DEFAULT_OUTPUT_FILE)
    }

    /// The configured output directory, or the host's emission directory.
    pub fn output_dir<'a>(&'a self, host_default: &'a Path) -> &'a Path {
        self.output_dir.as_deref().unwrap_or(host_default)
    }

    /// Package coordinates when both name and version are configured.
    pub fn package(&self) -> Option<PackageInfo<'_>> {
        Some(PackageInfo {
            name: self.package_name.as_deref()?,
            version: self.package_version.as_deref()?,
        })
    }
}
