//! Output sinks.
//!
//! The emitter never touches the file system itself; it hands every generated
//! file to an `OutputSink`.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Destination for generated files.
pub trait OutputSink {
    /// Store `contents` at `path`, replacing anything already there.
    fn write_file(&mut self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Writes files to disk, creating parent directories as needed.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSink;

impl OutputSink for FsSink {
    fn write_file(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;
        debug!(
            path = %path.display(),
            len = contents.len(),
            "Wrote generated file."
        );
        Ok(())
    }
}

/// Keeps generated files in memory, keyed by path.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    /// Every file written so far.
    pub files: BTreeMap<PathBuf, String>,
}

impl MemorySink {
    /// An empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents written to `path`, if any.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }
}

impl OutputSink for MemorySink {
    fn write_file(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_sink_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out").join("schemas.ts");

        FsSink.write_file(&path, "first").unwrap();
        FsSink.write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_memory_sink_overwrites() {
        let mut sink = MemorySink::new();
        sink.write_file(Path::new("a/b.ts"), "one").unwrap();
        sink.write_file(Path::new("a/b.ts"), "two").unwrap();

        assert_eq!(sink.files.len(), 1);
        assert_eq!(sink.get("a/b.ts"), Some("two"));
        assert_eq!(sink.get("missing"), None);
    }
}
