//! Destinations for rendered files.
//!
//! The builder never touches the filesystem directly; it hands each rendered
//! file to a [`Sink`]. Three sinks are provided:
//!
//! - [`FsSink`] - writes under an output root with atomic temp-file + rename
//! - [`MemorySink`] - keeps files in memory, in write order
//! - [`DryRunSink`] - prints `=== path ===` banners followed by the content

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::errors::GeneratorError;

/// Receives rendered files from the builder.
pub trait Sink {
    /// Stores `content` at `path`, relative to the sink's root.
    fn write(&mut self, path: &Path, content: &str) -> Result<(), GeneratorError>;
}

/// Writes files beneath a root directory.
#[derive(Debug, Clone)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    /// Creates a sink rooted at `root`. The directory is created on first write.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::OutputDirNotFound` if `root` exists but is
    /// not a directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, GeneratorError> {
        let root = root.into();
        if root.exists() && !root.is_dir() {
            return Err(GeneratorError::OutputDirNotFound(
                root.display().to_string(),
            ));
        }
        Ok(Self { root })
    }
}

impl Sink for FsSink {
    fn write(&mut self, path: &Path, content: &str) -> Result<(), GeneratorError> {
        write_atomic(&self.root.join(path), content)
    }
}

/// Keeps rendered files in memory, preserving write order.
///
/// Writing the same path twice replaces the earlier content in place.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: Vec<(PathBuf, String)>,
}

impl MemorySink {
    pub fn files(&self) -> &[(PathBuf, String)] {
        &self.files
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        let path = path.as_ref();
        self.files
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, content)| content.as_str())
    }
}

impl Sink for MemorySink {
    fn write(&mut self, path: &Path, content: &str) -> Result<(), GeneratorError> {
        match self.files.iter().position(|(p, _)| p == path) {
            Some(index) => self.files[index].1 = content.to_string(),
            None => self.files.push((path.to_path_buf(), content.to_string())),
        }
        Ok(())
    }
}

/// Prints files instead of writing them.
pub struct DryRunSink<W: Write> {
    out: W,
}

impl DryRunSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> DryRunSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for DryRunSink<W> {
    fn write(&mut self, path: &Path, content: &str) -> Result<(), GeneratorError> {
        writeln!(self.out, "=== {} ===\n{}", path.display(), content).map_err(|e| {
            GeneratorError::WriteError {
                path: path.display().to_string(),
                source: e,
            }
        })
    }
}

/// Writes `content` to `path` through a sibling temp file and a rename.
///
/// Parent directories are created as needed. On failure the target keeps its
/// previous content and the temp file is removed.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` naming the path that failed.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    let write_error = |at: &Path, source: io::Error| GeneratorError::WriteError {
        path: at.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
    }

    let temp_path = temp_path_for(path);
    fs::write(&temp_path, content).map_err(|e| write_error(&temp_path, e))?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(write_error(path, e));
    }
    tracing::trace!(path = %path.display(), bytes = content.len(), "wrote file");

    Ok(())
}

/// `users.rb` becomes `users.rb.tmp`, so siblings differing only by
/// extension never share a temp file.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
