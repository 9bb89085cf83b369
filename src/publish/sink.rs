//! Destinations for published files.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{ViewerError, ViewerResult};

/// Where published files are written.
///
/// The pipeline only ever writes through this trait, so tests can record
/// output in memory instead of touching the filesystem.
pub trait AssetSink {
    /// Copy `from` to `to` unchanged.
    fn copy_file(&mut self, from: &Path, to: &Path) -> ViewerResult<()>;

    /// Write `contents` to `to`, replacing any previous file as a whole.
    fn write_file(&mut self, to: &Path, contents: &[u8]) -> ViewerResult<()>;
}

/// Filesystem sink.
///
/// `write_file` stages the bytes in a temp file next to the destination and
/// renames it into place, so readers never observe a partial file.
#[derive(Debug, Default, Clone)]
pub struct FsSink;

impl FsSink {
    pub fn new() -> Self {
        FsSink
    }
}

fn ensure_parent(path: &Path) -> ViewerResult<&Path> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.exists() {
        fs::create_dir_all(parent).map_err(|e| ViewerError::io(parent, e))?;
    }
    Ok(parent)
}

impl AssetSink for FsSink {
    fn copy_file(&mut self, from: &Path, to: &Path) -> ViewerResult<()> {
        ensure_parent(to)?;
        fs::copy(from, to).map_err(|e| ViewerError::io(from, e))?;
        Ok(())
    }

    fn write_file(&mut self, to: &Path, contents: &[u8]) -> ViewerResult<()> {
        let parent = ensure_parent(to)?;
        let mut staged =
            tempfile::NamedTempFile::new_in(parent).map_err(|e| ViewerError::io(parent, e))?;
        staged
            .write_all(contents)
            .map_err(|e| ViewerError::io(staged.path(), e))?;
        staged
            .persist(to)
            .map_err(|e| ViewerError::io(to, e.error))?;
        Ok(())
    }
}

/// In-memory sink for testing.
///
/// Copies read the source eagerly so the recorded bytes match what a
/// filesystem sink would have produced.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    files: BTreeMap<PathBuf, Vec<u8>>,
    fail_paths: Vec<PathBuf>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every copy or write to `path` fail.
    pub fn fail_on(mut self, path: impl Into<PathBuf>) -> Self {
        self.fail_paths.push(path.into());
        self
    }

    pub fn get(&self, path: &Path) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    pub fn get_str(&self, path: &Path) -> Option<&str> {
        self.get(path).and_then(|b| std::str::from_utf8(b).ok())
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn check(&self, to: &Path) -> ViewerResult<()> {
        if self.fail_paths.iter().any(|p| p == to) {
            return Err(ViewerError::Message(format!(
                "injected sink failure: {}",
                to.display()
            )));
        }
        Ok(())
    }
}

impl AssetSink for MemorySink {
    fn copy_file(&mut self, from: &Path, to: &Path) -> ViewerResult<()> {
        self.check(to)?;
        let bytes = fs::read(from).map_err(|e| ViewerError::io(from, e))?;
        self.files.insert(to.to_path_buf(), bytes);
        Ok(())
    }

    fn write_file(&mut self, to: &Path, contents: &[u8]) -> ViewerResult<()> {
        self.check(to)?;
        self.files.insert(to.to_path_buf(), contents.to_vec());
        Ok(())
    }
}
