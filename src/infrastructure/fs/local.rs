//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{
    CopyOutcome, DirEntry, EntryKind, FileSystem, FsError, FsResult,
};
use crate::domain::value_objects::ContentHash;

/// Local file system implementation
///
/// Copies are atomic (tempfile + rename) and skip destinations whose
/// content already matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::at(path, e))
    }

    fn list_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path).map_err(|e| FsError::at(path, e))? {
            let entry = entry?;
            let entry_path = entry.path();
            // Follows symlinks; dangling links are neither files nor dirs.
            let kind = match std::fs::metadata(&entry_path) {
                Ok(meta) if meta.is_dir() => EntryKind::Dir,
                Ok(meta) if meta.is_file() => EntryKind::File,
                _ => EntryKind::Other,
            };
            entries.push(DirEntry {
                path: entry_path,
                kind,
            });
        }
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }

    fn same_location(&self, a: &Path, b: &Path) -> bool {
        match (self.canonicalize(a), self.canonicalize(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => a == b,
        }
    }

    fn canonicalize(&self, path: &Path) -> FsResult<PathBuf> {
        path.canonicalize().map_err(|e| FsError::at(path, e))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> FsResult<CopyOutcome> {
        let content = std::fs::read(from).map_err(|e| FsError::at(from, e))?;

        if to.is_file() && self.hash(to)? == ContentHash::from_bytes(&content) {
            return Ok(CopyOutcome::Unchanged);
        }

        let parent = match to.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| FsError::at(parent, e))?;

        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| FsError::at(parent, e))?;
        tmp.write_all(&content).map_err(|e| FsError::at(to, e))?;
        tmp.persist(to).map_err(|e| FsError::at(to, e.error))?;
        Ok(CopyOutcome::Written)
    }

    fn hash(&self, path: &Path) -> FsResult<ContentHash> {
        let content = std::fs::read(path).map_err(|e| FsError::at(path, e))?;
        Ok(ContentHash::from_bytes(&content))
    }
}
