//! Source collection service
//!
//! Enumerates the files of a classes directory as logical paths relative
//! to that directory.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::ports::{EntryKind, FileSystem};
use crate::domain::value_objects::{LogicalPath, PathFilter, PathSet};
use crate::error::{PackError, PackResult};

struct Walk<'w> {
    root: &'w Path,
    filter: &'w PathFilter,
    visited: HashSet<PathBuf>,
    paths: PathSet,
}

/// Read-only enumerator of packaging inputs
pub struct SourceCollector<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
}

impl<'a, F: FileSystem + ?Sized> SourceCollector<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Collect the regular files under `root`, optionally filtered.
    ///
    /// With no patterns every file is returned. An empty directory yields an
    /// empty set.
    pub fn collect(
        &self,
        root: &Path,
        includes: Option<&[String]>,
        excludes: Option<&[String]>,
    ) -> PackResult<PathSet> {
        let filter = PathFilter::new(includes, excludes)?;
        self.collect_filtered(root, &filter)
    }

    /// Collect with a precompiled filter.
    pub fn collect_filtered(&self, root: &Path, filter: &PathFilter) -> PackResult<PathSet> {
        if !self.fs.is_dir(root) {
            return Err(PackError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut walk = Walk {
            root,
            filter,
            visited: HashSet::new(),
            paths: PathSet::new(),
        };
        self.walk(root, &mut walk)?;
        Ok(walk.paths)
    }

    fn walk(&self, current: &Path, walk: &mut Walk<'_>) -> PackResult<()> {
        // Directory symlinks are followed, so a link back to an ancestor
        // would otherwise be entered again.
        let key = self
            .fs
            .canonicalize(current)
            .unwrap_or_else(|_| current.to_path_buf());
        if !walk.visited.insert(key) {
            return Ok(());
        }

        let entries = self
            .fs
            .list_dir(current)
            .map_err(|e| PackError::Io(e.into_io()))?;

        for entry in entries {
            let Ok(relative) = entry.path.strip_prefix(walk.root) else {
                continue;
            };
            match entry.kind {
                EntryKind::Dir => {
                    if !walk.filter.prunes_dir(relative) {
                        self.walk(&entry.path, walk)?;
                    }
                }
                EntryKind::File => {
                    if walk.filter.accepts(relative, false) {
                        walk.paths.insert(LogicalPath::from_relative(relative));
                    }
                }
                EntryKind::Other => {}
            }
        }

        Ok(())
    }
}
