//! Include/exclude filter for collected sources
//!
//! Patterns use gitignore glob semantics via the `ignore` crate. A pattern
//! matching a directory also matches everything below it.

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::error::{PackError, PackResult};

/// Compiled include/exclude patterns.
///
/// A file is accepted when it matches an include pattern (or no includes
/// were given) and matches no exclude pattern.
#[derive(Debug, Default)]
pub struct PathFilter {
    includes: Option<Gitignore>,
    excludes: Option<Gitignore>,
}

impl PathFilter {
    /// A filter that accepts every file.
    pub fn accept_all() -> Self {
        Self::default()
    }

    /// Compile optional pattern lists. Empty lists behave like `None`.
    pub fn new(includes: Option<&[String]>, excludes: Option<&[String]>) -> PackResult<Self> {
        Ok(Self {
            includes: compile(includes)?,
            excludes: compile(excludes)?,
        })
    }

    /// Whether no patterns were given at all.
    pub fn is_accept_all(&self) -> bool {
        self.includes.is_none() && self.excludes.is_none()
    }

    /// Check a path relative to the collected root.
    pub fn accepts(&self, rel_path: &Path, is_dir: bool) -> bool {
        if let Some(includes) = &self.includes {
            if !includes
                .matched_path_or_any_parents(rel_path, is_dir)
                .is_ignore()
            {
                return false;
            }
        }
        match &self.excludes {
            Some(excludes) => !excludes
                .matched_path_or_any_parents(rel_path, is_dir)
                .is_ignore(),
            None => true,
        }
    }

    /// Whether a directory can be skipped entirely during the walk.
    pub fn prunes_dir(&self, rel_path: &Path) -> bool {
        self.excludes
            .as_ref()
            .map(|ex| ex.matched_path_or_any_parents(rel_path, true).is_ignore())
            .unwrap_or(false)
    }
}

fn compile(patterns: Option<&[String]>) -> PackResult<Option<Gitignore>> {
    let patterns = match patterns {
        Some(p) if !p.is_empty() => p,
        _ => return Ok(None),
    };

    let mut builder = GitignoreBuilder::new("");
    for pattern in patterns {
        builder
            .add_line(None, pattern)
            .map_err(|e| PackError::InvalidPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
    }

    let matcher = builder.build().map_err(|e| PackError::InvalidPattern {
        pattern: patterns.join(", "),
        message: e.to_string(),
    })?;
    Ok(Some(matcher))
}
