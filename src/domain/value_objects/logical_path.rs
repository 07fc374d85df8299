//! Logical Path Value Object
//!
//! A path relative to the webapp output root, used as the uniqueness key
//! for conflict detection:
//! - Forward slashes only, regardless of host conventions
//! - No leading `./` or `/`, no trailing `/`
//! - Case sensitive

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Component, Path};

use serde::Serialize;

/// Destination of loose classes, relative to the webapp root.
pub const CLASSES_PATH: &str = "WEB-INF/classes";

/// Destination of library archives, relative to the webapp root.
pub const LIB_PATH: &str = "WEB-INF/lib";

/// Sorted set of logical paths, as produced by source collection.
pub type PathSet = BTreeSet<LogicalPath>;

/// A normalized, output-root-relative path
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct LogicalPath(String);

impl LogicalPath {
    /// Normalize a string into a logical path.
    ///
    /// Backslashes become forward slashes; empty and `.` segments are dropped.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let replaced = raw.as_ref().replace('\\', "/");
        let segments: Vec<&str> = replaced
            .split('/')
            .filter(|s| !s.is_empty() && *s != ".")
            .collect();
        Self(segments.join("/"))
    }

    /// Build a logical path from a relative filesystem path.
    pub fn from_relative(path: &Path) -> Self {
        let segments: Vec<String> = path
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        Self(segments.join("/"))
    }

    /// Append a child path under this one.
    pub fn join(&self, child: impl AsRef<str>) -> Self {
        if self.0.is_empty() {
            return Self::new(child);
        }
        Self::new(format!("{}/{}", self.0, child.as_ref()))
    }

    /// Location of an archive named `name` in the library directory.
    pub fn in_lib(name: &str) -> Self {
        Self::new(LIB_PATH).join(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolve against an output root using host path separators.
    pub fn to_path_under(&self, root: &Path) -> std::path::PathBuf {
        let mut full = root.to_path_buf();
        for segment in self.0.split('/').filter(|s| !s.is_empty()) {
            full.push(segment);
        }
        full
    }
}

impl fmt::Display for LogicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LogicalPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for LogicalPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for LogicalPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
