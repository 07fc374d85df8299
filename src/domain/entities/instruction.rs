//! Packaging instructions and decisions
//!
//! A decision is produced, never executed, by the domain. The execution
//! surface lives behind `AssemblyContext`.

use std::fmt;
use std::path::PathBuf;

use crate::domain::entities::ContributorId;
use crate::domain::value_objects::{LogicalPath, PathSet};

/// Copy a set of files, keeping their relative layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopySet {
    pub source_dir: PathBuf,
    pub relative_paths: PathSet,
    pub destination: LogicalPath,
}

impl CopySet {
    pub fn len(&self) -> usize {
        self.relative_paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relative_paths.is_empty()
    }

    /// Destination of each file, relative to the output root.
    pub fn targets(&self) -> impl Iterator<Item = (&LogicalPath, LogicalPath)> {
        self.relative_paths
            .iter()
            .map(move |rel| (rel, self.destination.join(rel.as_str())))
    }
}

/// Bundle a directory into a single archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveFile {
    pub source_dir: PathBuf,
    pub target: LogicalPath,
}

/// Why a packaging task produced no instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Classes directory does not exist
    MissingInput { path: PathBuf },
    /// Classes directory is the webapp classes directory itself
    SelfCopy { path: PathBuf },
    /// Archive target already claimed during this run
    AlreadyRegistered {
        path: LogicalPath,
        owner: Option<ContributorId>,
    },
}

impl SkipReason {
    /// The non-fatal diagnostic to surface, if this skip warrants one.
    pub fn warning(&self) -> Option<String> {
        match self {
            SkipReason::AlreadyRegistered { path, .. } => Some(format!(
                "Could not generate archive classes file [{}] has already been copied.",
                path
            )),
            _ => None,
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingInput { path } => {
                write!(f, "no classes directory at {}", path.display())
            }
            SkipReason::SelfCopy { path } => {
                write!(f, "{} is the webapp classes directory", path.display())
            }
            SkipReason::AlreadyRegistered { path, owner } => match owner {
                Some(owner) => write!(f, "{} already registered by {}", path, owner),
                None => write!(f, "{} already registered", path),
            },
        }
    }
}

/// Outcome of a packaging decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Skip(SkipReason),
    Copy(CopySet),
    Archive(ArchiveFile),
}

impl Decision {
    pub fn is_skip(&self) -> bool {
        matches!(self, Decision::Skip(_))
    }

    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            Decision::Skip(reason) => Some(reason),
            _ => None,
        }
    }
}
