//! FileSystem port - abstraction over file I/O operations
//!
//! Lets the decision and collection services touch the disk without
//! depending on a concrete implementation.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ContentHash;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Attach the path being accessed to a raw I/O error.
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }

    /// Convert into a plain `io::Error`, keeping the message.
    pub fn into_io(self) -> std::io::Error {
        match self {
            FsError::Io(err) => err,
            FsError::NotFound(_) => {
                std::io::Error::new(std::io::ErrorKind::NotFound, self.to_string())
            }
            FsError::PermissionDenied(_) => {
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, self.to_string())
            }
            FsError::Other(msg) => std::io::Error::other(msg),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(PathBuf::new()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(PathBuf::new()),
            _ => FsError::Io(err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// Kind of a directory entry, with symlinks resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Other,
}

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// What happened to a copied file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Destination was created or replaced
    Written,
    /// Destination already had identical content
    Unchanged,
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
pub trait FileSystem {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// List the immediate children of a directory
    fn list_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>>;

    /// Whether two paths designate the same location on disk
    fn same_location(&self, a: &Path, b: &Path) -> bool;

    /// Absolute path with symlinks resolved
    fn canonicalize(&self, path: &Path) -> FsResult<PathBuf>;

    /// Copy a file, creating parent directories of the destination
    fn copy_file(&self, from: &Path, to: &Path) -> FsResult<CopyOutcome>;

    /// Compute content hash (SHA256)
    fn hash(&self, path: &Path) -> FsResult<ContentHash>;
}
