//! Error types for Classpack
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::services::NamingError;

/// Result type alias for Classpack operations
pub type PackResult<T> = Result<T, PackError>;

/// Main error type for Classpack operations
#[derive(Error, Debug)]
pub enum PackError {
    /// Source directory to enumerate does not exist
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Could not create a directory in the webapp tree
    #[error("could not create directory [{path}]")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Copying loose classes failed
    #[error("Could not copy webapp classes [{source_dir}]: {message}")]
    CopyFailed {
        source_dir: PathBuf,
        target: PathBuf,
        message: String,
    },

    /// The final name of the classes archive could not be computed
    #[error("Could not get the final name of the artifact [{coordinates}]")]
    ArchiveName {
        coordinates: String,
        #[source]
        source: NamingError,
    },

    /// Writing the classes archive failed
    #[error("Could not create classes archive [{path}]: {message}")]
    ArchiveFailed { path: PathBuf, message: String },

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// An include or exclude pattern could not be compiled
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
