//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod hash;
mod logical_path;
mod packaging_mode;
mod path_filter;

pub use hash::ContentHash;
pub use logical_path::{LogicalPath, PathSet, CLASSES_PATH, LIB_PATH};
pub use packaging_mode::PackagingMode;
pub use path_filter::PathFilter;
