//! Archive writers
//!
//! Classes archives are produced by an external program; the byte layout
//! is that program's concern.

mod command;

pub use command::{CommandArchiver, ARCHIVE_PLACEHOLDER, SOURCE_PLACEHOLDER};
