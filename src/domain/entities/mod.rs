//! Domain Entities
//!
//! - `Contributor` - the project or an overlay supplying classes
//! - `Decision` - what to do with one contributor's classes

mod contributor;
mod instruction;

pub use contributor::{ArtifactCoordinates, Contributor, ContributorId};
pub use instruction::{ArchiveFile, CopySet, Decision, SkipReason};
