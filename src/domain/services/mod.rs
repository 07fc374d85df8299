//! Domain Services
//!
//! Stateless services operating on domain entities. Disk access goes
//! through the `FileSystem` port.

mod final_name;
mod packaging_decision;
mod path_registry;
mod source_collector;

pub use final_name::{FinalNameTemplate, NamingError, ARCHIVE_EXTENSION, DEFAULT_FINAL_NAME};
pub use packaging_decision::PackagingDecision;
pub use path_registry::PathRegistry;
pub use source_collector::SourceCollector;
