//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod assembly_context;
pub mod file_system;
pub mod package_events;

pub use assembly_context::{ArchiveNamer, AssemblyContext, CopyReport};
pub use file_system::{CopyOutcome, DirEntry, EntryKind, FileSystem, FsError, FsResult};
pub use package_events::{NoopEventSink, PackageEvent, PackageEventSink};
