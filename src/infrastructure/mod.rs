//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `events/` - Console and NDJSON event sinks
//! - `archive/` - External archiver command
//! - `assembly` - Local `AssemblyContext`

pub mod archive;
pub mod assembly;
pub mod events;
pub mod fs;

pub use archive::CommandArchiver;
pub use assembly::LocalAssembly;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
