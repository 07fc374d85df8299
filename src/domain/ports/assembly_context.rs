//! Assembly Context Port
//!
//! The surrounding assembler: configuration, archive naming and the
//! execution surface for the instructions the domain produces.

use std::path::Path;

use crate::domain::entities::{ArchiveFile, ArtifactCoordinates, CopySet};
use crate::domain::services::NamingError;
use crate::domain::value_objects::LogicalPath;
use crate::error::PackResult;

/// Computes the file name of a contributor's classes archive.
pub trait ArchiveNamer {
    fn resolve_archive_name(&self, coordinates: &ArtifactCoordinates)
        -> Result<String, NamingError>;
}

/// Counts from executing a copy set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub written: usize,
    pub unchanged: usize,
}

/// Collaborator supplying configuration and executing instructions.
///
/// Execution failures must come back as fatal errors naming the path
/// being written, never swallowed.
pub trait AssemblyContext: ArchiveNamer {
    /// Root of the assembled webapp
    fn webapp_directory(&self) -> &Path;

    /// Whether classes are bundled into an archive
    fn archive_classes(&self) -> bool;

    /// Record a path as a known output resource
    fn add_discovered_resource(&mut self, path: LogicalPath);

    /// Copy loose files into the webapp
    fn execute_copy(&mut self, copy: &CopySet) -> PackResult<CopyReport>;

    /// Write a classes archive into the webapp
    fn execute_archive(&mut self, archive: &ArchiveFile) -> PackResult<()>;

    /// Non-fatal diagnostic channel
    fn emit_warning(&mut self, message: &str);
}
