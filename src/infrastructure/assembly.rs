//! Local Assembly Context
//!
//! `AssemblyContext` backed by the local disk, an external archiver and an
//! event sink.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::entities::{ArchiveFile, ArtifactCoordinates, CopySet};
use crate::domain::ports::{
    ArchiveNamer, AssemblyContext, CopyOutcome, CopyReport, FileSystem, PackageEvent,
    PackageEventSink,
};
use crate::domain::services::{FinalNameTemplate, NamingError};
use crate::domain::value_objects::LogicalPath;
use crate::error::{PackError, PackResult};
use crate::infrastructure::archive::CommandArchiver;
use crate::infrastructure::fs::LocalFs;

/// Assembly of one webapp directory on the local machine
pub struct LocalAssembly {
    webapp_directory: PathBuf,
    archive_classes: bool,
    final_name: FinalNameTemplate,
    archiver: CommandArchiver,
    fs: LocalFs,
    events: Arc<dyn PackageEventSink>,
    dry_run: bool,
    resources: Vec<LogicalPath>,
    warnings: Vec<String>,
}

impl LocalAssembly {
    pub fn new(webapp_directory: impl Into<PathBuf>, events: Arc<dyn PackageEventSink>) -> Self {
        Self {
            webapp_directory: webapp_directory.into(),
            archive_classes: false,
            final_name: FinalNameTemplate::default(),
            archiver: CommandArchiver::default(),
            fs: LocalFs::new(),
            events,
            dry_run: false,
            resources: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn with_archive_classes(mut self, archive_classes: bool) -> Self {
        self.archive_classes = archive_classes;
        self
    }

    pub fn with_final_name(mut self, final_name: FinalNameTemplate) -> Self {
        self.final_name = final_name;
        self
    }

    pub fn with_archiver(mut self, archiver: CommandArchiver) -> Self {
        self.archiver = archiver;
        self
    }

    /// Record instructions without copying or archiving anything.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn resources(&self) -> &[LogicalPath] {
        &self.resources
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

impl ArchiveNamer for LocalAssembly {
    fn resolve_archive_name(
        &self,
        coordinates: &ArtifactCoordinates,
    ) -> Result<String, NamingError> {
        self.final_name.render(coordinates)
    }
}

impl AssemblyContext for LocalAssembly {
    fn webapp_directory(&self) -> &Path {
        &self.webapp_directory
    }

    fn archive_classes(&self) -> bool {
        self.archive_classes
    }

    fn add_discovered_resource(&mut self, path: LogicalPath) {
        if !self.resources.contains(&path) {
            self.resources.push(path);
        }
    }

    fn execute_copy(&mut self, copy: &CopySet) -> PackResult<CopyReport> {
        let mut report = CopyReport::default();
        if self.dry_run {
            report.written = copy.len();
            return Ok(report);
        }

        for (relative, target) in copy.targets() {
            let from = relative.to_path_under(&copy.source_dir);
            let to = target.to_path_under(&self.webapp_directory);
            match self.fs.copy_file(&from, &to) {
                Ok(CopyOutcome::Written) => report.written += 1,
                Ok(CopyOutcome::Unchanged) => report.unchanged += 1,
                Err(e) => {
                    return Err(PackError::CopyFailed {
                        source_dir: copy.source_dir.clone(),
                        target: to,
                        message: e.to_string(),
                    })
                }
            }
        }

        Ok(report)
    }

    fn execute_archive(&mut self, archive: &ArchiveFile) -> PackResult<()> {
        if self.dry_run {
            return Ok(());
        }
        let target = archive.target.to_path_under(&self.webapp_directory);
        self.archiver.archive(&archive.source_dir, &target)
    }

    fn emit_warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
        self.events.on_event(PackageEvent::Warning {
            message: message.to_string(),
        });
    }
}
