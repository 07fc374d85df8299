//! Classes packaging decision
//!
//! Decides what happens to one contributor's compiled classes: nothing,
//! a loose copy into `WEB-INF/classes`, or a single archive in
//! `WEB-INF/lib`. Archive targets are claimed in the run's
//! [`PathRegistry`] so each one is produced at most once.
//!
//! Loose copies never consult the registry; only archive targets are claimed.

use std::path::Path;

use crate::domain::entities::{ArchiveFile, Contributor, CopySet, Decision, SkipReason};
use crate::domain::ports::{ArchiveNamer, FileSystem};
use crate::domain::services::{PathRegistry, SourceCollector};
use crate::domain::value_objects::{LogicalPath, PackagingMode, PathFilter, CLASSES_PATH};
use crate::error::{PackError, PackResult};

/// Decision service for a contributor's classes directory
pub struct PackagingDecision<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
}

impl<'a, F: FileSystem + ?Sized> PackagingDecision<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Decide how to package `input_dir` into `output_root`.
    ///
    /// Always creates `output_root/WEB-INF/classes` first. A failure to name
    /// the archive is fatal and carries the contributor's coordinates.
    pub fn decide<N: ArchiveNamer + ?Sized>(
        &self,
        contributor: &Contributor,
        input_dir: &Path,
        output_root: &Path,
        mode: PackagingMode,
        registry: &PathRegistry,
        namer: &N,
    ) -> PackResult<Decision> {
        let classes_dir = LogicalPath::new(CLASSES_PATH).to_path_under(output_root);
        if !self.fs.exists(&classes_dir) {
            self.fs
                .create_dir_all(&classes_dir)
                .map_err(|e| PackError::CreateDir {
                    path: classes_dir.clone(),
                    source: e.into_io(),
                })?;
        }

        if !self.fs.exists(input_dir) {
            return Ok(Decision::Skip(SkipReason::MissingInput {
                path: input_dir.to_path_buf(),
            }));
        }
        if self.fs.same_location(input_dir, &classes_dir) {
            return Ok(Decision::Skip(SkipReason::SelfCopy {
                path: input_dir.to_path_buf(),
            }));
        }

        match mode {
            PackagingMode::CopyFiles => {
                let relative_paths = SourceCollector::new(self.fs)
                    .collect_filtered(input_dir, &PathFilter::accept_all())?;
                Ok(Decision::Copy(CopySet {
                    source_dir: input_dir.to_path_buf(),
                    relative_paths,
                    destination: LogicalPath::new(CLASSES_PATH),
                }))
            }
            PackagingMode::ArchiveAsJar => {
                let coordinates = contributor.coordinates();
                let archive_name = namer.resolve_archive_name(coordinates).map_err(|source| {
                    PackError::ArchiveName {
                        coordinates: coordinates.to_string(),
                        source,
                    }
                })?;
                let target = LogicalPath::in_lib(&archive_name);

                if registry.register(contributor.id(), &target) {
                    Ok(Decision::Archive(ArchiveFile {
                        source_dir: input_dir.to_path_buf(),
                        target,
                    }))
                } else {
                    let owner = registry.owner(&target);
                    Ok(Decision::Skip(SkipReason::AlreadyRegistered {
                        path: target,
                        owner,
                    }))
                }
            }
        }
    }
}
