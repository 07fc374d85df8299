//! Package Use Case
//!
//! One assembly run: a fresh path registry, then every contributor in
//! order, stopping at the first fatal error.

use std::sync::Arc;

use crate::domain::entities::Contributor;
use crate::domain::ports::{AssemblyContext, FileSystem, PackageEvent, PackageEventSink};
use crate::domain::services::PathRegistry;
use crate::error::PackResult;

use super::result::PackageResult;
use super::task::{ClassesPackagingTask, TaskOutcome};

/// Packages the classes of the project and its overlays
pub struct PackageUseCase<F: FileSystem> {
    fs: F,
    events: Arc<dyn PackageEventSink>,
}

impl<F: FileSystem> PackageUseCase<F> {
    pub fn new(fs: F, events: Arc<dyn PackageEventSink>) -> Self {
        Self { fs, events }
    }

    /// Run every contributor through a fresh registry.
    pub fn execute<C: AssemblyContext>(
        &self,
        ctx: &mut C,
        contributors: &[Contributor],
    ) -> PackResult<PackageResult> {
        let registry = PathRegistry::new();
        self.execute_with_registry(ctx, contributors, &registry)
    }

    /// Run against a caller-owned registry, e.g. one shared with other
    /// packaging stages of the same run.
    pub fn execute_with_registry<C: AssemblyContext>(
        &self,
        ctx: &mut C,
        contributors: &[Contributor],
        registry: &PathRegistry,
    ) -> PackResult<PackageResult> {
        self.events.on_event(PackageEvent::Started {
            webapp_directory: ctx.webapp_directory().to_path_buf(),
            contributor_count: contributors.len(),
            archive_classes: ctx.archive_classes(),
        });

        let mut result = PackageResult::new();

        for contributor in contributors {
            let outcome = ClassesPackagingTask::new(contributor).perform(ctx, registry, &self.fs)?;
            let id = contributor.id().clone();

            match &outcome {
                TaskOutcome::Skipped(reason) => {
                    if reason.warning().is_some() {
                        result.warning_count += 1;
                    }
                    self.events.on_event(PackageEvent::ContributorSkipped {
                        contributor: id.clone(),
                        reason: reason.to_string(),
                    });
                }
                TaskOutcome::Copied { report, .. } => {
                    self.events.on_event(PackageEvent::FilesCopied {
                        contributor: id.clone(),
                        written: report.written,
                        unchanged: report.unchanged,
                    });
                }
                TaskOutcome::Archived(archive) => {
                    result.resources.push(archive.target.clone());
                    self.events.on_event(PackageEvent::ArchiveCreated {
                        contributor: id.clone(),
                        path: archive.target.clone(),
                    });
                }
            }

            result.outcomes.push((id, outcome));
        }

        result.structure = registry.full_structure();

        self.events.on_event(PackageEvent::Completed {
            copied_count: result.copied_count(),
            archive_count: result.archive_count(),
            skipped_count: result.skipped_count(),
            warning_count: result.warning_count,
        });

        Ok(result)
    }
}
