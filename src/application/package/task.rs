//! Classes packaging task
//!
//! Runs the packaging decision for one contributor and hands the resulting
//! instruction to the assembly context.

use crate::domain::entities::{ArchiveFile, Contributor, CopySet, Decision, SkipReason};
use crate::domain::ports::{AssemblyContext, CopyReport, FileSystem};
use crate::domain::services::{PackagingDecision, PathRegistry};
use crate::domain::value_objects::PackagingMode;
use crate::error::PackResult;

/// What a task did for its contributor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    Skipped(SkipReason),
    Copied { copy: CopySet, report: CopyReport },
    Archived(ArchiveFile),
}

/// Packages the classes directory of a single contributor
pub struct ClassesPackagingTask<'a> {
    contributor: &'a Contributor,
}

impl<'a> ClassesPackagingTask<'a> {
    pub fn new(contributor: &'a Contributor) -> Self {
        Self { contributor }
    }

    /// Decide, then execute through `ctx`.
    ///
    /// A duplicate archive claim is reported through `ctx.emit_warning` and
    /// does not fail the task.
    pub fn perform<C, F>(
        &self,
        ctx: &mut C,
        registry: &PathRegistry,
        fs: &F,
    ) -> PackResult<TaskOutcome>
    where
        C: AssemblyContext,
        F: FileSystem + ?Sized,
    {
        let mode = PackagingMode::from_archive_flag(ctx.archive_classes());
        let decision = PackagingDecision::new(fs).decide(
            self.contributor,
            self.contributor.classes_directory(),
            ctx.webapp_directory(),
            mode,
            registry,
            &*ctx,
        )?;

        match decision {
            Decision::Skip(reason) => {
                if let Some(warning) = reason.warning() {
                    ctx.emit_warning(&warning);
                }
                Ok(TaskOutcome::Skipped(reason))
            }
            Decision::Copy(copy) => {
                let report = ctx.execute_copy(&copy)?;
                Ok(TaskOutcome::Copied { copy, report })
            }
            Decision::Archive(archive) => {
                ctx.add_discovered_resource(archive.target.clone());
                ctx.execute_archive(&archive)?;
                Ok(TaskOutcome::Archived(archive))
            }
        }
    }
}
