//! Package Event Port
//!
//! Observable interface for packaging runs. Warnings raised by the
//! decision flow travel through here too.

use std::path::PathBuf;

use crate::domain::entities::ContributorId;
use crate::domain::value_objects::LogicalPath;

/// Event emitted during a packaging run
#[derive(Debug, Clone)]
pub enum PackageEvent {
    /// Run started
    Started {
        webapp_directory: PathBuf,
        contributor_count: usize,
        archive_classes: bool,
    },

    /// A contributor produced no instruction
    ContributorSkipped {
        contributor: ContributorId,
        reason: String,
    },

    /// Loose classes copied
    FilesCopied {
        contributor: ContributorId,
        written: usize,
        unchanged: usize,
    },

    /// Classes archive written
    ArchiveCreated {
        contributor: ContributorId,
        path: LogicalPath,
    },

    /// Non-fatal diagnostic
    Warning { message: String },

    /// Run completed
    Completed {
        copied_count: usize,
        archive_count: usize,
        skipped_count: usize,
        warning_count: usize,
    },
}

/// Trait for receiving package events
///
/// Implementations:
/// - ConsoleEventSink: human-readable lines on stderr
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait PackageEventSink: Send + Sync {
    /// Handle a package event
    fn on_event(&self, event: PackageEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PackageEventSink for NoopEventSink {
    fn on_event(&self, _event: PackageEvent) {}
}
