//! JSON Event Sink
//!
//! One NDJSON object per package event, for CI consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use serde_json::{json, Value};

use crate::domain::ports::{PackageEvent, PackageEventSink};

/// Writes package events to stdout as NDJSON
pub struct JsonEventSink {
    out: Mutex<io::Stdout>,
}

impl JsonEventSink {
    pub fn stdout() -> Self {
        Self {
            out: Mutex::new(io::stdout()),
        }
    }
}

impl PackageEventSink for JsonEventSink {
    fn on_event(&self, event: PackageEvent) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", event_json(&event));
            let _ = out.flush();
        }
    }
}

/// The JSON object emitted for `event`; every object carries an `event` tag.
fn event_json(event: &PackageEvent) -> Value {
    match event {
        PackageEvent::Started {
            webapp_directory,
            contributor_count,
            archive_classes,
        } => json!({
            "event": "start",
            "command": "package",
            "webapp_directory": webapp_directory.display().to_string(),
            "contributor_count": contributor_count,
            "archive_classes": archive_classes,
        }),
        PackageEvent::ContributorSkipped {
            contributor,
            reason,
        } => json!({
            "event": "contributor_skipped",
            "command": "package",
            "contributor": contributor,
            "reason": reason,
        }),
        PackageEvent::FilesCopied {
            contributor,
            written,
            unchanged,
        } => json!({
            "event": "files_copied",
            "command": "package",
            "contributor": contributor,
            "written": written,
            "unchanged": unchanged,
        }),
        PackageEvent::ArchiveCreated { contributor, path } => json!({
            "event": "archive_created",
            "command": "package",
            "contributor": contributor,
            "path": path,
        }),
        PackageEvent::Warning { message } => json!({
            "event": "warning",
            "command": "package",
            "message": message,
        }),
        PackageEvent::Completed {
            copied_count,
            archive_count,
            skipped_count,
            warning_count,
        } => json!({
            "event": "complete",
            "command": "package",
            "status": "success",
            "copied": copied_count,
            "archives": archive_count,
            "skipped": skipped_count,
            "warnings": warning_count,
        }),
    }
}
