//! Console Event Sink
//!
//! Human-readable progress lines on stderr. Verbosity controls whether
//! per-contributor lines are shown; warnings are always printed.

use crate::domain::ports::{PackageEvent, PackageEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbose: bool,
}

impl ConsoleEventSink {
    pub fn stderr(verbose: bool) -> Self {
        Self::with_writer(io::stderr(), verbose)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, verbose: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbose,
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
        }
    }
}

impl PackageEventSink for ConsoleEventSink {
    fn on_event(&self, event: PackageEvent) {
        match event {
            PackageEvent::Started {
                webapp_directory,
                contributor_count,
                archive_classes,
            } => {
                if self.verbose {
                    let mode = if archive_classes { "archive" } else { "copy" };
                    self.line(format!(
                        "Packaging {} contributor(s) into {} ({} mode)",
                        contributor_count,
                        webapp_directory.display(),
                        mode
                    ));
                }
            }
            PackageEvent::ContributorSkipped {
                contributor,
                reason,
            } => {
                if self.verbose {
                    self.line(format!("  - {}: skipped ({})", contributor, reason));
                }
            }
            PackageEvent::FilesCopied {
                contributor,
                written,
                unchanged,
            } => {
                if self.verbose {
                    self.line(format!(
                        "  ✓ {}: {} written, {} unchanged",
                        contributor, written, unchanged
                    ));
                }
            }
            PackageEvent::ArchiveCreated { contributor, path } => {
                if self.verbose {
                    self.line(format!("  ✓ {}: {}", contributor, path));
                }
            }
            PackageEvent::Warning { message } => {
                self.line(format!("⚠ {}", message));
            }
            PackageEvent::Completed {
                copied_count,
                archive_count,
                skipped_count,
                warning_count,
            } => {
                self.line(format!(
                    "Packaged: {} copied, {} archived, {} skipped, {} warnings",
                    copied_count, archive_count, skipped_count, warning_count
                ));
            }
        }
    }
}
