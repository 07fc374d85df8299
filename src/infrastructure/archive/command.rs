//! External Archiver Command
//!
//! Writes classes archives by running a configured program, e.g.
//! `jar --create --file {archive} -C {source} .`.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{PackError, PackResult};

/// Placeholder replaced by the archive path.
pub const ARCHIVE_PLACEHOLDER: &str = "{archive}";

/// Placeholder replaced by the classes directory.
pub const SOURCE_PLACEHOLDER: &str = "{source}";

/// Archiver that shells out to an external program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandArchiver {
    argv: Vec<String>,
}

impl Default for CommandArchiver {
    fn default() -> Self {
        Self::new(
            ["jar", "--create", "--file", ARCHIVE_PLACEHOLDER, "-C", SOURCE_PLACEHOLDER, "."]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }
}

impl CommandArchiver {
    pub fn new(argv: Vec<String>) -> Self {
        Self { argv }
    }

    pub fn program(&self) -> Option<&str> {
        self.argv.first().map(String::as_str)
    }

    /// Arguments with placeholders substituted.
    pub fn render_args(&self, source_dir: &Path, archive: &Path) -> Vec<String> {
        let source = source_dir.display().to_string();
        let archive = archive.display().to_string();
        self.argv
            .iter()
            .skip(1)
            .map(|arg| {
                arg.replace(ARCHIVE_PLACEHOLDER, &archive)
                    .replace(SOURCE_PLACEHOLDER, &source)
            })
            .collect()
    }

    /// Bundle `source_dir` into `archive`, creating its parent directory.
    pub fn archive(&self, source_dir: &Path, archive: &Path) -> PackResult<()> {
        let program = self.program().ok_or_else(|| PackError::ArchiveFailed {
            path: archive.to_path_buf(),
            message: "no archiver command configured".to_string(),
        })?;

        if let Some(parent) = archive.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PackError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let output = Command::new(program)
            .args(self.render_args(source_dir, archive))
            .stdin(Stdio::null())
            .output()
            .map_err(|e| PackError::ArchiveFailed {
                path: archive.to_path_buf(),
                message: format!("failed to run {}: {}", program, e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PackError::ArchiveFailed {
                path: archive.to_path_buf(),
                message: format!(
                    "{} failed with exit code {:?}: {}",
                    program,
                    output.status.code(),
                    stderr.trim()
                ),
            });
        }

        Ok(())
    }
}
