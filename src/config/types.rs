//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ArtifactCoordinates, Contributor, ContributorId};
use crate::domain::services::{FinalNameTemplate, DEFAULT_FINAL_NAME};
use crate::domain::value_objects::PackagingMode;
use crate::error::PackResult;
use crate::infrastructure::archive::CommandArchiver;

use super::loader::{self, ConfigWarning};

/// The project being assembled
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default = "default_group_id")]
    pub group_id: String,

    #[serde(default = "default_artifact_id")]
    pub artifact_id: String,

    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default)]
    pub classifier: Option<String>,

    #[serde(default = "default_classes_directory")]
    pub classes_directory: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            group_id: default_group_id(),
            artifact_id: default_artifact_id(),
            version: default_version(),
            classifier: None,
            classes_directory: default_classes_directory(),
        }
    }
}

fn default_group_id() -> String {
    "unknown".to_string()
}

fn default_artifact_id() -> String {
    "webapp".to_string()
}

fn default_version() -> String {
    "0.0.0".to_string()
}

fn default_classes_directory() -> PathBuf {
    PathBuf::from("target/classes")
}

/// Webapp assembly settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyConfig {
    #[serde(default = "default_webapp_directory")]
    pub webapp_directory: PathBuf,

    #[serde(default)]
    pub archive_classes: bool,

    #[serde(default = "default_output_file_name_mapping")]
    pub output_file_name_mapping: String,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            webapp_directory: default_webapp_directory(),
            archive_classes: false,
            output_file_name_mapping: default_output_file_name_mapping(),
        }
    }
}

fn default_webapp_directory() -> PathBuf {
    PathBuf::from("target/webapp")
}

fn default_output_file_name_mapping() -> String {
    DEFAULT_FINAL_NAME.to_string()
}

/// External archiver settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    #[serde(default = "default_archive_command")]
    pub command: Vec<String>,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            command: default_archive_command(),
        }
    }
}

fn default_archive_command() -> Vec<String> {
    ["jar", "--create", "--file", "{archive}", "-C", "{source}", "."]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// An overlay contributing classes to the same webapp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayConfig {
    pub id: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,

    #[serde(default)]
    pub classifier: Option<String>,

    pub classes_directory: PathBuf,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub assembly: AssemblyConfig,

    #[serde(default)]
    pub archive: ArchiveConfig,

    #[serde(default)]
    pub overlays: Vec<OverlayConfig>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PackResult<Self> {
        Ok(Self::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PackResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(
        project_root: Option<&Path>,
    ) -> PackResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Make relative directories relative to `base` instead of the CWD.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        resolve(&mut self.project.classes_directory);
        resolve(&mut self.assembly.webapp_directory);
        for overlay in &mut self.overlays {
            resolve(&mut overlay.classes_directory);
        }
        self
    }

    pub fn packaging_mode(&self) -> PackagingMode {
        PackagingMode::from_archive_flag(self.assembly.archive_classes)
    }

    pub fn final_name(&self) -> FinalNameTemplate {
        FinalNameTemplate::new(self.assembly.output_file_name_mapping.clone())
    }

    pub fn archiver(&self) -> CommandArchiver {
        CommandArchiver::new(self.archive.command.clone())
    }

    /// The project first, then overlays in configured order.
    pub fn contributors(&self) -> Vec<Contributor> {
        let project = &self.project;
        let mut contributors = vec![Contributor::current_build(
            coordinates(
                &project.group_id,
                &project.artifact_id,
                &project.version,
                project.classifier.as_deref(),
            ),
            project.classes_directory.clone(),
        )];

        contributors.extend(self.overlays.iter().map(|overlay| {
            Contributor::new(
                ContributorId::new(overlay.id.clone()),
                coordinates(
                    &overlay.group_id,
                    &overlay.artifact_id,
                    &overlay.version,
                    overlay.classifier.as_deref(),
                ),
                overlay.classes_directory.clone(),
            )
        }));

        contributors
    }
}

fn coordinates(
    group_id: &str,
    artifact_id: &str,
    version: &str,
    classifier: Option<&str>,
) -> ArtifactCoordinates {
    ArtifactCoordinates::new(group_id, artifact_id, version)
        .with_classifier(classifier.unwrap_or_default())
}
