//! Contributor entity
//!
//! The current project or an overlay supplying compiled classes to the
//! assembled webapp.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Identity of a contributor, used as the owner of registered paths.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContributorId(String);

impl ContributorId {
    /// Id reserved for the project being assembled.
    pub const CURRENT_BUILD: &'static str = "currentBuild";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn current_build() -> Self {
        Self::new(Self::CURRENT_BUILD)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_current_build(&self) -> bool {
        self.0 == Self::CURRENT_BUILD
    }
}

impl fmt::Display for ContributorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Build coordinates used to name the classes archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactCoordinates {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
}

impl ArtifactCoordinates {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            classifier: None,
        }
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        let classifier = classifier.into();
        self.classifier = if classifier.is_empty() {
            None
        } else {
            Some(classifier)
        };
        self
    }
}

/// `group:artifact:version`, the form used in fatal diagnostics.
impl fmt::Display for ArtifactCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// A source of compiled classes merged into the output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contributor {
    id: ContributorId,
    coordinates: ArtifactCoordinates,
    classes_directory: PathBuf,
}

impl Contributor {
    pub fn new(
        id: ContributorId,
        coordinates: ArtifactCoordinates,
        classes_directory: impl Into<PathBuf>,
    ) -> Self {
        Self {
            id,
            coordinates,
            classes_directory: classes_directory.into(),
        }
    }

    /// The project being assembled.
    pub fn current_build(
        coordinates: ArtifactCoordinates,
        classes_directory: impl Into<PathBuf>,
    ) -> Self {
        Self::new(ContributorId::current_build(), coordinates, classes_directory)
    }

    pub fn id(&self) -> &ContributorId {
        &self.id
    }

    pub fn coordinates(&self) -> &ArtifactCoordinates {
        &self.coordinates
    }

    pub fn classes_directory(&self) -> &Path {
        &self.classes_directory
    }
}
