//! Packaging mode value object

use serde::{Deserialize, Serialize};

/// How a contributor's compiled classes end up in the webapp.
///
/// Selected by configuration, never derived from the classes themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackagingMode {
    /// Copy loose files into `WEB-INF/classes`
    #[default]
    CopyFiles,
    /// Bundle the classes into one archive under `WEB-INF/lib`
    ArchiveAsJar,
}

impl PackagingMode {
    /// Mode for the `archive_classes` configuration flag.
    pub fn from_archive_flag(archive_classes: bool) -> Self {
        if archive_classes {
            Self::ArchiveAsJar
        } else {
            Self::CopyFiles
        }
    }

    pub fn is_archive(self) -> bool {
        matches!(self, Self::ArchiveAsJar)
    }
}
