//! Classpack - classes packaging for web-application assembly
//!
//! Decides, for the project and each overlay, whether compiled classes are
//! copied into `WEB-INF/classes` or bundled into one archive under
//! `WEB-INF/lib`, producing every archive path at most once per run.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{ClassesPackagingTask, PackageResult, PackageUseCase, TaskOutcome};
pub use config::Config;
pub use domain::entities::{
    ArchiveFile, ArtifactCoordinates, Contributor, ContributorId, CopySet, Decision, SkipReason,
};
pub use domain::ports::{AssemblyContext, FileSystem, PackageEvent, PackageEventSink};
pub use domain::services::{
    FinalNameTemplate, NamingError, PackagingDecision, PathRegistry, SourceCollector,
};
pub use domain::value_objects::{LogicalPath, PackagingMode, PathSet};
pub use error::{PackError, PackResult};
pub use infrastructure::{LocalAssembly, LocalFs};
