//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PackageUseCase` - Packages the project's and overlays' classes

pub mod package;

pub use package::{ClassesPackagingTask, PackageResult, PackageUseCase, TaskOutcome};
