//! Package Module
//!
//! Orchestrates the classes packaging flow.
//!
//! ## Structure
//!
//! - `task` - Per-contributor task (`ClassesPackagingTask`)
//! - `result` - Result types (`PackageResult`)
//! - `use_case` - Whole-run logic (`PackageUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use classpack::application::package::PackageUseCase;
//!
//! let use_case = PackageUseCase::new(LocalFs::new(), events);
//! let result = use_case.execute(&mut assembly, &config.contributors())?;
//! ```

mod result;
mod task;
mod use_case;

pub use result::PackageResult;
pub use task::{ClassesPackagingTask, TaskOutcome};
pub use use_case::PackageUseCase;
