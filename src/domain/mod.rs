//! Domain Layer
//!
//! The packaging decision and its bookkeeping, independent of how files are
//! actually copied or archived.
//!
//! ## Structure
//!
//! - `entities/` - Contributors, instructions and decisions
//! - `value_objects/` - Logical paths, packaging mode, path filters, hashes
//! - `services/` - Path registry, source collector, packaging decision
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
