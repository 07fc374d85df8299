//! Common test utilities for Classpack CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp directories
//! - Fixtures: reusable configuration snippets

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
