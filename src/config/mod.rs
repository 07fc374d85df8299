//! Configuration module for Classpack
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CLASSPACK_*)
//! 3. Project config (classpack.toml)
//! 4. User config (~/.config/classpack/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, with_env_overrides, ConfigWarning, CONFIG_FILE_NAME};
pub use types::{ArchiveConfig, AssemblyConfig, Config, OverlayConfig, ProjectConfig};
