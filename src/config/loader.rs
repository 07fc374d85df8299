//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PackError, PackResult};

use super::types::Config;

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = "classpack.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "unknown configuration key '{}' in {}:{}",
                self.key,
                self.file.display(),
                line
            ),
            None => write!(
                f,
                "unknown configuration key '{}' in {}",
                self.key,
                self.file.display()
            ),
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PackResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PackError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults.
///
/// The first config file that exists is used; a parse error in it is
/// returned rather than falling through to the next source.
pub fn load_or_default(project_root: Option<&Path>) -> PackResult<(Config, Vec<ConfigWarning>)> {
    if let Some(root) = project_root {
        let project_config = root.join(CONFIG_FILE_NAME);
        if project_config.exists() {
            let (config, warnings) = load_with_warnings(&project_config)?;
            return Ok((with_env_overrides(config.resolve_paths(root)), warnings));
        }
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            let (config, warnings) = load_with_warnings(&user_config)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (CLASSPACK_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // CLASSPACK_ARCHIVE_CLASSES
    if let Ok(val) = std::env::var("CLASSPACK_ARCHIVE_CLASSES") {
        config.assembly.archive_classes = parse_bool(&val);
    }

    // CLASSPACK_WEBAPP_DIR
    if let Ok(dir) = std::env::var("CLASSPACK_WEBAPP_DIR") {
        if !dir.is_empty() {
            config.assembly.webapp_directory = PathBuf::from(dir);
        }
    }

    config
}

fn parse_bool(val: &str) -> bool {
    matches!(val.trim().to_lowercase().as_str(), "true" | "1" | "yes" | "on")
}

/// `<config dir>/classpack/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("classpack").join("config.toml"))
}

fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let trimmed = line.trim_start();
            trimmed.starts_with(key)
                && trimmed[key.len()..].trim_start().starts_with('=')
        })
        .map(|idx| idx + 1)
}
