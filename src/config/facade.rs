//! Config loader: assembles sources in merge order and persists settings.

use super::merge::merge_policy;
use super::sources::global_file;
use super::WikiConfig;
use crate::error::ApiError;
use std::path::{Path, PathBuf};
use tracing::info;

/// Loads and saves [`WikiConfig`].
pub struct ConfigLoader;

impl ConfigLoader {
    /// Default settings file path (`<config dir>/mdwiki/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    /// Resolve the settings file to use: the explicit path, else the default.
    pub fn resolve_path(config_path: Option<&Path>) -> Result<PathBuf, ApiError> {
        match config_path {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path().ok_or_else(|| {
                ApiError::ConfigError(
                    "Cannot determine the settings directory; pass --config".to_string(),
                )
            }),
        }
    }

    /// Load settings: defaults, then the settings file (if present), then
    /// environment overrides.
    pub fn load(config_path: Option<&Path>) -> Result<WikiConfig, ApiError> {
        let path = Self::resolve_path(config_path)?;
        Self::load_with(&path, false)
    }

    /// Load settings from a file that must exist.
    pub fn load_from_file(path: &Path) -> Result<WikiConfig, ApiError> {
        Self::load_with(path, true)
    }

    fn load_with(path: &Path, required: bool) -> Result<WikiConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder, path, required)?;
        let config: WikiConfig = builder
            .add_source(merge_policy::environment_source())
            .build()?
            .try_deserialize()?;

        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        Ok(config)
    }

    /// Write `config` to `path` as TOML, creating parent directories.
    pub fn save(path: &Path, config: &WikiConfig) -> Result<(), ApiError> {
        let contents = toml::to_string_pretty(config)
            .map_err(|e| ApiError::ConfigError(format!("Failed to serialize config: {}", e)))?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ApiError::ConfigError(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        std::fs::write(path, contents).map_err(|e| {
            ApiError::ConfigError(format!("Failed to write {}: {}", path.display(), e))
        })?;
        info!(config_path = %path.display(), "Configuration saved");
        Ok(())
    }

    /// Directory that relative `wiki_path` values are resolved against.
    pub fn base_dir(config_path: &Path) -> PathBuf {
        match config_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}
