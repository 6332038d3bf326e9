//! Configuration System
//!
//! Wiki settings: where the wiki lives, which attachments are accepted, and
//! logging. Settings are layered with the `config` crate (defaults, settings
//! file, environment) and saved back as TOML. The loaded value is passed
//! explicitly to [`crate::api::WikiApi`]; nothing here is global.

use crate::attachments::AttachmentPolicy;
use crate::logging::LoggingConfig;
use crate::tree::walker::WalkerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod merge {
    pub mod merge_policy;
}
mod sources {
    pub mod global_file;
}

pub use facade::ConfigLoader;
pub use merge::merge_policy::ENV_PREFIX;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WikiConfig {
    /// Wiki root; relative paths resolve against the settings file's directory
    #[serde(default = "default_wiki_path")]
    pub wiki_path: PathBuf,

    /// Extensions accepted for attachments (with leading dot)
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,

    /// Maximum attachment size in bytes
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,

    /// Follow symbolic links while building the tree
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_wiki_path() -> PathBuf {
    PathBuf::from("wiki")
}

fn default_allowed_extensions() -> Vec<String> {
    [".md", ".png", ".jpg", ".jpeg", ".gif", ".svg", ".pdf"]
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

fn default_max_file_size() -> u64 {
    10 * 1024 * 1024 // 10 MB
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            wiki_path: default_wiki_path(),
            allowed_extensions: default_allowed_extensions(),
            max_file_size: default_max_file_size(),
            follow_symlinks: false,
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    WikiPath(String),
    Extension(String, String),
    MaxFileSize(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::WikiPath(msg) => write!(f, "wiki_path: {}", msg),
            ValidationError::Extension(ext, msg) => {
                write!(f, "Extension '{}': {}", ext, msg)
            }
            ValidationError::MaxFileSize(msg) => write!(f, "max_file_size: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl WikiConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.wiki_path.as_os_str().is_empty() {
            errors.push(ValidationError::WikiPath("cannot be empty".to_string()));
        }

        for ext in &self.allowed_extensions {
            if !ext.starts_with('.') || ext.len() < 2 {
                errors.push(ValidationError::Extension(
                    ext.clone(),
                    "must start with '.' followed by a name".to_string(),
                ));
            }
        }

        if self.max_file_size == 0 {
            errors.push(ValidationError::MaxFileSize(
                "must be greater than zero".to_string(),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Absolute wiki root. Relative `wiki_path` values are joined onto
    /// `base_dir`. Existing paths are canonicalized.
    pub fn resolve_wiki_path(&self, base_dir: &Path) -> PathBuf {
        let joined = if self.wiki_path.is_absolute() {
            self.wiki_path.clone()
        } else {
            base_dir.join(&self.wiki_path)
        };
        dunce::canonicalize(&joined).unwrap_or(joined)
    }

    /// Attachment restrictions, extensions lowercased.
    pub fn attachment_policy(&self) -> AttachmentPolicy {
        AttachmentPolicy {
            allowed_extensions: self
                .allowed_extensions
                .iter()
                .map(|ext| ext.to_lowercase())
                .collect(),
            max_file_size: self.max_file_size,
        }
    }

    /// Directory listing options for the tree builder.
    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            follow_symlinks: self.follow_symlinks,
        }
    }
}
