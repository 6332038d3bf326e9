//! Error types for the mdwiki tree builder and request layer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scanning the wiki directory.
///
/// Unreadable ordering manifests and failed stats are not errors: the
/// builder logs them and degrades to an empty order or a missing timestamp.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Failed to read directory {path:?}: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Request-level errors surfaced by [`crate::api::WikiApi`] and the CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Wiki path not found: {0:?}")]
    RootNotFound(PathBuf),

    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Page already exists: {0}")]
    PageExists(String),

    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Attachment not found: {0}")]
    AttachmentNotFound(String),

    #[error("Attachment rejected: {0}")]
    AttachmentRejected(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Frontmatter error: {0}")]
    Frontmatter(String),

    #[error("Failed to build wiki structure: {0}")]
    Tree(#[from] TreeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
