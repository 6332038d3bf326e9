//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::RootNotFound(path) => format!(
            "Wiki path not found: {}. Set it with `mdwiki config set-path <dir>` or pass --wiki.",
            path.display()
        ),
        ApiError::Tree(_) | ApiError::Io(_) | ApiError::Serialization(_) => format!("Request failed: {}", e),
        _ => e.to_string(),
    }
}
