//! Logical path utilities
//!
//! A logical path is a page or folder location relative to the wiki root,
//! always `/`-separated, with the `.md` extension removed for pages.

use crate::error::ApiError;
use std::path::{Path, PathBuf};

/// Markdown file extension, including the dot.
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Return the grouping key for a markdown file name (`Notes.md` -> `Notes`).
///
/// Returns `None` when the name does not carry the `.md` suffix. The match is
/// case-sensitive.
pub fn markdown_base_name(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(MARKDOWN_EXTENSION)
        .filter(|base| !base.is_empty())
}

/// Strip one trailing `.md` from a manifest entry, if present.
pub fn manifest_base_name(entry: &str) -> &str {
    entry.strip_suffix(MARKDOWN_EXTENSION).unwrap_or(entry)
}

/// Whether a directory entry is hidden from the wiki tree.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Join a parent logical path and a child name.
pub fn join_logical(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Last segment of a logical path (`a/b/c` -> `c`).
pub fn last_segment(logical: &str) -> &str {
    logical.rsplit('/').next().unwrap_or(logical)
}

/// Normalize a caller-supplied logical path.
///
/// Backslashes become `/` and surrounding slashes are trimmed. The result
/// must stay inside the wiki and outside hidden directories, so `.`/`..`,
/// empty segments and segments starting with `.` are rejected. An empty path
/// is allowed only when `allow_root` is set.
pub fn normalize_logical_path(input: &str, allow_root: bool) -> Result<String, ApiError> {
    let replaced = input.replace('\\', "/");
    let trimmed = replaced.trim_matches('/');

    if trimmed.is_empty() {
        return if allow_root {
            Ok(String::new())
        } else {
            Err(ApiError::InvalidPath(format!("empty path: {:?}", input)))
        };
    }

    for segment in trimmed.split('/') {
        if segment.is_empty() || is_hidden(segment) {
            return Err(ApiError::InvalidPath(input.to_string()));
        }
    }

    Ok(trimmed.to_string())
}

/// Filesystem directory for a normalized logical folder path.
pub fn folder_dir_path(root: &Path, logical: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    if !logical.is_empty() {
        for segment in logical.split('/') {
            path.push(segment);
        }
    }
    path
}

/// Markdown file for a normalized logical page path.
///
/// The extension is appended to the last segment rather than set with
/// `Path::set_extension`, because page names may contain dots.
pub fn page_file_path(root: &Path, logical: &str) -> PathBuf {
    let mut path = folder_dir_path(root, logical);
    let file_name = format!("{}{}", last_segment(logical), MARKDOWN_EXTENSION);
    path.set_file_name(file_name);
    path
}
