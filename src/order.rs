//! Ordering manifest for wiki folders.
//!
//! Each folder may hold a `.order` file listing the base names of its
//! children, one per line, in the order they should be displayed. Names may
//! carry a `.md` suffix; the tree builder strips it before matching. Missing
//! names are ignored and unlisted children follow the listed ones.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// File name of the ordering manifest.
pub const ORDER_FILE: &str = ".order";

/// Path of the ordering manifest inside `dir`.
pub fn manifest_path(dir: &Path) -> PathBuf {
    dir.join(ORDER_FILE)
}

/// Split manifest text into names: trim each line and drop blank lines.
pub fn parse_manifest(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read the manifest of `dir`.
///
/// A missing manifest is an empty order. An unreadable one (permissions,
/// invalid UTF-8) is logged and also treated as empty.
pub fn read_manifest(dir: &Path) -> Vec<String> {
    let path = manifest_path(dir);
    match fs::read_to_string(&path) {
        Ok(contents) => parse_manifest(&contents),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
        Err(e) => {
            warn!(manifest = %path.display(), "Ignoring unreadable ordering manifest: {}", e);
            Vec::new()
        }
    }
}

/// Replace the manifest of `dir` with `names`, one per line.
pub fn write_manifest(dir: &Path, names: &[String]) -> io::Result<()> {
    let mut contents = String::new();
    for name in names.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
        contents.push_str(name);
        contents.push('\n');
    }
    fs::write(manifest_path(dir), contents)
}
