//! Single-level directory listing for the wiki tree builder

use crate::error::TreeError;
use crate::tree::path::is_hidden;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Visible entry of one wiki directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A regular file with its name and absolute path
    File { name: String, path: PathBuf },
    /// A directory with its name and absolute path
    Directory { name: String, path: PathBuf },
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::File { name, .. } | Entry::Directory { name, .. } => name,
        }
    }
}

/// Directory listing configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false, links are skipped)
    pub follow_symlinks: bool,
}

/// Lists the direct children of a directory, hidden entries excluded
pub struct Walker {
    config: WalkerConfig,
}

impl Walker {
    pub fn new() -> Self {
        Self {
            config: WalkerConfig::default(),
        }
    }

    pub fn with_config(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// List `dir` in filesystem enumeration order.
    ///
    /// Failing to open `dir` itself is fatal. A child that cannot be
    /// inspected (e.g. removed mid-scan, broken link) is skipped.
    pub fn list(&self, dir: &Path) -> Result<Vec<Entry>, TreeError> {
        let mut entries = Vec::new();

        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(self.config.follow_symlinks);

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(TreeError::DirectoryUnreadable {
                        path: dir.to_path_buf(),
                        source: e.into(),
                    });
                }
                Err(e) => {
                    warn!(dir = %dir.display(), "Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            let Some(name) = entry.file_name().to_str() else {
                warn!(path = %entry.path().display(), "Skipping entry with non-UTF-8 name");
                continue;
            };

            if is_hidden(name) {
                continue;
            }

            // Logical paths treat `\` as a separator, so such a name could not be read back
            if name.contains('\\') {
                warn!(path = %entry.path().display(), "Skipping entry with backslash in name");
                continue;
            }

            let file_type = entry.file_type();
            let name = name.to_string();
            let path = entry.path().to_path_buf();

            if file_type.is_dir() {
                entries.push(Entry::Directory { name, path });
            } else if file_type.is_file() {
                entries.push(Entry::File { name, path });
            } else {
                debug!(path = %path.display(), "Skipping symlink or special file");
            }
        }

        Ok(entries)
    }
}

impl Default for Walker {
    fn default() -> Self {
        Self::new()
    }
}
