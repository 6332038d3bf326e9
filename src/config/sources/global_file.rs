//! Settings file source: $XDG_CONFIG_HOME/mdwiki/config.toml or an explicit path.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use config::FileFormat;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default settings file location, if a home directory can be determined.
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "mdwiki")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add the settings file at `path` to the builder.
///
/// A missing file is not an error unless `required` is set; the defaults
/// then stand.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
    required: bool,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if !path.exists() {
        debug!(config_path = %path.display(), "Settings file not found, using defaults");
    }
    let canonical = dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    Ok(builder.add_source(
        File::from(canonical)
            .format(FileFormat::Toml)
            .required(required),
    ))
}
