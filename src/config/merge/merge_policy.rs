//! Merge rules: defaults, override order, conflict handling.
//!
//! Sources are layered lowest to highest: these defaults, the settings file,
//! then `MDWIKI_*` environment variables. Later sources win per key.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Prefix of environment overrides (`MDWIKI_WIKI_PATH`, `MDWIKI_LOGGING__LEVEL`).
pub const ENV_PREFIX: &str = "MDWIKI";

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("wiki_path", "wiki")?
        .set_default("max_file_size", 10i64 * 1024 * 1024)
}

/// Environment source applied after all files.
pub fn environment_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
