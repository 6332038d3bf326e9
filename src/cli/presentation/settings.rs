//! Settings presentation for `config show`.

use crate::api::ConfigStatus;
use crate::error::ApiError;

pub fn format_config_status_text(status: &ConfigStatus) -> String {
    let exists = if status.path_exists { "yes" } else { "no" };
    format!(
        "Wiki path: {}\nResolved: {}\nExists: {}\nAllowed extensions: {}\nMax file size: {} bytes\nLog level: {}",
        status.config.wiki_path.display(),
        status.absolute_path.display(),
        exists,
        status.config.allowed_extensions.join(" "),
        status.config.max_file_size,
        status.config.logging.level
    )
}

pub fn format_config_status_json(status: &ConfigStatus) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(status)?)
}
