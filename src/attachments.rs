//! Attachment store under the wiki's hidden `.attachments` directory.

use crate::error::ApiError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

/// Directory holding uploaded files, relative to the wiki root.
pub const ATTACHMENTS_DIR: &str = ".attachments";

/// Upload restrictions taken from the wiki configuration.
#[derive(Debug, Clone)]
pub struct AttachmentPolicy {
    /// Allowed extensions, lowercase with leading dot (".png")
    pub allowed_extensions: Vec<String>,
    /// Maximum size in bytes
    pub max_file_size: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentInfo {
    pub name: String,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
    pub url: String,
}

/// Result of storing a new attachment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub file_name: String,
    pub original_name: String,
    pub size: u64,
    /// Image-style markdown reference ready to paste into a page
    pub markdown_link: String,
    pub url: String,
}

pub fn attachments_dir(root: &Path) -> PathBuf {
    root.join(ATTACHMENTS_DIR)
}

fn attachment_url(file_name: &str) -> String {
    format!("/{}/{}", ATTACHMENTS_DIR, file_name)
}

/// List stored attachments sorted by name. No directory means no attachments.
pub fn list_attachments(root: &Path) -> Result<Vec<AttachmentInfo>, ApiError> {
    let dir = attachments_dir(root);
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(ApiError::Io(e)),
    };

    let mut attachments = Vec::new();
    for entry in entries {
        let entry = entry?;
        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        attachments.push(AttachmentInfo {
            url: attachment_url(&name),
            name,
            size: metadata.len(),
            last_modified: DateTime::<Utc>::from(metadata.modified()?),
        });
    }

    attachments.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(attachments)
}

/// Copy `source` into the attachment store under a unique name
/// (`<stem>-<uuid><ext>`).
pub fn add_attachment(
    root: &Path,
    source: &Path,
    policy: &AttachmentPolicy,
) -> Result<UploadResult, ApiError> {
    let original_name = source
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ApiError::InvalidPath(source.display().to_string()))?
        .to_string();

    let (stem, ext) = split_extension(&original_name);
    let ext_lower = ext.to_lowercase();
    if !policy
        .allowed_extensions
        .iter()
        .any(|allowed| allowed.to_lowercase() == ext_lower)
    {
        let shown = if ext.is_empty() { "(none)" } else { ext };
        return Err(ApiError::AttachmentRejected(format!(
            "File type {} not allowed",
            shown
        )));
    }

    let size = fs::metadata(source)?.len();
    if size > policy.max_file_size {
        return Err(ApiError::AttachmentRejected(format!(
            "File is {} bytes, limit is {} bytes",
            size, policy.max_file_size
        )));
    }

    let dir = attachments_dir(root);
    fs::create_dir_all(&dir)?;

    let file_name = format!("{}-{}{}", stem, Uuid::new_v4(), ext);
    fs::copy(source, dir.join(&file_name))?;

    info!(attachment = %file_name, size, "Stored attachment");
    let url = attachment_url(&file_name);
    Ok(UploadResult {
        markdown_link: format!("![{}]({})", original_name, url),
        url,
        file_name,
        original_name,
        size,
    })
}

/// Remove a stored attachment by file name.
pub fn delete_attachment(root: &Path, file_name: &str) -> Result<(), ApiError> {
    if file_name.is_empty()
        || file_name.contains('/')
        || file_name.contains('\\')
        || file_name == "."
        || file_name == ".."
    {
        return Err(ApiError::InvalidPath(file_name.to_string()));
    }

    match fs::remove_file(attachments_dir(root).join(file_name)) {
        Ok(()) => {
            info!(attachment = %file_name, "Deleted attachment");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(ApiError::AttachmentNotFound(file_name.to_string()))
        }
        Err(e) => Err(ApiError::Io(e)),
    }
}

/// Split `name` into stem and extension (with dot). Leading-dot names have
/// no extension.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => (&name[..idx], &name[idx..]),
        _ => (name, ""),
    }
}
