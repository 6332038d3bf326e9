//! Page storage: read, create, save and delete markdown pages by logical path.
//!
//! Logical paths come straight from the tree (`Guides/Setup`), so a page
//! node's `path` always resolves back to the file that produced it.

use crate::error::ApiError;
use crate::frontmatter::{self, Metadata};
use crate::tree::path::{last_segment, normalize_logical_path, page_file_path};
use chrono::{DateTime, Utc};
use pulldown_cmark::{html, Options, Parser};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// A page as returned to readers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WikiPage {
    pub path: String,
    pub title: String,
    /// Markdown body without the frontmatter block
    pub content: String,
    pub html: String,
    pub metadata: Metadata,
    pub last_modified: DateTime<Utc>,
}

/// Render markdown to HTML with the table, footnote, strikethrough and task
/// list extensions.
pub fn render_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Read the page at `logical_path`.
pub fn read_page(root: &Path, logical_path: &str) -> Result<WikiPage, ApiError> {
    let logical = normalize_logical_path(logical_path, false)?;
    let file = page_file_path(root, &logical);

    let raw = match fs::read_to_string(&file) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ApiError::PageNotFound(logical));
        }
        Err(e) => return Err(ApiError::Io(e)),
    };
    let modified = fs::metadata(&file)?.modified()?;

    let parsed = frontmatter::split(&raw)?;
    let title = match parsed.metadata.get("title") {
        Some(Value::String(title)) if !title.trim().is_empty() => title.clone(),
        _ => last_segment(&logical).to_string(),
    };

    debug!(page = %logical, "Read page");
    Ok(WikiPage {
        title,
        content: parsed.body.to_string(),
        html: render_html(parsed.body),
        metadata: parsed.metadata,
        last_modified: DateTime::<Utc>::from(modified),
        path: logical,
    })
}

/// Write `content` with `metadata` as frontmatter, replacing any existing
/// page. Missing parent folders are created.
pub fn save_page(
    root: &Path,
    logical_path: &str,
    content: &str,
    metadata: &Metadata,
) -> Result<String, ApiError> {
    let logical = normalize_logical_path(logical_path, false)?;
    let file = page_file_path(root, &logical);

    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file, frontmatter::compose(metadata, content)?)?;

    info!(page = %logical, "Saved page");
    Ok(logical)
}

/// Create a new page titled `title`. Fails if the page already exists.
pub fn create_page(
    root: &Path,
    logical_path: &str,
    title: &str,
    content: &str,
) -> Result<String, ApiError> {
    let logical = normalize_logical_path(logical_path, false)?;
    let file = page_file_path(root, &logical);

    if file.exists() {
        return Err(ApiError::PageExists(logical));
    }

    let mut metadata = Metadata::new();
    metadata.insert("title".to_string(), Value::String(title.to_string()));
    save_page(root, &logical, content, &metadata)
}

/// Delete the page file. A same-named folder is left untouched.
pub fn delete_page(root: &Path, logical_path: &str) -> Result<(), ApiError> {
    let logical = normalize_logical_path(logical_path, false)?;
    let file = page_file_path(root, &logical);

    match fs::remove_file(&file) {
        Ok(()) => {
            info!(page = %logical, "Deleted page");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ApiError::PageNotFound(logical)),
        Err(e) => Err(ApiError::Io(e)),
    }
}
