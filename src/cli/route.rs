//! CLI route: single route table and run context. Dispatches to the wiki API and presentation.

use crate::api::{ConfigStatus, WikiApi};
use crate::cli::parse::{
    AttachmentCommands, Commands, ConfigCommands, OrderCommands, OutputFormat, PageCommands,
    PageFormat,
};
use crate::cli::presentation::{
    format_attachment_list_json, format_attachment_list_text, format_config_status_json,
    format_config_status_text, format_order_listing_json, format_order_listing_text,
    format_page_json, format_page_text, format_tree_json, format_tree_text, format_upload_result,
};
use crate::config::{ConfigLoader, WikiConfig};
use crate::error::ApiError;
use crate::frontmatter::Metadata;
use serde_json::Value;
use std::path::PathBuf;
use tracing::{debug, info};

/// Runtime context for CLI execution: settings, their location, and the wiki API.
pub struct RunContext {
    api: WikiApi,
    config: WikiConfig,
    config_path: PathBuf,
    color: bool,
}

impl RunContext {
    /// Build the context from an optional settings path and an optional
    /// wiki root override.
    pub fn new(config_path: Option<PathBuf>, wiki: Option<PathBuf>) -> Result<Self, ApiError> {
        let config_path = ConfigLoader::resolve_path(config_path.as_deref())?;
        let config = ConfigLoader::load(Some(&config_path))?;
        let base_dir = ConfigLoader::base_dir(&config_path);

        let api = match wiki {
            Some(root) => {
                let root = dunce::canonicalize(&root).unwrap_or(root);
                WikiApi::new(root)
                    .with_policy(config.attachment_policy())
                    .with_walker_config(config.walker_config())
            }
            None => WikiApi::from_config(&config, &base_dir),
        };
        debug!(wiki = %api.root().display(), config_path = %config_path.display(), "Run context ready");

        Ok(Self {
            api,
            config,
            config_path,
            color: false,
        })
    }

    /// Colorize text output (tree labels). Off by default.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn config(&self) -> &WikiConfig {
        &self.config
    }

    pub fn api(&self) -> &WikiApi {
        &self.api
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Tree { folder, format } => {
                let tree = if folder.is_empty() {
                    self.api.structure()?
                } else {
                    self.api.folder_structure(folder)?
                };
                match format {
                    OutputFormat::Json => format_tree_json(&tree),
                    OutputFormat::Text => Ok(format_tree_text(&tree, self.color)),
                }
            }
            Commands::Page { command } => self.handle_page_command(command),
            Commands::Order { command } => self.handle_order_command(command),
            Commands::Attachment { command } => self.handle_attachment_command(command),
            Commands::Config { command } => self.handle_config_command(command),
        }
    }

    fn handle_page_command(&self, command: &PageCommands) -> Result<String, ApiError> {
        match command {
            PageCommands::Show { path, format } => {
                let page = self.api.page(path)?;
                match format {
                    PageFormat::Json => format_page_json(&page),
                    PageFormat::Html => Ok(page.html),
                    PageFormat::Text => Ok(format_page_text(&page)),
                }
            }
            PageCommands::Create {
                path,
                title,
                content,
            } => {
                let created = self.api.create_page(path, title, content)?;
                Ok(format!("Created page {}", created))
            }
            PageCommands::Save {
                path,
                content,
                meta,
            } => {
                let metadata = parse_meta(meta)?;
                let saved = self.api.save_page(path, content, &metadata)?;
                Ok(format!("Saved page {}", saved))
            }
            PageCommands::Delete { path } => {
                self.api.delete_page(path)?;
                Ok(format!("Deleted page {}", path))
            }
        }
    }

    fn handle_order_command(&self, command: &OrderCommands) -> Result<String, ApiError> {
        match command {
            OrderCommands::Show { folder, format } => {
                let listing = self.api.order(folder)?;
                match format {
                    OutputFormat::Json => format_order_listing_json(&listing),
                    OutputFormat::Text => Ok(format_order_listing_text(&listing)),
                }
            }
            OrderCommands::Set { folder, names } => {
                let listing = self.api.set_order(folder, names)?;
                info!(folder = %listing.folder, entries = names.len(), "Updated ordering manifest");
                Ok(format_order_listing_text(&listing))
            }
        }
    }

    fn handle_attachment_command(&self, command: &AttachmentCommands) -> Result<String, ApiError> {
        match command {
            AttachmentCommands::List { format } => {
                let attachments = self.api.attachments()?;
                match format {
                    OutputFormat::Json => format_attachment_list_json(&attachments),
                    OutputFormat::Text => Ok(format_attachment_list_text(&attachments)),
                }
            }
            AttachmentCommands::Add { file } => {
                let result = self.api.add_attachment(file)?;
                Ok(format_upload_result(&result))
            }
            AttachmentCommands::Delete { name } => {
                self.api.delete_attachment(name)?;
                Ok(format!("Deleted attachment {}", name))
            }
        }
    }

    fn handle_config_command(&self, command: &ConfigCommands) -> Result<String, ApiError> {
        let base_dir = ConfigLoader::base_dir(&self.config_path);
        match command {
            ConfigCommands::Show => {
                let status = ConfigStatus::new(self.config.clone(), &base_dir);
                Ok(format!(
                    "Settings file: {}\n{}\n\n{}",
                    self.config_path.display(),
                    format_config_status_text(&status),
                    format_config_status_json(&status)?
                ))
            }
            ConfigCommands::SetPath { path } => {
                let mut updated = self.config.clone();
                updated.wiki_path = path.clone();
                ConfigLoader::save(&self.config_path, &updated)?;
                let status = ConfigStatus::new(updated, &base_dir);
                Ok(format_config_status_text(&status))
            }
        }
    }
}

/// Parse repeated `key=value` flags into frontmatter. Values are read as
/// YAML scalars, so `draft=true` stores a boolean.
fn parse_meta(pairs: &[String]) -> Result<Metadata, ApiError> {
    let mut metadata = Metadata::new();
    for pair in pairs {
        let (key, raw) = pair
            .split_once('=')
            .ok_or_else(|| ApiError::Frontmatter(format!("expected KEY=VALUE, got {:?}", pair)))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(ApiError::Frontmatter(format!("empty key in {:?}", pair)));
        }
        let value = serde_yaml::from_str::<Value>(raw)
            .ok()
            .filter(|v| !v.is_null() && !v.is_object() && !v.is_array())
            .unwrap_or_else(|| Value::String(raw.to_string()));
        metadata.insert(key.to_string(), value);
    }
    Ok(metadata)
}
