//! Wiki API
//!
//! Request-level entry point over one wiki root. Each method corresponds to
//! one request of the wiki: it checks its inputs, calls into the tree, order,
//! page and attachment modules, and maps failures to [`ApiError`].

use crate::attachments::{self, AttachmentInfo, AttachmentPolicy, UploadResult};
use crate::config::WikiConfig;
use crate::error::ApiError;
use crate::frontmatter::Metadata;
use crate::order;
use crate::page::{self, WikiPage};
use crate::tree::path::{folder_dir_path, normalize_logical_path};
use crate::tree::walker::WalkerConfig;
use crate::tree::{TreeBuilder, TreeNode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, instrument};

/// Effective display order of one folder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderListing {
    /// Logical folder path ("" for the root)
    pub folder: String,
    /// Child names as displayed, manifest entries first
    pub lines: Vec<String>,
    /// Whether the folder has a `.order` manifest
    pub has_manifest: bool,
}

/// Settings as reported by `config show`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigStatus {
    #[serde(flatten)]
    pub config: WikiConfig,
    pub absolute_path: PathBuf,
    pub path_exists: bool,
}

impl ConfigStatus {
    pub fn new(config: WikiConfig, base_dir: &Path) -> Self {
        let absolute_path = config.resolve_wiki_path(base_dir);
        let path_exists = absolute_path.is_dir();
        Self {
            config,
            absolute_path,
            path_exists,
        }
    }
}

/// Operations over one wiki root
pub struct WikiApi {
    root: PathBuf,
    policy: AttachmentPolicy,
    walker_config: WalkerConfig,
}

impl WikiApi {
    /// Create an API for `root` with default attachment policy.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            policy: WikiConfig::default().attachment_policy(),
            walker_config: WalkerConfig::default(),
        }
    }

    /// Create an API from loaded settings. Relative wiki paths resolve
    /// against `base_dir`.
    pub fn from_config(config: &WikiConfig, base_dir: &Path) -> Self {
        Self {
            root: config.resolve_wiki_path(base_dir),
            policy: config.attachment_policy(),
            walker_config: config.walker_config(),
        }
    }

    pub fn with_policy(mut self, policy: AttachmentPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_root(&self) -> Result<(), ApiError> {
        if self.root.is_dir() {
            Ok(())
        } else {
            Err(ApiError::RootNotFound(self.root.clone()))
        }
    }

    fn builder(&self) -> TreeBuilder {
        TreeBuilder::new(self.root.clone()).with_walker_config(self.walker_config.clone())
    }

    /// Resolve a logical folder path to an existing directory.
    fn folder(&self, folder: &str) -> Result<(String, PathBuf), ApiError> {
        let logical = normalize_logical_path(folder, true)?;
        let dir = folder_dir_path(&self.root, &logical);
        if !dir.is_dir() {
            return Err(ApiError::FolderNotFound(logical));
        }
        Ok((logical, dir))
    }

    /// Full wiki structure.
    #[instrument(skip(self))]
    pub fn structure(&self) -> Result<TreeNode, ApiError> {
        self.ensure_root()?;
        self.build_logged("")
    }

    /// Structure of one folder and its descendants.
    #[instrument(skip(self))]
    pub fn folder_structure(&self, folder: &str) -> Result<TreeNode, ApiError> {
        self.ensure_root()?;
        let (logical, _) = self.folder(folder)?;
        self.build_logged(&logical)
    }

    fn build_logged(&self, logical: &str) -> Result<TreeNode, ApiError> {
        self.builder().build_at(logical).map_err(|e| {
            error!(folder = %logical, "Failed to get wiki structure: {}", e);
            ApiError::from(e)
        })
    }

    pub fn page(&self, path: &str) -> Result<WikiPage, ApiError> {
        self.ensure_root()?;
        page::read_page(&self.root, path)
    }

    pub fn save_page(
        &self,
        path: &str,
        content: &str,
        metadata: &Metadata,
    ) -> Result<String, ApiError> {
        self.ensure_root()?;
        page::save_page(&self.root, path, content, metadata)
    }

    pub fn create_page(&self, path: &str, title: &str, content: &str) -> Result<String, ApiError> {
        self.ensure_root()?;
        page::create_page(&self.root, path, title, content)
    }

    pub fn delete_page(&self, path: &str) -> Result<(), ApiError> {
        self.ensure_root()?;
        page::delete_page(&self.root, path)
    }

    /// Effective order of a folder's children, as the tree displays them.
    pub fn order(&self, folder: &str) -> Result<OrderListing, ApiError> {
        self.ensure_root()?;
        let (logical, dir) = self.folder(folder)?;
        let level = self.build_logged(&logical)?;
        Ok(OrderListing {
            lines: level.children().iter().map(|c| c.name.clone()).collect(),
            has_manifest: order::manifest_path(&dir).is_file(),
            folder: logical,
        })
    }

    /// Replace a folder's ordering manifest.
    pub fn set_order(&self, folder: &str, names: &[String]) -> Result<OrderListing, ApiError> {
        self.ensure_root()?;
        let (logical, dir) = self.folder(folder)?;
        order::write_manifest(&dir, names)?;
        self.order(&logical)
    }

    pub fn attachments(&self) -> Result<Vec<AttachmentInfo>, ApiError> {
        self.ensure_root()?;
        attachments::list_attachments(&self.root)
    }

    pub fn add_attachment(&self, source: &Path) -> Result<UploadResult, ApiError> {
        self.ensure_root()?;
        attachments::add_attachment(&self.root, source, &self.policy)
    }

    pub fn delete_attachment(&self, file_name: &str) -> Result<(), ApiError> {
        self.ensure_root()?;
        attachments::delete_attachment(&self.root, file_name)
    }
}
