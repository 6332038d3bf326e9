//! Tree builder for the wiki navigation structure

use crate::error::TreeError;
use crate::order;
use crate::tree::group::{EntryGroup, GroupSet};
use crate::tree::node::TreeNode;
use crate::tree::path::{join_logical, last_segment, manifest_base_name};
use crate::tree::walker::{Walker, WalkerConfig};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Label of the tree's root folder.
pub const ROOT_LABEL: &str = "Wiki";

/// Build the wiki tree for `root`, starting at the folder `relative_path`.
///
/// `relative_path` is `""` for the whole wiki. The caller checks that the
/// root exists.
pub fn build_tree(root: &Path, relative_path: &str) -> Result<TreeNode, TreeError> {
    TreeBuilder::new(root.to_path_buf()).build_at(relative_path)
}

/// Builds [`TreeNode`] trees from a wiki directory
///
/// Every call re-reads the filesystem; nothing is cached between builds.
pub struct TreeBuilder {
    root: PathBuf,
    walker: Walker,
}

impl TreeBuilder {
    /// Create a new tree builder for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            walker: Walker::new(),
        }
    }

    /// Set walker config (symlink handling).
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker = Walker::with_config(config);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Build the complete tree from the wiki root
    pub fn build(&self) -> Result<TreeNode, TreeError> {
        self.build_at("")
    }

    /// Build the subtree rooted at the folder `relative_path`
    #[instrument(skip(self), fields(wiki = %self.root.display()))]
    pub fn build_at(&self, relative_path: &str) -> Result<TreeNode, TreeError> {
        let start = Instant::now();
        debug!("Starting tree build");

        let node = self.build_folder(relative_path)?;

        info!(
            node_count = node.node_count(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Tree build completed"
        );
        Ok(node)
    }

    /// Build one folder level: manifest order first, then the rest.
    fn build_folder(&self, relative_path: &str) -> Result<TreeNode, TreeError> {
        let dir = self.dir_path(relative_path);

        let manifest = order::read_manifest(&dir);
        let entries = self.walker.list(&dir)?;
        let mut groups = GroupSet::from_entries(entries);
        let mut children = Vec::with_capacity(groups.len());

        for listed in &manifest {
            if let Some((name, group)) = groups.take(manifest_base_name(listed)) {
                children.push(self.merge_group(relative_path, name, group)?);
            }
        }
        for (name, group) in groups.take_remaining() {
            children.push(self.merge_group(relative_path, name, group)?);
        }

        let name = if relative_path.is_empty() {
            ROOT_LABEL.to_string()
        } else {
            last_segment(relative_path).to_string()
        };

        Ok(TreeNode::folder(name, relative_path.to_string(), children))
    }

    /// Turn one base-name group into its node.
    fn merge_group(
        &self,
        parent: &str,
        name: String,
        group: EntryGroup,
    ) -> Result<TreeNode, TreeError> {
        let logical = join_logical(parent, &name);
        match group {
            EntryGroup::Page { file } => {
                let last_modified = modified_time(&file);
                Ok(TreeNode::page(name, logical, last_modified))
            }
            EntryGroup::Folder { .. } => self.build_folder(&logical),
            EntryGroup::FolderWithPage { page, .. } => {
                let mut node = self.build_folder(&logical)?;
                node.last_modified = modified_time(&page);
                node.page_path = Some(logical);
                Ok(node)
            }
        }
    }

    fn dir_path(&self, relative_path: &str) -> PathBuf {
        let mut path = self.root.clone();
        for segment in relative_path.split('/').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path
    }
}

/// Modification time of `path`, or `None` if it cannot be stat'ed.
fn modified_time(path: &Path) -> Option<DateTime<Utc>> {
    match std::fs::metadata(path).and_then(|m| m.modified()) {
        Ok(time) => Some(DateTime::<Utc>::from(time)),
        Err(e) => {
            warn!(path = %path.display(), "Failed to stat page: {}", e);
            None
        }
    }
}
