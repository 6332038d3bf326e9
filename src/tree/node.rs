//! Wiki tree node types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Node kind as displayed in the wiki navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    #[serde(rename = "folder")]
    Folder,
    #[serde(rename = "file")]
    Page,
}

/// One entry of the wiki tree.
///
/// `children` is `Some` exactly for folders. `page_path` is set only when a
/// folder was merged with a same-named markdown file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_path: Option<String>,
}

impl TreeNode {
    pub fn folder(name: String, path: String, children: Vec<TreeNode>) -> Self {
        Self {
            name,
            kind: NodeKind::Folder,
            path,
            children: Some(children),
            last_modified: None,
            page_path: None,
        }
    }

    pub fn page(name: String, path: String, last_modified: Option<DateTime<Utc>>) -> Self {
        Self {
            name,
            kind: NodeKind::Page,
            path,
            children: None,
            last_modified,
            page_path: None,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    /// Children of a folder; empty for pages.
    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Find a descendant (or self) by logical path.
    pub fn find(&self, path: &str) -> Option<&TreeNode> {
        if self.path == path {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(path))
    }

    /// Number of nodes in this subtree, self included.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(TreeNode::node_count).sum::<usize>()
    }

    /// Logical paths of every page reachable from this node, merged folder
    /// pages included, in display order.
    pub fn page_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_page_paths(&mut out);
        out
    }

    fn collect_page_paths(&self, out: &mut Vec<String>) {
        match self.kind {
            NodeKind::Page => out.push(self.path.clone()),
            NodeKind::Folder => {
                if let Some(page_path) = &self.page_path {
                    out.push(page_path.clone());
                }
                for child in self.children() {
                    child.collect_page_paths(out);
                }
            }
        }
    }
}
