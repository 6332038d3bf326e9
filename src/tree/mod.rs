//! Wiki structure tree
//!
//! Presents a directory of markdown files as folders and pages, honoring
//! per-folder `.order` manifests and merging `Foo.md` with a sibling `Foo/`
//! into a single node.

pub mod builder;
pub mod group;
pub mod node;
pub mod path;
pub mod walker;

pub use builder::{build_tree, TreeBuilder, ROOT_LABEL};
pub use node::{NodeKind, TreeNode};
