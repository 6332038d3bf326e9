//! mdwiki: a markdown directory as a wiki
//!
//! Builds an ordered wiki tree from a directory of markdown files. Folders
//! order their children with an optional `.order` manifest, and a folder
//! with a same-named `.md` file next to it becomes one node that is both a
//! folder and a page. Pages, ordering manifests and attachments are read
//! and written through [`api::WikiApi`].

pub mod api;
pub mod attachments;
pub mod cli;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod logging;
pub mod order;
pub mod page;
pub mod tree;
