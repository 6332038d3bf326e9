//! Integration tests for tree structure correctness

use super::test_utils::{child_names, make_dir, sample_wiki, write_file};
use mdwiki::tree::{build_tree, NodeKind, TreeBuilder, TreeNode, ROOT_LABEL};
use tempfile::TempDir;

/// Every markdown file appears exactly once, under its logical path
#[test]
fn test_tree_contains_all_pages() {
    let temp_dir = TempDir::new().unwrap();
    sample_wiki(temp_dir.path());

    let tree = build_tree(temp_dir.path(), "").unwrap();
    let mut pages = tree.page_paths();
    pages.sort();

    assert_eq!(
        pages,
        vec!["Guides", "Guides/Advanced/Tuning", "Guides/Setup", "Home", "Zeta"]
    );
}

#[test]
fn test_root_is_labelled_folder() {
    let temp_dir = TempDir::new().unwrap();
    sample_wiki(temp_dir.path());

    let tree = build_tree(temp_dir.path(), "").unwrap();
    assert_eq!(tree.name, ROOT_LABEL);
    assert_eq!(tree.kind, NodeKind::Folder);
    assert_eq!(tree.path, "");
    assert!(tree.page_path.is_none());
}

/// A folder with a sibling `.md` of the same name becomes one node
#[test]
fn test_folder_and_page_merge() {
    let temp_dir = TempDir::new().unwrap();
    sample_wiki(temp_dir.path());

    let tree = build_tree(temp_dir.path(), "").unwrap();
    let guides = tree.find("Guides").unwrap();

    assert!(guides.is_folder());
    assert_eq!(guides.page_path.as_deref(), Some("Guides"));
    assert!(guides.last_modified.is_some());
    assert_eq!(child_names(guides), vec!["Setup", "Advanced"]);
    assert_eq!(
        tree.children().iter().filter(|c| c.name == "Guides").count(),
        1
    );
}

fn contains_name(node: &TreeNode, name: &str) -> bool {
    node.name == name || node.children().iter().any(|c| contains_name(c, name))
}

/// Hidden entries are skipped at every depth
#[test]
fn test_hidden_entries_are_excluded() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    sample_wiki(root);
    write_file(root, "Guides/.draft.md", "secret");
    make_dir(root, "Guides/.attachments");
    write_file(root, ".hidden/Visible/Page.md", "under a hidden directory");

    let tree = build_tree(root, "").unwrap();
    assert!(tree.find(".hidden").is_none());
    assert!(tree.find(".hidden/Visible").is_none());
    assert!(tree.find(".hidden/Visible/Page").is_none());
    assert!(!contains_name(&tree, "Visible"));
    assert!(!contains_name(&tree, "Page"));
    for path in tree.page_paths() {
        assert!(
            !path.split('/').any(|segment| segment.starts_with('.')),
            "hidden segment in {}",
            path
        );
    }
    assert!(tree.find(".attachments").is_none());
    assert!(tree.find("Guides/.attachments").is_none());
}

/// Files without a markdown extension do not become nodes
#[test]
fn test_non_markdown_files_are_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "Home.md", "home");
    write_file(root, "notes.txt", "plain");
    write_file(root, "diagram.png", "png");

    let tree = build_tree(root, "").unwrap();
    assert_eq!(child_names(&tree), vec!["Home"]);
}

/// An empty folder is kept as a folder without children
#[test]
fn test_empty_folder_is_kept() {
    let temp_dir = TempDir::new().unwrap();
    make_dir(temp_dir.path(), "Empty");

    let tree = build_tree(temp_dir.path(), "").unwrap();
    let empty = tree.find("Empty").unwrap();
    assert!(empty.is_folder());
    assert!(empty.children().is_empty());
    assert!(empty.page_path.is_none());
    assert!(empty.last_modified.is_none());
}

/// Building a subfolder yields the same subtree as the full build
#[test]
fn test_subtree_matches_full_tree() {
    let temp_dir = TempDir::new().unwrap();
    sample_wiki(temp_dir.path());

    let builder = TreeBuilder::new(temp_dir.path().to_path_buf());
    let full = builder.build().unwrap();
    let sub = builder.build_at("Guides/Advanced").unwrap();

    assert_eq!(full.find("Guides/Advanced"), Some(&sub));
    assert_eq!(sub.name, "Advanced");
}

/// Two builds over an unchanged directory are identical
#[test]
fn test_build_is_repeatable() {
    let temp_dir = TempDir::new().unwrap();
    sample_wiki(temp_dir.path());

    let first = build_tree(temp_dir.path(), "").unwrap();
    let second = build_tree(temp_dir.path(), "").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_directory_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    assert!(build_tree(temp_dir.path(), "Nope").is_err());
}

/// Serialized shape uses `type`, `lastModified` and `pagePath`
#[test]
fn test_tree_wire_format() {
    let temp_dir = TempDir::new().unwrap();
    sample_wiki(temp_dir.path());

    let tree = build_tree(temp_dir.path(), "").unwrap();
    let json = serde_json::to_value(&tree).unwrap();

    assert_eq!(json["type"], "folder");
    let guides = &json["children"][0];
    assert_eq!(guides["name"], "Guides");
    assert_eq!(guides["type"], "folder");
    assert_eq!(guides["pagePath"], "Guides");
    assert!(guides["lastModified"].is_string());

    let home = &json["children"][1];
    assert_eq!(home["type"], "file");
    assert!(home.get("children").is_none());
    assert!(home.get("pagePath").is_none());
}
