//! Integration tests for `.order` manifests

use super::test_utils::{child_names, make_dir, sample_wiki, write_file};
use mdwiki::api::WikiApi;
use mdwiki::tree::build_tree;
use tempfile::TempDir;

/// Manifest entries come first, in manifest order
#[test]
fn test_manifest_entries_lead() {
    let temp_dir = TempDir::new().unwrap();
    sample_wiki(temp_dir.path());

    let tree = build_tree(temp_dir.path(), "").unwrap();
    let names = child_names(&tree);
    assert_eq!(&names[..2], &["Guides", "Home"]);
    assert_eq!(names.len(), 3);
    assert_eq!(names[2], "Zeta");
}

/// `Foo` and `Foo.md` in a manifest both refer to the same node
#[test]
fn test_manifest_matches_with_or_without_extension() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "A.md", "a");
    write_file(root, "B.md", "b");
    write_file(root, "C.md", "c");

    write_file(root, ".order", "C.md\nA\n");
    let tree = build_tree(root, "").unwrap();
    assert_eq!(child_names(&tree), vec!["C", "A", "B"]);
}

/// Unknown and duplicate manifest lines are skipped
#[test]
fn test_manifest_skips_missing_and_duplicate_entries() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "A.md", "a");
    write_file(root, "B.md", "b");
    write_file(root, ".order", "Ghost\nB\nB.md\n\n   \nA\n");

    let tree = build_tree(root, "").unwrap();
    assert_eq!(child_names(&tree), vec!["B", "A"]);
}

/// Manifest lines are trimmed before matching
#[test]
fn test_manifest_lines_are_trimmed() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "A.md", "a");
    write_file(root, "B.md", "b");
    write_file(root, ".order", "  B  \r\nA\r\n");

    let tree = build_tree(root, "").unwrap();
    assert_eq!(child_names(&tree), vec!["B", "A"]);
}

/// A manifest in a nested folder only orders that folder
#[test]
fn test_nested_manifest_is_local() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    make_dir(root, "Docs");
    write_file(root, "Docs/One.md", "1");
    write_file(root, "Docs/Two.md", "2");
    write_file(root, "Docs/.order", "Two\nOne\n");
    write_file(root, ".order", "One\n");
    write_file(root, "One.md", "root one");

    let tree = build_tree(root, "").unwrap();
    assert_eq!(child_names(&tree)[0], "One");
    assert_eq!(child_names(tree.find("Docs").unwrap()), vec!["Two", "One"]);
}

/// `set_order` writes the manifest and the tree follows it
#[test]
fn test_set_order_reorders_tree() {
    let temp_dir = TempDir::new().unwrap();
    sample_wiki(temp_dir.path());
    let api = WikiApi::new(temp_dir.path().to_path_buf());

    let listing = api
        .set_order("Guides", &["Advanced".to_string(), "Setup.md".to_string()])
        .unwrap();
    assert_eq!(listing.lines, vec!["Advanced", "Setup"]);

    let tree = api.structure().unwrap();
    assert_eq!(
        child_names(tree.find("Guides").unwrap()),
        vec!["Advanced", "Setup"]
    );
}
