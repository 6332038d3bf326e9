//! Property-based tests for manifest ordering

use mdwiki::tree::build_tree;
use proptest::prelude::*;
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

fn page_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-z][a-z0-9_]{0,7}", 1..8)
        .prop_map(|names| names.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// A manifest listing any subset of the pages places exactly that subset
    /// first, in manifest order, and keeps every page exactly once.
    #[test]
    fn manifest_prefix_is_respected(
        names in page_names(),
        listed_mask in prop::collection::vec(any::<bool>(), 8),
        reverse in any::<bool>(),
    ) {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        for name in &names {
            fs::write(root.join(format!("{}.md", name)), name).unwrap();
        }

        let mut listed: Vec<String> = names
            .iter()
            .zip(listed_mask.iter())
            .filter(|(_, keep)| **keep)
            .map(|(name, _)| name.clone())
            .collect();
        if reverse {
            listed.reverse();
        }
        fs::write(root.join(".order"), listed.join("\n")).unwrap();

        let tree = build_tree(root, "").unwrap();
        let shown: Vec<String> = tree.children().iter().map(|c| c.name.clone()).collect();

        prop_assert_eq!(&shown[..listed.len()], &listed[..]);
        prop_assert_eq!(shown.len(), names.len());
        let unique: HashSet<&String> = shown.iter().collect();
        prop_assert_eq!(unique.len(), names.len());
    }
}
