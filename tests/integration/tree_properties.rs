//! Property-based tests for tree building and rendering

use manifest::tree::{FileEntry, RelativePath, TreeBuilder};
use manifest::Renderer;
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Relative paths where no path is a strict prefix of another, each with a digest
fn path_sets() -> impl Strategy<Value = BTreeMap<String, String>> {
    let segment = "[a-z]{1,3}";
    let path = prop::collection::vec(segment, 1..4).prop_map(|segments| segments.join("/"));
    let entry = (path, "[0-9a-f]{40}");
    prop::collection::vec(entry, 0..24).prop_map(|pairs| {
        let mut chosen: BTreeMap<String, String> = BTreeMap::new();
        for (path, hash) in pairs {
            // Leaves get a file-like suffix so no leaf can double as a directory
            chosen.insert(format!("{}.bin", path), hash);
        }
        chosen
    })
}

fn entries(paths: &BTreeMap<String, String>) -> Vec<FileEntry> {
    paths
        .iter()
        .map(|(path, hash)| FileEntry::new(RelativePath::parse(path).unwrap(), hash.clone()))
        .collect()
}

proptest! {
    #[test]
    fn prop_leaf_paths_match_input(paths in path_sets()) {
        let tree = TreeBuilder::new().build(entries(&paths)).unwrap();
        let leaves: BTreeMap<String, String> = tree
            .leaves()
            .into_iter()
            .map(|(path, hash)| (path, hash.to_string()))
            .collect();
        prop_assert_eq!(leaves, paths);
    }

    #[test]
    fn prop_build_ignores_input_order(paths in path_sets()) {
        let forward = entries(&paths);
        let mut backward = forward.clone();
        backward.reverse();

        let builder = TreeBuilder::new();
        prop_assert_eq!(builder.build(forward).unwrap(), builder.build(backward).unwrap());
    }

    #[test]
    fn prop_header_is_padding_then_title(paths in path_sets(), title in "[ -~]{0,30}") {
        let tree = TreeBuilder::new().build(entries(&paths)).unwrap();
        let report = Renderer::default().render(&title, &tree);
        let expected_header = format!("{}{}", " ".repeat(41), title);
        prop_assert!(report.starts_with(&expected_header));
        prop_assert_eq!(report.split('\n').next().unwrap(), expected_header.as_str());
    }

    #[test]
    fn prop_render_is_idempotent_and_aligned(paths in path_sets()) {
        let tree = TreeBuilder::new().build(entries(&paths)).unwrap();
        let renderer = Renderer::default();
        let first = renderer.render("title", &tree);
        prop_assert_eq!(&first, &renderer.render("title", &tree));

        for line in first.split('\n').skip(1) {
            let hash_column: String = line.chars().take(41).collect();
            prop_assert_eq!(hash_column.chars().nth(40), Some(' '));
            let hash = hash_column.trim_end();
            prop_assert!(hash.is_empty() || hash.len() == 40);
        }
    }
}
