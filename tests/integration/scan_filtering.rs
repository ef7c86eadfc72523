//! Integration tests for scan target enumeration

use manifest::tree::walker::{Walker, WalkerConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_shallow_scan_only_returns_direct_children() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::write(root.join("Beat Saber.exe"), "exe").unwrap();
    fs::write(root.join("UnityPlayer.dll"), "player").unwrap();
    fs::create_dir_all(root.join("Plugins")).unwrap();
    fs::write(root.join("Plugins").join("SongCore.dll"), "mod").unwrap();

    let files = Walker::with_config(root, WalkerConfig::shallow()).scan().unwrap();

    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| f.relative_path.segments().len() == 1));
}

#[test]
fn test_filtered_scan_only_returns_allowed_names() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();
    let allow = vec!["Assembly-CSharp.dll".to_string()];

    for name in ["Assembly-CSharp.dll", "Main.dll", "HMLib.dll"] {
        fs::write(root.join(name), name).unwrap();
    }
    fs::create_dir(root.join("nested")).unwrap();
    fs::write(root.join("nested").join("Assembly-CSharp.dll"), "copy").unwrap();

    let config = WalkerConfig::recursive().with_name_filter(allow.clone());
    let files = Walker::with_config(root, config).scan().unwrap();

    assert_eq!(files.len(), 2);
    assert!(files
        .iter()
        .all(|f| allow.iter().any(|a| a.as_str() == f.relative_path.file_name())));
}

#[test]
fn test_scan_paths_are_relative_and_forward_slashed() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::create_dir_all(root.join("a").join("b")).unwrap();
    fs::write(root.join("a").join("b").join("c.txt"), "c").unwrap();

    let files = Walker::new(root.clone()).scan().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].relative_path.to_string(), "a/b/c.txt");
    assert!(files[0].path.starts_with(&root));
}
