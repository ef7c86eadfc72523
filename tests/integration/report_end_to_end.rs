//! End-to-end tests for report generation over an install directory

use manifest::config::ManifestConfig;
use manifest::tree::hasher::compute_content_hash;
use manifest::tree::{FileEntry, RelativePath, TreeNode};
use manifest::{generate, ConflictPolicy, ManifestError, Renderer, TreeBuilder, TreeError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn hash_column(content: &str) -> String {
    compute_content_hash(content.as_bytes())
}

#[test]
fn test_two_file_scenario() {
    let h1 = "a".repeat(40);
    let h2 = "b".repeat(40);
    let tree = TreeBuilder::new()
        .build(vec![
            FileEntry::new(RelativePath::parse("a.txt").unwrap(), h1.clone()),
            FileEntry::new(RelativePath::parse("sub/b.txt").unwrap(), h2.clone()),
        ])
        .unwrap();

    assert_eq!(tree.get("a.txt"), Some(&TreeNode::Leaf(h1.clone())));
    assert_eq!(tree.get("sub/b.txt"), Some(&TreeNode::Leaf(h2.clone())));

    let report = Renderer::default().render("R", &tree);
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], format!("{}R", " ".repeat(41)));
    assert_eq!(lines[1], format!("{} ├─ a.txt", h1));
    assert_eq!(lines[2], format!("{} └─ sub", " ".repeat(40)));
    assert_eq!(lines[3], format!("{}    └─ b.txt", h2));
}

#[tokio::test]
async fn test_version_missing_header() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "Plugins/SongCore.dll", "songcore");

    let report = generate(temp_dir.path(), &ManifestConfig::default())
        .await
        .unwrap();
    assert_eq!(
        report.lines().next().unwrap(),
        format!("{}Version Missing", " ".repeat(41))
    );
}

#[tokio::test]
async fn test_full_install_report() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write(root, "BeatSaberVersion.txt", "1.34.2");
    write(root, "Beat Saber.exe", "exe");
    write(root, "README", "no extension, skipped");
    write(root, "Plugins/BSIPA.dll", "bsipa");
    write(root, "Plugins/Sub/Helper.dll", "helper");
    write(root, "Beat Saber_Data/Managed/0Harmony.dll", "harmony");
    write(root, "Beat Saber_Data/Managed/Main.dll", "filtered out");
    write(root, "Beat Saber_Data/Plugins/x86_64/steam_api64.dll", "steam");

    let report = generate(root, &ManifestConfig::default()).await.unwrap();
    let blank = " ".repeat(40);

    let expected = [
        format!("{}1.34.2", " ".repeat(41)),
        format!("{} ├─ Beat Saber.exe", hash_column("exe")),
        format!("{} ├─ Beat Saber_Data", blank),
        format!("{} │  ├─ Managed", blank),
        format!("{} │  │  └─ 0Harmony.dll", hash_column("harmony")),
        format!("{} │  └─ Plugins", blank),
        format!("{} │     └─ x86_64", blank),
        format!("{} │        └─ steam_api64.dll", hash_column("steam")),
        format!("{} ├─ BeatSaberVersion.txt", hash_column("1.34.2")),
        format!("{} └─ Plugins", blank),
        format!("{}    ├─ BSIPA.dll", hash_column("bsipa")),
        format!("{}    └─ Sub", blank),
        format!("{}       └─ Helper.dll", hash_column("helper")),
    ]
    .join("\n");

    assert_eq!(report, expected);
}

#[tokio::test]
async fn test_report_is_reproducible() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    for i in 0..40 {
        write(root, &format!("Plugins/mod{:02}.dll", i), &format!("mod {}", i));
    }

    let config = ManifestConfig::default();
    let first = generate(root, &config).await.unwrap();
    let second = generate(root, &config).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.lines().count(), 1 + 4 + 40);
}

#[tokio::test]
async fn test_bounded_concurrency_still_reads_everything() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    for i in 0..10 {
        write(root, &format!("Plugins/deep/{}/file.dll", i), "x");
    }

    let mut config = ManifestConfig::default();
    config.scan.max_concurrent_reads = 1;
    let report = generate(root, &config).await.unwrap();
    assert_eq!(report.matches("file.dll").count(), 10);
}

#[tokio::test]
async fn test_collision_policy_applies_to_top_level_splice() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "My.Game_Data", "a file where the data folder key goes");

    let mut config = ManifestConfig::default();
    config.layout.app_name = "My.Game".to_string();

    let result = generate(temp_dir.path(), &config).await;
    assert!(matches!(
        result,
        Err(ManifestError::Tree(TreeError::KeyCollision { ref key })) if key == "My.Game_Data"
    ));

    config.conflict_policy = ConflictPolicy::Overwrite;
    let report = generate(temp_dir.path(), &config).await.unwrap();
    assert!(!report.contains("Managed"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_unreadable_file_aborts_report() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "Plugins/locked.dll", "secret");
    let locked = root.join("Plugins").join("locked.dll");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Root ignores permission bits; nothing to assert in that case
    if fs::read(&locked).is_ok() {
        return;
    }

    let result = generate(root, &ManifestConfig::default()).await;
    assert!(matches!(result, Err(ManifestError::Scan(_))));
}
