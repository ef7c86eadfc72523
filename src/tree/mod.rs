//! Manifest tree
//!
//! Scanning, hashing and aggregation of install files into a tree keyed by
//! path segment.

pub mod builder;
pub mod hasher;
pub mod node;
pub mod path;
pub mod walker;

pub use builder::{ConflictPolicy, TreeBuilder};
pub use hasher::{Blake3Hasher, ContentHasher};
pub use node::{FileEntry, TreeNode};
pub use path::RelativePath;
pub use walker::{ScannedFile, Walker, WalkerConfig};
