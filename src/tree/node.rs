//! Tree node and file entry types

use crate::tree::path::RelativePath;
use std::collections::BTreeMap;

/// Child map of a directory node; ordered so rendering is deterministic
pub type Children = BTreeMap<String, TreeNode>;

/// A hashed file, positioned relative to its scan root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub relative_path: RelativePath,
    pub hash: String,
}

impl FileEntry {
    pub fn new(relative_path: RelativePath, hash: impl Into<String>) -> Self {
        Self {
            relative_path,
            hash: hash.into(),
        }
    }
}

/// Manifest tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// A file and its content digest
    Leaf(String),
    /// A folder mapping child names to nodes
    Directory(Children),
}

impl TreeNode {
    /// Empty directory node
    pub fn directory() -> Self {
        TreeNode::Directory(Children::new())
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, TreeNode::Directory(_))
    }

    /// Children of a directory; `None` for a leaf
    pub fn children(&self) -> Option<&Children> {
        match self {
            TreeNode::Directory(children) => Some(children),
            TreeNode::Leaf(_) => None,
        }
    }

    /// Look up a node by `/`-separated path below this node
    pub fn get(&self, path: &str) -> Option<&TreeNode> {
        let mut node = self;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            node = node.children()?.get(segment)?;
        }
        Some(node)
    }

    /// All leaves as (`/`-joined path, hash) pairs, in pre-order
    pub fn leaves(&self) -> Vec<(String, &str)> {
        let mut leaves = Vec::new();
        let mut stack: Vec<(String, &TreeNode)> = vec![(String::new(), self)];

        while let Some((prefix, node)) = stack.pop() {
            match node {
                TreeNode::Leaf(hash) => leaves.push((prefix, hash.as_str())),
                TreeNode::Directory(children) => {
                    for (name, child) in children.iter().rev() {
                        let path = if prefix.is_empty() {
                            name.clone()
                        } else {
                            format!("{}/{}", prefix, name)
                        };
                        stack.push((path, child));
                    }
                }
            }
        }

        leaves
    }
}
