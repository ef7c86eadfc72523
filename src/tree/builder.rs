//! Tree builder for folding flat file entries into a manifest tree

use crate::error::TreeError;
use crate::tree::node::{Children, FileEntry, TreeNode};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How to resolve two entries that claim the same tree position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Fail the build on any collision
    #[default]
    Reject,
    /// Later entries replace earlier nodes
    Overwrite,
}

/// Tree builder for constructing manifest trees
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    policy: ConflictPolicy,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ConflictPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ConflictPolicy {
        self.policy
    }

    /// Build a directory tree from file entries
    ///
    /// Every entry becomes exactly one leaf. The result does not depend on
    /// input order unless entries collide and the policy is `Overwrite`.
    #[instrument(skip_all)]
    pub fn build<I>(&self, entries: I) -> Result<TreeNode, TreeError>
    where
        I: IntoIterator<Item = FileEntry>,
    {
        let mut root = Children::new();
        let mut leaf_count = 0usize;

        for entry in entries {
            self.insert(&mut root, entry)?;
            leaf_count += 1;
        }

        debug!(leaf_count, "Tree build completed");
        Ok(TreeNode::Directory(root))
    }

    fn insert(&self, root: &mut Children, entry: FileEntry) -> Result<(), TreeError> {
        let FileEntry {
            relative_path,
            hash,
        } = entry;
        let segments = relative_path.segments();
        let Some((file_name, parents)) = segments.split_last() else {
            return Ok(());
        };

        let mut children = root;
        for (depth, segment) in parents.iter().enumerate() {
            let slot = children
                .entry(segment.clone())
                .or_insert_with(TreeNode::directory);
            children = self.ensure_directory(slot, || segments[..=depth].join("/"))?;
        }

        match children.get(file_name) {
            Some(existing) if self.policy == ConflictPolicy::Reject => {
                let path = relative_path.to_string();
                return Err(if existing.is_directory() {
                    TreeError::PathConflict { path }
                } else {
                    TreeError::DuplicatePath { path }
                });
            }
            _ => {}
        }
        children.insert(file_name.clone(), TreeNode::Leaf(hash));
        Ok(())
    }

    /// Resolve `slot` to a directory's children, applying the conflict policy
    /// when it currently holds a leaf.
    fn ensure_directory<'a>(
        &self,
        slot: &'a mut TreeNode,
        path: impl FnOnce() -> String,
    ) -> Result<&'a mut Children, TreeError> {
        if let TreeNode::Leaf(_) = slot {
            if self.policy == ConflictPolicy::Reject {
                return Err(TreeError::PathConflict { path: path() });
            }
            *slot = TreeNode::directory();
        }
        match slot {
            TreeNode::Directory(children) => Ok(children),
            TreeNode::Leaf(_) => Err(TreeError::PathConflict { path: path() }),
        }
    }
}

/// Splice `source` onto `target`'s top level
///
/// Keys already present in `target` collide; under `Overwrite` the node from
/// `source` wins.
pub fn splice(
    target: &mut Children,
    source: Children,
    policy: ConflictPolicy,
) -> Result<(), TreeError> {
    for (key, node) in source {
        if policy == ConflictPolicy::Reject && target.contains_key(&key) {
            return Err(TreeError::KeyCollision { key });
        }
        target.insert(key, node);
    }
    Ok(())
}
