//! Text rendering of manifest trees
//!
//! The report is a header line followed by one line per tree node. Every line
//! starts with a fixed-width hash column (digest length plus one separating
//! space; blank for directories and the header), then the node name decorated
//! with `tree`-style connector glyphs:
//!
//! ```text
//!                                          1.29.1
//! 3f1c...                                  ├─ Beat Saber.exe
//!                                          └─ Plugins
//! 8a02...                                     └─ SongCore.dll
//! ```
//!
//! Siblings at every level, the top level included, render in byte-wise
//! ascending name order. The top level is therefore not grouped as mods
//! folder, data folder, then root files: `Beat Saber.exe` sorts before
//! `Beat Saber_Data`, and `Plugins` sorts after both. Reports stay identical
//! across runs regardless of scan completion or filesystem listing order.

use crate::tree::hasher::DIGEST_HEX_LEN;
use crate::tree::node::{Children, TreeNode};

const BRANCH: &str = "├─ ";
const LAST_BRANCH: &str = "└─ ";
const CONTINUATION: &str = "│  ";
const BLANK: &str = "   ";

/// One display line, before column formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderLine<'a> {
    /// Nesting level; top-level entries are at depth 0
    pub depth: usize,
    /// Ancestor continuation glyphs followed by this node's connector
    pub prefix: String,
    pub name: &'a str,
    /// Digest for leaves; `None` for directories
    pub hash: Option<&'a str>,
}

/// Renders manifest trees as aligned text
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    hash_width: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DIGEST_HEX_LEN)
    }
}

impl Renderer {
    /// Renderer for digests of `hash_width` characters
    pub fn new(hash_width: usize) -> Self {
        Self { hash_width }
    }

    pub fn hash_width(&self) -> usize {
        self.hash_width
    }

    /// Render `root` below a `title` header line
    pub fn render(&self, title: &str, root: &TreeNode) -> String {
        let mut output = String::new();
        output.push_str(&" ".repeat(self.hash_width + 1));
        output.push_str(title);

        for line in lines(root) {
            output.push('\n');
            output.push_str(&self.format_line(&line));
        }

        output
    }

    fn format_line(&self, line: &RenderLine<'_>) -> String {
        format!(
            "{:<width$} {}{}",
            line.hash.unwrap_or(""),
            line.prefix,
            line.name,
            width = self.hash_width
        )
    }
}

struct Frame<'a> {
    name: &'a str,
    node: &'a TreeNode,
    indent: String,
    depth: usize,
    last: bool,
}

/// Flatten a tree into display lines, pre-order, children in key order
pub fn lines(root: &TreeNode) -> Vec<RenderLine<'_>> {
    let mut lines = Vec::new();
    let mut stack = Vec::new();

    if let TreeNode::Directory(children) = root {
        push_children(&mut stack, children, String::new(), 0);
    }

    while let Some(frame) = stack.pop() {
        let connector = if frame.last { LAST_BRANCH } else { BRANCH };
        let hash = match frame.node {
            TreeNode::Leaf(hash) => Some(hash.as_str()),
            TreeNode::Directory(_) => None,
        };
        lines.push(RenderLine {
            depth: frame.depth,
            prefix: format!("{}{}", frame.indent, connector),
            name: frame.name,
            hash,
        });

        if let TreeNode::Directory(children) = frame.node {
            let continuation = if frame.last { BLANK } else { CONTINUATION };
            let indent = format!("{}{}", frame.indent, continuation);
            push_children(&mut stack, children, indent, frame.depth + 1);
        }
    }

    lines
}

/// Push children in reverse so the first key pops first
fn push_children<'a>(
    stack: &mut Vec<Frame<'a>>,
    children: &'a Children,
    indent: String,
    depth: usize,
) {
    let count = children.len();
    for (index, (name, node)) in children.iter().enumerate().rev() {
        stack.push(Frame {
            name: name.as_str(),
            node,
            indent: indent.clone(),
            depth,
            last: index + 1 == count,
        });
    }
}
