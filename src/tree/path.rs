//! Relative path normalization
//!
//! Scanned paths are stored as ordered segments relative to the scan root and
//! always displayed with `/` separators, whatever the host convention.

use crate::error::ScanError;
use std::fmt;
use std::path::{Component, Path};

/// Path of a file relative to its scan root, as ordered segments
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelativePath {
    segments: Vec<String>,
}

impl RelativePath {
    /// Build a relative path from `path`, which must live under `root`.
    pub fn from_root(root: &Path, path: &Path) -> Result<Self, ScanError> {
        let relative = path.strip_prefix(root).map_err(|_| {
            ScanError::InvalidPath(format!("{:?} is not under {:?}", path, root))
        })?;

        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(name) => segments.push(name.to_string_lossy().into_owned()),
                Component::CurDir => {}
                other => {
                    return Err(ScanError::InvalidPath(format!(
                        "Unexpected component {:?} in {:?}",
                        other, relative
                    )))
                }
            }
        }

        if segments.is_empty() {
            return Err(ScanError::InvalidPath(format!(
                "{:?} does not name an entry below {:?}",
                path, root
            )));
        }

        Ok(Self { segments })
    }

    /// Parse a `/`-separated path string. Empty segments are dropped.
    pub fn parse(path: &str) -> Option<Self> {
        let segments: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Final segment (the file's base name)
    pub fn file_name(&self) -> &str {
        // Construction guarantees at least one segment
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}
