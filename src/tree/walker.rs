//! Filesystem walker for collecting candidate files under a scan target

use crate::error::ScanError;
use crate::tree::path::RelativePath;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, trace};
use walkdir::{DirEntry, WalkDir};

/// A file selected by the walker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// Absolute (or caller-relative) path used for reading
    pub path: PathBuf,
    /// Path relative to the scan root
    pub relative_path: RelativePath,
}

/// Filesystem walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Descend into subdirectories
    pub recursive: bool,
    /// Base-name allow-list (None = accept every name)
    pub name_filter: Option<Vec<String>>,
}

impl WalkerConfig {
    pub fn recursive() -> Self {
        Self {
            recursive: true,
            name_filter: None,
        }
    }

    pub fn shallow() -> Self {
        Self {
            recursive: false,
            name_filter: None,
        }
    }

    pub fn with_name_filter(mut self, names: Vec<String>) -> Self {
        self.name_filter = Some(names);
        self
    }
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a recursive, unfiltered walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::recursive(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the scan target and collect matching files
    ///
    /// Only names shaped like `*.*` are candidates; hidden entries are neither
    /// matched nor descended into. A missing root yields no files.
    #[instrument(
        skip(self),
        fields(root = %self.root.display(), recursive = self.config.recursive)
    )]
    pub fn scan(&self) -> Result<Vec<ScannedFile>, ScanError> {
        if !self.root.is_dir() {
            debug!("Scan target missing, treating as empty");
            return Ok(Vec::new());
        }

        let max_depth = if self.config.recursive { usize::MAX } else { 1 };
        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_hidden(entry));

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| ScanError::Walk {
                path: self.root.clone(),
                source: e,
            })?;

            let name = entry.file_name().to_string_lossy();
            if !has_extension_style_name(&name) {
                continue;
            }

            if !is_regular_file(&entry)? {
                trace!(path = %entry.path().display(), "Skipping non-file entry");
                continue;
            }

            if let Some(filter) = &self.config.name_filter {
                if !filter.iter().any(|allowed| allowed.as_str() == name) {
                    trace!(path = %entry.path().display(), "Skipping file outside allow-list");
                    continue;
                }
            }

            let relative_path = RelativePath::from_root(&self.root, entry.path())?;
            files.push(ScannedFile {
                path: entry.into_path(),
                relative_path,
            });
        }

        debug!(file_count = files.len(), "Scan complete");
        Ok(files)
    }
}

/// `*.*` match: a dot somewhere after the first character
fn has_extension_style_name(name: &str) -> bool {
    !name.starts_with('.') && name.contains('.')
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Regular file, or a symlink whose target is one
fn is_regular_file(entry: &DirEntry) -> Result<bool, ScanError> {
    if entry.file_type().is_file() {
        return Ok(true);
    }
    if !entry.path_is_symlink() {
        return Ok(false);
    }
    match std::fs::metadata(entry.path()) {
        Ok(metadata) => Ok(metadata.is_file()),
        // Dangling link
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(ScanError::Read {
            path: entry.path().to_path_buf(),
            source: e,
        }),
    }
}
