//! Report generation over the fixed install topology
//!
//! Four scan targets and the version lookup run concurrently. Nothing is
//! shared between them: each scan yields its own entry list, and the tree is
//! assembled single-threaded once every task has finished. The first failure
//! aborts the whole report.

use crate::config::{LayoutConfig, ManifestConfig};
use crate::error::{ManifestError, ScanError};
use crate::render::Renderer;
use crate::tree::builder::{splice, ConflictPolicy, TreeBuilder};
use crate::tree::hasher::{Blake3Hasher, ContentHasher};
use crate::tree::node::{Children, FileEntry, TreeNode};
use crate::tree::walker::{ScannedFile, Walker, WalkerConfig};
use crate::version::VersionReader;
use futures::stream::{self, StreamExt, TryStreamExt};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, trace};

/// Top-level key of the mods folder
pub const PLUGINS_KEY: &str = "Plugins";
/// Key of the managed assemblies folder inside the data folder
pub const MANAGED_KEY: &str = "Managed";

/// One directory to scan
#[derive(Debug, Clone)]
pub struct ScanTarget {
    pub dir: PathBuf,
    pub walker: WalkerConfig,
}

impl ScanTarget {
    fn new(dir: PathBuf, walker: WalkerConfig) -> Self {
        Self { dir, walker }
    }
}

/// The four scan targets of an install directory
#[derive(Debug, Clone)]
pub struct ScanPlan {
    pub plugins: ScanTarget,
    pub data_managed: ScanTarget,
    pub data_plugins: ScanTarget,
    pub root_files: ScanTarget,
}

impl ScanPlan {
    pub fn for_install(dir: &Path, layout: &LayoutConfig) -> Self {
        let data_dir = dir.join(layout.data_dir_name());
        Self {
            plugins: ScanTarget::new(dir.join(PLUGINS_KEY), WalkerConfig::recursive()),
            data_managed: ScanTarget::new(
                data_dir.join(MANAGED_KEY),
                WalkerConfig::recursive().with_name_filter(layout.managed_allow_list.clone()),
            ),
            data_plugins: ScanTarget::new(data_dir.join(PLUGINS_KEY), WalkerConfig::recursive()),
            root_files: ScanTarget::new(dir.to_path_buf(), WalkerConfig::shallow()),
        }
    }
}

/// Generates manifest reports for install directories
#[derive(Clone)]
pub struct ReportGenerator {
    layout: LayoutConfig,
    policy: ConflictPolicy,
    max_concurrent_reads: usize,
    hasher: Arc<dyn ContentHasher>,
}

impl ReportGenerator {
    /// Generator with BLAKE3 hashing
    pub fn new(config: &ManifestConfig) -> Self {
        Self::with_hasher(config, Arc::new(Blake3Hasher))
    }

    pub fn with_hasher(config: &ManifestConfig, hasher: Arc<dyn ContentHasher>) -> Self {
        Self {
            layout: config.layout.clone(),
            policy: config.conflict_policy,
            max_concurrent_reads: config.scan.max_concurrent_reads.max(1),
            hasher,
        }
    }

    /// Scan `dir` and render its manifest
    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub async fn generate(&self, dir: &Path) -> Result<String, ManifestError> {
        let start = Instant::now();
        let plan = ScanPlan::for_install(dir, &self.layout);
        let version_reader = VersionReader::new(self.layout.version_file.clone());

        let (title, plugins, data_managed, data_plugins, root_files) = tokio::try_join!(
            async { version_reader.read_version(dir).await.map_err(ManifestError::from) },
            self.scan_target(&plan.plugins),
            self.scan_target(&plan.data_managed),
            self.scan_target(&plan.data_plugins),
            self.scan_target(&plan.root_files),
        )?;

        let file_count =
            plugins.len() + data_managed.len() + data_plugins.len() + root_files.len();
        let root = self.merge(plugins, data_managed, data_plugins, root_files)?;
        let report = Renderer::new(self.hasher.digest_len()).render(&title, &root);

        info!(
            file_count,
            duration_ms = start.elapsed().as_millis(),
            "Manifest generated"
        );
        Ok(report)
    }

    /// Synchronous entry point owning its own runtime
    ///
    /// Fails when called from inside a running tokio runtime; use
    /// [`ReportGenerator::generate`] there instead.
    pub fn generate_blocking(&self, dir: &Path) -> Result<String, ManifestError> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(ManifestError::Task(
                "generate_blocking called from within an async runtime".to_string(),
            ));
        }
        let rt = tokio::runtime::Runtime::new()
            .map_err(|e| ManifestError::Task(format!("Failed to create runtime: {}", e)))?;
        rt.block_on(self.generate(dir))
    }

    /// Fold the scan results into one tree
    fn merge(
        &self,
        plugins: Vec<FileEntry>,
        data_managed: Vec<FileEntry>,
        data_plugins: Vec<FileEntry>,
        root_files: Vec<FileEntry>,
    ) -> Result<TreeNode, ManifestError> {
        let builder = TreeBuilder::with_policy(self.policy);

        let mut data = Children::new();
        data.insert(MANAGED_KEY.to_string(), builder.build(data_managed)?);
        data.insert(PLUGINS_KEY.to_string(), builder.build(data_plugins)?);

        let mut top = Children::new();
        top.insert(PLUGINS_KEY.to_string(), builder.build(plugins)?);
        top.insert(self.layout.data_dir_name(), TreeNode::Directory(data));

        if let TreeNode::Directory(root_children) = builder.build(root_files)? {
            splice(&mut top, root_children, self.policy)?;
        }

        Ok(TreeNode::Directory(top))
    }

    /// Walk one target, then read and hash its files with bounded concurrency
    #[instrument(skip_all, fields(dir = %target.dir.display()))]
    async fn scan_target(&self, target: &ScanTarget) -> Result<Vec<FileEntry>, ManifestError> {
        let walker = Walker::with_config(target.dir.clone(), target.walker.clone());
        let files = tokio::task::spawn_blocking(move || walker.scan()).await??;
        debug!(file_count = files.len(), "Hashing scanned files");

        stream::iter(files)
            .map(|file| {
                let hasher = Arc::clone(&self.hasher);
                async move {
                    let entry =
                        tokio::task::spawn_blocking(move || hash_file(hasher.as_ref(), file))
                            .await??;
                    Ok::<_, ManifestError>(entry)
                }
            })
            .buffer_unordered(self.max_concurrent_reads)
            .try_collect()
            .await
    }
}

fn hash_file(hasher: &dyn ContentHasher, file: ScannedFile) -> Result<FileEntry, ManifestError> {
    let content = std::fs::read(&file.path).map_err(|e| ScanError::Read {
        path: file.path.clone(),
        source: e,
    })?;
    let hash = hasher.hash(&content);
    trace!(path = %file.relative_path, hash = %hash, "Hashed file");
    Ok(FileEntry::new(file.relative_path, hash))
}

/// Generate a report for `dir` with the given configuration
pub async fn generate(dir: &Path, config: &ManifestConfig) -> Result<String, ManifestError> {
    ReportGenerator::new(config).generate(dir).await
}
