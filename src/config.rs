//! Configuration System
//!
//! Layered configuration for manifest generation: built-in defaults, the
//! global config file, an explicit config file, then `MANIFEST__*`
//! environment variables.

use crate::error::ManifestError;
use crate::logging::LoggingConfig;
use crate::tree::builder::ConflictPolicy;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Resolution of colliding tree keys
    #[serde(default)]
    pub conflict_policy: ConflictPolicy,

    /// Install directory layout
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Scan tuning
    #[serde(default)]
    pub scan: ScanConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Names of the fixed install topology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Application name; its data folder is `<app_name>_Data`
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Version marker file at the install root
    #[serde(default = "default_version_file")]
    pub version_file: String,

    /// Files reported from `<app_name>_Data/Managed`
    #[serde(default = "default_managed_allow_list")]
    pub managed_allow_list: Vec<String>,
}

pub(crate) fn default_app_name() -> String {
    "Beat Saber".to_string()
}

pub(crate) fn default_version_file() -> String {
    "BeatSaberVersion.txt".to_string()
}

pub(crate) fn default_managed_allow_list() -> Vec<String> {
    vec![
        "0Harmony.dll".to_string(),
        "Assembly-CSharp.dll".to_string(),
        "Assembly-CSharp-firstpass.dll".to_string(),
    ]
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            version_file: default_version_file(),
            managed_allow_list: default_managed_allow_list(),
        }
    }
}

impl LayoutConfig {
    /// Name of the application data folder
    pub fn data_dir_name(&self) -> String {
        format!("{}_Data", self.app_name)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.app_name.trim().is_empty() {
            return Err("App name cannot be empty".to_string());
        }
        if self.version_file.trim().is_empty() {
            return Err("Version file name cannot be empty".to_string());
        }
        if self.version_file.contains(['/', '\\']) {
            return Err(format!(
                "Version file must be a bare file name, got '{}'",
                self.version_file
            ));
        }
        Ok(())
    }
}

/// Scan tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Files read and hashed concurrently within one scan target
    #[serde(default = "default_max_concurrent_reads")]
    pub max_concurrent_reads: usize,
}

pub(crate) fn default_max_concurrent_reads() -> usize {
    16
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_concurrent_reads: default_max_concurrent_reads(),
        }
    }
}

impl ManifestConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ManifestError> {
        self.layout.validate().map_err(ManifestError::Config)?;
        if self.scan.max_concurrent_reads == 0 {
            return Err(ManifestError::Config(
                "scan.max_concurrent_reads must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, ManifestError> {
        toml::to_string_pretty(self)
            .map_err(|e| ManifestError::Config(format!("Failed to serialize config: {}", e)))
    }
}
