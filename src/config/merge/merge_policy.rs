//! Merge rules: defaults, override order, conflict handling.
//!
//! Later sources override earlier ones key by key: defaults, then the global
//! file, then an explicit file, then the environment.

use crate::config::{default_app_name, default_max_concurrent_reads, default_version_file};
use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("conflict_policy", "reject")?
        .set_default("layout.app_name", default_app_name())?
        .set_default("layout.version_file", default_version_file())?
        .set_default(
            "scan.max_concurrent_reads",
            default_max_concurrent_reads() as i64,
        )
}
