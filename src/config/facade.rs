//! Config loader facade: assembles sources in precedence order.

use super::merge::builder_with_defaults;
use super::sources::{environment, explicit_file, global_file};
use super::ManifestConfig;
use crate::error::ManifestError;
use std::path::Path;
use tracing::debug;

/// Loads [`ManifestConfig`] from layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration: defaults, global file, optional explicit file,
    /// then environment overrides. The result is validated.
    pub fn load(explicit: Option<&Path>) -> Result<ManifestConfig, ManifestError> {
        let mut builder = builder_with_defaults()?;
        builder = global_file::add_to_builder(builder)?;
        if let Some(path) = explicit {
            builder = explicit_file::add_to_builder(builder, path)?;
        }
        builder = environment::add_to_builder(builder);

        let config: ManifestConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        debug!(
            app_name = %config.layout.app_name,
            conflict_policy = ?config.conflict_policy,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration from a single file over defaults, skipping the
    /// global file and the environment.
    pub fn load_from_file(path: &Path) -> Result<ManifestConfig, ManifestError> {
        let builder = explicit_file::add_to_builder(builder_with_defaults()?, path)?;
        let config: ManifestConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
