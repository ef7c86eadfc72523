//! CLI route: single route table and run context. Dispatches to report generation.

use crate::cli::parse::{Commands, GenerateArgs};
use crate::config::ManifestConfig;
use crate::error::ManifestError;
use crate::report::ReportGenerator;
use crate::tree::builder::ConflictPolicy;
use anyhow::{ensure, Context};
use tracing::info;

/// Runtime context for CLI execution: the loaded configuration.
pub struct RunContext {
    config: ManifestConfig,
}

impl RunContext {
    pub fn with_config(config: ManifestConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ManifestConfig {
        &self.config
    }

    /// Execute a command and return its stdout text.
    pub fn execute(&self, command: &Commands) -> anyhow::Result<String> {
        match command {
            Commands::Generate(args) => self.handle_generate(args),
            Commands::Config => Ok(self.config.to_toml()?),
        }
    }

    fn handle_generate(&self, args: &GenerateArgs) -> anyhow::Result<String> {
        ensure!(
            args.dir.is_dir(),
            "Install directory not found: {}",
            args.dir.display()
        );

        let config = apply_overrides(&self.config, args)?;
        let report = ReportGenerator::new(&config)
            .generate_blocking(&args.dir)
            .with_context(|| format!("Failed to generate manifest for {}", args.dir.display()))?;

        match &args.output {
            Some(path) => {
                std::fs::write(path, &report)
                    .with_context(|| format!("Failed to write manifest to {}", path.display()))?;
                info!(path = %path.display(), "Manifest written");
                Ok(format!("Manifest written to {}", path.display()))
            }
            None => Ok(report),
        }
    }
}

/// Layer per-invocation flags over the loaded configuration.
fn apply_overrides(
    base: &ManifestConfig,
    args: &GenerateArgs,
) -> Result<ManifestConfig, ManifestError> {
    let mut config = base.clone();
    if let Some(app_name) = &args.app_name {
        config.layout.app_name = app_name.clone();
    }
    if let Some(version_file) = &args.version_file {
        config.layout.version_file = version_file.clone();
    }
    if let Some(policy) = &args.conflict_policy {
        config.conflict_policy = parse_conflict_policy(policy)?;
    }
    config.validate()?;
    Ok(config)
}

fn parse_conflict_policy(value: &str) -> Result<ConflictPolicy, ManifestError> {
    match value {
        "reject" => Ok(ConflictPolicy::Reject),
        "overwrite" => Ok(ConflictPolicy::Overwrite),
        _ => Err(ManifestError::Config(format!(
            "Invalid conflict policy: {} (must be 'reject' or 'overwrite')",
            value
        ))),
    }
}
