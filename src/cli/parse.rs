//! CLI parse: clap types for Manifest. No behavior; definitions only.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Manifest CLI - integrity manifests for installed applications
#[derive(Parser, Debug)]
#[command(name = "manifest")]
#[command(about = "Hash every file of an install directory and render a manifest tree")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (layered over defaults and the global config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan an install directory and print its manifest
    Generate(GenerateArgs),
    /// Print the effective configuration as TOML
    Config,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Install directory to scan
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Write the report to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Application name (data folder is `<APP_NAME>_Data`)
    #[arg(long)]
    pub app_name: Option<String>,

    /// Version marker file name at the install root
    #[arg(long)]
    pub version_file: Option<String>,

    /// Key collision handling (reject, overwrite)
    #[arg(long)]
    pub conflict_policy: Option<String>,
}
