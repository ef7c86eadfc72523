//! Manifest: content-addressed integrity reports for installed applications
//!
//! Walks the known folders of an install directory, hashes every file and
//! renders the result as an aligned, `tree`-style text report.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod report;
pub mod tree;
pub mod version;

pub use error::{ManifestError, ScanError, TreeError};
pub use render::Renderer;
pub use report::{generate, ReportGenerator};
pub use tree::{ConflictPolicy, FileEntry, TreeBuilder, TreeNode};
