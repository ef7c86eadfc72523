//! Report title lookup from the installed version marker

use crate::error::ScanError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Title used when the marker file is absent
pub const VERSION_MISSING: &str = "Version Missing";

/// Reads the version marker at the root of an install directory
#[derive(Debug, Clone)]
pub struct VersionReader {
    marker: String,
}

impl VersionReader {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    pub fn marker_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.marker)
    }

    /// Raw marker content, or [`VERSION_MISSING`] when there is no marker
    pub async fn read_version(&self, dir: &Path) -> Result<String, ScanError> {
        let path = self.marker_path(dir);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Version marker missing");
                Ok(VERSION_MISSING.to_string())
            }
            Err(e) => Err(ScanError::Read { path, source: e }),
        }
    }
}
