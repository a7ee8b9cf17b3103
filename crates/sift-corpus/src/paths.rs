//! Path resolution for the user configuration file

use std::path::PathBuf;

/// Resolves standard sift paths
#[derive(Debug, Clone)]
pub struct Paths {
    pub config_dir: PathBuf,
}

impl Paths {
    /// Paths under the platform configuration directory
    pub fn new() -> std::io::Result<Self> {
        let base = dirs::config_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "config directory not found")
        })?;
        Ok(Self::with_root(base))
    }

    /// Paths under an explicit base directory
    pub fn with_root(base: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: base.into().join("sift"),
        }
    }

    /// Get config.json path
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }
}
