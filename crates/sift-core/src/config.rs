//! Configuration for ranking and corpus loading

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// How many results each ranking stage keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Top documents searched for sentences
    pub file_matches: usize,
    /// Sentences returned as the answer
    pub sentence_matches: usize,
}

impl RankConfig {
    pub fn new() -> Self {
        Self {
            file_matches: 1,
            sentence_matches: 1,
        }
    }
}

impl Default for RankConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// User configuration, usually read from `config.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Top documents searched for sentences
    pub file_matches: usize,

    /// Sentences returned as the answer
    pub sentence_matches: usize,

    /// File extensions loaded from the corpus directory
    pub extensions: Vec<String>,
}

impl Config {
    pub fn new() -> Self {
        let rank = RankConfig::new();
        Self {
            file_matches: rank.file_matches,
            sentence_matches: rank.sentence_matches,
            extensions: vec!["txt".to_string()],
        }
    }

    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn rank_config(&self) -> RankConfig {
        RankConfig {
            file_matches: self.file_matches,
            sentence_matches: self.sentence_matches,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
