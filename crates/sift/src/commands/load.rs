use crate::cli::CorpusArgs;
use anyhow::Context;
use sift_core::{Config, Corpus, Pipeline};
use sift_corpus::Paths;
use std::path::Path;
use tracing::{debug, warn};

/// Explicit config file, else the user config file if present, else defaults
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        return Ok(Config::load(path)?);
    }

    let default_path = match Paths::new() {
        Ok(paths) => paths.config_file(),
        Err(e) => {
            debug!(error = %e, "no config directory, using defaults");
            return Ok(Config::default());
        }
    };

    if default_path.exists() {
        Ok(Config::load(&default_path)?)
    } else {
        Ok(Config::default())
    }
}

/// Load config and apply command-line overrides
pub fn resolve_config(args: &CorpusArgs, sentences: Option<usize>) -> anyhow::Result<Config> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(n) = args.files {
        config.file_matches = n;
    }
    if let Some(n) = sentences {
        config.sentence_matches = n;
    }
    Ok(config)
}

pub fn load_corpus(dir: &Path, config: &Config) -> anyhow::Result<Corpus> {
    let corpus = sift_corpus::load_files(dir, &config.extensions)
        .with_context(|| format!("loading corpus from {}", dir.display()))?;
    if corpus.is_empty() {
        warn!(dir = %dir.display(), extensions = ?config.extensions, "no documents found");
    }
    Ok(corpus)
}

pub fn load_pipeline(dir: &Path, config: &Config) -> anyhow::Result<Pipeline> {
    let corpus = load_corpus(dir, config)?;
    Ok(Pipeline::new(corpus, config.rank_config()))
}
