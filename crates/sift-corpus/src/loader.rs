//! Read a directory of plain-text documents into a corpus

use sift_core::Corpus;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read document {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}

/// Load every regular file in `dir` whose extension is in `extensions`.
///
/// Documents are keyed by file name and inserted in ascending name order.
/// Content must be valid UTF-8.
pub fn load_files(dir: &Path, extensions: &[String]) -> Result<Corpus, CorpusError> {
    let read_dir_err = |source| CorpusError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if path.is_file() && has_extension(&path, extensions) {
            paths.push(path);
        } else {
            debug!(path = %path.display(), "skipping");
        }
    }
    paths.sort();

    let mut corpus = Corpus::new();
    for path in paths {
        let content = std::fs::read_to_string(&path).map_err(|source| CorpusError::ReadFile {
            path: path.clone(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        corpus.insert(name, content);
    }

    info!(documents = corpus.len(), dir = %dir.display(), "loaded corpus");
    Ok(corpus)
}
