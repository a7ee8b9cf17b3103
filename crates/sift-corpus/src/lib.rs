//! Corpus loading and path resolution for sift

mod loader;
mod paths;

pub use loader::{CorpusError, load_files};
pub use paths::Paths;
