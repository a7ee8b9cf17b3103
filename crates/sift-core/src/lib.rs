//! TF-IDF document ranking and sentence selection

mod config;
mod idf;
mod pipeline;
mod rank;
mod sentences;
mod tokenizer;
mod types;

pub use config::{Config, ConfigError, RankConfig};
pub use idf::{IdfTable, compute_idfs};
pub use pipeline::{Answer, Pipeline};
pub use rank::{FileScore, SentenceScore, rank_files, rank_sentences, top_files, top_sentences};
pub use sentences::{sentence_documents, split_sentences};
pub use tokenizer::{is_stopword, tokenize, tokenize_query};
pub use types::{Collection, Corpus, Documents, Query, TokenSequence};
