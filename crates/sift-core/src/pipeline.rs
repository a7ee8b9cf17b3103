//! Two-stage question answering over an in-memory corpus

use crate::config::RankConfig;
use crate::idf::{IdfTable, compute_idfs};
use crate::rank::{FileScore, SentenceScore, rank_files, rank_sentences};
use crate::sentences::sentence_documents;
use crate::tokenizer::{tokenize, tokenize_query};
use crate::types::{Corpus, Documents, Query};
use serde::Serialize;
use tracing::debug;

/// Result of one query
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Answer {
    /// Normalized query words
    pub query: Vec<String>,
    /// Documents searched for sentences, best first
    pub files: Vec<FileScore>,
    /// Answer sentences, best first
    pub sentences: Vec<SentenceScore>,
}

impl Answer {
    /// Answer sentences in their original form
    pub fn sentence_texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.sentences.iter().map(|s| s.sentence.as_str())
    }
}

/// Tokenized corpus plus its document-level IDF table.
///
/// Immutable once built; independent queries can share one instance.
pub struct Pipeline {
    corpus: Corpus,
    files: Documents,
    file_idfs: IdfTable,
    config: RankConfig,
}

impl Pipeline {
    pub fn new(corpus: Corpus, config: RankConfig) -> Self {
        let files: Documents = corpus
            .iter()
            .map(|(id, text)| (id, tokenize(text)))
            .collect();
        let file_idfs = compute_idfs(&files);

        debug!(
            documents = files.len(),
            vocabulary = file_idfs.len(),
            "indexed corpus"
        );

        Self {
            corpus,
            files,
            file_idfs,
            config,
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn files(&self) -> &Documents {
        &self.files
    }

    pub fn file_idfs(&self) -> &IdfTable {
        &self.file_idfs
    }

    pub fn config(&self) -> RankConfig {
        self.config
    }

    /// Rank documents only, keeping every scored entry
    pub fn rank_files(&self, query: &Query) -> Vec<FileScore> {
        rank_files(query, &self.files, &self.file_idfs)
    }

    pub fn answer(&self, query_text: &str) -> Answer {
        self.answer_query(&tokenize_query(query_text))
    }

    pub fn answer_query(&self, query: &Query) -> Answer {
        let query_words: Vec<String> = query.iter().cloned().collect();
        if self.config.file_matches == 0 || self.config.sentence_matches == 0 {
            return Answer {
                query: query_words,
                ..Answer::default()
            };
        }

        let mut files = self.rank_files(query);
        files.truncate(self.config.file_matches);

        let ids: Vec<&str> = files.iter().map(|f| f.id.as_str()).collect();
        let sentences = sentence_documents(&self.corpus, &ids);
        // Scoped to the selected documents only; never the file-level table
        let sentence_idfs = compute_idfs(&sentences);

        let mut ranked = rank_sentences(query, &sentences, &sentence_idfs);
        ranked.truncate(self.config.sentence_matches);

        debug!(
            files = files.len(),
            candidates = sentences.len(),
            returned = ranked.len(),
            "answered query"
        );

        Answer {
            query: query_words,
            files,
            sentences: ranked,
        }
    }
}
