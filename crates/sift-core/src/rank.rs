//! Document and sentence ranking
//!
//! Documents are scored by summed TF-IDF. Sentences are scored by the summed
//! IDF of the distinct query words they contain, with query-term density
//! breaking ties. Both sorts are stable, so equal scores keep input order.

use crate::idf::IdfTable;
use crate::types::{Documents, Query};
use serde::Serialize;
use std::collections::HashMap;

/// A document and its TF-IDF score against a query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileScore {
    pub id: String,
    pub score: f64,
}

/// A sentence and its ranking keys
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceScore {
    pub sentence: String,
    /// Sum of IDF over distinct query words present
    pub idf_sum: f64,
    /// Query word occurrences / sentence length
    pub density: f64,
}

fn term_counts(tokens: &[String]) -> HashMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}

fn tf_idf(query: &Query, tokens: &[String], idfs: &IdfTable) -> f64 {
    let counts = term_counts(tokens);
    query
        .iter()
        .map(|word| {
            let tf = counts.get(word.as_str()).copied().unwrap_or(0);
            tf as f64 * idfs.get(word)
        })
        .sum()
}

/// Score every document, best first
pub fn rank_files(query: &Query, files: &Documents, idfs: &IdfTable) -> Vec<FileScore> {
    let mut scores: Vec<FileScore> = files
        .iter()
        .map(|(id, tokens)| FileScore {
            id: id.to_string(),
            score: tf_idf(query, tokens, idfs),
        })
        .collect();

    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    scores
}

/// Identifiers of the `n` best documents for `query`
pub fn top_files(query: &Query, files: &Documents, idfs: &IdfTable, n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    rank_files(query, files, idfs)
        .into_iter()
        .take(n)
        .map(|scored| scored.id)
        .collect()
}

fn score_sentence(
    sentence: &str,
    tokens: &[String],
    query: &Query,
    idfs: &IdfTable,
) -> SentenceScore {
    let counts = term_counts(tokens);
    let mut idf_sum = 0.0;
    let mut matches = 0usize;

    for word in query {
        if let Some(&count) = counts.get(word.as_str()) {
            idf_sum += idfs.get(word);
            matches += count;
        }
    }

    let density = if tokens.is_empty() {
        0.0
    } else {
        matches as f64 / tokens.len() as f64
    };

    SentenceScore {
        sentence: sentence.to_string(),
        idf_sum,
        density,
    }
}

/// Score every sentence, best first by (idf sum, density)
pub fn rank_sentences(
    query: &Query,
    sentences: &Documents,
    idfs: &IdfTable,
) -> Vec<SentenceScore> {
    let mut scores: Vec<SentenceScore> = sentences
        .iter()
        .map(|(sentence, tokens)| score_sentence(sentence, tokens, query, idfs))
        .collect();

    scores.sort_by(|a, b| {
        b.idf_sum
            .total_cmp(&a.idf_sum)
            .then_with(|| b.density.total_cmp(&a.density))
    });
    scores
}

/// Text of the `n` best sentences for `query`
pub fn top_sentences(
    query: &Query,
    sentences: &Documents,
    idfs: &IdfTable,
    n: usize,
) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    rank_sentences(query, sentences, idfs)
        .into_iter()
        .take(n)
        .map(|scored| scored.sentence)
        .collect()
}
