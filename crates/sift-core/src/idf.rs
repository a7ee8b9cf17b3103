//! Inverse document frequency over a set of tokenized documents

use crate::types::Documents;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Word -> ln(total documents / documents containing the word).
///
/// Only words seen in at least one document have an entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IdfTable {
    scores: HashMap<String, f64>,
}

impl IdfTable {
    /// IDF of `word`, 0.0 when the word never occurred
    pub fn get(&self, word: &str) -> f64 {
        self.scores.get(word).copied().unwrap_or(0.0)
    }

    /// IDF of `word` if it has an entry
    pub fn score(&self, word: &str) -> Option<f64> {
        self.scores.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.scores.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.scores.iter().map(|(word, &idf)| (word.as_str(), idf))
    }
}

/// Compute IDF values from document frequency (not raw term counts)
pub fn compute_idfs(documents: &Documents) -> IdfTable {
    let doc_count = documents.len();
    if doc_count == 0 {
        return IdfTable::default();
    }

    let mut doc_freq: HashMap<&str, usize> = HashMap::new();
    for (_, tokens) in documents.iter() {
        let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for token in unique {
            *doc_freq.entry(token).or_insert(0) += 1;
        }
    }

    let scores = doc_freq
        .into_iter()
        .map(|(term, df)| (term.to_string(), (doc_count as f64 / df as f64).ln()))
        .collect();

    IdfTable { scores }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(entries: &[(&str, &[&str])]) -> Documents {
        entries
            .iter()
            .map(|(id, tokens)| {
                (
                    id.to_string(),
                    tokens.iter().map(|t| t.to_string()).collect::<Vec<_>>(),
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_documents() {
        let idfs = compute_idfs(&Documents::new());
        assert!(idfs.is_empty());
    }

    #[test]
    fn test_idf_values() {
        let documents = docs(&[
            ("doc1", &["rust", "code"]),
            ("doc2", &["python", "code"]),
            ("doc3", &["rust", "rust", "systems"]),
            ("doc4", &["code"]),
        ]);
        let idfs = compute_idfs(&documents);

        assert!((idfs.get("rust") - (4.0f64 / 2.0).ln()).abs() < 1e-12);
        assert!((idfs.get("python") - 4.0f64.ln()).abs() < 1e-12);
        assert!((idfs.get("code") - (4.0f64 / 3.0).ln()).abs() < 1e-12);
    }

    #[test]
    fn test_repeated_term_counts_once_per_document() {
        let documents = docs(&[("doc1", &["echo", "echo", "echo"]), ("doc2", &["quiet"])]);
        let idfs = compute_idfs(&documents);
        assert!((idfs.get("echo") - 2.0f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_word_in_every_document_scores_zero_but_present() {
        let documents = docs(&[("doc1", &["shared", "one"]), ("doc2", &["shared", "two"])]);
        let idfs = compute_idfs(&documents);
        assert!(idfs.contains("shared"));
        assert_eq!(idfs.score("shared"), Some(0.0));
    }

    #[test]
    fn test_missing_word_defaults_to_zero() {
        let documents = docs(&[("doc1", &["present"])]);
        let idfs = compute_idfs(&documents);
        assert!(!idfs.contains("absent"));
        assert_eq!(idfs.score("absent"), None);
        assert_eq!(idfs.get("absent"), 0.0);
    }

    #[test]
    fn test_full_coverage() {
        let documents = docs(&[
            ("doc1", &["alpha", "beta", "alpha"]),
            ("doc2", &["gamma"]),
            ("doc3", &[]),
        ]);
        let idfs = compute_idfs(&documents);

        for (_, tokens) in documents.iter() {
            for token in tokens {
                assert!(idfs.contains(token), "missing {}", token);
            }
        }
        assert_eq!(idfs.len(), 3);

        let mut words: Vec<&str> = idfs.iter().map(|(word, _)| word).collect();
        words.sort();
        assert_eq!(words, vec!["alpha", "beta", "gamma"]);
        assert!(idfs.iter().all(|(_, idf)| idf >= 0.0));
    }

    #[test]
    fn test_rarer_words_score_higher() {
        let documents = docs(&[
            ("doc1", &["common", "uncommon", "rare"]),
            ("doc2", &["common", "uncommon"]),
            ("doc3", &["common"]),
        ]);
        let idfs = compute_idfs(&documents);
        assert!(idfs.get("rare") > idfs.get("uncommon"));
        assert!(idfs.get("uncommon") > idfs.get("common"));
    }

    #[test]
    fn test_independent_of_insertion_order() {
        let forward = docs(&[("doc1", &["a1", "b2"]), ("doc2", &["b2", "c3"])]);
        let backward = docs(&[("doc2", &["b2", "c3"]), ("doc1", &["a1", "b2"])]);
        assert_eq!(compute_idfs(&forward), compute_idfs(&backward));
    }
}
