//! Passage and sentence splitting

use crate::tokenizer::tokenize;
use crate::types::{Corpus, Documents};
use unicode_segmentation::UnicodeSegmentation;

/// Split text into passages on line breaks, then into UAX #29 sentences.
/// Returned slices are trimmed; blank pieces are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split('\n')
        .flat_map(|passage| passage.unicode_sentences())
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

/// Build the sentence-level document set for the selected documents.
///
/// Each sentence is keyed by its literal text. Sentences without any token
/// are left out, so every entry can be scored.
pub fn sentence_documents<S: AsRef<str>>(corpus: &Corpus, ids: &[S]) -> Documents {
    let mut sentences = Documents::new();
    for id in ids {
        let Some(text) = corpus.get(id.as_ref()) else {
            continue;
        };
        for sentence in split_sentences(text) {
            let tokens = tokenize(sentence);
            if !tokens.is_empty() {
                sentences.insert(sentence, tokens);
            }
        }
    }
    sentences
}
