//! Word tokenizer with English stopword removal
//!
//! Lowercases, splits on UAX #29 word boundaries, separates Treebank clitics
//! (`python's` -> `python`, `'s`; `can't` -> `ca`, `n't`), then drops
//! stopwords and segments without any letter or digit (punctuation, symbols,
//! whitespace). No stemming: the lowercased surface form is the unit of
//! comparison.

use crate::types::{Query, TokenSequence};
use std::collections::HashSet;
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

static STOPWORD_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// NLTK English stopword list
static STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

pub fn is_stopword(token: &str) -> bool {
    STOPWORD_SET
        .get_or_init(|| STOPWORDS.iter().copied().collect())
        .contains(token)
}

/// Clitic suffixes split off a word, checked in order
static CLITICS: &[&str] = &["n't", "'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Split a trailing clitic off `word`. The stem must be non-empty.
fn split_clitic(word: &str) -> (&str, Option<&str>) {
    for clitic in CLITICS {
        if let Some(stem) = word.strip_suffix(*clitic) {
            if !stem.is_empty() {
                return (stem, Some(&word[stem.len()..]));
            }
        }
    }
    (word, None)
}

/// True when the segment has no letter or digit
fn is_punctuation(segment: &str) -> bool {
    !segment.chars().any(char::is_alphanumeric)
}

/// Tokenize a document or sentence, keeping order and duplicates
pub fn tokenize(text: &str) -> TokenSequence {
    // Typographic apostrophes would otherwise slip past the stopword list
    let lowered = text.to_lowercase().replace('\u{2019}', "'");
    lowered
        .split_word_bounds()
        .flat_map(|segment| {
            let (stem, clitic) = split_clitic(segment);
            std::iter::once(stem).chain(clitic)
        })
        .filter(|segment| !is_punctuation(segment))
        .filter(|segment| !is_stopword(segment))
        .map(str::to_string)
        .collect()
}

/// Tokenize free-form query text into a set of words
pub fn tokenize_query(text: &str) -> Query {
    tokenize(text).into_iter().collect()
}
