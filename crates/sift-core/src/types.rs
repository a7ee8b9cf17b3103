//! Core types shared by the ranking engine

use std::collections::{BTreeSet, HashMap};

/// Normalized word tokens of one document or sentence, in original order
pub type TokenSequence = Vec<String>;

/// Normalized query words. Ordered so score sums are reproducible.
pub type Query = BTreeSet<String>;

/// Insertion-ordered mapping from identifier to value.
///
/// Re-inserting an existing identifier replaces the value but keeps the
/// original position, so iteration order only depends on first insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<V> {
    entries: Vec<(String, V)>,
    positions: HashMap<String, usize>,
}

/// Document identifier -> raw text
pub type Corpus = Collection<String>;

/// Document (or sentence) identifier -> tokens
pub type Documents = Collection<TokenSequence>;

impl<V> Collection<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Insert or replace a value, returning the previous one if any
    pub fn insert(&mut self, id: impl Into<String>, value: V) -> Option<V> {
        let id = id.into();
        match self.positions.get(&id) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.positions.insert(id.clone(), self.entries.len());
                self.entries.push((id, value));
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&V> {
        self.positions.get(id).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.entries.iter().map(|(id, value)| (id.as_str(), value))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(id, _)| id.as_str())
    }
}

impl<V> Default for Collection<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Collection<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut collection = Self::new();
        for (id, value) in iter {
            collection.insert(id, value);
        }
        collection
    }
}
