// Per-group word frequencies, normalized by the group's size.
//
// Normalizing by total token count is what makes two corpora of very
// different lengths comparable: a word that is 1% of a short corpus and 1%
// of a long corpus is equally "used" by both groups.

use std::collections::HashMap;

/// Token counts for one corpus plus their normalized frequencies.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, u32>,
    total: u32,
}

impl FrequencyTable {
    /// Count tokens. An empty iterator gives an empty table where every
    /// lookup is 0.0.
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts: HashMap<String, u32> = HashMap::new();
        let mut total = 0u32;
        for token in tokens {
            *counts.entry(token.to_string()).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    /// Normalized frequency of `word`; 0.0 when the word never appeared.
    pub fn frequency(&self, word: &str) -> f64 {
        match self.counts.get(word) {
            Some(&count) if self.total > 0 => count as f64 / self.total as f64,
            _ => 0.0,
        }
    }

    pub fn count(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Total number of tokens counted (not distinct words).
    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn vocabulary_size(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Distinct words seen in this corpus.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }
}
