// Bias scores: which group leans on a word more.
//
// score = f1 / (f1 + f2), where f1 and f2 are the word's normalized
// frequencies in group 1 and group 2.
//   1.0 -> only group 1 used it
//   0.5 -> both groups used it at the same rate
//   0.0 -> only group 2 used it

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::frequency::FrequencyTable;

/// Bias score for every word in the union of both vocabularies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordScores {
    scores: BTreeMap<String, f64>,
}

impl WordScores {
    /// Score every word that appears in either table.
    ///
    /// Each word in the union has a nonzero frequency in at least one group,
    /// so the denominator is never zero.
    pub fn compute(group_1: &FrequencyTable, group_2: &FrequencyTable) -> Self {
        let mut scores = BTreeMap::new();
        for word in group_1.words().chain(group_2.words()) {
            if scores.contains_key(word) {
                continue;
            }
            let f1 = group_1.frequency(word);
            let f2 = group_2.frequency(word);
            scores.insert(word.to_string(), f1 / (f1 + f2));
        }

        debug!(
            group_1_vocab = group_1.vocabulary_size(),
            group_2_vocab = group_2.vocabulary_size(),
            scored = scores.len(),
            "Computed word bias scores"
        );

        Self { scores }
    }

    pub fn get(&self, word: &str) -> Option<f64> {
        self.scores.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Words and scores in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(w, s)| (w.as_str(), *s))
    }
}
