// Word cloud rendering: turning scored, normalized text into output.

pub mod layout;
pub mod terminal;
pub mod traits;

use std::collections::HashMap;

use crate::text::normalize::tokenize;

/// Count words in normalized text and keep the `max_words` most frequent.
///
/// Sorted by count descending, then alphabetically, so output is stable
/// across runs.
pub fn ranked_words(normalized: &str, max_words: usize) -> Vec<(String, u32)> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for token in tokenize(normalized) {
        *counts.entry(token).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, u32)> = counts
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(max_words);
    ranked
}
