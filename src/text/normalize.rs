// Word normalization shared by the scorer and the renderers.
//
// Both sides must agree on what a "word" is, otherwise the renderer asks
// for colors of words the scorer never saw. Everything downstream splits
// the output of `preprocess_text` on whitespace and nothing else.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

/// A word starts with a Unicode word character and may carry apostrophes
/// after it (contractions, possessives).
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w[\w']*").expect("word regex is valid"));

/// Punctuation whose presence in raw input is worth a warning.
const PUNCTUATION: [char; 4] = ['.', ',', '?', '!'];

/// Normalize raw text into space-separated lowercase tokens.
///
/// Trailing possessives are removed (`"Dog's"` -> `"dog"`) and tokens made
/// only of digits are dropped. Running it on its own output is a no-op.
pub fn preprocess_text(text: &str) -> String {
    WORD_RE
        .find_iter(text)
        .filter_map(|m| normalize_word(m.as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn normalize_word(raw: &str) -> Option<String> {
    let mut word = raw.to_lowercase();
    while let Some(stripped) = word.strip_suffix("'s") {
        word.truncate(stripped.len());
    }

    if word.is_empty() || word.chars().all(char::is_numeric) {
        return None;
    }
    Some(word)
}

/// Split normalized text into tokens.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

/// Warn about input that looks like it skipped preprocessing.
///
/// Purely advisory: the pipeline normalizes anyway, but punctuation and
/// capitals in the raw corpus usually mean the caller expected the text to
/// be scored as-is.
pub fn lint_corpus(label: &str, text: &str) {
    if text.contains(PUNCTUATION) {
        warn!(
            group = label,
            "Text has punctuation. Consider removing punctuation for better results"
        );
    }
    if text.chars().any(char::is_uppercase) {
        warn!(
            group = label,
            "Text is not lowercase. Consider lowercasing it for better results"
        );
    }
}
