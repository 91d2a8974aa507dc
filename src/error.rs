// Error taxonomy for scoring and color selection.
//
// Core operations return these directly. The pipeline and renderers wrap
// them in anyhow, so callers can still downcast to match on the variant.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CloudError {
    /// Thresholds/colors have the wrong shape, or a config failed to parse.
    #[error("invalid configuration: {0}")]
    Validation(String),

    /// A word reached color selection without a score. This means the
    /// renderer tokenized differently from the scorer.
    #[error("no score created for {word:?}")]
    Lookup { word: String },

    /// No threshold bucket accepted the score.
    #[error("score {score} for {word:?} is outside every threshold bucket")]
    Range { word: String, score: f64 },
}
