// Color selection for rendered words.
//
// A ColorChooser owns the scores and the threshold table, and renderers
// receive it by reference instead of capturing them in a closure.

use crate::error::CloudError;

use super::bias::WordScores;
use super::palette::ThresholdTable;

/// Maps a rendered word to the color of its bias bucket.
#[derive(Debug, Clone)]
pub struct ColorChooser {
    scores: WordScores,
    table: ThresholdTable,
}

impl ColorChooser {
    pub fn new(scores: WordScores, table: ThresholdTable) -> Self {
        Self { scores, table }
    }

    /// Color for `word`.
    ///
    /// Fails with `Lookup` when the word was never scored. `Range` is
    /// unreachable for a validated table (scores are within [0, 1] and the
    /// last bound is 1) but is kept rather than picking a color silently.
    pub fn choose_color(&self, word: &str) -> Result<&str, CloudError> {
        let score = self.scores.get(word).ok_or_else(|| CloudError::Lookup {
            word: word.to_string(),
        })?;

        self.table
            .bucket_for(score)
            .map(|bucket| bucket.color.as_str())
            .ok_or_else(|| CloudError::Range {
                word: word.to_string(),
                score,
            })
    }

    pub fn scores(&self) -> &WordScores {
        &self.scores
    }

    pub fn table(&self) -> &ThresholdTable {
        &self.table
    }
}
