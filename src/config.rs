use serde::{Deserialize, Serialize};

use crate::error::CloudError;
use crate::render::traits::Canvas;
use crate::scoring::palette::ThresholdTable;

/// Score upper bounds for the five default buckets.
pub const DEFAULT_THRESHOLDS: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];

/// Colors for the default buckets: red for group-2-heavy words, grey for
/// balanced ones, blue for group-1-heavy ones.
pub const DEFAULT_COLORS: [&str; 5] = ["#ff0000", "#ffa6a6", "grey", "#a6c5ff", "#0059ff"];

/// Everything a caller can tune about a generated cloud.
///
/// Every field has a default, so a JSON config only needs the fields it
/// overrides. The thresholds and colors are only checked when
/// `threshold_table()` is called.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    /// Ascending score upper bounds; the last must be exactly 1.
    pub thresholds: Vec<f64>,
    /// One color per threshold.
    pub colors: Vec<String>,
    pub height: u32,
    pub width: u32,
    pub background_color: String,
    /// Upper bound on how many distinct words a renderer lays out
    pub max_words: usize,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            thresholds: DEFAULT_THRESHOLDS.to_vec(),
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
            height: 1000,
            width: 2000,
            background_color: "white".to_string(),
            max_words: 200,
        }
    }
}

impl CloudConfig {
    /// Parse a config from JSON, filling any missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, CloudError> {
        serde_json::from_str(json)
            .map_err(|e| CloudError::Validation(format!("config is not valid JSON: {e}")))
    }

    /// Replace the threshold buckets, keeping the canvas settings.
    pub fn with_buckets(mut self, thresholds: &[f64], colors: &[&str]) -> Self {
        self.thresholds = thresholds.to_vec();
        self.colors = colors.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Validate thresholds against colors and build the lookup table.
    pub fn threshold_table(&self) -> Result<ThresholdTable, CloudError> {
        ThresholdTable::new(&self.thresholds, &self.colors)
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            height: self.height,
            width: self.width,
            background_color: self.background_color.clone(),
            max_words: self.max_words,
        }
    }
}
