// Threshold buckets: ordered (upper bound, color) pairs.

use serde::Serialize;

use crate::error::CloudError;

/// One color bucket. Covers scores from the previous bucket's bound
/// (exclusive) up to `upper` (inclusive).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub upper: f64,
    pub color: String,
}

/// Validated, immutable list of color buckets.
///
/// Invariants: non-empty, bounds non-decreasing, last bound exactly 1.0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdTable {
    buckets: Vec<Bucket>,
}

impl ThresholdTable {
    /// Pair thresholds with colors after checking the table invariants.
    pub fn new<S: AsRef<str>>(thresholds: &[f64], colors: &[S]) -> Result<Self, CloudError> {
        // Written as !(a <= b) so a NaN bound also counts as unsorted
        if thresholds.windows(2).any(|w| !(w[0] <= w[1])) {
            return Err(CloudError::Validation(
                "thresholds list is not sorted".to_string(),
            ));
        }

        match thresholds.last() {
            None => {
                return Err(CloudError::Validation(
                    "thresholds list is empty".to_string(),
                ))
            }
            Some(&last) if last != 1.0 => {
                return Err(CloudError::Validation(format!(
                    "last threshold should be 1 (it is currently {last})"
                )))
            }
            Some(_) => {}
        }

        if thresholds.len() != colors.len() {
            return Err(CloudError::Validation(format!(
                "thresholds list must be same length as colors ({} thresholds, {} colors)",
                thresholds.len(),
                colors.len()
            )));
        }

        let buckets = thresholds
            .iter()
            .zip(colors)
            .map(|(&upper, color)| Bucket {
                upper,
                color: color.as_ref().to_string(),
            })
            .collect();

        Ok(Self { buckets })
    }

    /// The first bucket whose bound is at or above `score`, if any.
    pub fn bucket_for(&self, score: f64) -> Option<&Bucket> {
        self.buckets.iter().find(|b| score <= b.upper)
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }
}
