// Comparative scoring: per-group frequencies, bias scores, and color buckets.

pub mod bias;
pub mod chooser;
pub mod frequency;
pub mod palette;
