// wordcloud-contrast: two-group comparative word clouds
//
// This is the library root. Text normalization feeds the scorer, the scorer
// builds a color chooser, and a renderer turns the combined text plus the
// chooser into a word cloud.

pub mod cloud;
pub mod config;
pub mod error;
pub mod render;
pub mod scoring;
pub mod text;

pub use cloud::{generate_two_group_word_cloud, score_groups};
pub use config::{CloudConfig, DEFAULT_COLORS, DEFAULT_THRESHOLDS};
pub use error::CloudError;
pub use text::normalize::preprocess_text;
