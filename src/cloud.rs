// Two-group word cloud pipeline.
//
// validate -> lint -> normalize -> frequencies -> scores -> chooser -> render
//
// Normalization happens here rather than being left to the caller, so the
// text handed to the renderer is tokenized exactly like the text that was
// scored.

use anyhow::Result;
use tracing::info;

use crate::config::CloudConfig;
use crate::render::traits::WordCloudRenderer;
use crate::scoring::bias::WordScores;
use crate::scoring::chooser::ColorChooser;
use crate::scoring::frequency::FrequencyTable;
use crate::text::normalize::{lint_corpus, preprocess_text, tokenize};

/// Both groups after normalization, with the bias scores computed from them.
struct ScoredGroups {
    group_1: String,
    group_2: String,
    scores: WordScores,
}

fn score_normalized(group_1_text: &str, group_2_text: &str) -> ScoredGroups {
    let group_1 = preprocess_text(group_1_text);
    let group_2 = preprocess_text(group_2_text);

    let freq_1 = FrequencyTable::from_tokens(tokenize(&group_1));
    let freq_2 = FrequencyTable::from_tokens(tokenize(&group_2));
    let scores = WordScores::compute(&freq_1, &freq_2);

    ScoredGroups {
        group_1,
        group_2,
        scores,
    }
}

/// Bias score for every word used by either group.
pub fn score_groups(group_1_text: &str, group_2_text: &str) -> WordScores {
    score_normalized(group_1_text, group_2_text).scores
}

/// Build a word cloud comparing two groups' word usage.
///
/// Each word is colored by its bias score bucket: with the default palette,
/// words mostly used by group 2 are red, balanced words grey, and words
/// mostly used by group 1 blue. Threshold problems are reported as
/// `CloudError::Validation` before any text is processed.
pub fn generate_two_group_word_cloud<R: WordCloudRenderer>(
    group_1_text: &str,
    group_2_text: &str,
    config: &CloudConfig,
    renderer: &R,
) -> Result<R::Output> {
    let table = config.threshold_table()?;

    lint_corpus("group_1", group_1_text);
    lint_corpus("group_2", group_2_text);

    let ScoredGroups {
        group_1,
        group_2,
        scores,
    } = score_normalized(group_1_text, group_2_text);

    let combined = [group_1.as_str(), group_2.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    info!(
        vocabulary = scores.len(),
        buckets = table.buckets().len(),
        "Generating two-group word cloud"
    );

    let chooser = ColorChooser::new(scores, table);
    renderer.render(&combined, &config.canvas(), &chooser)
}
