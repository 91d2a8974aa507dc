// Composition tests: verifying that the pipeline pieces chain together.
//
// These tests exercise the data flow between modules:
//   normalize -> frequencies -> scores -> chooser -> renderer
// with both bundled renderers and a recording renderer that captures what
// the pipeline hands over.

use std::cell::RefCell;

use anyhow::Result;
use wordcloud_contrast::render::layout::LayoutRenderer;
use wordcloud_contrast::render::terminal::TerminalRenderer;
use wordcloud_contrast::render::traits::{Canvas, WordCloudRenderer};
use wordcloud_contrast::scoring::chooser::ColorChooser;
use wordcloud_contrast::{generate_two_group_word_cloud, CloudConfig, CloudError};

/// Renderer that records its inputs and colors every word it is given.
#[derive(Default)]
struct RecordingRenderer {
    seen_text: RefCell<String>,
    seen_canvas: RefCell<Option<Canvas>>,
}

impl WordCloudRenderer for RecordingRenderer {
    type Output = Vec<(String, String)>;

    fn render(&self, text: &str, canvas: &Canvas, chooser: &ColorChooser) -> Result<Self::Output> {
        *self.seen_text.borrow_mut() = text.to_string();
        *self.seen_canvas.borrow_mut() = Some(canvas.clone());
        let mut colored = Vec::new();
        for word in text.split_whitespace() {
            colored.push((word.to_string(), chooser.choose_color(word)?.to_string()));
        }
        Ok(colored)
    }
}

/// Renderer that asks for a word the scorer never saw.
struct MismatchedRenderer;

impl WordCloudRenderer for MismatchedRenderer {
    type Output = ();

    fn render(&self, _text: &str, _canvas: &Canvas, chooser: &ColorChooser) -> Result<()> {
        chooser.choose_color("notscored")?;
        Ok(())
    }
}

fn hello_world_config() -> CloudConfig {
    CloudConfig::default().with_buckets(&[0.5, 1.0], &["blue", "red"])
}

// ============================================================
// Pipeline -> renderer contract
// ============================================================

#[test]
fn hello_world_example() {
    let renderer = RecordingRenderer::default();
    let colored =
        generate_two_group_word_cloud("hello", "world", &hello_world_config(), &renderer).unwrap();

    assert_eq!(
        colored,
        vec![
            ("hello".to_string(), "red".to_string()),
            ("world".to_string(), "blue".to_string()),
        ]
    );
}

#[test]
fn renderer_receives_combined_normalized_text() {
    let renderer = RecordingRenderer::default();
    generate_two_group_word_cloud(
        "The Dog's bone, 42 times!",
        "A cat's toy.",
        &CloudConfig::default(),
        &renderer,
    )
    .unwrap();

    assert_eq!(*renderer.seen_text.borrow(), "the dog bone times a cat toy");
}

#[test]
fn renderer_receives_configured_canvas() {
    let renderer = RecordingRenderer::default();
    let config = CloudConfig {
        height: 300,
        width: 600,
        background_color: "black".to_string(),
        max_words: 10,
        ..CloudConfig::default()
    };
    generate_two_group_word_cloud("a", "b", &config, &renderer).unwrap();

    let canvas = renderer.seen_canvas.borrow().clone().unwrap();
    assert_eq!(canvas.height, 300);
    assert_eq!(canvas.width, 600);
    assert_eq!(canvas.background_color, "black");
    assert_eq!(canvas.max_words, 10);
}

#[test]
fn empty_group_is_not_joined_with_stray_space() {
    let renderer = RecordingRenderer::default();
    generate_two_group_word_cloud("", "only here", &CloudConfig::default(), &renderer).unwrap();
    assert_eq!(*renderer.seen_text.borrow(), "only here");
}

#[test]
fn renderer_lookup_failure_surfaces_to_caller() {
    let err = generate_two_group_word_cloud("a", "b", &CloudConfig::default(), &MismatchedRenderer)
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<CloudError>(),
        Some(&CloudError::Lookup {
            word: "notscored".to_string()
        })
    );
}

#[test]
fn bad_config_stops_before_rendering() {
    let renderer = RecordingRenderer::default();
    let config = CloudConfig::default().with_buckets(&[0.5, 1.0], &["only-one"]);
    let err = generate_two_group_word_cloud("a", "b", &config, &renderer).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CloudError>(),
        Some(CloudError::Validation(_))
    ));
    assert!(renderer.seen_canvas.borrow().is_none());
}

// ============================================================
// Bundled renderers
// ============================================================

#[test]
fn layout_cloud_from_realistic_corpora() {
    let group_1 = "We believe lower taxes grow the economy. Small business owners \
                   know that lower taxes and less regulation create jobs.";
    let group_2 = "We believe healthcare is a right. Working families need affordable \
                   healthcare, better wages, and strong unions to create jobs.";

    let cloud = generate_two_group_word_cloud(
        group_1,
        group_2,
        &CloudConfig::default(),
        &LayoutRenderer::default(),
    )
    .unwrap();

    assert!(!cloud.words.is_empty());
    assert_eq!(cloud.canvas.width, 2000);

    let taxes = cloud.word("taxes").expect("taxes should be placed");
    assert_eq!(taxes.color, "#0059ff");
    let healthcare = cloud.word("healthcare").expect("healthcare should be placed");
    assert_eq!(healthcare.color, "#ff0000");
    // "create jobs" appears once in each group and both groups are 19 words
    let jobs = cloud.word("jobs").expect("jobs should be placed");
    assert_eq!(jobs.color, "grey");
}

#[test]
fn layout_cloud_round_trips_through_svg() {
    let cloud = generate_two_group_word_cloud(
        "alpha alpha beta",
        "beta gamma",
        &CloudConfig::default(),
        &LayoutRenderer::default(),
    )
    .unwrap();

    let svg = cloud.to_svg();
    assert_eq!(svg.matches("<text").count(), cloud.words.len());
    for placed in &cloud.words {
        assert!(svg.contains(&format!(">{}</text>", placed.word)));
    }
}

#[test]
fn max_words_limits_layout() {
    let config = CloudConfig {
        max_words: 3,
        ..CloudConfig::default()
    };
    let cloud = generate_two_group_word_cloud(
        "one two three four five",
        "six seven eight",
        &config,
        &LayoutRenderer::default(),
    )
    .unwrap();
    assert_eq!(cloud.words.len(), 3);
}

#[test]
fn terminal_output_lists_every_word() {
    let out = generate_two_group_word_cloud(
        "apples apples pears",
        "pears plums",
        &CloudConfig::default(),
        &TerminalRenderer::default(),
    )
    .unwrap();

    for word in ["apples (2)", "pears (2)", "plums (1)"] {
        assert!(out.contains(word), "missing {word} in {out:?}");
    }
}

#[test]
fn terminal_output_wraps_lines() {
    let renderer = TerminalRenderer {
        words_per_line: 2,
        show_counts: false,
    };
    let out =
        generate_two_group_word_cloud("a b c", "d e", &CloudConfig::default(), &renderer).unwrap();
    assert_eq!(out.lines().count(), 3);
}

#[test]
fn huge_canvas_from_config_lays_out_without_overflow() {
    let config = CloudConfig {
        height: 4_000_000_000,
        width: 4_000_000_000,
        ..CloudConfig::default()
    };
    let cloud = generate_two_group_word_cloud(
        "extraordinarily",
        "ok",
        &config,
        &LayoutRenderer::default(),
    )
    .unwrap();

    // 15 glyphs at a fifth of the height are wider than the canvas
    assert!(cloud.word("extraordinarily").is_none());
    let ok = cloud.word("ok").expect("short word should fit");
    assert!(u64::from(ok.x) + u64::from(ok.width) <= 4_000_000_000);
}
