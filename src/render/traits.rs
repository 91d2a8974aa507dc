// Renderer trait: the swap-ready abstraction for drawing the cloud.
//
// The scorer only promises two things to a renderer: normalized text to
// size words by, and a ColorChooser that knows every word in that text.
// Layout, sizing and output format are up to the implementation.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::scoring::chooser::ColorChooser;

/// Canvas settings handed to every renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub height: u32,
    pub width: u32,
    pub background_color: String,
    pub max_words: usize,
}

/// Trait for turning scored text into a word cloud.
pub trait WordCloudRenderer {
    type Output;

    /// Render `text` (normalized, space-separated) onto `canvas`, coloring
    /// each word through `chooser`. Color lookup errors must be propagated,
    /// not papered over.
    fn render(&self, text: &str, canvas: &Canvas, chooser: &ColorChooser) -> Result<Self::Output>;
}
