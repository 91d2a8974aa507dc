// Row-packing layout renderer and the WordCloud it produces.
//
// Words are sized linearly by frequency relative to the most frequent word
// and packed left to right, top to bottom, largest first. Glyph widths are
// estimated rather than measured, which is good enough for an SVG that the
// viewer lays out with real fonts.

use std::fmt::Write as _;

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use super::ranked_words;
use super::traits::{Canvas, WordCloudRenderer};
use crate::error::CloudError;
use crate::scoring::chooser::ColorChooser;

/// Average glyph width as a fraction of font size.
const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// A word positioned on the canvas. `x`/`y` is the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedWord {
    pub word: String,
    pub count: u32,
    pub font_size: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub color: String,
}

/// A laid-out, colored word cloud.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCloud {
    pub canvas: Canvas,
    pub words: Vec<PlacedWord>,
}

impl WordCloud {
    /// Re-apply colors from `chooser`, keeping the layout.
    ///
    /// On error the cloud is left unchanged.
    pub fn recolor(&mut self, chooser: &ColorChooser) -> Result<(), CloudError> {
        let colors = self
            .words
            .iter()
            .map(|w| chooser.choose_color(&w.word).map(str::to_string))
            .collect::<Result<Vec<_>, _>>()?;
        for (placed, color) in self.words.iter_mut().zip(colors) {
            placed.color = color;
        }
        Ok(())
    }

    /// Look up a placed word by its text.
    pub fn word(&self, word: &str) -> Option<&PlacedWord> {
        self.words.iter().find(|w| w.word == word)
    }

    /// Render as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.canvas.width,
            h = self.canvas.height,
        );
        let _ = writeln!(
            svg,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            escape_xml(&self.canvas.background_color)
        );
        for placed in &self.words {
            let _ = writeln!(
                svg,
                r#"  <text x="{}" y="{}" font-size="{}" fill="{}" font-family="sans-serif" dominant-baseline="text-before-edge">{}</text>"#,
                placed.x,
                placed.y,
                placed.font_size,
                escape_xml(&placed.color),
                escape_xml(&placed.word),
            );
        }
        svg.push_str("</svg>\n");
        svg
    }
}

/// Lays out words in rows and produces a `WordCloud`.
pub struct LayoutRenderer {
    pub min_font_size: u32,
    /// Defaults to a fifth of the canvas height when unset
    pub max_font_size: Option<u32>,
    /// Gap between words and around the canvas edge, in pixels
    pub margin: u32,
}

impl Default for LayoutRenderer {
    fn default() -> Self {
        Self {
            min_font_size: 10,
            max_font_size: None,
            margin: 2,
        }
    }
}

impl LayoutRenderer {
    fn font_size(&self, count: u32, max_count: u32, max_font: u32) -> u32 {
        let span = max_font.saturating_sub(self.min_font_size) as f64;
        let relative = count as f64 / max_count as f64;
        self.min_font_size
            .saturating_add((span * relative).round() as u32)
            .min(max_font)
    }
}

impl WordCloudRenderer for LayoutRenderer {
    type Output = WordCloud;

    fn render(&self, text: &str, canvas: &Canvas, chooser: &ColorChooser) -> Result<WordCloud> {
        let ranked = ranked_words(text, canvas.max_words);
        let max_count = ranked.first().map(|(_, c)| *c).unwrap_or(1);
        let max_font = self
            .max_font_size
            .unwrap_or(canvas.height / 5)
            .max(self.min_font_size);

        // Positions are tracked in u64 so fit checks on a canvas near
        // u32::MAX can't overflow. Anything placed is bounded by the canvas.
        let canvas_width = u64::from(canvas.width);
        let canvas_height = u64::from(canvas.height);
        let margin = u64::from(self.margin);
        let mut cursor_x = margin;
        let mut cursor_y = margin;
        let mut row_height = 0u64;
        let mut words = Vec::with_capacity(ranked.len());
        let mut skipped = 0usize;

        for (word, count) in ranked {
            let font_size = self.font_size(count, max_count, max_font);
            let width =
                (word.chars().count() as f64 * font_size as f64 * GLYPH_WIDTH_RATIO).ceil() as u64;
            let height = u64::from(font_size);

            // Wrap to a new row if this word overflows the current one
            let overflows_row = cursor_x.saturating_add(width).saturating_add(margin) > canvas_width;
            let (x, y, new_row) = if overflows_row {
                let next_row = cursor_y.saturating_add(row_height).saturating_add(margin);
                (margin, next_row, true)
            } else {
                (cursor_x, cursor_y, false)
            };

            if x.saturating_add(width).saturating_add(margin) > canvas_width
                || y.saturating_add(height).saturating_add(margin) > canvas_height
            {
                skipped += 1;
                continue;
            }

            let color = chooser.choose_color(&word)?.to_string();

            if new_row {
                row_height = 0;
            }
            cursor_x = x + width + margin;
            cursor_y = y;
            row_height = row_height.max(height);

            words.push(PlacedWord {
                word,
                count,
                font_size,
                x: x as u32,
                y: y as u32,
                width: width as u32,
                height: font_size,
                color,
            });
        }

        debug!(placed = words.len(), skipped, "Laid out word cloud");

        Ok(WordCloud {
            canvas: canvas.clone(),
            words,
        })
    }
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
