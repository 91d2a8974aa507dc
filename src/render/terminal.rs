// Colored terminal rendering of a word cloud.
//
// A terminal can't vary font size, so words are listed most frequent first
// with their counts, tinted by bucket color.

use anyhow::Result;
use colored::{Color, Colorize};

use super::ranked_words;
use super::traits::{Canvas, WordCloudRenderer};
use crate::scoring::chooser::ColorChooser;

/// Renders the cloud as ANSI-colored lines of text.
pub struct TerminalRenderer {
    /// How many words to put on one line
    pub words_per_line: usize,
    /// Append each word's count in parentheses
    pub show_counts: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self {
            words_per_line: 8,
            show_counts: true,
        }
    }
}

impl WordCloudRenderer for TerminalRenderer {
    type Output = String;

    fn render(&self, text: &str, canvas: &Canvas, chooser: &ColorChooser) -> Result<String> {
        let ranked = ranked_words(text, canvas.max_words);
        let per_line = self.words_per_line.max(1);

        let mut lines = Vec::new();
        for chunk in ranked.chunks(per_line) {
            let mut cells = Vec::with_capacity(chunk.len());
            for (word, count) in chunk {
                let color = chooser.choose_color(word)?;
                let label = if self.show_counts {
                    format!("{word} ({count})")
                } else {
                    word.clone()
                };
                cells.push(tint(&label, color));
            }
            lines.push(cells.join("  "));
        }

        Ok(lines.join("\n"))
    }
}

/// Apply a color value to `text`.
///
/// Hex values (`#rrggbb`) become truecolor; anything else goes through
/// colored's name parser. Names it doesn't know are left uncolored.
fn tint(text: &str, color: &str) -> String {
    match parse_color(color) {
        Some(c) => text.color(c).to_string(),
        None => text.to_string(),
    }
}

fn parse_color(value: &str) -> Option<Color> {
    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        return Some(Color::TrueColor {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        });
    }
    match value.to_lowercase().as_str() {
        // colored has no grey; bright black is the closest match
        "grey" | "gray" => Some(Color::BrightBlack),
        other => other.parse::<Color>().ok(),
    }
}
