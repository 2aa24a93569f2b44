//! Confidence Bar
//!
//! Fixed-width glyph bar for a percentage.

use crate::logic::config::Palette;
use crate::logic::verdict::ColorToken;

/// Total bar length in glyphs
pub const BAR_WIDTH: usize = 20;

pub const FILLED_GLYPH: char = '█';
pub const EMPTY_GLYPH: char = '░';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressBar {
    pub filled: usize,
    pub empty: usize,
    pub color: String,
    pub track_color: String,
}

/// Build the bar for `percentage` (0-100).
///
/// The filled count is clamped into `0..=BAR_WIDTH`; NaN and infinities
/// draw an empty bar. Callers are expected to pass a sanitized value.
pub fn render_progress_bar(percentage: f64, color: ColorToken, palette: &Palette) -> ProgressBar {
    let filled = filled_units(percentage);

    ProgressBar {
        filled,
        empty: BAR_WIDTH - filled,
        color: color.hex(palette).to_string(),
        track_color: palette.track.clone(),
    }
}

fn filled_units(percentage: f64) -> usize {
    let units = (percentage / 100.0 * BAR_WIDTH as f64).round();
    if !units.is_finite() {
        return 0;
    }
    units.clamp(0.0, BAR_WIDTH as f64) as usize
}

impl ProgressBar {
    /// Color-wrapped glyph string
    pub fn markup(&self) -> String {
        let mut out = String::new();
        if self.filled > 0 {
            let glyphs: String = std::iter::repeat(FILLED_GLYPH).take(self.filled).collect();
            out.push_str(&format!("<font color=\"{}\">{}</font>", self.color, glyphs));
        }
        if self.empty > 0 {
            let glyphs: String = std::iter::repeat(EMPTY_GLYPH).take(self.empty).collect();
            out.push_str(&format!("<font color=\"{}\">{}</font>", self.track_color, glyphs));
        }
        out
    }
}

impl std::fmt::Display for ProgressBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.markup())
    }
}
