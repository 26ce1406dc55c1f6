use crate::coords::{Bounds, Size};

/// Placement data for a single glyph at a given pixel size.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GlyphBounds {
    /// Horizontal pen advance in pixels.
    pub advance: f32,
    /// Outline bounds relative to the pen position, in pixels (y up).
    pub outline: Bounds,
}

/// Glyph metrics lookup.
///
/// `font` selects a face by name; `None` selects the provider's default face.
pub trait FontMetrics {
    /// Returns `None` when the face is unknown.
    fn glyph_bounds(&self, font: Option<&str>, ch: char, size: f32) -> Option<GlyphBounds>;

    /// Extra horizontal offset between `left` and `right`; zero when unpaired.
    fn kerning(&self, font: Option<&str>, left: char, right: char, size: f32) -> f32;

    /// Distance between two baselines.
    fn line_height(&self, _font: Option<&str>, size: f32) -> f32 {
        size * 1.2
    }
}

/// Measures a run of text, one line per `\n`.
///
/// Width is the widest line's sum of advances plus kerning; height is the
/// number of lines times the line height.
pub fn measure_text(metrics: &dyn FontMetrics, font: Option<&str>, text: &str, size: f32) -> Size {
    let mut width = 0.0f32;
    let mut lines = 0usize;

    for line in text.split('\n') {
        lines += 1;
        let mut line_width = 0.0;
        let mut prev: Option<char> = None;
        for ch in line.chars() {
            if let Some(left) = prev {
                line_width += metrics.kerning(font, left, ch, size);
            }
            line_width += metrics
                .glyph_bounds(font, ch, size)
                .map(|g| g.advance)
                .unwrap_or(0.0);
            prev = Some(ch);
        }
        width = width.max(line_width);
    }

    Size::new(width, lines as f32 * metrics.line_height(font, size))
}
