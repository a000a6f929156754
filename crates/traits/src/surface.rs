//! Drawing-surface abstractions.
//!
//! Layout only needs to *measure* text; painting needs a full [`Surface`].
//! Splitting the two lets layout run headless (with a measurer but no canvas)
//! and lets callers pass no measurer at all, in which case items fall back to
//! approximate placeholder boxes.

use lectern_style::FontSpec;
use lectern_types::{Color, RasterImage, Rect};

/// Vertical metrics of a font at a concrete size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FontMetrics {
    /// Distance from the baseline to the top of the tallest glyph.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the lowest glyph (positive).
    pub descent: f32,
    /// Extra gap the font asks for between consecutive lines.
    pub leading: f32,
}

impl FontMetrics {
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.leading
    }
}

/// Measures text for line breaking and bounding boxes.
pub trait TextMeasurer {
    /// Vertical metrics for `font`.
    fn metrics(&self, font: &FontSpec) -> FontMetrics;

    /// Horizontal advance of `text` set in `font`.
    fn advance(&self, text: &str, font: &FontSpec) -> f32;
}

/// A render target. Coordinates are in surface units; `y` for text is the
/// baseline.
pub trait Surface: TextMeasurer {
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &FontSpec, color: Color);

    fn draw_image(&mut self, image: &RasterImage, dest: Rect);

    /// Upcast for callers that only need measurement.
    fn as_measurer(&self) -> &dyn TextMeasurer;
}
