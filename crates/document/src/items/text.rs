use crate::slide::Slide;
use lectern_layout::{LineBreaker, LineLayout};
use lectern_style::Style;
use lectern_traits::{Surface, TextMeasurer};
use lectern_types::Rect;

/// A run of text at one outline level.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextItem {
    level: u32,
    text: String,
}

impl TextItem {
    pub fn new(level: u32, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    // Empty text still occupies one line.
    fn layout_text(&self) -> &str {
        if self.text.is_empty() { " " } else { &self.text }
    }

    /// Wraps the text to the slide width left over after the level's indent.
    pub fn lines<'t, 'm>(
        &'t self,
        measurer: &'m dyn TextMeasurer,
        scale: f32,
        style: &Style,
    ) -> LineBreaker<'t, 'm> {
        let wrap_width = ((Slide::WIDTH - style.indent) * scale).max(0.0);
        LineBreaker::new(self.layout_text(), measurer, style.font(scale), wrap_width)
    }

    /// The box the text occupies, relative to the item's origin.
    ///
    /// Without a measurer the box is a fixed placeholder: `10` wide and one
    /// scaled leading tall.
    pub fn bounding_box(
        &self,
        measurer: Option<&dyn TextMeasurer>,
        scale: f32,
        style: &Style,
    ) -> Rect {
        let Some(measurer) = measurer else {
            return placeholder_box(scale, style);
        };

        let mut width = 0.0f32;
        let mut height = style.leading * scale;
        for line in self.lines(measurer, scale, style) {
            width = width.max(line.width);
            height += line.height();
        }
        Rect::new(style.indent * scale, 0.0, width, height)
    }

    /// Paints the wrapped lines starting below the level's leading.
    pub fn draw(
        &self,
        x: f32,
        y: f32,
        scale: f32,
        surface: Option<&mut dyn Surface>,
        style: &Style,
    ) {
        let Some(surface) = surface else { return };
        if self.text.is_empty() {
            return;
        }

        let font = style.font(scale);
        let lines: Vec<LineLayout<'_>> = self.lines(surface.as_measurer(), scale, style).collect();

        let pen_x = x + style.indent * scale;
        let mut pen_y = y + style.leading * scale;
        for line in lines {
            pen_y += line.metrics.ascent;
            surface.fill_text(line.text, pen_x, pen_y, &font, style.color);
            pen_y += line.metrics.descent;
        }
    }
}

pub(crate) fn placeholder_box(scale: f32, style: &Style) -> Rect {
    Rect::new(style.indent * scale, 0.0, 10.0, style.leading * scale)
}
