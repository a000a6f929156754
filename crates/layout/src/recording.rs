//! A surface that records draw calls instead of rasterizing them.
//!
//! The recorded commands form a display list: shells can replay them onto a
//! real canvas, and tests can assert on exactly what was drawn and where.

use crate::metrics::FixedMetrics;
use lectern_style::FontSpec;
use lectern_traits::{FontMetrics, Surface, TextMeasurer};
use lectern_types::{Color, RasterImage, Rect};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Text {
        text: String,
        x: f32,
        /// Baseline.
        y: f32,
        font: FontSpec,
        color: Color,
    },
    Image {
        /// Intrinsic pixel size of the drawn image.
        width: u32,
        height: u32,
        dest: Rect,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSurface<M: TextMeasurer = FixedMetrics> {
    measurer: M,
    commands: Vec<DrawCommand>,
}

impl<M: TextMeasurer> RecordingSurface<M> {
    pub fn new(measurer: M) -> Self {
        Self {
            measurer,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// All text drawn so far, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::Image { .. } => None,
        })
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl<M: TextMeasurer> TextMeasurer for RecordingSurface<M> {
    fn metrics(&self, font: &FontSpec) -> FontMetrics {
        self.measurer.metrics(font)
    }

    fn advance(&self, text: &str, font: &FontSpec) -> f32 {
        self.measurer.advance(text, font)
    }
}

impl<M: TextMeasurer> Surface for RecordingSurface<M> {
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &FontSpec, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font: font.clone(),
            color,
        });
    }

    fn draw_image(&mut self, image: &RasterImage, dest: Rect) {
        self.commands.push(DrawCommand::Image {
            width: image.width(),
            height: image.height(),
            dest,
        });
    }

    fn as_measurer(&self) -> &dyn TextMeasurer {
        self
    }
}
