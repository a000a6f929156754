use crate::fonts::FontLibrary;
use crate::metrics::FixedMetrics;
use lectern_style::FontSpec;
use lectern_traits::{FontMetrics, TextMeasurer};
use rustybuzz::{Feature, UnicodeBuffer};
use std::cell::RefCell;
use ttf_parser::Tag;

// Reuse buffer to avoid allocations in the tight loop
thread_local! {
    static SCRATCH_BUFFER: RefCell<Option<UnicodeBuffer>> = RefCell::new(Some(UnicodeBuffer::new()));
}

/// Measures text by shaping it with real font data.
///
/// Families the library cannot resolve are measured with [`FixedMetrics`]
/// instead, so measurement never fails.
#[derive(Debug, Clone, Default)]
pub struct ShapingMeasurer {
    library: FontLibrary,
    fallback: FixedMetrics,
}

impl ShapingMeasurer {
    pub fn new(library: FontLibrary) -> Self {
        Self {
            library,
            fallback: FixedMetrics::default(),
        }
    }

    pub fn with_fallback(mut self, fallback: FixedMetrics) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn library(&self) -> &FontLibrary {
        &self.library
    }

    fn shaped_advance(&self, text: &str, font: &FontSpec) -> Option<f32> {
        let data = self.library.resolve(font).ok()?;
        let face = data.as_face()?;

        static FEATURES: std::sync::OnceLock<Vec<Feature>> = std::sync::OnceLock::new();
        let features = FEATURES.get_or_init(|| {
            vec![
                Feature::new(Tag::from_bytes(b"liga"), 1, ..),
                Feature::new(Tag::from_bytes(b"kern"), 1, ..),
            ]
        });

        let scale = font.size / face.units_per_em() as f32;
        let mut buffer =
            SCRATCH_BUFFER.with(|b| b.borrow_mut().take().unwrap_or_else(UnicodeBuffer::new));
        buffer.push_str(text);
        buffer.guess_segment_properties();

        let glyph_buffer = rustybuzz::shape(&face, features, buffer);
        let advance: i32 = glyph_buffer
            .glyph_positions()
            .iter()
            .map(|pos| pos.x_advance)
            .sum();

        let recycled_buffer = glyph_buffer.clear();
        SCRATCH_BUFFER.with(|b| *b.borrow_mut() = Some(recycled_buffer));

        Some(advance as f32 * scale)
    }

    fn face_metrics(&self, font: &FontSpec) -> Option<FontMetrics> {
        let data = self.library.resolve(font).ok()?;
        let face = data.as_face()?;
        let scale = font.size / face.units_per_em() as f32;
        Some(FontMetrics {
            ascent: face.ascender() as f32 * scale,
            descent: -(face.descender() as f32) * scale,
            leading: face.line_gap() as f32 * scale,
        })
    }
}

impl TextMeasurer for ShapingMeasurer {
    fn metrics(&self, font: &FontSpec) -> FontMetrics {
        self.face_metrics(font).unwrap_or_else(|| {
            log::debug!("No face for '{}', using fixed metrics", font.family);
            self.fallback.metrics(font)
        })
    }

    fn advance(&self, text: &str, font: &FontSpec) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        self.shaped_advance(text, font)
            .unwrap_or_else(|| self.fallback.advance(text, font))
    }
}
