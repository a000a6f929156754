//! A font-independent measurer.
//!
//! `FixedMetrics` gives every character the same advance. It needs no font
//! files, so it is what headless callers and tests measure with, and what the
//! shaping measurer falls back to when a family cannot be found.

use crate::config::LayoutConfig;
use lectern_style::FontSpec;
use lectern_traits::{FontMetrics, TextMeasurer};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedMetrics {
    config: LayoutConfig,
}

impl FixedMetrics {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }
}

impl TextMeasurer for FixedMetrics {
    fn metrics(&self, font: &FontSpec) -> FontMetrics {
        FontMetrics {
            ascent: font.size * self.config.ascent_ratio,
            descent: font.size * self.config.descent_ratio,
            leading: font.size * self.config.leading_ratio,
        }
    }

    fn advance(&self, text: &str, font: &FontSpec) -> f32 {
        let per_char = font.size * self.config.advance_ratio;
        let weight = if font.bold { self.config.bold_factor } else { 1.0 };
        text.chars().count() as f32 * per_char * weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_counts_chars_not_bytes() {
        let m = FixedMetrics::default();
        let font = FontSpec::new("Helvetica", 10.0);
        assert_eq!(m.advance("abcd", &font), 20.0);
        assert_eq!(m.advance("ééé", &font), 15.0);
        assert_eq!(m.advance("", &font), 0.0);
    }

    #[test]
    fn test_bold_is_wider() {
        let m = FixedMetrics::default();
        let regular = FontSpec::new("Helvetica", 10.0);
        let bold = FontSpec {
            bold: true,
            ..regular.clone()
        };
        assert!(m.advance("abc", &bold) > m.advance("abc", &regular));
    }

    #[test]
    fn test_metrics_scale_with_size() {
        let m = FixedMetrics::default();
        let metrics = m.metrics(&FontSpec::new("Helvetica", 20.0));
        assert_eq!(metrics.ascent, 16.0);
        assert_eq!(metrics.descent, 4.0);
        assert_eq!(metrics.line_height(), 20.0);
    }
}
