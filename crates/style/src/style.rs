//! Visual attributes for one outline level.

use lectern_types::Color;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

fn default_family() -> Arc<str> {
    Arc::from(Style::DEFAULT_FAMILY)
}

/// The visual style applied to every item at a given outline level.
///
/// Lengths (`indent`, `leading`, `font_size`) are in slide design units and are
/// multiplied by the layout scale before use.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub indent: f32,
    pub leading: f32,
    pub font_size: f32,
    #[serde(default)]
    pub color: Color,
    #[serde(default = "default_family")]
    pub font_family: Arc<str>,
    #[serde(default)]
    pub bold: bool,
}

impl Style {
    pub const DEFAULT_FAMILY: &'static str = "Helvetica";

    pub fn new(indent: f32, color: Color, font_size: f32, leading: f32) -> Self {
        Self {
            indent,
            leading,
            font_size,
            color,
            font_family: default_family(),
            bold: false,
        }
    }

    pub fn with_family(mut self, family: impl Into<Arc<str>>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// The font to measure and draw with at the given layout scale.
    pub fn font(&self, scale: f32) -> FontSpec {
        FontSpec {
            family: self.font_family.clone(),
            size: self.font_size * scale,
            bold: self.bold,
        }
    }
}

/// A concrete font request: family, pixel size and weight.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: Arc<str>,
    pub size: f32,
    pub bold: bool,
}

impl FontSpec {
    pub fn new(family: impl Into<Arc<str>>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            bold: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_is_scaled() {
        let style = Style::new(20.0, Color::BLUE, 40.0, 10.0).with_bold(true);
        let font = style.font(0.5);
        assert_eq!(font.size, 20.0);
        assert!(font.bold);
        assert_eq!(&*font.family, "Helvetica");
    }

    #[test]
    fn test_deserialize_defaults() {
        let style: Style =
            serde_json::from_str(r#"{"indent": 5, "leading": 2, "fontSize": 12}"#).unwrap();
        assert_eq!(style.color, Color::BLACK);
        assert_eq!(&*style.font_family, "Helvetica");
        assert!(!style.bold);
    }
}
