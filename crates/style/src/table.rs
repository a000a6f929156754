//! Defines the level-indexed style table used by slide layout.

use crate::style::Style;
use lectern_types::Color;
use thiserror::Error;

/// Number of outline levels every table must define (levels `0..=4`).
pub const MIN_LEVELS: usize = 5;

#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Style table defines {0} levels, at least {MIN_LEVELS} are required")]
    TooFewLevels(usize),

    #[error("Style {level} has an invalid {property}: {value}")]
    InvalidValue {
        level: usize,
        property: &'static str,
        value: f32,
    },

    #[error("Style table JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Maps an outline level to its [`Style`].
///
/// Levels deeper than the last defined style resolve to that last style, so
/// lookups never fail. Tables are built explicitly and passed to layout, which
/// lets several configurations live side by side in one process.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTable {
    styles: Vec<Style>,
}

impl StyleTable {
    /// Builds a table from styles ordered by level.
    pub fn new(styles: Vec<Style>) -> Result<Self, StyleError> {
        if styles.len() < MIN_LEVELS {
            return Err(StyleError::TooFewLevels(styles.len()));
        }
        for (level, style) in styles.iter().enumerate() {
            check_length(level, "indent", style.indent)?;
            check_length(level, "leading", style.leading)?;
            check_length(level, "font size", style.font_size)?;
        }
        Ok(Self { styles })
    }

    /// Parses a JSON array of styles, e.g.
    /// `[{"indent": 0, "leading": 20, "fontSize": 48, "color": "#ff0000"}, ...]`.
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        let styles: Vec<Style> = serde_json::from_str(json)?;
        Self::new(styles)
    }

    /// Returns the style for `level`, clamped to the deepest defined level.
    pub fn style_for(&self, level: u32) -> &Style {
        let index = (level as usize).min(self.max_level());
        &self.styles[index]
    }

    /// The deepest level with its own style.
    pub fn max_level(&self) -> usize {
        self.styles.len() - 1
    }

    pub fn styles(&self) -> &[Style] {
        &self.styles
    }
}

fn check_length(level: usize, property: &'static str, value: f32) -> Result<(), StyleError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(StyleError::InvalidValue {
            level,
            property,
            value,
        })
    }
}

impl Default for StyleTable {
    /// The classic five-level outline: a large red title level followed by
    /// progressively smaller and more indented levels.
    fn default() -> Self {
        Self {
            styles: vec![
                Style::new(0.0, Color::RED, 48.0, 20.0),
                Style::new(20.0, Color::BLUE, 40.0, 10.0),
                Style::new(50.0, Color::BLACK, 36.0, 10.0),
                Style::new(70.0, Color::BLACK, 30.0, 10.0),
                Style::new(90.0, Color::BLACK, 24.0, 10.0),
            ],
        }
    }
}
