use thiserror::Error;

#[derive(Error, Debug)]
pub enum FontError {
    #[error("No font found for family '{family}' (bold: {bold})")]
    NotFound { family: String, bold: bool },
    #[error("Invalid font data: {0}")]
    InvalidData(String),
    #[error("The {0} lock is poisoned")]
    Poisoned(&'static str),
}

pub mod config;
pub mod fonts;
pub mod metrics;
pub mod recording;
pub mod text;

pub use self::config::LayoutConfig;
pub use self::fonts::{FontData, FontInstance, FontLibrary};
pub use self::metrics::FixedMetrics;
pub use self::recording::{DrawCommand, RecordingSurface};
pub use self::text::{LineBreaker, LineLayout, ShapingMeasurer};

// Re-export the seams so callers of the layout crate need only this import
pub use lectern_traits::{FontMetrics, Surface, TextMeasurer};
pub use lectern_types::geometry::{Point, Rect, Size};
