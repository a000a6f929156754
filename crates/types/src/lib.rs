pub mod color;
pub mod geometry;
pub mod image;

pub use color::Color;
pub use geometry::{Point, Rect, Size};
pub use image::RasterImage;
