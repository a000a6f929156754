pub mod shaper;
pub mod wrapper;

pub use shaper::ShapingMeasurer;
pub use wrapper::{LineBreaker, LineLayout};
