pub mod resource;
pub mod surface;

pub use resource::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
pub use surface::{FontMetrics, Surface, TextMeasurer};
