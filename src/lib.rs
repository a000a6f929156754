//! Lectern: the core of a slide presentation program.
//!
//! The document model lives in [`lectern_document`], text measurement and
//! line breaking in [`lectern_layout`], and the XML format in [`lectern_xml`].
//! This crate ties them together behind a small command surface
//! ([`load_presentation`], [`save_presentation`]) and the [`Editor`] facade.

pub mod commands;
pub mod config;
pub mod demo;
pub mod editor;
pub mod error;

pub use commands::{Source, load_presentation, save_presentation};
pub use config::EditorConfig;
pub use editor::{Editor, EditorBuilder};
pub use error::LecternError;

pub use lectern_document::{
    BitmapItem, ItemKind, NavigationError, Placement, Presentation, Slide, SlideItem,
    SlideObserver, TextItem,
};
pub use lectern_layout::{
    DrawCommand, FixedMetrics, FontLibrary, LayoutConfig, RecordingSurface, ShapingMeasurer,
    Surface, TextMeasurer,
};
pub use lectern_resource::{InMemoryResourceProvider, ResolverChain};
pub use lectern_style::{Style, StyleTable};
pub use lectern_types::{Color, RasterImage, Rect};
pub use lectern_xml::{LoadDiagnostic, LoadError, SaveError};
