//! The in-memory slide show: a titled sequence of slides, each holding
//! leveled text and image items, plus the layout that places those items
//! on a drawing area.

pub mod items;
pub mod presentation;
pub mod slide;

pub use self::items::{BitmapItem, ItemKind, SlideItem, TextItem, decode_image};
pub use self::presentation::{NavigationError, Presentation, SlideObserver};
pub use self::slide::{Placement, Slide};
