//! Slide content items.

mod bitmap;
mod text;

pub use self::bitmap::{BitmapItem, decode_image};
pub use self::text::TextItem;

use lectern_style::Style;
use lectern_traits::{Surface, TextMeasurer};
use lectern_types::Rect;

/// The persisted kind tag of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Text,
    Image,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Text => "text",
            ItemKind::Image => "image",
        }
    }

    /// Parses a kind tag. Tags are case-sensitive.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "text" => Some(ItemKind::Text),
            "image" => Some(ItemKind::Image),
            _ => None,
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry on a slide.
#[derive(Debug, Clone, PartialEq)]
pub enum SlideItem {
    Text(TextItem),
    Bitmap(BitmapItem),
}

impl SlideItem {
    pub fn level(&self) -> u32 {
        match self {
            SlideItem::Text(t) => t.level(),
            SlideItem::Bitmap(b) => b.level(),
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            SlideItem::Text(_) => ItemKind::Text,
            SlideItem::Bitmap(_) => ItemKind::Image,
        }
    }

    /// The persisted content: the text, or the image reference.
    pub fn content(&self) -> &str {
        match self {
            SlideItem::Text(t) => t.text(),
            SlideItem::Bitmap(b) => b.image_ref(),
        }
    }

    pub fn bounding_box(
        &self,
        measurer: Option<&dyn TextMeasurer>,
        scale: f32,
        style: &Style,
    ) -> Rect {
        match self {
            SlideItem::Text(t) => t.bounding_box(measurer, scale, style),
            SlideItem::Bitmap(b) => b.bounding_box(measurer, scale, style),
        }
    }

    pub fn draw(
        &self,
        x: f32,
        y: f32,
        scale: f32,
        surface: Option<&mut dyn Surface>,
        style: &Style,
    ) {
        match self {
            SlideItem::Text(t) => t.draw(x, y, scale, surface, style),
            SlideItem::Bitmap(b) => b.draw(x, y, scale, surface, style),
        }
    }
}

impl From<TextItem> for SlideItem {
    fn from(item: TextItem) -> Self {
        SlideItem::Text(item)
    }
}

impl From<BitmapItem> for SlideItem {
    fn from(item: BitmapItem) -> Self {
        SlideItem::Bitmap(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(ItemKind::parse("text"), Some(ItemKind::Text));
        assert_eq!(ItemKind::parse("image"), Some(ItemKind::Image));
        assert_eq!(ItemKind::parse("Text"), None);
        assert_eq!(ItemKind::Image.to_string(), "image");
    }

    #[test]
    fn test_item_accessors() {
        let text: SlideItem = TextItem::new(2, "Point").into();
        assert_eq!(text.level(), 2);
        assert_eq!(text.kind(), ItemKind::Text);
        assert_eq!(text.content(), "Point");

        let image: SlideItem = BitmapItem::unresolved(1, "a.png").into();
        assert_eq!(image.kind(), ItemKind::Image);
        assert_eq!(image.content(), "a.png");
    }
}
