use super::text::{TextItem, placeholder_box};
use lectern_style::Style;
use lectern_traits::{ResourceProvider, Surface, TextMeasurer};
use lectern_types::{RasterImage, Rect};

/// An image at one outline level, referenced by name.
///
/// The image is resolved once, when the item is created. An item whose image
/// could not be resolved keeps its reference and renders a placeholder
/// message instead.
#[derive(Debug, Clone, PartialEq)]
pub struct BitmapItem {
    level: u32,
    image_ref: String,
    image: Option<RasterImage>,
}

impl BitmapItem {
    /// Resolves `image_ref` through `resolver` and decodes it.
    ///
    /// Lookup or decode failures are logged and produce an unresolved item.
    pub fn new(level: u32, image_ref: impl Into<String>, resolver: &dyn ResourceProvider) -> Self {
        let image_ref = image_ref.into();
        let image = resolve_image(&image_ref, resolver);
        Self {
            level,
            image_ref,
            image,
        }
    }

    pub fn unresolved(level: u32, image_ref: impl Into<String>) -> Self {
        Self {
            level,
            image_ref: image_ref.into(),
            image: None,
        }
    }

    pub fn with_image(level: u32, image_ref: impl Into<String>, image: RasterImage) -> Self {
        Self {
            level,
            image_ref: image_ref.into(),
            image: Some(image),
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    pub fn image(&self) -> Option<&RasterImage> {
        self.image.as_ref()
    }

    pub fn is_resolved(&self) -> bool {
        self.image.is_some()
    }

    fn placeholder(&self) -> TextItem {
        TextItem::new(self.level, format!("Image not found: {}", self.image_ref))
    }

    pub fn bounding_box(
        &self,
        measurer: Option<&dyn TextMeasurer>,
        scale: f32,
        style: &Style,
    ) -> Rect {
        match &self.image {
            Some(image) => Rect::new(
                style.indent * scale,
                0.0,
                image.width() as f32 * scale,
                style.leading * scale + image.height() as f32 * scale,
            ),
            None if measurer.is_some() => self.placeholder().bounding_box(measurer, scale, style),
            None => placeholder_box(scale, style),
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
        let Some(surface) = surface else { return };
        match &self.image {
            Some(image) => {
                let dest = Rect::new(
                    x + style.indent * scale,
                    y + style.leading * scale,
                    image.width() as f32 * scale,
                    image.height() as f32 * scale,
                );
                surface.draw_image(image, dest);
            }
            None => self.placeholder().draw(x, y, scale, Some(surface), style),
        }
    }
}

/// Decodes PNG, JPEG, GIF or BMP bytes into RGBA pixels.
pub fn decode_image(bytes: &[u8]) -> Result<RasterImage, image::ImageError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    RasterImage::from_rgba(width, height, rgba.into_raw()).ok_or_else(|| {
        image::ImageError::Limits(image::error::LimitError::from_kind(
            image::error::LimitErrorKind::DimensionError,
        ))
    })
}

fn resolve_image(image_ref: &str, resolver: &dyn ResourceProvider) -> Option<RasterImage> {
    let bytes = match resolver.load(image_ref) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("Image '{}' could not be resolved: {}", image_ref, e);
            return None;
        }
    };
    match decode_image(&bytes) {
        Ok(image) => {
            log::debug!(
                "Loaded image '{}' ({}x{}) via {}",
                image_ref,
                image.width(),
                image.height(),
                resolver.name()
            );
            Some(image)
        }
        Err(e) => {
            log::warn!("Image '{}' could not be decoded: {}", image_ref, e);
            None
        }
    }
}
