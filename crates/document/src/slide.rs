use crate::items::{SlideItem, TextItem};
use lectern_style::StyleTable;
use lectern_traits::{Surface, TextMeasurer};
use lectern_types::Rect;
use std::borrow::Cow;

/// A titled, ordered list of items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slide {
    title: String,
    items: Vec<SlideItem>,
}

/// Where one item lands in a drawing area.
///
/// The title is laid out as a synthesized level-0 text item, so the first
/// placement owns its item while the rest borrow from the slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement<'a> {
    pub item: Cow<'a, SlideItem>,
    pub rect: Rect,
}

impl Slide {
    /// Design width. Styles are expressed in these units.
    pub const WIDTH: f32 = 1200.0;
    /// Design height.
    pub const HEIGHT: f32 = 800.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn append(&mut self, item: impl Into<SlideItem>) {
        self.items.push(item.into());
    }

    /// Appends a text item.
    pub fn append_text(&mut self, level: u32, text: impl Into<String>) {
        self.append(TextItem::new(level, text));
    }

    pub fn items(&self) -> &[SlideItem] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&SlideItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Uniform scale that fits the design size into `area`, preserving
    /// aspect ratio.
    pub fn scale_for(area: &Rect) -> f32 {
        (area.width / Self::WIDTH).min(area.height / Self::HEIGHT)
    }

    /// Stacks the title and items top to bottom in `area`.
    ///
    /// Each item is offset horizontally by its own box and vertically by the
    /// heights of everything above it. Nothing is clipped: content may run
    /// past the bottom of the area.
    pub fn layout(
        &self,
        area: Rect,
        styles: &StyleTable,
        measurer: Option<&dyn TextMeasurer>,
    ) -> Vec<Placement<'_>> {
        let scale = Self::scale_for(&area);
        let title = SlideItem::Text(TextItem::new(0, self.title.clone()));

        let mut placements = Vec::with_capacity(self.items.len() + 1);
        let mut y = area.y;
        for item in std::iter::once(Cow::Owned(title)).chain(self.items.iter().map(Cow::Borrowed)) {
            let style = styles.style_for(item.level());
            let bbox = item.bounding_box(measurer, scale, style);
            placements.push(Placement {
                rect: Rect::new(area.x + bbox.x, y, bbox.width, bbox.height),
                item,
            });
            y += bbox.height;
        }
        placements
    }

    /// Lays out the slide with the surface's measurer and paints every
    /// placement.
    pub fn draw(&self, area: Rect, styles: &StyleTable, surface: &mut dyn Surface) {
        let placements = self.layout(area, styles, Some(surface.as_measurer()));
        Self::paint(&placements, area, styles, surface);
    }

    /// Paints placements produced by [`Slide::layout`].
    ///
    /// Items are drawn at the placement's vertical position, so the result
    /// matches whatever measurer computed the placements.
    pub fn paint(
        placements: &[Placement<'_>],
        area: Rect,
        styles: &StyleTable,
        surface: &mut dyn Surface,
    ) {
        let scale = Self::scale_for(&area);
        log::trace!("Painting {} placements at scale {}", placements.len(), scale);
        for placement in placements {
            let style = styles.style_for(placement.item.level());
            placement
                .item
                .draw(area.x, placement.rect.y, scale, Some(&mut *surface), style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::BitmapItem;
    use lectern_layout::{DrawCommand, FixedMetrics, RecordingSurface};

    fn area() -> Rect {
        Rect::new(0.0, 0.0, 600.0, 400.0)
    }

    #[test]
    fn test_scale_fits_smaller_axis() {
        assert_eq!(Slide::scale_for(&Rect::new(0.0, 0.0, 1200.0, 800.0)), 1.0);
        assert_eq!(Slide::scale_for(&area()), 0.5);
        assert_eq!(Slide::scale_for(&Rect::new(0.0, 0.0, 2400.0, 800.0)), 1.0);
        assert_eq!(Slide::scale_for(&Rect::new(0.0, 0.0, 600.0, 800.0)), 0.5);
    }

    #[test]
    fn test_layout_places_title_then_items() {
        let mut slide = Slide::with_title("Intro");
        slide.append_text(1, "Hello");
        let styles = StyleTable::default();

        let placements = slide.layout(area(), &styles, None);
        assert_eq!(placements.len(), 2);

        let title = &placements[0];
        assert_eq!(title.item.level(), 0);
        assert_eq!(title.item.content(), "Intro");
        // level 0: indent 0, leading 20
        assert_eq!(title.rect, Rect::new(0.0, 0.0, 10.0, 10.0));

        // level 1: indent 20, leading 10, at scale 0.5
        let item = &placements[1];
        assert_eq!(item.rect.x, 10.0);
        assert_eq!(item.rect.y, 10.0);
        assert!(matches!(item.item, Cow::Borrowed(_)));
    }

    #[test]
    fn test_layout_offsets_by_area_origin() {
        let slide = Slide::with_title("T");
        let placements = slide.layout(
            Rect::new(30.0, 40.0, 1200.0, 800.0),
            &StyleTable::default(),
            None,
        );
        assert_eq!(placements[0].rect.x, 30.0);
        assert_eq!(placements[0].rect.y, 40.0);
    }

    #[test]
    fn test_layout_is_not_clipped() {
        let mut slide = Slide::with_title("Long");
        for i in 0..100 {
            slide.append_text(1, format!("line {i}"));
        }
        let m = FixedMetrics::default();
        let placements = slide.layout(area(), &StyleTable::default(), Some(&m));
        assert_eq!(placements.len(), 101);
        assert!(placements.last().unwrap().rect.bottom() > 400.0);
    }

    #[test]
    fn test_draw_paints_title_and_placeholder() {
        let mut slide = Slide::with_title("Pics");
        slide.append(BitmapItem::unresolved(1, "missing.png"));
        let mut surface = RecordingSurface::<FixedMetrics>::default();

        slide.draw(area(), &StyleTable::default(), &mut surface);

        assert_eq!(
            surface.texts().collect::<Vec<_>>(),
            vec!["Pics", "Image not found: missing.png"]
        );
        let ys: Vec<f32> = surface
            .commands()
            .iter()
            .map(|c| match c {
                DrawCommand::Text { y, .. } => *y,
                other => panic!("unexpected command {other:?}"),
            })
            .collect();
        assert!(ys[0] < ys[1]);
    }

    #[test]
    fn test_draw_empty_slide_draws_nothing() {
        let slide = Slide::new();
        let mut surface = RecordingSurface::<FixedMetrics>::default();
        slide.draw(area(), &StyleTable::default(), &mut surface);
        assert!(surface.commands().is_empty());
    }
}
