//! The editor facade: a presentation plus everything needed to load, lay out
//! and draw it.

mod builder;

pub use self::builder::EditorBuilder;

use crate::commands::{self, Source};
use crate::error::LecternError;
use lectern_document::{Placement, Presentation, Slide, SlideObserver};
use lectern_layout::{Rect, Surface, TextMeasurer};
use lectern_resource::{InMemoryResourceProvider, ResolverChain};
use lectern_style::StyleTable;
use lectern_xml::LoadDiagnostic;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;

pub struct Editor {
    presentation: Presentation,
    styles: StyleTable,
    image_base_dir: Option<PathBuf>,
    bundled: Arc<InMemoryResourceProvider>,
    measurer: Box<dyn TextMeasurer>,
}

impl Default for Editor {
    fn default() -> Self {
        EditorBuilder::new().build()
    }
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("presentation", &self.presentation)
            .field("image_base_dir", &self.image_base_dir)
            .finish_non_exhaustive()
    }
}

impl Editor {
    pub fn builder() -> EditorBuilder {
        EditorBuilder::new()
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    pub fn measurer(&self) -> &dyn TextMeasurer {
        self.measurer.as_ref()
    }

    /// The image lookup chain for a presentation loaded from `source`.
    pub fn resolver_for(&self, source: &Source) -> ResolverChain {
        let base = match (&self.image_base_dir, source) {
            (Some(dir), _) => dir.clone(),
            (None, Source::File(path)) => path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
            (None, Source::Demo) => PathBuf::from("."),
        };
        ResolverChain::standard(base, self.bundled.clone())
    }

    /// Replaces the presentation with `source` and selects its first slide.
    pub fn open(&mut self, source: &Source) -> Result<Vec<LoadDiagnostic>, LecternError> {
        let resolver = self.resolver_for(source);
        commands::load_presentation(&mut self.presentation, source, &resolver).inspect_err(|e| {
            log::error!("Failed to open {:?}: {}", source, e);
        })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LecternError> {
        let path = path.as_ref();
        commands::save_presentation(&self.presentation, path).inspect_err(|e| {
            log::error!("Failed to save '{}': {}", path.display(), e);
        })
    }

    pub fn next_slide(&mut self) -> bool {
        self.presentation.next_slide()
    }

    pub fn prev_slide(&mut self) -> bool {
        self.presentation.prev_slide()
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), LecternError> {
        Ok(self.presentation.set_current_index(index)?)
    }

    pub fn add_observer(&mut self, observer: Rc<dyn SlideObserver>) {
        self.presentation.add_observer(observer);
    }

    pub fn remove_observer(&mut self, observer: &Rc<dyn SlideObserver>) -> bool {
        self.presentation.remove_observer(observer)
    }

    /// Placements for the current slide in `area`; empty with no selection.
    pub fn layout_current(&self, area: Rect) -> Vec<Placement<'_>> {
        match self.presentation.current_slide() {
            Some(slide) => slide.layout(area, &self.styles, Some(self.measurer.as_ref())),
            None => Vec::new(),
        }
    }

    /// Draws the current slide onto `surface`. Returns whether a slide was
    /// drawn.
    ///
    /// Items are stacked with the editor's measurer, so they land exactly on
    /// the rectangles [`Editor::layout_current`] reports. Lines inside an item
    /// are still wrapped with the surface's own metrics.
    pub fn render_current(&self, area: Rect, surface: &mut dyn Surface) -> bool {
        if self.presentation.current_slide().is_none() {
            return false;
        }
        let placements = self.layout_current(area);
        Slide::paint(&placements, area, &self.styles, surface);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_base_follows_source() {
        let editor = Editor::default();
        let chain = editor.resolver_for(&Source::file("decks/talk.xml"));
        assert_eq!(chain.len(), 4);
        assert_eq!(
            chain.provider_names(),
            vec![
                "DirectPathProvider",
                "FilesystemResourceProvider",
                "InMemoryResourceProvider",
                "FilesystemResourceProvider",
            ]
        );
    }

    #[test]
    fn test_open_demo_selects_first_slide() {
        let mut editor = Editor::default();
        let diagnostics = editor.open(&Source::Demo).unwrap();
        assert!(diagnostics.is_empty());
        assert_eq!(editor.presentation().current_index(), Some(0));
        assert!(editor.next_slide());
        assert!(editor.go_to(99).is_err());
        assert_eq!(editor.presentation().current_index(), Some(1));
    }

    #[test]
    fn test_layout_without_selection_is_empty() {
        let editor = Editor::default();
        let area = Rect::new(0.0, 0.0, 1200.0, 800.0);
        assert!(editor.layout_current(area).is_empty());
    }

    #[test]
    fn test_render_follows_layout_rectangles() {
        use lectern_layout::{DrawCommand, FixedMetrics, LayoutConfig, RecordingSurface};

        // Lines twice as tall as the surface's own metrics.
        let tall = LayoutConfig {
            ascent_ratio: 1.6,
            descent_ratio: 0.4,
            ..LayoutConfig::default()
        };
        let mut editor = Editor::builder()
            .with_measurer(Box::new(FixedMetrics::new(tall)))
            .build();
        editor.open(&Source::Demo).unwrap();

        let area = Rect::new(0.0, 0.0, 1200.0, 800.0);
        let placements = editor.layout_current(area);
        let mut surface = RecordingSurface::<FixedMetrics>::default();
        assert!(editor.render_current(area, &mut surface));

        let baselines: Vec<f32> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { y, .. } => Some(*y),
                _ => None,
            })
            .collect();
        // Empty items occupy space but draw nothing.
        let drawn: Vec<_> = placements
            .iter()
            .filter(|p| !p.item.content().is_empty())
            .collect();
        assert_eq!(baselines.len(), drawn.len());
        for (baseline, placement) in baselines.iter().zip(drawn) {
            assert!(*baseline > placement.rect.y);
            assert!(*baseline < placement.rect.bottom());
        }
    }
}
