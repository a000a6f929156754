use crate::error::{LoadDiagnostic, LoadError};
use lectern_document::{BitmapItem, ItemKind, Presentation, Slide, SlideItem, TextItem};
use lectern_traits::ResourceProvider;
use roxmltree::{Document, Node, ParsingOptions};
use std::path::Path;

const SHOW_TITLE: &str = "showtitle";
const SLIDE: &str = "slide";
const SLIDE_TITLE: &str = "title";
const ITEM: &str = "item";
const LEVEL: &str = "level";
const KIND: &str = "kind";

const FALLBACK_LEVEL: u32 = 1;

/// Loads presentations, resolving image items through a resource provider.
///
/// Diagnostics accumulate across loads until taken.
pub struct XmlReader<'r> {
    resolver: &'r dyn ResourceProvider,
    diagnostics: Vec<LoadDiagnostic>,
}

impl<'r> XmlReader<'r> {
    pub fn new(resolver: &'r dyn ResourceProvider) -> Self {
        Self {
            resolver,
            diagnostics: Vec::new(),
        }
    }

    pub fn diagnostics(&self) -> &[LoadDiagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<LoadDiagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Reads the file at `path` into `presentation`.
    pub fn read_file(
        &mut self,
        presentation: &mut Presentation,
        path: impl AsRef<Path>,
    ) -> Result<(), LoadError> {
        let path = path.as_ref();
        let xml = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                LoadError::NotFound(path.to_path_buf())
            } else {
                LoadError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        log::debug!("Loading presentation from '{}'", path.display());
        self.read_str(presentation, &xml)
    }

    /// Sets the presentation title and appends every slide in `xml`.
    ///
    /// The document is fully parsed before `presentation` is modified, so a
    /// returned error leaves it as it was.
    pub fn read_str(&mut self, presentation: &mut Presentation, xml: &str) -> Result<(), LoadError> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(xml, options)?;
        let root = doc.root_element();

        let title = root
            .descendants()
            .find(|n| n.has_tag_name(SHOW_TITLE))
            .map(text_content)
            .ok_or(LoadError::MissingElement(SHOW_TITLE))?;

        let slides: Vec<Slide> = root
            .descendants()
            .filter(|n| n.has_tag_name(SLIDE))
            .enumerate()
            .map(|(index, node)| self.read_slide(index, node))
            .collect();

        log::info!("Loaded presentation '{}' with {} slides", title, slides.len());
        presentation.set_title(title);
        for slide in slides {
            presentation.append(slide);
        }
        Ok(())
    }

    fn read_slide(&mut self, slide_index: usize, node: Node<'_, '_>) -> Slide {
        let title = node
            .descendants()
            .find(|n| n.has_tag_name(SLIDE_TITLE))
            .map(text_content)
            .unwrap_or_default();
        let mut slide = Slide::with_title(title);

        for (item_index, item) in node
            .descendants()
            .filter(|n| n.has_tag_name(ITEM))
            .enumerate()
        {
            if let Some(item) = self.read_item(slide_index, item_index, item) {
                slide.append(item);
            }
        }
        slide
    }

    fn read_item(&mut self, slide: usize, item: usize, node: Node<'_, '_>) -> Option<SlideItem> {
        let level_attr = node.attribute(LEVEL);
        let level = match level_attr.and_then(|v| v.parse::<u32>().ok()) {
            Some(level) => level,
            None => {
                self.report(LoadDiagnostic::InvalidLevel {
                    slide,
                    item,
                    value: level_attr.map(str::to_string),
                });
                FALLBACK_LEVEL
            }
        };

        let kind_attr = node.attribute(KIND);
        let content = text_content(node);
        match kind_attr.and_then(ItemKind::parse) {
            Some(ItemKind::Text) => Some(TextItem::new(level, content).into()),
            Some(ItemKind::Image) => {
                let bitmap = BitmapItem::new(level, content, self.resolver);
                if !bitmap.is_resolved() {
                    self.report(LoadDiagnostic::UnresolvedImage {
                        slide,
                        item,
                        image_ref: bitmap.image_ref().to_string(),
                    });
                }
                Some(bitmap.into())
            }
            None => {
                self.report(LoadDiagnostic::UnknownKind {
                    slide,
                    item,
                    kind: kind_attr.map(str::to_string),
                });
                None
            }
        }
    }

    fn report(&mut self, diagnostic: LoadDiagnostic) {
        log::warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}

/// Concatenated text of all descendant text nodes, untrimmed.
fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}
