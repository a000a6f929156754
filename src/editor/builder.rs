use super::Editor;
use crate::config::EditorConfig;
use crate::error::LecternError;
use lectern_document::Presentation;
use lectern_layout::{FixedMetrics, FontLibrary, LayoutConfig, ShapingMeasurer, TextMeasurer};
use lectern_resource::InMemoryResourceProvider;
use lectern_style::StyleTable;
use std::path::PathBuf;
use std::sync::Arc;

/// A builder for creating an `Editor`.
pub struct EditorBuilder {
    styles: StyleTable,
    image_base_dir: Option<PathBuf>,
    bundled: Arc<InMemoryResourceProvider>,
    system_fonts: bool,
    layout_config: LayoutConfig,
    measurer: Option<Box<dyn TextMeasurer>>,
}

impl Default for EditorBuilder {
    fn default() -> Self {
        Self {
            styles: StyleTable::default(),
            image_base_dir: None,
            bundled: Arc::new(InMemoryResourceProvider::new()),
            system_fonts: false,
            layout_config: LayoutConfig::default(),
            measurer: None,
        }
    }
}

impl EditorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies every setting in `config`, overriding earlier calls.
    pub fn with_config(mut self, config: &EditorConfig) -> Result<Self, LecternError> {
        self.styles = config.style_table()?;
        if let Some(dir) = &config.image_base_dir {
            self.image_base_dir = Some(dir.clone());
        }
        self.system_fonts = config.system_fonts;
        Ok(self)
    }

    pub fn with_styles(mut self, styles: StyleTable) -> Self {
        self.styles = styles;
        self
    }

    /// Resolve image references against `dir` instead of the opened file's
    /// directory.
    pub fn with_image_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.image_base_dir = Some(dir.into());
        self
    }

    /// Images available by name without touching the filesystem.
    pub fn with_bundled_resources(mut self, bundled: Arc<InMemoryResourceProvider>) -> Self {
        self.bundled = bundled;
        self
    }

    /// Measure text by shaping it with installed fonts.
    pub fn with_system_fonts(mut self, system_fonts: bool) -> Self {
        self.system_fonts = system_fonts;
        self
    }

    /// Ratios for the fixed-metric measurer, used directly or as the shaping
    /// fallback.
    pub fn with_layout_config(mut self, config: LayoutConfig) -> Self {
        self.layout_config = config;
        self
    }

    /// Use `measurer` for layout, ignoring font and metric settings.
    pub fn with_measurer(mut self, measurer: Box<dyn TextMeasurer>) -> Self {
        self.measurer = Some(measurer);
        self
    }

    pub fn build(self) -> Editor {
        let fixed = FixedMetrics::new(self.layout_config);
        let measurer = match self.measurer {
            Some(measurer) => measurer,
            None if self.system_fonts => {
                let library = FontLibrary::new().with_system_fonts(true);
                Box::new(ShapingMeasurer::new(library).with_fallback(fixed))
            }
            None => Box::new(fixed),
        };

        Editor {
            presentation: Presentation::new(),
            styles: self.styles,
            image_base_dir: self.image_base_dir,
            bundled: self.bundled,
            measurer,
        }
    }
}
