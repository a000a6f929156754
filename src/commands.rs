//! The operations a shell invokes to load and save presentations.

use crate::demo;
use crate::error::LecternError;
use lectern_document::Presentation;
use lectern_traits::ResourceProvider;
use lectern_xml::{LoadDiagnostic, XmlReader};
use std::path::{Path, PathBuf};

/// Where a presentation comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    /// The built-in demo presentation.
    Demo,
}

impl Source {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Source::File(path.into())
    }
}

/// Replaces the contents of `presentation` with `source` and selects the
/// first slide.
///
/// The presentation is cleared before loading; if loading fails it stays
/// cleared. Returns the recoverable problems found while loading.
pub fn load_presentation(
    presentation: &mut Presentation,
    source: &Source,
    resolver: &dyn ResourceProvider,
) -> Result<Vec<LoadDiagnostic>, LecternError> {
    presentation.clear();

    let diagnostics = match source {
        Source::File(path) => {
            let mut reader = XmlReader::new(resolver);
            reader.read_file(presentation, path)?;
            reader.take_diagnostics()
        }
        Source::Demo => {
            demo::populate(presentation);
            Vec::new()
        }
    };

    if !presentation.is_empty() {
        presentation.set_current_index(0)?;
    }
    Ok(diagnostics)
}

/// Writes `presentation` to `path` in the XML format.
pub fn save_presentation(
    presentation: &Presentation,
    path: impl AsRef<Path>,
) -> Result<(), LecternError> {
    lectern_xml::write_file(presentation, path)?;
    Ok(())
}
