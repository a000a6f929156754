use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A failure that aborts a load. The target presentation is left untouched.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Presentation file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed presentation XML: {0}")]
    Parse(#[from] roxmltree::Error),

    #[error("Missing required element <{0}>")]
    MissingElement(&'static str),
}

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("Failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML serialization failed: {0}")]
    Write(String),
}

/// A recoverable problem found while loading. The affected item is repaired
/// or skipped and loading continues.
///
/// Slide and item positions are zero-based, counting items in document order
/// within their slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadDiagnostic {
    /// The `level` attribute was missing or not a non-negative integer; level 1
    /// was used instead.
    InvalidLevel {
        slide: usize,
        item: usize,
        value: Option<String>,
    },
    /// The `kind` attribute named no known item kind; the item was skipped.
    UnknownKind {
        slide: usize,
        item: usize,
        kind: Option<String>,
    },
    /// An image item whose reference could not be resolved or decoded. The
    /// item was kept and renders a placeholder.
    UnresolvedImage {
        slide: usize,
        item: usize,
        image_ref: String,
    },
}

impl fmt::Display for LoadDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadDiagnostic::InvalidLevel { slide, item, value } => write!(
                f,
                "slide {slide}, item {item}: invalid level {:?}, using 1",
                value.as_deref().unwrap_or("")
            ),
            LoadDiagnostic::UnknownKind { slide, item, kind } => write!(
                f,
                "slide {slide}, item {item}: unknown kind {:?}, skipped",
                kind.as_deref().unwrap_or("")
            ),
            LoadDiagnostic::UnresolvedImage {
                slide,
                item,
                image_ref,
            } => write!(f, "slide {slide}, item {item}: image '{image_ref}' not found"),
        }
    }
}
