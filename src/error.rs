use lectern_document::NavigationError;
use lectern_style::StyleError;
use lectern_traits::ResourceError;
use lectern_xml::{LoadError, SaveError};
use thiserror::Error;

/// Top-level error for the command surface and editor facade.
#[derive(Error, Debug)]
pub enum LecternError {
    #[error("Loading failed: {0}")]
    Load(#[from] LoadError),

    #[error("Saving failed: {0}")]
    Save(#[from] SaveError),

    #[error("Navigation failed: {0}")]
    Navigation(#[from] NavigationError),

    #[error("Style table is invalid: {0}")]
    Style(#[from] StyleError),

    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for LecternError {
    fn from(e: serde_json::Error) -> Self {
        LecternError::Config(e.to_string())
    }
}
