//! Editor configuration, loaded from camelCase JSON.
//!
//! ```json
//! {
//!   "imageBaseDir": "slides/images",
//!   "systemFonts": true,
//!   "styles": [
//!     { "indent": 0, "leading": 20, "fontSize": 48, "color": "#FF0000" },
//!     ...
//!   ]
//! }
//! ```

use crate::error::LecternError;
use lectern_style::{Style, StyleError, StyleTable};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// Directory image references are resolved against. Defaults to the
    /// directory of the opened file.
    pub image_base_dir: Option<PathBuf>,
    /// Replacement outline styles, level 0 first. At least five are required.
    pub styles: Option<Vec<Style>>,
    /// Measure with installed system fonts instead of fixed metrics.
    pub system_fonts: bool,
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, LecternError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LecternError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LecternError::Config(format!(
                "Failed to read config from '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded editor config from '{}'", path.display());
        Ok(config)
    }

    /// The configured style table, or the default outline when none is set.
    pub fn style_table(&self) -> Result<StyleTable, StyleError> {
        match &self.styles {
            Some(styles) => StyleTable::new(styles.clone()),
            None => Ok(StyleTable::default()),
        }
    }
}
