//! Font library for the shaping measurer.
//!
//! `FontLibrary` resolves a [`FontSpec`] to raw font bytes. Fonts come from two
//! places:
//! - fonts registered explicitly with [`FontLibrary::add_font_data`]
//! - the system font database (feature: `system-fonts`, via fontdb)
//!
//! Registered fonts take precedence. Resolved fonts are cached per
//! (family, weight).

use crate::FontError;
use lectern_style::FontSpec;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// A thread-safe handle to font data with rustybuzz Face creation.
pub struct FontInstance {
    pub data: Arc<Vec<u8>>,
    pub index: u32,
}

impl std::fmt::Debug for FontInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontInstance")
            .field("data_len", &self.data.len())
            .field("index", &self.index)
            .finish()
    }
}

impl FontInstance {
    pub fn new(data: Arc<Vec<u8>>, index: u32) -> Self {
        Self { data, index }
    }

    /// Creates a lightweight Face view over the font data.
    pub fn as_face(&self) -> Option<rustybuzz::Face<'_>> {
        rustybuzz::Face::from_slice(&self.data, self.index)
    }
}

pub type FontData = Arc<FontInstance>;

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct FontCacheKey {
    family: String,
    bold: bool,
}

impl FontCacheKey {
    fn new(family: &str, bold: bool) -> Self {
        Self {
            family: family.to_lowercase(),
            bold,
        }
    }
}

#[derive(Clone)]
pub struct FontLibrary {
    #[cfg(feature = "system-fonts")]
    db: Arc<RwLock<fontdb::Database>>,

    /// Explicitly registered faces, keyed like the cache.
    registered: Arc<RwLock<HashMap<FontCacheKey, FontData>>>,

    cache: Arc<RwLock<HashMap<FontCacheKey, FontData>>>,
}

impl std::fmt::Debug for FontLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registered = self.registered.read().map(|r| r.len()).unwrap_or(0);
        f.debug_struct("FontLibrary")
            .field("registered", &registered)
            .finish_non_exhaustive()
    }
}

impl Default for FontLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl FontLibrary {
    /// Creates an empty library. No system fonts are loaded until
    /// [`with_system_fonts`](Self::with_system_fonts) is called.
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "system-fonts")]
            db: Arc::new(RwLock::new(fontdb::Database::new())),
            registered: Arc::new(RwLock::new(HashMap::new())),
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Scans the host for installed fonts.
    #[cfg(feature = "system-fonts")]
    pub fn with_system_fonts(self, enable: bool) -> Self {
        if enable && let Ok(mut db) = self.db.write() {
            db.load_system_fonts();
            log::debug!("Loaded {} system font faces", db.len());
        }
        self
    }

    #[cfg(not(feature = "system-fonts"))]
    pub fn with_system_fonts(self, enable: bool) -> Self {
        if enable {
            log::warn!("System fonts requested but the `system-fonts` feature is disabled");
        }
        self
    }

    /// Adds every font file in `path` to the system database.
    #[cfg(feature = "system-fonts")]
    pub fn add_font_dir<P: AsRef<std::path::Path>>(&self, path: P) {
        if let Ok(mut db) = self.db.write() {
            db.load_fonts_dir(path);
        }
    }

    /// Registers font bytes under `family`. When `family` is `None` the family
    /// name is read from the font's name table.
    pub fn add_font_data(
        &self,
        family: Option<&str>,
        bold: bool,
        data: Vec<u8>,
    ) -> Result<(), FontError> {
        let family = match family {
            Some(name) => name.to_string(),
            None => extract_family_name(&data).ok_or_else(|| {
                FontError::InvalidData("font has no readable family name".to_string())
            })?,
        };
        let instance = Arc::new(FontInstance::new(Arc::new(data), 0));
        if instance.as_face().is_none() {
            return Err(FontError::InvalidData(format!(
                "'{}' is not a parseable font",
                family
            )));
        }

        log::debug!("Registering font '{}' (bold: {})", family, bold);
        let mut registered = self
            .registered
            .write()
            .map_err(|_| FontError::Poisoned("font registry"))?;
        registered.insert(FontCacheKey::new(&family, bold), instance);
        Ok(())
    }

    /// Resolves the font bytes for `font`.
    ///
    /// Resolution order:
    /// 1. cache
    /// 2. registered fonts (exact weight, then any weight)
    /// 3. fontdb, by family then generic sans-serif
    pub fn resolve(&self, font: &FontSpec) -> Result<FontData, FontError> {
        let key = FontCacheKey::new(&font.family, font.bold);

        if let Ok(cache) = self.cache.read()
            && let Some(data) = cache.get(&key)
        {
            return Ok(data.clone());
        }

        let data = match self.find_registered(&key) {
            Some(data) => data,
            None => self.resolve_system(font)?,
        };

        if let Ok(mut cache) = self.cache.write() {
            cache.insert(key, data.clone());
        }
        Ok(data)
    }

    fn find_registered(&self, key: &FontCacheKey) -> Option<FontData> {
        let registered = self.registered.read().ok()?;
        registered
            .get(key)
            .or_else(|| {
                registered.get(&FontCacheKey {
                    family: key.family.clone(),
                    bold: !key.bold,
                })
            })
            .cloned()
    }

    #[cfg(feature = "system-fonts")]
    fn resolve_system(&self, font: &FontSpec) -> Result<FontData, FontError> {
        let weight = if font.bold {
            fontdb::Weight::BOLD
        } else {
            fontdb::Weight::NORMAL
        };
        let db = self
            .db
            .read()
            .map_err(|_| FontError::Poisoned("fontdb"))?;

        let id = db
            .query(&fontdb::Query {
                families: &[fontdb::Family::Name(&*font.family), fontdb::Family::SansSerif],
                weight,
                stretch: fontdb::Stretch::Normal,
                style: fontdb::Style::Normal,
            })
            .ok_or_else(|| FontError::NotFound {
                family: font.family.to_string(),
                bold: font.bold,
            })?;

        let (bytes, index) = db
            .with_face_data(id, |data, index| (data.to_vec(), index))
            .ok_or_else(|| FontError::NotFound {
                family: font.family.to_string(),
                bold: font.bold,
            })?;
        log::debug!("Resolved '{}' from system fonts", font.family);
        Ok(Arc::new(FontInstance::new(Arc::new(bytes), index)))
    }

    #[cfg(not(feature = "system-fonts"))]
    fn resolve_system(&self, font: &FontSpec) -> Result<FontData, FontError> {
        Err(FontError::NotFound {
            family: font.family.to_string(),
            bold: font.bold,
        })
    }
}

/// Reads the family name (name ID 1) from raw font data.
fn extract_family_name(data: &[u8]) -> Option<String> {
    let face = ttf_parser::Face::parse(data, 0).ok()?;
    face.names()
        .into_iter()
        .find(|n| n.name_id == ttf_parser::name_id::FAMILY)
        .and_then(|n| n.to_string())
}
