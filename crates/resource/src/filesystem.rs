//! Filesystem-based resource providers.
//!
//! [`FilesystemResourceProvider`] resolves names against a base directory and
//! refuses to escape it. [`DirectPathProvider`] treats the name as a path the
//! user typed and reads it unchanged; it is the first strategy tried for image
//! references, matching how a presentation file usually names its pictures.

use lectern_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

fn read_shared(full_path: &Path, name: &str) -> Result<SharedResourceData, ResourceError> {
    std::fs::read(full_path).map(Arc::new).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ResourceError::NotFound(name.to_string())
        } else {
            ResourceError::LoadFailed {
                path: name.to_string(),
                message: e.to_string(),
            }
        }
    })
}

/// A resource provider that loads resources relative to a base directory.
///
/// Paths are canonicalized and must stay inside the base directory; absolute
/// names and names that climb out with `..` are reported as `NotFound`.
#[derive(Debug)]
pub struct FilesystemResourceProvider {
    base_path: PathBuf,
    /// Canonicalized base path for containment checks
    canonical_base: Option<PathBuf>,
}

impl FilesystemResourceProvider {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base = base_path.as_ref().to_path_buf();
        // May fail if the directory doesn't exist yet
        let canonical = base.canonicalize().ok();
        Self {
            base_path: base,
            canonical_base: canonical,
        }
    }

    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Resolves `path` under the base directory, or `None` if it would escape.
    fn resolve_path_safe(&self, path: &str) -> Option<PathBuf> {
        if Path::new(path).is_absolute() {
            return None;
        }

        let full_path = self.base_path.join(path);

        if let Ok(canonical) = full_path.canonicalize()
            && let Some(ref base) = self.canonical_base
        {
            return canonical.starts_with(base).then_some(canonical);
        }

        // Nothing to canonicalize: fall back to a component check.
        if Path::new(path)
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return None;
        }

        Some(full_path)
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let full_path = self.resolve_path_safe(path).ok_or_else(|| {
            ResourceError::NotFound(format!("{} (outside {})", path, self.base_path.display()))
        })?;
        read_shared(&full_path, path)
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve_path_safe(path)
            .map(|p| p.is_file())
            .unwrap_or(false)
    }

    fn base_path(&self) -> Option<&str> {
        self.base_path.to_str()
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}

/// Reads the reference as a plain filesystem path, relative to the process
/// working directory when not absolute.
#[derive(Debug, Default)]
pub struct DirectPathProvider;

impl ResourceProvider for DirectPathProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        if path.is_empty() {
            return Err(ResourceError::NotFound(path.to_string()));
        }
        read_shared(Path::new(path), path)
    }

    fn exists(&self, path: &str) -> bool {
        !path.is_empty() && Path::new(path).is_file()
    }

    fn name(&self) -> &'static str {
        "DirectPathProvider"
    }
}
