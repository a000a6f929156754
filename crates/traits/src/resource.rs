//! ResourceProvider trait for locating the bytes behind an image reference.
//!
//! Slides refer to images by name. Where those bytes live (a path on disk, a
//! directory next to the presentation, resources bundled into the binary) is
//! decided by providers implementing this trait.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Error type for resource lookups.
#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

/// Shared resource data type (reference-counted bytes).
pub type SharedResourceData = Arc<Vec<u8>>;

/// A source of resource bytes addressed by name.
///
/// # Implementations
///
/// - `InMemoryResourceProvider`: resources bundled or registered at runtime
/// - `FilesystemResourceProvider` / `DirectPathProvider` (lectern-resource)
/// - `ResolverChain` (lectern-resource): tries several providers in order
pub trait ResourceProvider: Send + Sync + Debug {
    /// Load a resource by its name or path.
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError>;

    /// Check if a resource exists without reading it.
    fn exists(&self, path: &str) -> bool;

    /// Base directory used for relative lookups, if any.
    fn base_path(&self) -> Option<&str> {
        None
    }

    /// Returns a human-readable name for this provider (for logging).
    fn name(&self) -> &'static str;
}

/// Resources held in memory, e.g. images compiled into the application.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    resources: RwLock<HashMap<String, SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `data` under `path`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, path: impl Into<String>, data: Vec<u8>) -> Result<(), ResourceError> {
        let path = path.into();
        let mut resources = self
            .resources
            .write()
            .map_err(|_| ResourceError::LoadFailed {
                path: path.clone(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources.insert(path, Arc::new(data));
        Ok(())
    }

    /// Number of registered resources. Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.resources.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let resources = self
            .resources
            .read()
            .map_err(|_| ResourceError::LoadFailed {
                path: path.to_string(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources
            .get(path)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }

    fn exists(&self, path: &str) -> bool {
        self.resources
            .read()
            .map(|r| r.contains_key(path))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_provider_add_and_load() {
        let provider = InMemoryResourceProvider::new();
        provider.add("logo.png", b"PNG".to_vec()).unwrap();

        let data = provider.load("logo.png").unwrap();
        assert_eq!(&*data, b"PNG");
        assert!(provider.exists("logo.png"));
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn test_in_memory_provider_not_found() {
        let provider = InMemoryResourceProvider::new();
        assert!(provider.is_empty());
        assert!(matches!(
            provider.load("missing.png"),
            Err(ResourceError::NotFound(_))
        ));
        assert!(!provider.exists("missing.png"));
        assert!(provider.base_path().is_none());
    }

    #[test]
    fn test_in_memory_provider_overwrite() {
        let provider = InMemoryResourceProvider::new();
        provider.add("a.png", b"old".to_vec()).unwrap();
        provider.add("a.png", b"new".to_vec()).unwrap();
        assert_eq!(&*provider.load("a.png").unwrap(), b"new");
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn test_resource_error_display() {
        let err = ResourceError::LoadFailed {
            path: "file.bin".to_string(),
            message: "permission denied".to_string(),
        };
        assert!(err.to_string().contains("file.bin"));
        assert!(err.to_string().contains("permission denied"));

        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err: ResourceError = io_err.into();
        assert!(matches!(err, ResourceError::Io(_)));
    }
}
