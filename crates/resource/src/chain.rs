//! Ordered fallback over several resource providers.

use crate::filesystem::{DirectPathProvider, FilesystemResourceProvider};
use lectern_traits::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
use std::path::Path;
use std::sync::Arc;

/// Tries each provider in turn and returns the first successful load.
///
/// Individual misses are logged at debug level; only when every strategy has
/// failed does the chain report `NotFound`, carrying the last failure.
#[derive(Debug, Default, Clone)]
pub struct ResolverChain {
    providers: Vec<Arc<dyn ResourceProvider>>,
}

impl ResolverChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard image lookup order:
    /// 1. the reference as given (a filesystem path),
    /// 2. relative to `base_dir`,
    /// 3. the bundled in-memory resources,
    /// 4. relative to the parent of `base_dir`.
    pub fn standard<P: AsRef<Path>>(base_dir: P, bundled: Arc<InMemoryResourceProvider>) -> Self {
        let base_dir = base_dir.as_ref();
        Self::new()
            .with(Arc::new(DirectPathProvider))
            .with(Arc::new(FilesystemResourceProvider::new(base_dir)))
            .with(bundled)
            .with(Arc::new(FilesystemResourceProvider::new(base_dir.join(".."))))
    }

    /// Appends a provider; it is tried after every provider already present.
    pub fn with(mut self, provider: Arc<dyn ResourceProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }
}

impl ResourceProvider for ResolverChain {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let mut last_error = None;
        for provider in &self.providers {
            match provider.load(path) {
                Ok(data) => {
                    log::debug!("Resolved '{}' via {}", path, provider.name());
                    return Ok(data);
                }
                Err(e) => {
                    log::debug!("{} could not load '{}': {}", provider.name(), path, e);
                    last_error = Some(e);
                }
            }
        }
        log::warn!(
            "Resource '{}' not found after trying {} strategies",
            path,
            self.providers.len()
        );
        Err(match last_error {
            Some(ResourceError::NotFound(_)) | None => ResourceError::NotFound(path.to_string()),
            Some(other) => other,
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.providers.iter().any(|p| p.exists(path))
    }

    fn name(&self) -> &'static str {
        "ResolverChain"
    }
}
