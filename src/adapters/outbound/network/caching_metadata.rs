use dashmap::DashMap;
use std::sync::Arc;
use tracing::warn;

use crate::notice::domain::ArtifactCoordinates;
use crate::ports::outbound::{ArtifactMetadata, MetadataProvider};
use crate::shared::Result;

/// Cache key for artifact metadata
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct CacheKey {
    group_id: String,
    artifact_id: String,
    version: String,
}

impl CacheKey {
    fn new(coordinates: &ArtifactCoordinates) -> Self {
        Self {
            group_id: coordinates.group_id().to_string(),
            artifact_id: coordinates.artifact_id().to_string(),
            version: coordinates.version().to_string(),
        }
    }
}

/// CachingMetadataProvider wraps a MetadataProvider and adds in-memory
/// caching.
///
/// This decorator makes repeated lookups of the same artifact free across
/// module traversals. Successful outcomes (including a clean not-found) are
/// cached; failures are not, so each traversal reports its own warnings.
pub struct CachingMetadataProvider<M: MetadataProvider> {
    inner: M,
    cache: Arc<DashMap<CacheKey, Option<ArtifactMetadata>>>,
}

impl<M: MetadataProvider> CachingMetadataProvider<M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl<M: MetadataProvider> MetadataProvider for CachingMetadataProvider<M> {
    fn load(&self, coordinates: &ArtifactCoordinates) -> Result<Option<ArtifactMetadata>> {
        let key = CacheKey::new(coordinates);

        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached.clone());
        }

        let metadata = self.inner.load(coordinates)?;
        self.cache.insert(key, metadata.clone());

        Ok(metadata)
    }
}

/// ChainMetadataProvider consults multiple repositories in configuration
/// order; the first one that serves the artifact wins.
///
/// A failing repository is logged and skipped; its failure is only surfaced
/// when no later repository serves the artifact either.
pub struct ChainMetadataProvider {
    providers: Vec<Box<dyn MetadataProvider>>,
}

impl ChainMetadataProvider {
    pub fn new(providers: Vec<Box<dyn MetadataProvider>>) -> Self {
        Self { providers }
    }
}

impl MetadataProvider for ChainMetadataProvider {
    fn load(&self, coordinates: &ArtifactCoordinates) -> Result<Option<ArtifactMetadata>> {
        let mut first_error = None;

        for provider in &self.providers {
            match provider.load(coordinates) {
                Ok(Some(metadata)) => return Ok(Some(metadata)),
                Ok(None) => {}
                Err(e) => {
                    warn!("Metadata repository failed for {}: {}", coordinates, e);
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(None),
        }
    }
}
