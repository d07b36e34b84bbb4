use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock};

use anyhow::Context;
use regex::Regex;
use tracing::debug;

use crate::notice::domain::{
    ArtifactKey, MappingDocument, MappingEntry, MappingMatch, VersionMatchType,
};
use crate::notice::policies::MatchPrecedence;
use crate::ports::outbound::ResourceFinder;
use crate::shared::error::NoticeError;
use crate::shared::Result;

/// Upper bound on cached parsed documents.
const MAX_CACHED_DOCUMENTS: usize = 20;

/// Merged view over all configured mapping documents.
///
/// For each artifact key the entries of every document are concatenated in
/// document order, so earlier-listed documents take precedence in tie-breaks.
#[derive(Debug, Default)]
pub struct MappingIndex {
    entries: HashMap<ArtifactKey, Vec<MappingEntry>>,
}

impl MappingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    fn merge(&mut self, document: &MappingDocument) {
        for entry in &document.artifacts {
            let key = ArtifactKey {
                group_id: entry.group_id.clone(),
                artifact_id: entry.artifact_id.clone(),
            };
            self.entries.entry(key).or_default().push(entry.clone());
        }
    }

    /// Match an artifact against the index using the configured precedence
    /// policy. Returns `None` when no entry exists for the key or no
    /// constraint matches the version.
    pub fn lookup(&self, key: &ArtifactKey, version: &str) -> Option<MappingMatch<'_>> {
        let entries = self.entries.get(key)?;
        MatchPrecedence::select(entries, version)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

/// Process-wide cache of parsed mapping documents, keyed by resolved
/// location identity and shared across all module traversals of one run.
///
/// Reads take the shared lock; a miss escalates to the exclusive lock and
/// re-checks before parsing, so concurrent traversals never parse the same
/// document twice.
#[derive(Debug, Default)]
pub struct DocumentCache {
    inner: RwLock<CacheInner>,
}

#[derive(Debug, Default)]
struct CacheInner {
    documents: HashMap<String, Arc<MappingDocument>>,
    order: VecDeque<String>,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_parse<F>(&self, identity: &str, parse: F) -> Result<Arc<MappingDocument>>
    where
        F: FnOnce() -> Result<MappingDocument>,
    {
        {
            let inner = self.inner.read().expect("document cache lock poisoned");
            if let Some(document) = inner.documents.get(identity) {
                return Ok(Arc::clone(document));
            }
        }

        let mut inner = self.inner.write().expect("document cache lock poisoned");
        // Another traversal may have populated the entry while we waited.
        if let Some(document) = inner.documents.get(identity) {
            let document = Arc::clone(document);
            inner.order.retain(|key| key.as_str() != identity);
            inner.order.push_back(identity.to_string());
            return Ok(document);
        }

        debug!(location = identity, "parsing mapping document");
        let document = Arc::new(parse()?);
        inner
            .documents
            .insert(identity.to_string(), Arc::clone(&document));
        inner.order.push_back(identity.to_string());
        while inner.order.len() > MAX_CACHED_DOCUMENTS {
            if let Some(evicted) = inner.order.pop_front() {
                inner.documents.remove(&evicted);
            }
        }

        Ok(document)
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .expect("document cache lock poisoned")
            .documents
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Loads mapping documents through the resource finder, caches the parses,
/// and merges them into a [`MappingIndex`].
pub struct MappingStore {
    cache: Arc<DocumentCache>,
}

impl MappingStore {
    pub fn new(cache: Arc<DocumentCache>) -> Self {
        Self { cache }
    }

    /// Resolve, parse and merge the given document locations in order.
    /// Any unreachable or malformed document is fatal and names the location.
    pub fn load(&self, locations: &[String], finder: &dyn ResourceFinder) -> Result<MappingIndex> {
        let mut index = MappingIndex::new();

        for location in locations {
            let resource =
                finder
                    .find(location)
                    .map_err(|e| NoticeError::MappingDocumentError {
                        location: location.clone(),
                        details: e.to_string(),
                    })?;

            let document = self
                .cache
                .get_or_parse(resource.identity(), || {
                    let content = resource.read()?;
                    parse_mapping_document(&content)
                })
                .map_err(|e| NoticeError::MappingDocumentError {
                    location: location.clone(),
                    details: e.to_string(),
                })?;

            debug!(
                location = location.as_str(),
                entries = document.artifacts.len(),
                "merged mapping document"
            );
            index.merge(&document);
        }

        Ok(index)
    }
}

/// Parse and validate one mapping document. Regex constraints are compiled
/// here so a bad pattern fails the load instead of silently never matching.
pub fn parse_mapping_document(content: &str) -> Result<MappingDocument> {
    let document: MappingDocument =
        toml::from_str(content).context("Failed to parse mapping document")?;

    for entry in &document.artifacts {
        for constraint in &entry.versions {
            if constraint.match_type == VersionMatchType::Regex {
                Regex::new(&format!("^(?:{})$", constraint.value)).with_context(|| {
                    format!(
                        "Invalid version pattern '{}' for {}:{}",
                        constraint.value, entry.group_id, entry.artifact_id
                    )
                })?;
            }
        }
    }

    Ok(document)
}
