use std::path::PathBuf;

use crate::shared::error::NoticeError;
use crate::shared::Result;

/// ResourceFinder port for locating mapping documents and templates.
///
/// A location string is resolved through a search-order strategy (project
/// directory tree, file system, URL); the result is a handle whose identity
/// keys the document cache, so content is only read on a cache miss.
pub trait ResourceFinder {
    /// Resolves a location string to a readable resource.
    ///
    /// # Errors
    /// Returns a descriptive not-found error when no strategy succeeds.
    fn find(&self, location: &str) -> Result<ResolvedResource>;
}

/// A located resource: a stable identity plus a lazily-readable source.
#[derive(Debug, Clone)]
pub struct ResolvedResource {
    identity: String,
    source: ResourceSource,
}

#[derive(Debug, Clone)]
pub enum ResourceSource {
    File(PathBuf),
    Url(String),
    Inline(String),
}

impl ResolvedResource {
    pub fn file(path: PathBuf) -> Self {
        Self {
            identity: path.to_string_lossy().into_owned(),
            source: ResourceSource::File(path),
        }
    }

    pub fn url(url: String) -> Self {
        Self {
            identity: url.clone(),
            source: ResourceSource::Url(url),
        }
    }

    /// In-memory resource, used by tests and mock adapters.
    pub fn inline(identity: String, content: String) -> Self {
        Self {
            identity,
            source: ResourceSource::Inline(content),
        }
    }

    /// Canonical location identity; the document-cache key.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn read(&self) -> Result<String> {
        match &self.source {
            ResourceSource::File(path) => {
                std::fs::read_to_string(path).map_err(|e| {
                    NoticeError::FileReadError {
                        path: path.clone(),
                        details: e.to_string(),
                    }
                    .into()
                })
            }
            ResourceSource::Url(url) => {
                let response = reqwest::blocking::get(url)?;
                if !response.status().is_success() {
                    anyhow::bail!("Fetching '{}' returned status code {}", url, response.status());
                }
                Ok(response.text()?)
            }
            ResourceSource::Inline(content) => Ok(content.clone()),
        }
    }
}
