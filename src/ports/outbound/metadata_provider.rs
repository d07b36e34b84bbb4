use crate::notice::domain::{ArtifactCoordinates, Organization};
use crate::shared::Result;

/// Package metadata declared by a dependency artifact itself, as served by
/// a metadata repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactMetadata {
    pub name: Option<String>,
    pub licenses: Vec<DeclaredLicense>,
    pub organization: Option<Organization>,
    pub inception_year: Option<i32>,
}

/// One license declaration from artifact metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredLicense {
    pub name: String,
    pub url: Option<String>,
}

/// MetadataProvider port for loading an artifact's declared metadata.
///
/// Implementations must be `Send + Sync`: one provider (behind a caching
/// decorator) is shared by every module traversal of a run.
pub trait MetadataProvider: Send + Sync {
    /// Loads the metadata for one artifact.
    ///
    /// # Returns
    /// - `Ok(Some(_))` when the repository serves metadata for the artifact
    /// - `Ok(None)` when the artifact is not present (a clean not-found)
    ///
    /// # Errors
    /// Returns an error when the repository is unreachable or the metadata
    /// cannot be parsed. Callers treat this as "no metadata" after logging;
    /// it never aborts the run by itself.
    fn load(&self, coordinates: &ArtifactCoordinates) -> Result<Option<ArtifactMetadata>>;
}
