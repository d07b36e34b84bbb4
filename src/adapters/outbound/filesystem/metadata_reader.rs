use std::path::PathBuf;

use anyhow::Context;
use tracing::debug;

use crate::adapters::outbound::descriptor::ArtifactDescriptor;
use crate::notice::domain::ArtifactCoordinates;
use crate::ports::outbound::{ArtifactMetadata, MetadataProvider};
use crate::shared::Result;

const DESCRIPTOR_FILENAME: &str = "artifact.toml";

/// FileSystemMetadataProvider adapter reading artifact descriptors from a
/// local repository laid out as
/// `<root>/<group-id with '.' as '/'>/<artifact-id>/<version>/artifact.toml`.
pub struct FileSystemMetadataProvider {
    repository_root: PathBuf,
}

impl FileSystemMetadataProvider {
    pub fn new(repository_root: PathBuf) -> Self {
        Self { repository_root }
    }

    fn descriptor_path(&self, coordinates: &ArtifactCoordinates) -> PathBuf {
        self.repository_root
            .join(coordinates.group_id().replace('.', "/"))
            .join(coordinates.artifact_id())
            .join(coordinates.version())
            .join(DESCRIPTOR_FILENAME)
    }
}

impl MetadataProvider for FileSystemMetadataProvider {
    fn load(&self, coordinates: &ArtifactCoordinates) -> Result<Option<ArtifactMetadata>> {
        let path = self.descriptor_path(coordinates);

        if !path.exists() {
            debug!(artifact = %coordinates, path = %path.display(), "no descriptor in local repository");
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read descriptor: {}", path.display()))?;
        let descriptor: ArtifactDescriptor = toml::from_str(&content)
            .with_context(|| format!("Failed to parse descriptor: {}", path.display()))?;

        Ok(Some(descriptor.into()))
    }
}
