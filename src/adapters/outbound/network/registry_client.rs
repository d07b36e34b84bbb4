use std::time::Duration;

use tracing::debug;

use crate::adapters::outbound::descriptor::ArtifactDescriptor;
use crate::notice::domain::ArtifactCoordinates;
use crate::ports::outbound::{ArtifactMetadata, MetadataProvider};
use crate::shared::Result;

/// HttpMetadataProvider adapter fetching artifact descriptors from a remote
/// registry's JSON API at `<base>/<group-id>/<artifact-id>/<version>.json`.
///
/// Fetches are synchronous, time out after 10 seconds, and are never
/// retried; a transient failure is handled exactly like a permanent one
/// within a single run.
pub struct HttpMetadataProvider {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpMetadataProvider {
    pub fn new(base_url: &str) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("notice-gen/{}", version);
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Validates and sanitizes a coordinate component for URL safety
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        if component.contains('/') || component.contains('\\') {
            anyhow::bail!(
                "Security: {} contains path separators which are not allowed",
                component_type
            );
        }

        if component.contains("..") {
            anyhow::bail!(
                "Security: {} contains '..' which is not allowed",
                component_type
            );
        }

        if component.contains('#') || component.contains('?') || component.contains('@') {
            anyhow::bail!(
                "Security: {} contains URL-unsafe characters",
                component_type
            );
        }

        Ok(())
    }

    fn descriptor_url(&self, coordinates: &ArtifactCoordinates) -> Result<String> {
        Self::validate_url_component(coordinates.group_id(), "Group id")?;
        Self::validate_url_component(coordinates.artifact_id(), "Artifact id")?;
        Self::validate_url_component(coordinates.version(), "Version")?;

        Ok(format!(
            "{}/{}/{}/{}.json",
            self.base_url,
            urlencoding::encode(coordinates.group_id()),
            urlencoding::encode(coordinates.artifact_id()),
            urlencoding::encode(coordinates.version())
        ))
    }
}

impl MetadataProvider for HttpMetadataProvider {
    fn load(&self, coordinates: &ArtifactCoordinates) -> Result<Option<ArtifactMetadata>> {
        let url = self.descriptor_url(coordinates)?;
        debug!(artifact = %coordinates, url = url.as_str(), "fetching descriptor");

        let response = self.client.get(&url).send()?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            anyhow::bail!("Registry returned status code {}", response.status());
        }

        let descriptor: ArtifactDescriptor = response.json()?;
        Ok(Some(descriptor.into()))
    }
}
