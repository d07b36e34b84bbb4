use crate::shared::Result;

/// Maximum length for coordinate components (security limit)
const MAX_COMPONENT_LENGTH: usize = 255;

/// Identity of a versioned dependency artifact: group id, artifact id and
/// version string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactCoordinates {
    group_id: String,
    artifact_id: String,
    version: String,
}

impl ArtifactCoordinates {
    pub fn new(group_id: String, artifact_id: String, version: String) -> Result<Self> {
        validate_component(&group_id, "group id")?;
        validate_component(&artifact_id, "artifact id")?;
        validate_component(&version, "version")?;

        Ok(Self {
            group_id,
            artifact_id,
            version,
        })
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The version-independent key used for mapping lookups.
    pub fn key(&self) -> ArtifactKey {
        ArtifactKey {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
        }
    }
}

impl std::fmt::Display for ArtifactCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// Version-independent artifact identity (`groupId:artifactId`), the key
/// under which mapping entries are indexed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactKey {
    pub group_id: String,
    pub artifact_id: String,
}

impl std::fmt::Display for ArtifactKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

fn validate_component(value: &str, component: &str) -> Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("Artifact {} cannot be empty", component);
    }

    if value.len() > MAX_COMPONENT_LENGTH {
        anyhow::bail!(
            "Artifact {} is too long ({} bytes). Maximum allowed: {} bytes",
            component,
            value.len(),
            MAX_COMPONENT_LENGTH
        );
    }

    Ok(())
}
