use serde::{Deserialize, Serialize};

use super::ArtifactCoordinates;

/// A user-authored mapping document: ordered license/display-name overrides
/// for specific artifacts. The TOML document format doubles as the domain
/// model, so the serde derives live here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MappingDocument {
    #[serde(default, rename = "artifact")]
    pub artifacts: Vec<MappingEntry>,
}

impl MappingDocument {
    /// Build a stub document pre-populated with the identities of artifacts
    /// that failed resolution, ready for the user to fill in licenses.
    pub fn stub_for(unresolved: &[ArtifactCoordinates]) -> Self {
        let artifacts = unresolved
            .iter()
            .map(|coordinates| MappingEntry {
                group_id: coordinates.group_id().to_string(),
                artifact_id: coordinates.artifact_id().to_string(),
                name: None,
                license: None,
                versions: vec![MappedVersion {
                    value: coordinates.version().to_string(),
                    match_type: VersionMatchType::Exact,
                }],
            })
            .collect();

        Self { artifacts }
    }
}

/// One override entry. An entry with an empty version list is an
/// all-versions (unconstrained) entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MappingEntry {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, rename = "version")]
    pub versions: Vec<MappedVersion>,
}

/// A single version constraint within a mapping entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappedVersion {
    pub value: String,
    #[serde(default, rename = "type")]
    pub match_type: VersionMatchType,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionMatchType {
    #[default]
    Exact,
    Regex,
}

/// How a mapping entry matched a candidate version, ordered by specificity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchKind {
    AllVersions,
    Regex,
    Exact,
}

/// The outcome of matching one artifact key against the merged mapping index.
#[derive(Debug, Clone)]
pub struct MappingMatch<'a> {
    pub kind: MatchKind,
    pub entry: &'a MappingEntry,
}
