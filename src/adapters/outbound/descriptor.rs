use serde::Deserialize;

use crate::notice::domain::Organization;
use crate::ports::outbound::{ArtifactMetadata, DeclaredLicense};

/// Serde shape of an artifact metadata descriptor. The same schema is served
/// as TOML by local file repositories and as JSON by remote registries, so
/// both adapters deserialize into this type.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ArtifactDescriptor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub inception_year: Option<i32>,
    #[serde(default, rename = "license")]
    pub licenses: Vec<LicenseDescriptor>,
    #[serde(default)]
    pub organization: Option<OrganizationDescriptor>,
}

#[derive(Debug, Deserialize)]
pub struct LicenseDescriptor {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OrganizationDescriptor {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl From<ArtifactDescriptor> for ArtifactMetadata {
    fn from(descriptor: ArtifactDescriptor) -> Self {
        ArtifactMetadata {
            name: descriptor.name,
            licenses: descriptor
                .licenses
                .into_iter()
                .map(|license| DeclaredLicense {
                    name: license.name,
                    url: license.url,
                })
                .collect(),
            organization: descriptor.organization.map(|organization| Organization {
                name: organization.name,
                url: organization.url,
            }),
            inception_year: descriptor.inception_year,
        }
    }
}
