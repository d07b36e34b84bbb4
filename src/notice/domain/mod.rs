pub mod artifact;
pub mod graph;
pub mod license_info;
pub mod mapping;
pub mod version;

pub use artifact::{ArtifactCoordinates, ArtifactKey};
pub use graph::{DependencyNode, ModuleGraph};
pub use license_info::{ArtifactLicenseInfo, Organization, ResolvedLicenseSet};
pub use mapping::{
    MappedVersion, MappingDocument, MappingEntry, MappingMatch, MatchKind, VersionMatchType,
};
pub use version::ArtifactVersion;
