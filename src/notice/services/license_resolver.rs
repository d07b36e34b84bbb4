use std::collections::HashMap;

use tracing::{debug, warn};

use crate::notice::domain::{
    ArtifactCoordinates, ArtifactLicenseInfo, MatchKind, Organization, ResolvedLicenseSet,
};
use crate::notice::services::MappingIndex;
use crate::ports::outbound::MetadataProvider;

/// Outcome of resolving one artifact: either a finalized notice row or the
/// artifact's identity recorded as unresolved. Resolution is total; every
/// artifact produces exactly one of the two.
#[derive(Debug)]
pub enum Resolution {
    Resolved(ArtifactLicenseInfo),
    Unresolved(ArtifactCoordinates),
}

/// Resolves one artifact to a (display name, license name) pair using the
/// layered fallback strategy: mapping entries first, then the artifact's own
/// declared metadata, then all-versions mapping values, then a synthesized
/// `groupId:artifactId` name. An artifact with no determinable license is
/// reported as unresolved.
pub struct LicenseResolver<'a, M: MetadataProvider> {
    index: &'a MappingIndex,
    metadata_provider: &'a M,
    license_aliases: &'a HashMap<String, String>,
}

impl<'a, M: MetadataProvider> LicenseResolver<'a, M> {
    pub fn new(
        index: &'a MappingIndex,
        metadata_provider: &'a M,
        license_aliases: &'a HashMap<String, String>,
    ) -> Self {
        Self {
            index,
            metadata_provider,
            license_aliases,
        }
    }

    pub fn resolve(
        &self,
        coordinates: &ArtifactCoordinates,
        scope: Option<&str>,
        effective_optional: bool,
    ) -> Resolution {
        let mut name: Option<String> = None;
        let mut license: Option<String> = None;
        let mut organization: Option<Organization> = None;
        let mut inception_year: Option<i32> = None;

        // A version-specific mapping beats the artifact's own metadata; an
        // all-versions mapping only fills what metadata leaves open.
        let matched = self
            .index
            .lookup(&coordinates.key(), coordinates.version());
        if let Some(matched) = &matched {
            debug!(artifact = %coordinates, kind = ?matched.kind, "mapping match");
            if matched.kind != MatchKind::AllVersions {
                name = trim_to_none(matched.entry.name.as_deref());
                license = trim_to_none(matched.entry.license.as_deref());
            }
        }

        if name.is_none() || license.is_none() {
            match self.metadata_provider.load(coordinates) {
                Ok(Some(metadata)) => {
                    if name.is_none() {
                        name = trim_to_none(metadata.name.as_deref());
                    }
                    if license.is_none() {
                        license = join_declared_licenses(
                            metadata
                                .licenses
                                .iter()
                                .map(|declared| declared.name.as_str()),
                        );
                    }
                    organization = metadata.organization;
                    inception_year = metadata.inception_year;
                }
                Ok(None) => {
                    debug!(artifact = %coordinates, "no metadata found");
                }
                Err(e) => {
                    warn!(
                        "Failed to find license info for: {}; cause: {}",
                        coordinates, e
                    );
                }
            }
        }

        // Last-resort fill from an all-versions match, covering the case
        // where the metadata lookup also came up empty.
        if let Some(matched) = &matched {
            if matched.kind == MatchKind::AllVersions {
                if name.is_none() {
                    name = trim_to_none(matched.entry.name.as_deref());
                }
                if license.is_none() {
                    license = trim_to_none(matched.entry.license.as_deref());
                }
            }
        }

        let name = name.unwrap_or_else(|| {
            format!("{}:{}", coordinates.group_id(), coordinates.artifact_id())
        });

        let license = license.map(|license| match self.license_aliases.get(&license) {
            Some(alias) => alias.clone(),
            None => license,
        });

        match license {
            Some(license_name) => Resolution::Resolved(ArtifactLicenseInfo {
                display_name: name,
                license_name,
                coordinates: coordinates.clone(),
                scope: scope.map(String::from),
                optional: effective_optional,
                organization,
                inception_year,
            }),
            None => Resolution::Unresolved(coordinates.clone()),
        }
    }
}

/// Record one resolution outcome into the traversal accumulators.
pub fn record(
    resolution: Resolution,
    resolved: &mut ResolvedLicenseSet,
    unresolved: &mut Vec<ArtifactCoordinates>,
) {
    match resolution {
        Resolution::Resolved(info) => {
            resolved.insert(info);
        }
        Resolution::Unresolved(coordinates) => unresolved.push(coordinates),
    }
}

fn trim_to_none(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(String::from)
}

fn join_declared_licenses<'i>(names: impl Iterator<Item = &'i str>) -> Option<String> {
    let names: Vec<&str> = names.collect();
    match names.len() {
        0 => None,
        _ => Some(names.join(" or ")),
    }
}
