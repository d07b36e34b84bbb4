use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use super::ArtifactCoordinates;

/// Organization metadata carried along for copyright rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub name: String,
    pub url: Option<String>,
}

/// One finalized row of the generated notice: an artifact with its resolved
/// display name and license, plus the metadata needed for rendering.
///
/// Output equality and ordering are case-insensitive on the display name
/// only; the remaining fields are payload.
#[derive(Debug, Clone)]
pub struct ArtifactLicenseInfo {
    pub display_name: String,
    pub license_name: String,
    pub coordinates: ArtifactCoordinates,
    pub scope: Option<String>,
    pub optional: bool,
    pub organization: Option<Organization>,
    pub inception_year: Option<i32>,
}

/// Ordered, deduplicated set of resolved rows.
///
/// Keyed case-insensitively on the display name; the first insertion for a
/// name wins, later rows with the same name (in any casing) are dropped.
/// Iteration order is the case-insensitive name order, stable across runs.
#[derive(Debug, Default)]
pub struct ResolvedLicenseSet {
    entries: BTreeMap<String, ArtifactLicenseInfo>,
}

impl ResolvedLicenseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row unless one with the same (case-insensitive) display name
    /// is already present. Returns whether the row was inserted.
    pub fn insert(&mut self, info: ArtifactLicenseInfo) -> bool {
        match self.entries.entry(info.display_name.to_lowercase()) {
            Entry::Vacant(slot) => {
                slot.insert(info);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArtifactLicenseInfo> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(display_name: &str, license: &str) -> ArtifactLicenseInfo {
        ArtifactLicenseInfo {
            display_name: display_name.to_string(),
            license_name: license.to_string(),
            coordinates: ArtifactCoordinates::new(
                "g".to_string(),
                display_name.to_lowercase().replace(' ', "-"),
                "1.0.0".to_string(),
            )
            .unwrap(),
            scope: Some("compile".to_string()),
            optional: false,
            organization: None,
            inception_year: None,
        }
    }

    #[test]
    fn test_insert_and_iterate_in_name_order() {
        let mut set = ResolvedLicenseSet::new();
        set.insert(info("Zebra", "MIT"));
        set.insert(info("apple", "MIT"));
        set.insert(info("Mango", "MIT"));

        let names: Vec<&str> = set.iter().map(|i| i.display_name.as_str()).collect();
        assert_eq!(names, vec!["apple", "Mango", "Zebra"]);
    }

    #[test]
    fn test_case_insensitive_deduplication_first_wins() {
        let mut set = ResolvedLicenseSet::new();
        assert!(set.insert(info("Spring Core", "Apache 2.0")));
        assert!(!set.insert(info("spring core", "MIT")));

        assert_eq!(set.len(), 1);
        let only = set.iter().next().unwrap();
        assert_eq!(only.display_name, "Spring Core");
        assert_eq!(only.license_name, "Apache 2.0");
    }

    #[test]
    fn test_ordering_is_case_insensitive() {
        let mut set = ResolvedLicenseSet::new();
        set.insert(info("beta", "MIT"));
        set.insert(info("Alpha", "MIT"));
        set.insert(info("GAMMA", "MIT"));

        let names: Vec<&str> = set.iter().map(|i| i.display_name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta", "GAMMA"]);
    }

    #[test]
    fn test_empty_set() {
        let set = ResolvedLicenseSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }
}
