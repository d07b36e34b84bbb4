use regex::Regex;
use tracing::warn;

use crate::notice::domain::{ArtifactVersion, MappedVersion, VersionMatchType};

/// Decides whether a candidate version satisfies a single version
/// constraint. Exact constraints compare by normalized version semantics,
/// regex constraints require an anchored full match against the raw string.
pub struct VersionMatcher;

impl VersionMatcher {
    pub fn matches(constraint: &MappedVersion, candidate: &str) -> bool {
        match constraint.match_type {
            VersionMatchType::Exact => {
                ArtifactVersion::parse(&constraint.value).matches(&ArtifactVersion::parse(candidate))
            }
            VersionMatchType::Regex => match Regex::new(&anchored(&constraint.value)) {
                Ok(pattern) => pattern.is_match(candidate),
                Err(e) => {
                    // Patterns are validated at document-parse time; an
                    // invalid one reaching here can only mean a
                    // hand-constructed entry.
                    warn!(pattern = %constraint.value, error = %e, "invalid version pattern treated as non-match");
                    false
                }
            },
        }
    }
}

fn anchored(pattern: &str) -> String {
    format!("^(?:{})$", pattern)
}
