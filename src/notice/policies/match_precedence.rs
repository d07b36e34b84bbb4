use crate::notice::domain::{MappingEntry, MappingMatch, MatchKind, VersionMatchType};
use crate::notice::services::VersionMatcher;

/// Tie-break policy for an artifact key with multiple mapping entries.
///
/// Entries arrive in merge order (document precedence first, then entry
/// order within a document) and are scanned linearly, constraint by
/// constraint:
///
/// - the first exact match wins immediately and stops the scan;
/// - the first regex match is latched; later regex constraints are skipped,
///   but scanning continues in case an exact match supersedes it;
/// - an unconstrained entry is recorded as a fallback candidate only.
///
/// The resulting specificity order is strict:
/// exact > regex (first seen) > all-versions > none.
pub struct MatchPrecedence;

impl MatchPrecedence {
    pub fn select<'a>(entries: &'a [MappingEntry], version: &str) -> Option<MappingMatch<'a>> {
        let mut regex_match: Option<&MappingEntry> = None;
        let mut fallback: Option<&MappingEntry> = None;

        for entry in entries {
            if entry.versions.is_empty() {
                if fallback.is_none() {
                    fallback = Some(entry);
                }
                continue;
            }

            for constraint in &entry.versions {
                match constraint.match_type {
                    VersionMatchType::Exact => {
                        if VersionMatcher::matches(constraint, version) {
                            return Some(MappingMatch {
                                kind: MatchKind::Exact,
                                entry,
                            });
                        }
                    }
                    VersionMatchType::Regex => {
                        if regex_match.is_none() && VersionMatcher::matches(constraint, version) {
                            regex_match = Some(entry);
                        }
                    }
                }
            }
        }

        regex_match
            .map(|entry| MappingMatch {
                kind: MatchKind::Regex,
                entry,
            })
            .or(fallback.map(|entry| MappingMatch {
                kind: MatchKind::AllVersions,
                entry,
            }))
    }
}
