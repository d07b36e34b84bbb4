use std::collections::{BTreeSet, HashSet};

use crate::notice::domain::{
    ArtifactCoordinates, DependencyNode, ModuleGraph, ResolvedLicenseSet,
};
use crate::notice::services::license_resolver::{record, LicenseResolver};
use crate::ports::outbound::{MetadataProvider, ProgressReporter};

/// Traversal options derived from the tool configuration.
#[derive(Debug, Clone, Default)]
pub struct TraversalSettings {
    pub include_child_modules: bool,
    pub excluded_modules: BTreeSet<String>,
}

/// Result of one full traversal: the deterministically ordered resolved set
/// and the insertion-ordered unresolved artifacts.
#[derive(Debug, Default)]
pub struct TraversalOutcome {
    pub resolved: ResolvedLicenseSet,
    pub unresolved: Vec<ArtifactCoordinates>,
}

/// One distinct artifact scheduled for resolution, with the taint computed
/// while walking the tree.
#[derive(Debug)]
struct PendingVisit {
    coordinates: ArtifactCoordinates,
    scope: Option<String>,
    effective_optional: bool,
}

/// Walks a module's dependency trees (recursing into child modules), visits
/// each distinct artifact identity exactly once, and resolves every visit
/// into the aggregated outcome.
///
/// The walk happens in two phases: first the distinct-artifact visit list is
/// collected (cheap, no lookups), then each pending visit is resolved with
/// progress reported against the known total. Revisits of an identity are
/// skipped during collection, so a diamond dependency never triggers a
/// second metadata lookup.
pub struct GraphWalker;

impl GraphWalker {
    pub fn traverse<M: MetadataProvider, P: ProgressReporter>(
        module: &ModuleGraph,
        settings: &TraversalSettings,
        resolver: &LicenseResolver<'_, M>,
        progress: &P,
    ) -> TraversalOutcome {
        let mut visited: HashSet<ArtifactCoordinates> = HashSet::new();
        let mut visits: Vec<PendingVisit> = Vec::new();
        Self::collect_module(module, settings, &mut visited, &mut visits, progress);

        let total = visits.len();
        let mut outcome = TraversalOutcome::default();
        for (current, visit) in visits.into_iter().enumerate() {
            let label = visit.coordinates.to_string();
            progress.report_progress(current + 1, total, Some(label.as_str()));
            let resolution = resolver.resolve(
                &visit.coordinates,
                visit.scope.as_deref(),
                visit.effective_optional,
            );
            record(resolution, &mut outcome.resolved, &mut outcome.unresolved);
        }

        outcome
    }

    fn collect_module<P: ProgressReporter>(
        module: &ModuleGraph,
        settings: &TraversalSettings,
        visited: &mut HashSet<ArtifactCoordinates>,
        visits: &mut Vec<PendingVisit>,
        progress: &P,
    ) {
        progress.report(&format!("Parsing dependencies for: {}", module.name));

        for node in &module.dependencies {
            Self::collect_node(node, false, visited, visits);
        }

        if !settings.include_child_modules {
            return;
        }

        for child in &module.modules {
            if settings.excluded_modules.contains(&child.artifact_id) {
                progress.report(&format!(
                    "Skipping aggregation of child module {} with excluded artifact id: {}",
                    child.name, child.artifact_id
                ));
                continue;
            }
            Self::collect_module(child, settings, visited, visits, progress);
        }
    }

    fn collect_node(
        node: &DependencyNode,
        ancestor_optional: bool,
        visited: &mut HashSet<ArtifactCoordinates>,
        visits: &mut Vec<PendingVisit>,
    ) {
        let effective_optional = ancestor_optional || node.optional;

        // First resolution wins; a revisited identity is skipped silently
        // but its subtree is still walked.
        if visited.insert(node.coordinates.clone()) {
            visits.push(PendingVisit {
                coordinates: node.coordinates.clone(),
                scope: node.scope.clone(),
                effective_optional,
            });
        }

        for child in &node.children {
            Self::collect_node(child, effective_optional, visited, visits);
        }
    }
}
