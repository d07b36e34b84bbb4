use std::path::PathBuf;

use super::ArtifactCoordinates;

/// One node of a module's dependency tree, as materialized by the external
/// graph builder. The tree is explicit (children, no parent back-references);
/// the "optional ancestor" taint is computed in a single top-down pass during
/// traversal.
#[derive(Debug, Clone)]
pub struct DependencyNode {
    pub coordinates: ArtifactCoordinates,
    pub scope: Option<String>,
    pub optional: bool,
    pub children: Vec<DependencyNode>,
}

impl DependencyNode {
    pub fn new(coordinates: ArtifactCoordinates) -> Self {
        Self {
            coordinates,
            scope: None,
            optional: false,
            children: Vec::new(),
        }
    }

    pub fn with_scope(mut self, scope: &str) -> Self {
        self.scope = Some(scope.to_string());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn with_child(mut self, child: DependencyNode) -> Self {
        self.children.push(child);
        self
    }
}

/// A project module with its own dependency tree and nested child modules.
#[derive(Debug, Clone)]
pub struct ModuleGraph {
    pub name: String,
    pub group_id: String,
    pub artifact_id: String,
    /// Module directory relative to its parent module; defaults to the
    /// artifact id when the descriptor omits it.
    pub path: PathBuf,
    pub dependencies: Vec<DependencyNode>,
    pub modules: Vec<ModuleGraph>,
}

impl ModuleGraph {
    /// Total number of modules in this subtree, this module included.
    pub fn module_count(&self) -> usize {
        1 + self
            .modules
            .iter()
            .map(ModuleGraph::module_count)
            .sum::<usize>()
    }
}
