use std::path::Path;

use crate::notice::domain::ModuleGraph;
use crate::shared::Result;

/// DependencyGraphProvider port for obtaining a project's already-built
/// dependency graph.
///
/// Graph construction itself is external to this tool; the provider only
/// materializes the module tree (with per-node scope and optional flags)
/// from whatever the build system exported.
pub trait DependencyGraphProvider {
    /// Builds the module graph for the project rooted at `project_path`.
    ///
    /// # Errors
    /// Fails fatally when the graph cannot be constructed (missing or
    /// malformed descriptor).
    fn build(&self, project_path: &Path) -> Result<ModuleGraph>;
}
