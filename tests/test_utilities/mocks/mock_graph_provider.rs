use std::path::Path;

use notice_gen::prelude::*;

/// Mock DependencyGraphProvider returning a pre-built module graph
pub struct MockGraphProvider {
    graph: Option<ModuleGraph>,
}

impl MockGraphProvider {
    pub fn new(graph: ModuleGraph) -> Self {
        Self { graph: Some(graph) }
    }

    pub fn with_failure() -> Self {
        Self { graph: None }
    }
}

impl DependencyGraphProvider for MockGraphProvider {
    fn build(&self, _project_path: &Path) -> Result<ModuleGraph> {
        match &self.graph {
            Some(graph) => Ok(graph.clone()),
            None => anyhow::bail!("Mock graph provider failure"),
        }
    }
}
