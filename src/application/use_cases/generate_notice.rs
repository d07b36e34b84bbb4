use std::sync::Arc;

use crate::application::dto::NoticeRequest;
use crate::application::use_cases::pipeline;
use crate::notice::services::{DocumentCache, MappingStore};
use crate::ports::outbound::{
    DependencyGraphProvider, MetadataProvider, OutputPresenter, ProgressReporter, ResourceFinder,
};
use crate::shared::Result;

/// GenerateNoticeUseCase - renders the NOTICE file for every module of the
/// project and (over)writes it to the configured location.
///
/// # Type Parameters
/// * `G` - DependencyGraphProvider implementation
/// * `M` - MetadataProvider implementation
/// * `F` - ResourceFinder implementation
/// * `P` - ProgressReporter implementation
/// * `W` - OutputPresenter implementation
pub struct GenerateNoticeUseCase<G, M, F, P, W> {
    graph_provider: G,
    metadata_provider: M,
    resource_finder: F,
    progress_reporter: P,
    writer: W,
    document_cache: Arc<DocumentCache>,
}

impl<G, M, F, P, W> GenerateNoticeUseCase<G, M, F, P, W>
where
    G: DependencyGraphProvider,
    M: MetadataProvider,
    F: ResourceFinder,
    P: ProgressReporter,
    W: OutputPresenter,
{
    pub fn new(
        graph_provider: G,
        metadata_provider: M,
        resource_finder: F,
        progress_reporter: P,
        writer: W,
        document_cache: Arc<DocumentCache>,
    ) -> Self {
        Self {
            graph_provider,
            metadata_provider,
            resource_finder,
            progress_reporter,
            writer,
            document_cache,
        }
    }

    pub fn execute(&self, request: &NoticeRequest) -> Result<()> {
        let settings = &request.settings;

        if settings.skip {
            self.progress_reporter
                .report("NOTICE file checks are skipped.");
            return Ok(());
        }

        let graph = self.graph_provider.build(&request.project_path)?;
        let store = MappingStore::new(Arc::clone(&self.document_cache));

        let mut handle = |module_dir: &std::path::Path, content: &str| {
            let output_path = settings.output_path(module_dir);
            self.writer.present(&output_path, content)?;
            self.progress_reporter
                .report(&format!("✅ NOTICE file written to: {}", output_path.display()));
            Ok(())
        };

        pipeline::run_module_tree(
            &graph,
            &request.project_path,
            settings,
            &store,
            &self.resource_finder,
            &self.metadata_provider,
            &self.progress_reporter,
            &self.writer,
            &mut handle,
        )
    }
}
