use std::path::Path;
use std::sync::Arc;

use owo_colors::OwoColorize;
use similar::TextDiff;
use tracing::warn;

use crate::application::dto::NoticeRequest;
use crate::application::use_cases::pipeline;
use crate::notice::services::{DocumentCache, MappingStore};
use crate::ports::outbound::{
    DependencyGraphProvider, MetadataProvider, OutputPresenter, ProgressReporter, ResolvedResource,
    ResourceFinder,
};
use crate::shared::error::NoticeError;
use crate::shared::Result;

/// CheckNoticeUseCase - renders the NOTICE content in memory and compares it
/// against the committed file, failing the run with a line-level diff on any
/// mismatch.
///
/// The comparison is line-content based, so a checkout with different line
/// endings never trips the check.
pub struct CheckNoticeUseCase<G, M, F, P, W> {
    graph_provider: G,
    metadata_provider: M,
    resource_finder: F,
    progress_reporter: P,
    writer: W,
    document_cache: Arc<DocumentCache>,
}

impl<G, M, F, P, W> CheckNoticeUseCase<G, M, F, P, W>
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

        let mut handle = |module_dir: &Path, content: &str| {
            self.check_module(module_dir, settings, content)
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

    fn check_module(
        &self,
        module_dir: &Path,
        settings: &crate::config::NoticeSettings,
        expected: &str,
    ) -> Result<()> {
        let notice_path = settings.output_path(module_dir);

        if !notice_path.exists() {
            return Err(NoticeError::MissingNotice { path: notice_path }.into());
        }

        let existing = ResolvedResource::file(notice_path.clone()).read()?;

        // Line-content comparison: line-ending differences are not a mismatch
        let expected_lines: Vec<&str> = expected.lines().collect();
        let existing_lines: Vec<&str> = existing.lines().collect();

        if expected_lines == existing_lines {
            self.progress_reporter.report("NOTICE file is up to date");
            return Ok(());
        }

        let expected_path = settings.build_path(module_dir).join("NOTICE.expected");
        if let Err(e) = self.writer.present(&expected_path, expected) {
            warn!(
                "Failed to write expected NOTICE file to {}: {}",
                expected_path.display(),
                e
            );
        }

        let diff = render_diff(&expected_lines.join("\n"), &existing_lines.join("\n"));
        self.progress_reporter.report_error(&format!(
            "Existing NOTICE file '{}' doesn't match expected NOTICE file: {}\n{}",
            notice_path.display(),
            expected_path.display(),
            diff
        ));

        Err(NoticeError::NoticeMismatch {
            notice: notice_path,
            expected: expected_path,
        }
        .into())
    }
}

/// Unified diff between expected and existing content, +/- lines colored.
fn render_diff(expected: &str, existing: &str) -> String {
    let diff = TextDiff::from_lines(expected, existing);
    let unified = diff
        .unified_diff()
        .context_radius(3)
        .header("expected", "existing")
        .to_string();

    unified
        .lines()
        .map(|line| {
            if line.starts_with('+') && !line.starts_with("+++") {
                format!("{}", line.green())
            } else if line.starts_with('-') && !line.starts_with("---") {
                format!("{}", line.red())
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
