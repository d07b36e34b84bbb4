//! Shared notice pipeline: load mappings, walk the graph, fail on
//! unresolved artifacts, render the template. Both operating modes run this
//! per module and differ only in what they do with the rendered content.

use std::path::Path;

use tracing::warn;

use crate::config::NoticeSettings;
use crate::notice::domain::{MappingDocument, ModuleGraph};
use crate::notice::services::notice_renderer::normalize_line_endings;
use crate::notice::services::{GraphWalker, LicenseResolver, MappingStore, NoticeRenderer};
use crate::ports::outbound::{
    MetadataProvider, OutputPresenter, ProgressReporter, ResourceFinder,
};
use crate::shared::error::NoticeError;
use crate::shared::Result;

/// Assemble the rendered NOTICE content for one module's subtree.
#[allow(clippy::too_many_arguments)]
pub(crate) fn assemble_notice<M, P, W>(
    module: &ModuleGraph,
    module_dir: &Path,
    settings: &NoticeSettings,
    store: &MappingStore,
    finder: &dyn ResourceFinder,
    metadata_provider: &M,
    progress: &P,
    writer: &W,
) -> Result<String>
where
    M: MetadataProvider,
    P: ProgressReporter,
    W: OutputPresenter,
{
    let index = store.load(&settings.mapping_documents, finder)?;

    let resolver = LicenseResolver::new(&index, metadata_provider, &settings.license_aliases);
    let outcome = GraphWalker::traverse(
        module,
        &settings.traversal_settings(),
        &resolver,
        progress,
    );

    if !outcome.unresolved.is_empty() {
        progress.report_error("Failed to find licenses for the following dependencies:");
        for artifact in &outcome.unresolved {
            progress.report_error(&format!("\t{}", artifact));
        }
        progress.report_error("Try adding them to a mapping document.");

        write_stub_mappings(module_dir, settings, &outcome.unresolved, progress, writer);

        return Err(NoticeError::UnresolvedLicenses {
            count: outcome.unresolved.len(),
        }
        .into());
    }

    progress.report(&format!(
        "✅ Resolved licenses for {} dependencies",
        outcome.resolved.len()
    ));

    let template = read_template(settings, finder)?;
    let options = settings.render_options();
    let renderer = NoticeRenderer::new(&options);
    Ok(renderer.render(&outcome.resolved, &template))
}

/// Run one module and, when per-child output is enabled, its non-excluded
/// child modules, handing each rendered notice to the mode-specific handler.
#[allow(clippy::too_many_arguments)]
pub(crate) fn run_module_tree<M, P, W>(
    module: &ModuleGraph,
    module_dir: &Path,
    settings: &NoticeSettings,
    store: &MappingStore,
    finder: &dyn ResourceFinder,
    metadata_provider: &M,
    progress: &P,
    writer: &W,
    handle: &mut dyn FnMut(&Path, &str) -> Result<()>,
) -> Result<()>
where
    M: MetadataProvider,
    P: ProgressReporter,
    W: OutputPresenter,
{
    let content = assemble_notice(
        module,
        module_dir,
        settings,
        store,
        finder,
        metadata_provider,
        progress,
        writer,
    )?;
    handle(module_dir, &content)?;

    if !settings.generate_child_notices {
        return Ok(());
    }

    for child in &module.modules {
        if settings.excluded_modules.contains(&child.artifact_id) {
            continue;
        }
        run_module_tree(
            child,
            &module_dir.join(&child.path),
            settings,
            store,
            finder,
            metadata_provider,
            progress,
            writer,
            handle,
        )?;
    }

    Ok(())
}

/// Read the notice template through the resource finder, normalizing its
/// line endings to the platform separator.
fn read_template(settings: &NoticeSettings, finder: &dyn ResourceFinder) -> Result<String> {
    let resource =
        finder
            .find(&settings.notice_template)
            .map_err(|e| NoticeError::TemplateError {
                location: settings.notice_template.clone(),
                details: e.to_string(),
            })?;

    let raw = resource.read().map_err(|e| NoticeError::TemplateError {
        location: settings.notice_template.clone(),
        details: e.to_string(),
    })?;

    Ok(normalize_line_endings(&raw))
}

/// Best-effort stub mapping document for the artifacts that failed
/// resolution; its own write failure is logged, never escalated.
fn write_stub_mappings<P, W>(
    module_dir: &Path,
    settings: &NoticeSettings,
    unresolved: &[crate::notice::domain::ArtifactCoordinates],
    progress: &P,
    writer: &W,
) where
    P: ProgressReporter,
    W: OutputPresenter,
{
    let stub_path = settings.build_path(module_dir).join("license-mappings.toml");
    let stub = MappingDocument::stub_for(unresolved);

    match toml::to_string_pretty(&stub) {
        Ok(body) => match writer.present(&stub_path, &body) {
            Ok(()) => progress.report_error(&format!(
                "A stub mapping document containing the unresolved dependencies has been written to: {}",
                stub_path.display()
            )),
            Err(e) => warn!(
                "Failed to write stub mapping document to {}: {}",
                stub_path.display(),
                e
            ),
        },
        Err(e) => warn!("Failed to serialize stub mapping document: {}", e),
    }
}
