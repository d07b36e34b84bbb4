/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the resolution core uses to
/// interact with external systems (file system, metadata repositories,
/// console).
pub mod graph_provider;
pub mod metadata_provider;
pub mod output_presenter;
pub mod progress_reporter;
pub mod resource_finder;

pub use graph_provider::DependencyGraphProvider;
pub use metadata_provider::{ArtifactMetadata, DeclaredLicense, MetadataProvider};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use resource_finder::{ResolvedResource, ResourceFinder, ResourceSource};
