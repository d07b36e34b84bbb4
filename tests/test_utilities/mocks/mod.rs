mod mock_graph_provider;
mod mock_metadata_provider;
mod mock_progress_reporter;
mod mock_resource_finder;

pub use mock_graph_provider::MockGraphProvider;
pub use mock_metadata_provider::MockMetadataProvider;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_resource_finder::MockResourceFinder;
