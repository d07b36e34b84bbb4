pub mod file_writer;
pub mod graph_reader;
pub mod metadata_reader;
pub mod resource_finder;

pub use file_writer::FileSystemWriter;
pub use graph_reader::FileSystemGraphProvider;
pub use metadata_reader::FileSystemMetadataProvider;
pub use resource_finder::FileSystemResourceFinder;
