pub mod caching_metadata;
pub mod registry_client;

pub use caching_metadata::{CachingMetadataProvider, ChainMetadataProvider};
pub use registry_client::HttpMetadataProvider;
