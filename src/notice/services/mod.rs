pub mod graph_walker;
pub mod license_resolver;
pub mod mapping_store;
pub mod notice_renderer;
pub mod version_matcher;

pub use graph_walker::{GraphWalker, TraversalOutcome, TraversalSettings};
pub use license_resolver::{LicenseResolver, Resolution};
pub use mapping_store::{DocumentCache, MappingIndex, MappingStore};
pub use notice_renderer::{NoticeRenderer, RenderOptions};
pub use version_matcher::VersionMatcher;
