//! notice-gen - NOTICE attribution file generation and verification
//!
//! This library resolves the license of every dependency in a project's
//! dependency graph and renders the results into a NOTICE file, following
//! hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`notice`): license resolution model, services and policies
//! - **Application Layer** (`application`): use cases and DTOs
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common error and result types
//!
//! # Example
//!
//! ```no_run
//! use notice_gen::prelude::*;
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let graph_provider = FileSystemGraphProvider::new();
//! let metadata_provider =
//!     CachingMetadataProvider::new(ChainMetadataProvider::new(vec![]));
//! let resource_finder = FileSystemResourceFinder::new(PathBuf::from("."));
//! let progress_reporter = StderrProgressReporter::new();
//! let writer = FileSystemWriter::new();
//!
//! // Create use case with injected dependencies
//! let use_case = GenerateNoticeUseCase::new(
//!     graph_provider,
//!     metadata_provider,
//!     resource_finder,
//!     progress_reporter,
//!     writer,
//!     Arc::new(DocumentCache::new()),
//! );
//!
//! // Execute
//! let request = NoticeRequest::new(PathBuf::from("."), NoticeSettings::default());
//! use_case.execute(&request)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod notice;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemGraphProvider, FileSystemMetadataProvider, FileSystemResourceFinder,
        FileSystemWriter,
    };
    pub use crate::adapters::outbound::network::{
        CachingMetadataProvider, ChainMetadataProvider, HttpMetadataProvider,
    };
    pub use crate::application::dto::NoticeRequest;
    pub use crate::application::use_cases::{CheckNoticeUseCase, GenerateNoticeUseCase};
    pub use crate::config::{ConfigFile, NoticeSettings};
    pub use crate::notice::domain::{
        ArtifactCoordinates, ArtifactKey, ArtifactLicenseInfo, ArtifactVersion, DependencyNode,
        MappingDocument, MappingEntry, MatchKind, ModuleGraph, Organization, ResolvedLicenseSet,
    };
    pub use crate::notice::policies::MatchPrecedence;
    pub use crate::notice::services::{
        DocumentCache, GraphWalker, LicenseResolver, MappingIndex, MappingStore, NoticeRenderer,
        VersionMatcher,
    };
    pub use crate::ports::outbound::{
        ArtifactMetadata, DeclaredLicense, DependencyGraphProvider, MetadataProvider,
        OutputPresenter, ProgressReporter, ResolvedResource, ResourceFinder,
    };
    pub use crate::shared::error::{ExitCode, NoticeError};
    pub use crate::shared::Result;
}
