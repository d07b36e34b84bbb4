use std::path::PathBuf;

use crate::config::NoticeSettings;

/// NoticeRequest - Internal request DTO for the notice use cases
///
/// Bundles the project root with the effective (config + CLI) settings.
#[derive(Debug, Clone)]
pub struct NoticeRequest {
    /// Path to the project directory containing the dependency graph descriptor
    pub project_path: PathBuf,
    /// Effective configuration for this run
    pub settings: NoticeSettings,
}

impl NoticeRequest {
    pub fn new(project_path: PathBuf, settings: NoticeSettings) -> Self {
        Self {
            project_path,
            settings,
        }
    }
}
