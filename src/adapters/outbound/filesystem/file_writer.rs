use std::fs;
use std::path::Path;

use crate::ports::outbound::OutputPresenter;
use crate::shared::error::NoticeError;
use crate::shared::Result;

/// FileSystemWriter adapter for writing NOTICE output and side files.
///
/// Creates missing parent directories; refuses to write through a symbolic
/// link.
pub struct FileSystemWriter;

impl FileSystemWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| NoticeError::FileWriteError {
                    path: path.to_path_buf(),
                    details: format!("Failed to create directory {}: {}", parent.display(), e),
                })?;
            }
        }

        if path.exists() {
            let metadata =
                fs::symlink_metadata(path).map_err(|e| NoticeError::FileWriteError {
                    path: path.to_path_buf(),
                    details: format!("Failed to read file metadata: {}", e),
                })?;
            if metadata.is_symlink() {
                return Err(NoticeError::FileWriteError {
                    path: path.to_path_buf(),
                    details: "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
                }
                .into());
            }
        }

        fs::write(path, content).map_err(|e| {
            NoticeError::FileWriteError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
