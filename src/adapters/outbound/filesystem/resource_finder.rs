use std::path::PathBuf;

use crate::ports::outbound::{ResolvedResource, ResourceFinder};
use crate::shared::error::NoticeError;
use crate::shared::Result;

/// FileSystemResourceFinder adapter resolving mapping-document and template
/// locations.
///
/// Search order: the project directory, the location as an absolute or
/// cwd-relative filesystem path, then the location as an http(s) URL.
/// The first strategy that succeeds wins.
pub struct FileSystemResourceFinder {
    project_root: PathBuf,
}

impl FileSystemResourceFinder {
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    fn readable_file(path: PathBuf) -> Option<PathBuf> {
        if path.is_file() {
            Some(path)
        } else {
            None
        }
    }
}

impl ResourceFinder for FileSystemResourceFinder {
    fn find(&self, location: &str) -> Result<ResolvedResource> {
        // Relative to the project directory first
        if let Some(path) = Self::readable_file(self.project_root.join(location)) {
            return Ok(ResolvedResource::file(path));
        }

        // Absolute location, or relative to the execution directory
        if let Some(path) = Self::readable_file(PathBuf::from(location)) {
            return Ok(ResolvedResource::file(path));
        }

        // Otherwise treat as a URL; fetch errors surface on read
        if location.starts_with("http://") || location.starts_with("https://") {
            return Ok(ResolvedResource::url(location.to_string()));
        }

        Err(NoticeError::ResourceNotFound {
            location: location.to_string(),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_finds_file_in_project_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("mappings.toml"), "content").unwrap();

        let finder = FileSystemResourceFinder::new(dir.path().to_path_buf());
        let resource = finder.find("mappings.toml").unwrap();
        assert_eq!(resource.read().unwrap(), "content");
    }

    #[test]
    fn test_finds_file_by_absolute_path() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("elsewhere.toml");
        fs::write(&file_path, "absolute content").unwrap();

        // Project root is a different directory
        let project = TempDir::new().unwrap();
        let finder = FileSystemResourceFinder::new(project.path().to_path_buf());

        let resource = finder.find(file_path.to_str().unwrap()).unwrap();
        assert_eq!(resource.read().unwrap(), "absolute content");
    }

    #[test]
    fn test_project_directory_takes_precedence() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("shared.toml"), "from project").unwrap();

        let finder = FileSystemResourceFinder::new(dir.path().to_path_buf());
        let resource = finder.find("shared.toml").unwrap();
        assert_eq!(resource.read().unwrap(), "from project");
    }

    #[test]
    fn test_url_location_is_resolved_lazily() {
        let project = TempDir::new().unwrap();
        let finder = FileSystemResourceFinder::new(project.path().to_path_buf());

        let resource = finder.find("https://example.com/mappings.toml").unwrap();
        assert_eq!(resource.identity(), "https://example.com/mappings.toml");
    }

    #[test]
    fn test_missing_location_is_descriptive_error() {
        let project = TempDir::new().unwrap();
        let finder = FileSystemResourceFinder::new(project.path().to_path_buf());

        let result = finder.find("no-such-file.toml");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("no-such-file.toml"));
    }

    #[test]
    fn test_directory_is_not_a_resource() {
        let project = TempDir::new().unwrap();
        fs::create_dir(project.path().join("subdir")).unwrap();

        let finder = FileSystemResourceFinder::new(project.path().to_path_buf());
        assert!(finder.find("subdir").is_err());
    }
}
