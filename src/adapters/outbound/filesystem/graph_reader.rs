use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::notice::domain::{ArtifactCoordinates, DependencyNode, ModuleGraph};
use crate::ports::outbound::DependencyGraphProvider;
use crate::shared::error::NoticeError;
use crate::shared::Result;

const GRAPH_FILENAME: &str = "dependency-graph.json";

/// Maximum descriptor size (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemGraphProvider adapter materializing the dependency graph the
/// build system exported into `dependency-graph.json`.
pub struct FileSystemGraphProvider;

impl FileSystemGraphProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemGraphProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct ModuleDto {
    #[serde(default)]
    name: Option<String>,
    group_id: String,
    artifact_id: String,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    dependencies: Vec<NodeDto>,
    #[serde(default)]
    modules: Vec<ModuleDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct NodeDto {
    group_id: String,
    artifact_id: String,
    version: String,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    dependencies: Vec<NodeDto>,
}

impl DependencyGraphProvider for FileSystemGraphProvider {
    fn build(&self, project_path: &Path) -> Result<ModuleGraph> {
        let graph_path = project_path.join(GRAPH_FILENAME);

        if !graph_path.exists() {
            return Err(NoticeError::GraphNotFound {
                path: graph_path,
                suggestion: format!(
                    "No {} in project directory \"{}\".\n   \
                     Export the project's dependency graph first, or specify the correct path with the --path option.",
                    GRAPH_FILENAME,
                    project_path.display()
                ),
            }
            .into());
        }

        let content = safe_read(&graph_path)?;
        let root: ModuleDto =
            serde_json::from_str(&content).map_err(|e| NoticeError::GraphParseError {
                path: graph_path.clone(),
                details: e.to_string(),
            })?;

        into_module(root).map_err(|e| {
            NoticeError::GraphParseError {
                path: graph_path,
                details: e.to_string(),
            }
            .into()
        })
    }
}

fn safe_read(path: &Path) -> Result<String> {
    let metadata = fs::symlink_metadata(path).map_err(|e| NoticeError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > MAX_FILE_SIZE {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            MAX_FILE_SIZE
        );
    }

    fs::read_to_string(path).map_err(|e| {
        NoticeError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

fn into_module(dto: ModuleDto) -> Result<ModuleGraph> {
    let name = dto
        .name
        .unwrap_or_else(|| format!("{}:{}", dto.group_id, dto.artifact_id));
    let path = PathBuf::from(dto.path.unwrap_or_else(|| dto.artifact_id.clone()));

    let dependencies = dto
        .dependencies
        .into_iter()
        .map(into_node)
        .collect::<Result<Vec<_>>>()?;
    let modules = dto
        .modules
        .into_iter()
        .map(into_module)
        .collect::<Result<Vec<_>>>()?;

    Ok(ModuleGraph {
        name,
        group_id: dto.group_id,
        artifact_id: dto.artifact_id,
        path,
        dependencies,
        modules,
    })
}

fn into_node(dto: NodeDto) -> Result<DependencyNode> {
    let coordinates = ArtifactCoordinates::new(dto.group_id, dto.artifact_id, dto.version)?;
    let children = dto
        .dependencies
        .into_iter()
        .map(into_node)
        .collect::<Result<Vec<_>>>()?;

    Ok(DependencyNode {
        coordinates,
        scope: dto.scope,
        optional: dto.optional,
        children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const GRAPH: &str = r#"{
        "name": "My Project",
        "group-id": "com.example",
        "artifact-id": "my-project",
        "dependencies": [
            {
                "group-id": "org.codehaus.plexus",
                "artifact-id": "plexus-container-default",
                "version": "1.0.0",
                "scope": "compile",
                "dependencies": [
                    {
                        "group-id": "classworlds",
                        "artifact-id": "classworlds",
                        "version": "1.1.0",
                        "optional": true
                    }
                ]
            }
        ],
        "modules": [
            {
                "group-id": "com.example",
                "artifact-id": "my-child",
                "path": "child"
            }
        ]
    }"#;

    #[test]
    fn test_build_from_descriptor() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(GRAPH_FILENAME), GRAPH).unwrap();

        let provider = FileSystemGraphProvider::new();
        let graph = provider.build(dir.path()).unwrap();

        assert_eq!(graph.name, "My Project");
        assert_eq!(graph.dependencies.len(), 1);
        let root_dep = &graph.dependencies[0];
        assert_eq!(root_dep.coordinates.artifact_id(), "plexus-container-default");
        assert_eq!(root_dep.scope.as_deref(), Some("compile"));
        assert!(!root_dep.optional);
        assert!(root_dep.children[0].optional);

        assert_eq!(graph.modules.len(), 1);
        assert_eq!(graph.modules[0].path, PathBuf::from("child"));
        // Unnamed modules fall back to coordinates
        assert_eq!(graph.modules[0].name, "com.example:my-child");
    }

    #[test]
    fn test_module_path_defaults_to_artifact_id() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(GRAPH_FILENAME),
            r#"{"group-id": "g", "artifact-id": "standalone"}"#,
        )
        .unwrap();

        let provider = FileSystemGraphProvider::new();
        let graph = provider.build(dir.path()).unwrap();
        assert_eq!(graph.path, PathBuf::from("standalone"));
        assert!(graph.dependencies.is_empty());
    }

    #[test]
    fn test_missing_descriptor() {
        let dir = TempDir::new().unwrap();
        let provider = FileSystemGraphProvider::new();

        let result = provider.build(dir.path());
        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("dependency-graph.json"));
        assert!(message.contains("💡 Hint:"));
    }

    #[test]
    fn test_malformed_descriptor() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(GRAPH_FILENAME), "{ not json").unwrap();

        let provider = FileSystemGraphProvider::new();
        let result = provider.build(dir.path());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse dependency graph"));
    }

    #[test]
    fn test_blank_version_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(GRAPH_FILENAME),
            r#"{
                "group-id": "g",
                "artifact-id": "a",
                "dependencies": [
                    { "group-id": "g", "artifact-id": "dep", "version": " " }
                ]
            }"#,
        )
        .unwrap();

        let provider = FileSystemGraphProvider::new();
        assert!(provider.build(dir.path()).is_err());
    }
}
