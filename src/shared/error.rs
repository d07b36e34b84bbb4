use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// kinds of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - NOTICE file generated, or check found no differences
    Success = 0,
    /// Check failure - unresolved licenses or a NOTICE content mismatch
    CheckFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (configuration error, resource error, I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::CheckFailed => write!(f, "Check Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for NOTICE generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum NoticeError {
    #[error("Conflicting configuration: both 'mapping-documents' and the deprecated 'license-lookup' are set. Only one may be used.")]
    ConflictingMappingConfig,

    #[error("Unsupported output encoding: {encoding}\n\n💡 Hint: Only UTF-8 is supported")]
    UnsupportedEncoding { encoding: String },

    #[error("Resource not found in project tree, file system or URL: {location}")]
    ResourceNotFound { location: String },

    #[error("Failed to load license mapping document: {location}\nDetails: {details}\n\n💡 Hint: Please verify that the document is valid mapping TOML")]
    MappingDocumentError { location: String, details: String },

    #[error("Failed to read NOTICE template '{location}'\nDetails: {details}")]
    TemplateError { location: String, details: String },

    #[error("Dependency graph descriptor not found: {path}\n\n💡 Hint: {suggestion}")]
    GraphNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse dependency graph descriptor: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the descriptor is valid JSON")]
    GraphParseError { path: PathBuf, details: String },

    #[error("Failed to find licenses for {count} artifact(s)\n\n💡 Hint: Add the artifacts listed above to a mapping document; a stub has been written to the build directory")]
    UnresolvedLicenses { count: usize },

    #[error("No NOTICE file exists at: {path}")]
    MissingNotice { path: PathBuf },

    #[error("Existing NOTICE file '{notice}' doesn't match expected NOTICE file: {expected}")]
    NoticeMismatch { notice: PathBuf, expected: PathBuf },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },
}

impl NoticeError {
    /// Exit code class for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            NoticeError::UnresolvedLicenses { .. } | NoticeError::NoticeMismatch { .. } => {
                ExitCode::CheckFailed
            }
            _ => ExitCode::ApplicationError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::CheckFailed.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::CheckFailed), "Check Failed (1)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_unresolved_licenses_maps_to_check_failed() {
        let error = NoticeError::UnresolvedLicenses { count: 3 };
        assert_eq!(error.exit_code(), ExitCode::CheckFailed);
        assert!(format!("{}", error).contains("3 artifact(s)"));
    }

    #[test]
    fn test_notice_mismatch_maps_to_check_failed() {
        let error = NoticeError::NoticeMismatch {
            notice: PathBuf::from("/project/NOTICE"),
            expected: PathBuf::from("/project/target/NOTICE.expected"),
        };
        assert_eq!(error.exit_code(), ExitCode::CheckFailed);
        let display = format!("{}", error);
        assert!(display.contains("/project/NOTICE"));
        assert!(display.contains("NOTICE.expected"));
    }

    #[test]
    fn test_resource_errors_map_to_application_error() {
        let error = NoticeError::ResourceNotFound {
            location: "license-mappings.toml".to_string(),
        };
        assert_eq!(error.exit_code(), ExitCode::ApplicationError);
    }

    #[test]
    fn test_mapping_document_error_display() {
        let error = NoticeError::MappingDocumentError {
            location: "mappings/licenses.toml".to_string(),
            details: "invalid TOML".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("mappings/licenses.toml"));
        assert!(display.contains("invalid TOML"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_graph_not_found_display() {
        let error = NoticeError::GraphNotFound {
            path: PathBuf::from("/project/dependency-graph.json"),
            suggestion: "Run the graph exporter first".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("dependency-graph.json"));
        assert!(display.contains("Run the graph exporter first"));
    }
}
