mod cli;

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use cli::{Args, Mode};
use notice_gen::prelude::*;

fn main() {
    let args = Args::parse_args();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(exit_code_for(&e).as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = PathBuf::from(project_dir);
    validate_project_path(&project_path)?;

    let settings = load_settings(&args, &project_path)?;

    // Create adapters (Dependency Injection)
    let graph_provider = FileSystemGraphProvider::new();
    let metadata_provider = build_metadata_provider(&settings, &project_path)?;
    let resource_finder = FileSystemResourceFinder::new(project_path.clone());
    let progress_reporter = StderrProgressReporter::new();
    let writer = FileSystemWriter::new();
    let document_cache = Arc::new(DocumentCache::new());

    let request = NoticeRequest::new(project_path, settings);

    match args.mode {
        Mode::Generate => GenerateNoticeUseCase::new(
            graph_provider,
            metadata_provider,
            resource_finder,
            progress_reporter,
            writer,
            document_cache,
        )
        .execute(&request),
        Mode::Check => CheckNoticeUseCase::new(
            graph_provider,
            metadata_provider,
            resource_finder,
            progress_reporter,
            writer,
            document_cache,
        )
        .execute(&request),
    }
}

/// Merge the configuration file (explicit path or discovered in the project
/// directory) with the command-line overrides.
fn load_settings(args: &Args, project_path: &Path) -> Result<NoticeSettings> {
    let config = match &args.config {
        Some(path) => Some(notice_gen::config::load_config_from_path(Path::new(path))?),
        None => notice_gen::config::discover_config(project_path)?,
    };

    let mut settings = match &config {
        Some(config) => NoticeSettings::from_config(config),
        None => NoticeSettings::default(),
    };

    if !args.mapping.is_empty() {
        settings.mapping_documents = args.mapping.clone();
    }
    if let Some(output_dir) = &args.output_dir {
        settings.output_dir = output_dir.clone();
    }
    if let Some(file_name) = &args.file_name {
        settings.file_name = file_name.clone();
    }
    if args.skip {
        settings.skip = true;
    }

    Ok(settings)
}

/// Build the metadata provider chain from the configured repositories, with
/// a shared cache in front so every module traversal reuses lookups.
/// Relative repository paths are resolved against the project directory.
fn build_metadata_provider(
    settings: &NoticeSettings,
    project_path: &Path,
) -> Result<CachingMetadataProvider<ChainMetadataProvider>> {
    let mut providers: Vec<Box<dyn MetadataProvider>> = Vec::new();

    for repository in &settings.metadata_repositories {
        if repository.starts_with("http://") || repository.starts_with("https://") {
            providers.push(Box::new(HttpMetadataProvider::new(repository)?));
        } else {
            let root = PathBuf::from(repository);
            let root = if root.is_absolute() {
                root
            } else {
                project_path.join(root)
            };
            providers.push(Box::new(FileSystemMetadataProvider::new(root)));
        }
    }

    Ok(CachingMetadataProvider::new(ChainMetadataProvider::new(
        providers,
    )))
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<NoticeError>() {
        Some(notice_error) => notice_error.exit_code(),
        None => ExitCode::ApplicationError,
    }
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(NoticeError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    let metadata = std::fs::symlink_metadata(path).map_err(|e| NoticeError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(NoticeError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(NoticeError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
