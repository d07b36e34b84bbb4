//! Configuration file support for notice-gen.
//!
//! Provides YAML-based configuration through `notice.config.yml` files
//! (data structures, file loading, validation) and the merged
//! [`NoticeSettings`] consumed by the use cases.

use anyhow::Context;
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use crate::notice::services::graph_walker::TraversalSettings;
use crate::notice::services::notice_renderer::RenderOptions;
use crate::shared::error::NoticeError;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "notice.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    pub mapping_documents: Option<Vec<String>>,
    /// Deprecated alias for `mapping-documents`.
    pub license_lookup: Option<Vec<String>>,
    pub skip: Option<bool>,
    pub include_scopes: Option<Vec<String>>,
    pub exclude_scopes: Option<Vec<String>>,
    pub exclude_optional: Option<bool>,
    pub include_child_modules: Option<bool>,
    pub generate_child_notices: Option<bool>,
    pub excluded_modules: Option<Vec<String>>,
    pub notice_template: Option<String>,
    pub notice_placeholder: Option<String>,
    pub notice_message: Option<String>,
    pub copyright_message: Option<String>,
    pub license_summary_message: Option<String>,
    pub license_summary_placeholder: Option<String>,
    pub license_aliases: Option<HashMap<String, String>>,
    pub output_dir: Option<String>,
    pub file_name: Option<String>,
    pub encoding: Option<String>,
    pub build_dir: Option<String>,
    pub metadata_repositories: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.mapping_documents.is_some() && config.license_lookup.is_some() {
        return Err(NoticeError::ConflictingMappingConfig.into());
    }

    if let Some(encoding) = &config.encoding {
        if !matches!(encoding.to_lowercase().as_str(), "utf-8" | "utf8") {
            return Err(NoticeError::UnsupportedEncoding {
                encoding: encoding.clone(),
            }
            .into());
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// The effective, fully-defaulted configuration for one run.
#[derive(Debug, Clone)]
pub struct NoticeSettings {
    pub mapping_documents: Vec<String>,
    pub skip: bool,
    pub include_scopes: BTreeSet<String>,
    pub exclude_scopes: BTreeSet<String>,
    pub exclude_optional: bool,
    pub include_child_modules: bool,
    pub generate_child_notices: bool,
    pub excluded_modules: BTreeSet<String>,
    pub notice_template: String,
    pub notice_placeholder: String,
    pub notice_message: String,
    pub copyright_message: String,
    pub license_summary_message: Option<String>,
    pub license_summary_placeholder: String,
    pub license_aliases: HashMap<String, String>,
    pub output_dir: String,
    pub file_name: String,
    pub encoding: String,
    pub build_dir: String,
    pub metadata_repositories: Vec<String>,
}

impl Default for NoticeSettings {
    fn default() -> Self {
        Self {
            mapping_documents: Vec::new(),
            skip: false,
            include_scopes: BTreeSet::new(),
            exclude_scopes: BTreeSet::new(),
            exclude_optional: false,
            include_child_modules: true,
            generate_child_notices: true,
            excluded_modules: BTreeSet::new(),
            notice_template: "NOTICE.template".to_string(),
            notice_placeholder: "#GENERATED_NOTICES#".to_string(),
            notice_message: "  {0} under {1}".to_string(),
            copyright_message: "Copyright {0} {1}".to_string(),
            license_summary_message: None,
            license_summary_placeholder: "#LICENSE_SUMMARY#".to_string(),
            license_aliases: HashMap::new(),
            output_dir: String::new(),
            file_name: "NOTICE".to_string(),
            encoding: "UTF-8".to_string(),
            build_dir: "target".to_string(),
            metadata_repositories: Vec::new(),
        }
    }
}

impl NoticeSettings {
    /// Merge a configuration file over the defaults.
    pub fn from_config(config: &ConfigFile) -> Self {
        let mut settings = Self::default();

        if let Some(documents) = &config.mapping_documents {
            settings.mapping_documents = documents.clone();
        } else if let Some(documents) = &config.license_lookup {
            eprintln!(
                "⚠️  Warning: 'license-lookup' is deprecated, use 'mapping-documents' instead."
            );
            settings.mapping_documents = documents.clone();
        }

        if let Some(skip) = config.skip {
            settings.skip = skip;
        }
        if let Some(scopes) = &config.include_scopes {
            settings.include_scopes = scopes.iter().cloned().collect();
        }
        if let Some(scopes) = &config.exclude_scopes {
            settings.exclude_scopes = scopes.iter().cloned().collect();
        }
        if let Some(exclude_optional) = config.exclude_optional {
            settings.exclude_optional = exclude_optional;
        }
        if let Some(include_child_modules) = config.include_child_modules {
            settings.include_child_modules = include_child_modules;
        }
        if let Some(generate_child_notices) = config.generate_child_notices {
            settings.generate_child_notices = generate_child_notices;
        }
        if let Some(modules) = &config.excluded_modules {
            settings.excluded_modules = modules.iter().cloned().collect();
        }
        if let Some(template) = &config.notice_template {
            settings.notice_template = template.clone();
        }
        if let Some(placeholder) = &config.notice_placeholder {
            settings.notice_placeholder = placeholder.clone();
        }
        if let Some(message) = &config.notice_message {
            settings.notice_message = message.clone();
        }
        if let Some(message) = &config.copyright_message {
            settings.copyright_message = message.clone();
        }
        if let Some(message) = &config.license_summary_message {
            settings.license_summary_message = Some(message.clone());
        }
        if let Some(placeholder) = &config.license_summary_placeholder {
            settings.license_summary_placeholder = placeholder.clone();
        }
        if let Some(aliases) = &config.license_aliases {
            settings.license_aliases = aliases.clone();
        }
        if let Some(output_dir) = &config.output_dir {
            settings.output_dir = output_dir.clone();
        }
        if let Some(file_name) = &config.file_name {
            settings.file_name = file_name.clone();
        }
        if let Some(encoding) = &config.encoding {
            settings.encoding = encoding.clone();
        }
        if let Some(build_dir) = &config.build_dir {
            settings.build_dir = build_dir.clone();
        }
        if let Some(repositories) = &config.metadata_repositories {
            settings.metadata_repositories = repositories.clone();
        }

        settings
    }

    pub fn traversal_settings(&self) -> TraversalSettings {
        TraversalSettings {
            include_child_modules: self.include_child_modules,
            excluded_modules: self.excluded_modules.clone(),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            message_template: self.notice_message.clone(),
            copyright_template: self.copyright_message.clone(),
            include_scopes: self.include_scopes.clone(),
            exclude_scopes: self.exclude_scopes.clone(),
            exclude_optional: self.exclude_optional,
            placeholder: self.notice_placeholder.clone(),
            summary_template: self.license_summary_message.clone(),
            summary_placeholder: self.license_summary_placeholder.clone(),
        }
    }

    /// The NOTICE file location for a module directory. A relative
    /// `output-dir` is resolved against the module directory, an absolute
    /// one is taken as-is.
    pub fn output_path(&self, module_dir: &Path) -> PathBuf {
        if self.output_dir.is_empty() {
            return module_dir.join(&self.file_name);
        }

        let output_dir = Path::new(&self.output_dir);
        if output_dir.is_absolute() {
            output_dir.join(&self.file_name)
        } else {
            module_dir.join(output_dir).join(&self.file_name)
        }
    }

    /// The side-file directory (stub mappings, NOTICE.expected) for a module.
    pub fn build_path(&self, module_dir: &Path) -> PathBuf {
        module_dir.join(&self.build_dir)
    }
}
