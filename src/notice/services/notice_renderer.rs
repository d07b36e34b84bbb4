use std::collections::BTreeMap;
use std::collections::BTreeSet;

use chrono::Datelike;

use crate::notice::domain::{ArtifactLicenseInfo, ResolvedLicenseSet};

/// Rendering options derived from the tool configuration.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Positional template for one notice line; see [`format_positional`].
    pub message_template: String,
    /// Positional template for the synthesized copyright string:
    /// `{0}` year range, `{1}` organization name.
    pub copyright_template: String,
    pub include_scopes: BTreeSet<String>,
    pub exclude_scopes: BTreeSet<String>,
    pub exclude_optional: bool,
    pub placeholder: String,
    /// Summary block line template; the summary is disabled when unset.
    pub summary_template: Option<String>,
    pub summary_placeholder: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            message_template: "  {0} under {1}".to_string(),
            copyright_template: "Copyright {0} {1}".to_string(),
            include_scopes: BTreeSet::new(),
            exclude_scopes: BTreeSet::new(),
            exclude_optional: false,
            placeholder: "#GENERATED_NOTICES#".to_string(),
            summary_template: None,
            summary_placeholder: "#LICENSE_SUMMARY#".to_string(),
        }
    }
}

/// Formats the aggregated result set into notice lines and merges them into
/// the placeholder-bearing template. Output always uses the platform line
/// separator, independent of the template's original line endings.
pub struct NoticeRenderer<'a> {
    options: &'a RenderOptions,
}

impl<'a> NoticeRenderer<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, results: &ResolvedLicenseSet, template: &str) -> String {
        let separator = line_separator();
        let filtered: Vec<&ArtifactLicenseInfo> =
            results.iter().filter(|info| self.is_included(info)).collect();

        let mut lines = String::new();
        for info in &filtered {
            let copyright = self.synthesize_copyright(info);
            let organization_name = info
                .organization
                .as_ref()
                .map(|org| org.name.as_str())
                .unwrap_or("");
            let organization_url = info
                .organization
                .as_ref()
                .and_then(|org| org.url.as_deref())
                .unwrap_or("");
            let line = format_positional(
                &self.options.message_template,
                &[
                    info.display_name.as_str(),
                    info.license_name.as_str(),
                    info.coordinates.group_id(),
                    info.coordinates.artifact_id(),
                    info.coordinates.version(),
                    organization_name,
                    organization_url,
                    copyright.as_str(),
                ],
            );
            lines.push_str(&line);
            lines.push_str(separator);
        }

        let mut content = template.replacen(&self.options.placeholder, &lines, 1);

        if let Some(summary_template) = &self.options.summary_template {
            if content.contains(&self.options.summary_placeholder) {
                let summary = self.render_summary(&filtered, summary_template, separator);
                content = content.replacen(&self.options.summary_placeholder, &summary, 1);
            }
        }

        content
    }

    fn is_included(&self, info: &ArtifactLicenseInfo) -> bool {
        if !self.options.include_scopes.is_empty() {
            match &info.scope {
                Some(scope) if self.options.include_scopes.contains(scope) => {}
                _ => return false,
            }
        }
        if let Some(scope) = &info.scope {
            if self.options.exclude_scopes.contains(scope) {
                return false;
            }
        }
        if self.options.exclude_optional && info.optional {
            return false;
        }
        true
    }

    /// Count distinct artifacts per license name (case-insensitive grouping,
    /// first-seen casing shown), one numbered line per license in sorted
    /// order.
    fn render_summary(
        &self,
        results: &[&ArtifactLicenseInfo],
        template: &str,
        separator: &str,
    ) -> String {
        let mut counts: BTreeMap<String, (String, usize)> = BTreeMap::new();
        for info in results {
            let entry = counts
                .entry(info.license_name.to_lowercase())
                .or_insert_with(|| (info.license_name.clone(), 0));
            entry.1 += 1;
        }

        let mut summary = String::new();
        for (number, (display, count)) in counts.values().enumerate() {
            let position = (number + 1).to_string();
            let count = count.to_string();
            let line = format_positional(
                template,
                &[position.as_str(), display.as_str(), count.as_str()],
            );
            summary.push_str(&line);
            summary.push_str(separator);
        }
        summary
    }

    fn synthesize_copyright(&self, info: &ArtifactLicenseInfo) -> String {
        let (Some(inception), Some(organization)) = (info.inception_year, &info.organization)
        else {
            return String::new();
        };

        let current = chrono::Utc::now().year();
        let years = if current > inception {
            format!("{}-{}", inception, current)
        } else {
            inception.to_string()
        };

        format_positional(
            &self.options.copyright_template,
            &[years.as_str(), organization.name.as_str()],
        )
    }
}

/// The platform's native line separator.
pub fn line_separator() -> &'static str {
    if cfg!(windows) {
        "\r\n"
    } else {
        "\n"
    }
}

/// Rejoin text on the platform line separator, whatever its original line
/// endings were. Every line, the last included, ends with a separator.
pub fn normalize_line_endings(text: &str) -> String {
    let separator = line_separator();
    let mut normalized = String::with_capacity(text.len());
    for line in text.lines() {
        normalized.push_str(line);
        normalized.push_str(separator);
    }
    normalized
}

/// Positional `{N}` substitution for message templates.
fn format_positional(template: &str, args: &[&str]) -> String {
    let mut formatted = template.to_string();
    for (position, arg) in args.iter().enumerate() {
        formatted = formatted.replace(&format!("{{{}}}", position), arg);
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::domain::{ArtifactCoordinates, Organization};

    fn info(display_name: &str, license: &str, scope: Option<&str>, optional: bool) -> ArtifactLicenseInfo {
        ArtifactLicenseInfo {
            display_name: display_name.to_string(),
            license_name: license.to_string(),
            coordinates: ArtifactCoordinates::new(
                "com.example".to_string(),
                display_name.to_lowercase().replace(' ', "-"),
                "1.0.0".to_string(),
            )
            .unwrap(),
            scope: scope.map(String::from),
            optional,
            organization: None,
            inception_year: None,
        }
    }

    fn set(rows: Vec<ArtifactLicenseInfo>) -> ResolvedLicenseSet {
        let mut set = ResolvedLicenseSet::new();
        for row in rows {
            set.insert(row);
        }
        set
    }

    const TEMPLATE: &str = "Header\n#GENERATED_NOTICES#\nFooter\n";

    #[test]
    fn test_render_basic_lines() {
        let options = RenderOptions::default();
        let renderer = NoticeRenderer::new(&options);
        let results = set(vec![
            info("Beta Lib", "MIT", Some("compile"), false),
            info("Alpha Lib", "Apache 2.0", Some("compile"), false),
        ]);

        let rendered = renderer.render(&results, TEMPLATE);

        assert!(rendered.contains("  Alpha Lib under Apache 2.0"));
        assert!(rendered.contains("  Beta Lib under MIT"));
        assert!(rendered.starts_with("Header"));
        assert!(rendered.contains("Footer"));
        assert!(!rendered.contains("#GENERATED_NOTICES#"));
        // Deterministic case-insensitive ordering
        let alpha = rendered.find("Alpha Lib").unwrap();
        let beta = rendered.find("Beta Lib").unwrap();
        assert!(alpha < beta);
    }

    #[test]
    fn test_render_is_deterministic() {
        let options = RenderOptions::default();
        let renderer = NoticeRenderer::new(&options);
        let results = set(vec![
            info("Gamma", "MIT", None, false),
            info("alpha", "MIT", None, false),
            info("Beta", "Apache 2.0", None, false),
        ]);

        let first = renderer.render(&results, TEMPLATE);
        let second = renderer.render(&results, TEMPLATE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_include_scopes_filter() {
        let mut options = RenderOptions::default();
        options.include_scopes.insert("compile".to_string());
        let renderer = NoticeRenderer::new(&options);

        let results = set(vec![
            info("Compile Dep", "MIT", Some("compile"), false),
            info("Test Dep", "MIT", Some("test"), false),
            info("Unscoped Dep", "MIT", None, false),
        ]);

        let rendered = renderer.render(&results, TEMPLATE);
        assert!(rendered.contains("Compile Dep"));
        assert!(!rendered.contains("Test Dep"));
        // With an include set, a scopeless entry is excluded
        assert!(!rendered.contains("Unscoped Dep"));
    }

    #[test]
    fn test_exclude_scopes_filter() {
        let mut options = RenderOptions::default();
        options.exclude_scopes.insert("test".to_string());
        let renderer = NoticeRenderer::new(&options);

        let results = set(vec![
            info("Compile Dep", "MIT", Some("compile"), false),
            info("Test Dep", "MIT", Some("test"), false),
            info("Unscoped Dep", "MIT", None, false),
        ]);

        let rendered = renderer.render(&results, TEMPLATE);
        assert!(rendered.contains("Compile Dep"));
        assert!(!rendered.contains("Test Dep"));
        assert!(rendered.contains("Unscoped Dep"));
    }

    #[test]
    fn test_exclude_optional_filter() {
        let mut options = RenderOptions::default();
        options.exclude_optional = true;
        let renderer = NoticeRenderer::new(&options);

        let results = set(vec![
            info("Required Dep", "MIT", None, false),
            info("Optional Dep", "MIT", None, true),
        ]);

        let rendered = renderer.render(&results, TEMPLATE);
        assert!(rendered.contains("Required Dep"));
        assert!(!rendered.contains("Optional Dep"));
    }

    #[test]
    fn test_extended_positional_arguments() {
        let mut options = RenderOptions::default();
        options.message_template = "{2}:{3}:{4} {0} ({1})".to_string();
        let renderer = NoticeRenderer::new(&options);

        let results = set(vec![info("Alpha", "MIT", None, false)]);
        let rendered = renderer.render(&results, TEMPLATE);
        assert!(rendered.contains("com.example:alpha:1.0.0 Alpha (MIT)"));
    }

    #[test]
    fn test_copyright_synthesis() {
        let mut options = RenderOptions::default();
        options.message_template = "{0}: {7}".to_string();
        let renderer = NoticeRenderer::new(&options);

        let mut with_org = info("Alpha", "MIT", None, false);
        with_org.organization = Some(Organization {
            name: "Example Corp".to_string(),
            url: None,
        });
        with_org.inception_year = Some(2004);
        let results = set(vec![with_org, info("Beta", "MIT", None, false)]);

        let rendered = renderer.render(&results, TEMPLATE);
        assert!(rendered.contains("Alpha: Copyright 2004-"));
        assert!(rendered.contains("Example Corp"));
        // No organization and inception year: copyright renders empty
        assert!(rendered.contains("Beta: \n") || rendered.contains("Beta: \r\n"));
    }

    #[test]
    fn test_summary_block() {
        let mut options = RenderOptions::default();
        options.summary_template = Some("{0}. {1}: {2}".to_string());
        let renderer = NoticeRenderer::new(&options);

        let template = "Deps\n#GENERATED_NOTICES#\nSummary\n#LICENSE_SUMMARY#\n";
        let results = set(vec![
            info("A", "MIT", None, false),
            info("B", "mit", None, false),
            info("C", "Apache 2.0", None, false),
        ]);

        let rendered = renderer.render(&results, template);
        // Case-insensitive grouping, first-seen casing, sorted license order
        assert!(rendered.contains("1. Apache 2.0: 1"));
        assert!(rendered.contains("2. MIT: 2"));
        assert!(!rendered.contains("#LICENSE_SUMMARY#"));
    }

    #[test]
    fn test_summary_skipped_without_placeholder() {
        let mut options = RenderOptions::default();
        options.summary_template = Some("{0}. {1}: {2}".to_string());
        let renderer = NoticeRenderer::new(&options);

        let results = set(vec![info("A", "MIT", None, false)]);
        let rendered = renderer.render(&results, TEMPLATE);
        assert!(rendered.contains("A under MIT"));
    }

    #[test]
    fn test_only_first_placeholder_is_substituted() {
        let options = RenderOptions::default();
        let renderer = NoticeRenderer::new(&options);
        let results = set(vec![info("A", "MIT", None, false)]);

        let template = "#GENERATED_NOTICES#\n#GENERATED_NOTICES#\n";
        let rendered = renderer.render(&results, template);
        assert_eq!(rendered.matches("#GENERATED_NOTICES#").count(), 1);
    }

    #[test]
    fn test_normalize_line_endings() {
        let mixed = "one\r\ntwo\nthree";
        let normalized = normalize_line_endings(mixed);
        let sep = line_separator();
        assert_eq!(normalized, format!("one{}two{}three{}", sep, sep, sep));
    }

    #[test]
    fn test_format_positional_repeated_and_missing() {
        assert_eq!(format_positional("{0} and {0}", &["x"]), "x and x");
        assert_eq!(format_positional("{0} {9}", &["x"]), "x {9}");
    }
}
