use clap::Parser;

/// Operating mode of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Render and (over)write the NOTICE file
    Generate,
    /// Render in memory and diff against the committed NOTICE file
    Check,
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "generate" | "gen" => Ok(Mode::Generate),
            "check" => Ok(Mode::Check),
            _ => Err(format!(
                "Invalid mode: {}. Please specify 'generate' or 'check'",
                s
            )),
        }
    }
}

/// Generate and verify NOTICE attribution files from a project's dependency graph
#[derive(Parser, Debug)]
#[command(name = "notice-gen")]
#[command(version)]
#[command(about = "Generate and verify NOTICE attribution files", long_about = None)]
pub struct Args {
    /// Operating mode: generate or check
    #[arg(short, long, default_value = "generate")]
    pub mode: Mode,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Path to a configuration file (defaults to notice.config.yml in the project directory)
    #[arg(short, long)]
    pub config: Option<String>,

    /// License mapping document location (overrides the configured list).
    /// Can be specified multiple times; earlier documents take precedence.
    #[arg(long = "mapping", value_name = "LOCATION")]
    pub mapping: Vec<String>,

    /// Output directory for the NOTICE file (overrides the configured value)
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Output file name (overrides the configured value)
    #[arg(short, long)]
    pub file_name: Option<String>,

    /// Skip all resolution work and exit successfully
    #[arg(long)]
    pub skip: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_mode_from_str_generate() {
        assert_eq!(Mode::from_str("generate").unwrap(), Mode::Generate);
        assert_eq!(Mode::from_str("gen").unwrap(), Mode::Generate);
    }

    #[test]
    fn test_mode_from_str_check() {
        assert_eq!(Mode::from_str("check").unwrap(), Mode::Check);
    }

    #[test]
    fn test_mode_from_str_case_insensitive() {
        assert_eq!(Mode::from_str("GENERATE").unwrap(), Mode::Generate);
        assert_eq!(Mode::from_str("Check").unwrap(), Mode::Check);
    }

    #[test]
    fn test_mode_from_str_invalid() {
        let result = Mode::from_str("verify");
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.contains("Invalid mode"));
        assert!(error.contains("generate"));
        assert!(error.contains("check"));
    }

    #[test]
    fn test_mode_from_str_empty() {
        assert!(Mode::from_str("").is_err());
    }
}
