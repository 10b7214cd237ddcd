use clap::Parser;

use crate::adapters::outbound::formatters::CycloneDxFormatter;
use crate::ports::outbound::SbomFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid format: {}. Please specify 'json'", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl OutputFormat {
    /// Creates a formatter instance for the specified output format
    pub fn create_formatter(&self) -> Box<dyn SbomFormatter> {
        match self {
            OutputFormat::Json => Box::new(CycloneDxFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(&self) -> &'static str {
        match self {
            OutputFormat::Json => "📝 Generating CycloneDX JSON format output...",
        }
    }
}

/// Generate CycloneDX SBOMs for npm projects with license evidence
#[derive(Parser, Debug)]
#[command(name = "npm-sbom")]
#[command(version)]
#[command(about = "Generate CycloneDX SBOMs for npm projects with license evidence", long_about = None)]
pub struct Args {
    /// Output format: json
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Skip license text collection and the license gap audit
    #[arg(long = "skip-license-texts")]
    pub skip_license_texts: bool,

    /// npm executable to invoke (defaults to 'npm' on PATH)
    #[arg(long = "npm-binary", value_name = "PATH")]
    pub npm_binary: Option<String>,

    /// Explicit config file path (defaults to npm-sbom.config.yml discovery)
    #[arg(short, long)]
    pub config: Option<String>,
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
    fn test_output_format_from_str_json() {
        let format = OutputFormat::from_str("json").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn test_output_format_from_str_case_insensitive() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("Json").unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let result = OutputFormat::from_str("xml");
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("xml"));
        assert!(error.contains("json"));
    }

    #[test]
    fn test_output_format_from_str_empty() {
        assert!(OutputFormat::from_str("").is_err());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
