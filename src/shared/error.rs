use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - SBOM generated with complete license evidence
    Success = 0,
    /// One or more components lack complete license evidence
    LicenseGapsDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (npm invocation error, parse error, file I/O error, etc.)
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
            ExitCode::LicenseGapsDetected => write!(f, "License Gaps Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for SBOM generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Failed to resolve the npm dependency tree for: {path}\nDetails: {details}\n\n💡 Hint: Run 'npm install' first so that node_modules is populated, and verify that npm is on your PATH")]
    DependencyResolutionError { path: PathBuf, details: String },

    #[error("Failed to parse npm dependency snapshot\nDetails: {details}\n\n💡 Hint: The output of 'npm ls --json' could not be understood. Please verify your npm version (npm >= 8 is supported)")]
    SnapshotParseError { details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Hard failure raised after the license gap audit finds incomplete components.
    /// The offending components are reported through the progress reporter before
    /// this error is returned; serialization never runs when this is raised.
    #[error("Found components without license information ({count} component(s) affected)\n\n💡 Hint: Add the missing license files to the affected packages, or re-run with --skip-license-texts to produce an SBOM without license evidence")]
    LicenseGapFailure { count: usize },
}
