use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish an incomplete or stale
/// NOTICE file from a broken configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - NOTICE generated or verified
    Success = 0,
    /// Attribution data is incomplete or the committed NOTICE is stale
    AttributionFailure = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (configuration, I/O, dependency graph, network, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps an error chain to the exit code the CLI should return
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<NoticeError>() {
            Some(e) if e.is_attribution_failure() => ExitCode::AttributionFailure,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::AttributionFailure => write!(f, "Attribution Failure (1)"),
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
    #[error("Failed to load license lookup source: {resource}\nDetails: {details}\n\n💡 Hint: Check the 'license_lookup' entries in your configuration")]
    LookupSourceError { resource: String, details: String },

    #[error("Failed to read NOTICE template '{template}'\nDetails: {details}\n\n💡 Hint: Place the template in the project directory or omit it to use the bundled default")]
    TemplateError { template: String, details: String },

    #[error("NOTICE template '{template}' does not contain the placeholder '{placeholder}'\n\n💡 Hint: Add the placeholder where the generated notices should appear")]
    PlaceholderNotFound {
        template: String,
        placeholder: String,
    },

    #[error("Invalid notice message format '{format}': {reason}\n\n💡 Hint: Use {{0}} for the indent, {{1}} for the artifact and {{2}} for the license")]
    InvalidLineFormat { format: String, reason: String },

    #[error("Unsupported character encoding: {encoding}\n\n💡 Hint: Supported encodings are UTF-8, US-ASCII and ISO-8859-1")]
    UnsupportedEncoding { encoding: String },

    #[error("Cannot build dependency tree for project: {project}\nDetails: {details}")]
    GraphBuildError { project: String, details: String },

    #[error("Failed to find licenses for {count} artifact(s)\n\n💡 Hint: Fill in the stub mapping file and add it to 'license_lookup'")]
    UnresolvedLicenses { count: usize },

    #[error("Existing NOTICE file '{path}' does not match the expected content\n\n💡 Hint: Run 'license-notice generate' and commit the result")]
    NoticeOutOfDate { path: PathBuf },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl NoticeError {
    /// Whether this error means the NOTICE attribution itself is unusable,
    /// as opposed to the tool being misconfigured
    pub fn is_attribution_failure(&self) -> bool {
        matches!(
            self,
            NoticeError::UnresolvedLicenses { .. } | NoticeError::NoticeOutOfDate { .. }
        )
    }
}
