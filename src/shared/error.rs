use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Alerts raised during reconciliation are not failures: a run that
/// completes successfully exits with `Success` regardless of how many
/// alerts were emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// All hosts were reconciled and the output was written
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (configuration, snapshot file, output file, etc.)
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
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors.
///
/// These are the failures that can stop the CLI driver. Failures of the
/// remote collaborators during a reconciliation run never surface here; the
/// engine logs and absorbs them.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("Failed to read config file: {path}\nDetails: {details}\n\n💡 Hint: Check that the file exists and is readable")]
    ConfigReadError { path: PathBuf, details: String },

    #[error("Failed to parse config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid YAML syntax")]
    ConfigParseError { path: PathBuf, details: String },

    #[error("Invalid config: {message}")]
    InvalidConfig { message: String },

    #[error("Failed to read snapshot file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    SnapshotReadError { path: PathBuf, details: String },

    #[error("Failed to parse snapshot file: {path}\nDetails: {details}\n\n💡 Hint: The file must contain a single host snapshot in JSON format")]
    SnapshotParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("{service} returned an unexpected response\nDetails: {details}")]
    RemoteServiceError { service: String, details: String },

    /// Validation error for requests built from user input
    #[error("Validation error: {message}")]
    Validation { message: String },
}
