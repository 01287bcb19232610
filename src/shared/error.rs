use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Automation pipelines only need to tell success from failure, so every
/// failure, usage errors included, collapses to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// All declared optional dependencies are locked (or help was shown)
    Success,
    /// At least one optional dependency is missing from the lockfile
    MissingDependencies,
    /// Invalid command-line arguments (clap parsing errors other than help/version)
    InvalidArguments,
    /// Missing input files, unreadable files or malformed JSON
    ApplicationError,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        match self {
            ExitCode::Success => 0,
            ExitCode::MissingDependencies => 1,
            ExitCode::InvalidArguments => 1,
            ExitCode::ApplicationError => 1,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::MissingDependencies => write!(f, "Missing Optional Dependencies (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (1)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
        }
    }
}

/// Fatal conditions that abort an audit run.
///
/// Inner components return these; only `main` turns them into a diagnostic
/// and a process exit code.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("package-lock.json file not found: {path}\n\n💡 Hint: {suggestion}")]
    LockfileNotFound { path: PathBuf, suggestion: String },

    #[error("node_modules directory not found: {path}\n\n💡 Hint: {suggestion}")]
    InstallRootNotFound { path: PathBuf, suggestion: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to parse JSON file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains valid JSON")]
    JsonParseError { path: PathBuf, details: String },
}
