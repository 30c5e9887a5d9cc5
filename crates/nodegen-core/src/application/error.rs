//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Existing file present but unreadable or unparsable. Fatal for the run.
    #[error("Malformed existing state in {path}: {reason}")]
    MalformedState { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// No entrypoint registered under this name.
    #[error("No sub-generator registered as '{name}'")]
    UnknownSubGenerator { name: String },

    /// Template or document rendering failed.
    #[error("Rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// In-memory store lock poisoned.
    #[error("Filesystem lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MalformedState { path, .. } => vec![
                format!("Fix or remove {}", path.display()),
                "package.json must contain a single JSON object".into(),
                "Nothing was written; rerun once the file parses".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::UnknownSubGenerator { name } => vec![
                format!("'{}' is not a built-in sub-generator", name),
                "Known sub-generators: license, eslint, jsc, cli, boilerplate".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedState { .. } => ErrorCategory::MalformedState,
            Self::UnknownSubGenerator { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::RenderingFailed { .. } | Self::LockPoisoned => {
                ErrorCategory::Internal
            }
        }
    }
}

/// Origin lookup failed. Never aborts a run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("origin unavailable: {reason}")]
pub struct OriginUnavailable {
    pub reason: String,
}

impl OriginUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
