//! Unified error handling for Nodegen Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Nodegen Core operations.
///
/// Only these errors abort a run. Conditions such as an unknown field shape
/// or an unreachable origin are reported as [`crate::application::Diagnostic`]s
/// instead.
#[derive(Debug, Error, Clone)]
pub enum NodegenError {
    /// Errors from the domain layer (validation, malformed documents).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (state reading, emission).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl NodegenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in nodegen".into(),
                "Please report this issue at: https://github.com/cosecruz/nodegen/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::MalformedState => ErrorCategory::MalformedState,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    MalformedState,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type NodegenResult<T> = Result<T, NodegenError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> NodegenResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> NodegenResult<T> {
        self.map_err(|e| NodegenError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}
