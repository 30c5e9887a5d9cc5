// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports are cloned into run summaries)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Unknown sub-generator: {name}")]
    UnknownSubGenerator { name: String },

    // ========================================================================
    // Malformed State
    // ========================================================================
    #[error("Malformed manifest: {reason}")]
    MalformedManifest { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use lowercase letters, digits, '-', '.' and '_'".into(),
                "Scoped names are allowed: @scope/name".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("Provide a value for '{}'", field),
                "Pass it as a flag or in the answers file".into(),
            ],
            Self::UnknownSubGenerator { .. } => vec![
                "Known sub-generators: license, eslint, jsc, cli, boilerplate".into(),
            ],
            Self::MalformedManifest { .. } => vec![
                "The existing package.json could not be parsed".into(),
                "Fix the JSON syntax or remove the file to start fresh".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. }
            | Self::MissingRequiredField { .. }
            | Self::UnknownSubGenerator { .. } => ErrorCategory::Validation,
            Self::MalformedManifest { .. } => ErrorCategory::MalformedState,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    MalformedState,
}
