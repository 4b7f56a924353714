//! Domain-layer errors.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("unknown template type '{value}'")]
    UnknownTemplateType { value: String },

    #[error("invalid application name '{name}': {reason}")]
    InvalidApplicationName { name: String, reason: String },

    #[error("endpoint '{name}' is reserved")]
    ReservedEndpoint { name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownTemplateType { value } => vec![
                format!("'{}' is not a known template type", value),
                "Supported types:".into(),
                "  • basic    - minimal application".into(),
                "  • openapi  - OpenAPI-first application".into(),
            ],
            Self::InvalidApplicationName { name, reason } => vec![
                format!("Application name '{}' is invalid: {}", name, reason),
                "Use alphanumeric characters, hyphens, and underscores".into(),
            ],
            Self::ReservedEndpoint { name } => vec![
                format!("'{}' collides with the application's own endpoint", name),
                "Choose a different endpoint name".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
