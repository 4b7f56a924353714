//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during scaffold orchestration.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The create/modify safety rule was violated. Fatal; nothing is written.
    #[error("Safety check failed: {reason}")]
    SafetyViolation { reason: String },

    /// A logical template path did not resolve in its environment.
    #[error("Template not found: {logical_path} in environment '{environment}'")]
    TemplateNotFound {
        environment: String,
        logical_path: String,
    },

    /// A required template environment is missing entirely.
    #[error("Template environment not found: {name}")]
    EnvironmentNotFound { name: String },

    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A module hook raised; propagated unmodified, aborts the run.
    #[error("Hook for module '{module}' failed: {reason}")]
    HookFailed { module: String, reason: String },

    /// Prompting the user failed (stdin closed, terminal error).
    #[error("Confirmation prompt failed: {reason}")]
    PromptFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SafetyViolation { reason } => vec![
                format!("Refusing to write: {}", reason),
                "Run 'create' from outside any existing application".into(),
                "Run 'modify' from the existing application's parent directory".into(),
            ],
            Self::TemplateNotFound {
                environment,
                logical_path,
            } => vec![
                format!("'{}' is missing from '{}'", logical_path, environment),
                "Check the templates directory layout".into(),
            ],
            Self::EnvironmentNotFound { name } => vec![
                format!("No template environment named '{}'", name),
                "Check templates.local_path in your configuration".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::HookFailed { module, .. } => vec![
                format!("The '{}' module's hook aborted the run", module),
                "Files written by earlier phases are left in place".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SafetyViolation { .. } => ErrorCategory::SafetyViolation,
            Self::TemplateNotFound { .. } | Self::EnvironmentNotFound { .. } => {
                ErrorCategory::NotFound
            }
            Self::RenderingFailed { .. }
            | Self::FilesystemError { .. }
            | Self::HookFailed { .. }
            | Self::PromptFailed { .. } => ErrorCategory::Internal,
        }
    }
}
