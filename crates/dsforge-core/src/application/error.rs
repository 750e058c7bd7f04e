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
    /// Artifact rendering failed.
    #[error("Artifact rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", .path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// The prompt could not be shown or was aborted.
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// Input was required but prompting is disabled.
    #[error("No value for '{field}' and prompting is disabled")]
    NonInteractive { field: String },

    /// The connector catalog could not be loaded or read.
    #[error("Connector catalog error: {reason}")]
    CatalogError { reason: String },

    /// Catalog access failed (lock poisoned).
    #[error("Connector catalog is unavailable")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Run in an interactive terminal, or pass values as flags".into(),
                "Use --yes to accept defaults without prompting".into(),
            ],
            Self::NonInteractive { field } => vec![
                format!("Pass '{}' on the command line", field),
                "Or provide it in an --answers file".into(),
            ],
            Self::CatalogError { .. } => vec![
                "Check the connectors file for JSON syntax errors".into(),
                "Try: dsforge connectors to see the built-in catalog".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
            Self::RenderingFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::StoreLockError | Self::RenderingFailed { .. } => {
                ErrorCategory::Internal
            }
            Self::PromptFailed { .. } | Self::NonInteractive { .. } => ErrorCategory::Validation,
            Self::CatalogError { .. } => ErrorCategory::Configuration,
        }
    }
}
