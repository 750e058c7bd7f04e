// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Project preconditions
    // ========================================================================
    #[error("No {manifest} found in {}", .dir.display())]
    MissingManifest { manifest: String, dir: PathBuf },

    #[error("No `{keyword}` keyword found in {}", .manifest.display())]
    MissingCapability { keyword: String, manifest: PathBuf },

    #[error("Invalid manifest {}: {reason}", .path.display())]
    InvalidManifest { path: PathBuf, reason: String },

    // ========================================================================
    // Input validation
    // ========================================================================
    #[error("Invalid value for '{field}' (expected {expected}): {reason}")]
    InvalidFieldType {
        field: String,
        expected: String,
        value: String,
        reason: String,
    },

    #[error("Invalid datasource name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Invalid connector name: {0}")]
    InvalidConnector(String),

    // ========================================================================
    // Artifact plan invariants
    // ========================================================================
    #[error("Artifact plan is empty")]
    EmptyPlan,

    #[error("Duplicate path in artifact plan: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingManifest { manifest, dir } => vec![
                format!("Run this command from the root of your project ({} expected)", manifest),
                format!("Or point --project-dir at it instead of {}", dir.display()),
            ],
            Self::MissingCapability { keyword, manifest } => vec![
                format!("Add \"{}\" to the \"keywords\" array in {}", keyword, manifest.display()),
                "Only projects created for the target framework can host datasources".into(),
            ],
            Self::InvalidManifest { path, .. } => vec![
                format!("Fix the JSON syntax in {}", path.display()),
            ],
            Self::InvalidFieldType {
                field, expected, ..
            } => {
                let example = match expected.as_str() {
                    "number" => "e.g. --port 5432",
                    "boolean" => "e.g. true or false",
                    "object" => "e.g. '{\"headers\": {\"accept\": \"application/json\"}}'",
                    "array" => "e.g. '[\"get\", \"post\"]'",
                    _ => "a valid JSON value",
                };
                vec![
                    format!("'{}' must be a {}", field, expected),
                    format!("Provide {}", example),
                ]
            }
            Self::InvalidName { .. } => vec![
                "Use letters, digits, hyphens, and underscores".into(),
                "Start with a letter".into(),
                "Examples: db, mongo-main, orders_ds".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("Provide a value for '{}'", field),
                "Pass it as an argument or run without --yes to be prompted".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingManifest { .. } => ErrorCategory::NotFound,
            Self::MissingCapability { .. }
            | Self::InvalidManifest { .. }
            | Self::InvalidFieldType { .. }
            | Self::InvalidName { .. }
            | Self::MissingRequiredField { .. }
            | Self::InvalidConnector(_) => ErrorCategory::Validation,
            Self::EmptyPlan | Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
