// ============================================================================
// domain/error.rs - DOMAIN RULE VIOLATIONS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so a failure can be both logged and returned)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Invalid template id '{id}': {reason}")]
    InvalidTemplateId { id: String, reason: String },

    #[error("Unknown package manager '{0}'")]
    UnknownPackageManager(String),

    // ========================================================================
    // Catalog Invariants
    // ========================================================================
    #[error("Template catalog is empty")]
    EmptyCatalog,

    #[error("Duplicate template id in catalog: {id}")]
    DuplicateTemplateId { id: String },

    #[error("Duplicate template label in catalog: {label}")]
    DuplicateTemplateLabel { label: String },

    #[error("Template '{id}' has an invalid directory '{directory}'")]
    InvalidTemplateDirectory { id: String, directory: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { reason, .. } => vec![
                format!("The project name is used as a directory name: {reason}"),
                "Use letters, digits, hyphens, and underscores".into(),
                "Examples: my-app, my_api, shop2".into(),
            ],
            Self::InvalidTemplateId { .. } => vec![
                "Template ids are plain directory names without separators".into(),
                "List available templates: well-ready list".into(),
            ],
            Self::UnknownPackageManager(_) => vec![
                "Supported package managers: npm, pnpm, yarn, bun".into(),
            ],
            Self::EmptyCatalog => vec![
                "Add at least one [[templates.catalog]] entry to your config".into(),
                "Or remove the catalog section to use the built-in templates".into(),
            ],
            Self::DuplicateTemplateId { id } => vec![
                format!("Template id '{id}' appears more than once"),
                "Each [[templates.catalog]] entry needs a unique id".into(),
            ],
            Self::DuplicateTemplateLabel { label } => vec![
                format!("Label '{label}' appears more than once"),
                "Labels are shown in the template picker and must be unique".into(),
            ],
            Self::InvalidTemplateDirectory { .. } => vec![
                "Template directories must be relative to the templates root".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. }
            | Self::InvalidTemplateId { .. }
            | Self::UnknownPackageManager(_) => ErrorCategory::Validation,
            Self::EmptyCatalog
            | Self::DuplicateTemplateId { .. }
            | Self::DuplicateTemplateLabel { .. }
            | Self::InvalidTemplateDirectory { .. } => ErrorCategory::Configuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
}
