//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! rules. Business rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running the scaffold workflow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The requested id is not in the catalog.
    #[error("Unknown template '{id}'")]
    UnknownTemplate { id: String, available: Vec<String> },

    /// The catalog entry exists but its directory does not.
    #[error("Template directory not found: {path}")]
    TemplateNotFound { path: PathBuf },

    /// Refusing to write into an existing path.
    #[error("Destination already exists: {path}")]
    DestinationExists { path: PathBuf },

    /// Filesystem operation failed while copying the template tree.
    #[error("Failed to copy {path}: {reason}")]
    CopyFailed { path: PathBuf, reason: String },

    /// The install command could not be started.
    #[error("Could not run '{program}': {reason}")]
    InstallerUnavailable { program: String, reason: String },

    /// The install command ran and exited unsuccessfully.
    #[error("'{command}' exited with {}", describe_exit(.code))]
    InstallFailed { command: String, code: Option<i32> },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".into(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownTemplate { available, .. } => {
                let mut out = vec!["Available templates:".to_string()];
                out.extend(available.iter().map(|id| format!("  • {id}")));
                out.push("List them with details: well-ready list".into());
                out
            }
            Self::TemplateNotFound { path } => vec![
                format!("Expected a template directory at {}", path.display()),
                "Point --templates-dir (or WELL_READY_TEMPLATES_DIR) at your templates".into(),
                "Check availability with: well-ready list".into(),
            ],
            Self::DestinationExists { path } => vec![
                format!("'{}' is already there and was left untouched", path.display()),
                "Choose a different project name".into(),
                "Or move the existing directory out of the way".into(),
            ],
            Self::CopyFailed { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
                "Files copied so far were left in place; remove them before retrying".into(),
            ],
            Self::InstallerUnavailable { program, .. } => vec![
                format!("Ensure '{program}' is installed and on your PATH"),
                "Or pick another one with --package-manager".into(),
                "Or skip installation with --skip-install".into(),
            ],
            Self::InstallFailed { command, .. } => vec![
                "Check the installer output above for details".into(),
                format!("The project was kept; retry inside it with: {command}"),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownTemplate { .. } | Self::TemplateNotFound { .. } => {
                ErrorCategory::NotFound
            }
            Self::DestinationExists { .. } => ErrorCategory::Validation,
            Self::CopyFailed { .. } => ErrorCategory::Internal,
            Self::InstallerUnavailable { .. } | Self::InstallFailed { .. } => {
                ErrorCategory::Install
            }
        }
    }
}
