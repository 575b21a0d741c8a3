//! Unified error handling for well-ready core.
//!
//! [`WellReadyError`] wraps domain and application errors behind one type.
//! [`ScaffoldFailure`] attaches the workflow stage to a failure so callers
//! can report *where* the scaffold stopped.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{DomainError, Stage};

/// Root error type for well-ready core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WellReadyError {
    /// Errors from the domain layer (rule violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration and I/O failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl WellReadyError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Install,
    Internal,
}

/// Convenient result type alias.
pub type WellReadyResult<T> = Result<T, WellReadyError>;

/// A scaffold that stopped at `stage`.
///
/// `destination` is where the project was (or would have been) written; after
/// an install failure it holds the fully copied project.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{stage} stage failed: {source}")]
pub struct ScaffoldFailure {
    pub stage: Stage,
    pub destination: PathBuf,
    #[source]
    pub source: WellReadyError,
}

impl ScaffoldFailure {
    pub fn new(
        stage: Stage,
        destination: impl Into<PathBuf>,
        source: impl Into<WellReadyError>,
    ) -> Self {
        Self {
            stage,
            destination: destination.into(),
            source: source.into(),
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        self.source.suggestions()
    }

    pub fn category(&self) -> ErrorCategory {
        self.source.category()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_message_names_stage_and_cause() {
        let failure = ScaffoldFailure::new(
            Stage::Copy,
            "/work/my-api",
            ApplicationError::TemplateNotFound {
                path: PathBuf::from("/t/express-ts"),
            },
        );
        let msg = failure.to_string();
        assert!(msg.starts_with("copy stage failed"));
        assert!(msg.contains("/t/express-ts"));
    }

    #[test]
    fn domain_categories_map_through() {
        let err: WellReadyError = DomainError::EmptyCatalog.into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
