//! Unified error handling for the lineup core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for lineup core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineupError {
    /// Errors from the domain layer (record invariants, slot bounds).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (load/save failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl LineupError {
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
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// The domain error, if this is one.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) => Some(e),
            Self::Application(_) => None,
        }
    }

    /// `true` when the operation itself succeeded but persisting it did not.
    pub fn is_save_failure(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::SaveFailed { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type LineupResult<T> = Result<T, LineupError>;
