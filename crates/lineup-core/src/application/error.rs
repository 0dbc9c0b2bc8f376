//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while loading or persisting the lineup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The backing store exists but could not be read.
    #[error("Failed to load lineup from {path}: {reason}")]
    LoadFailed { path: PathBuf, reason: String },

    /// Writing the lineup failed. The in-memory lineup is still valid.
    #[error("Failed to save lineup to {path}: {reason}")]
    SaveFailed { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned).
    #[error("Roster store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::LoadFailed { path, .. } => vec![
                format!("Could not read: {}", path.display()),
                "Check that the file is readable".into(),
                "Point at a different file with --file".into(),
            ],
            Self::SaveFailed { path, .. } => vec![
                format!("Could not write: {}", path.display()),
                "Your change is kept for this session and will be saved with the next one"
                    .into(),
                "Check that you have write permissions".into(),
            ],
            Self::StoreLockError => vec![
                "The roster store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::LoadFailed { .. } | Self::SaveFailed { .. } | Self::StoreLockError => {
                ErrorCategory::Internal
            }
        }
    }
}
