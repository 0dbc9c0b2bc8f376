// ============================================================================
// domain/error.rs - LINEUP MODEL ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::Position;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the session reports and keeps going)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Player name cannot be empty")]
    EmptyName,

    #[error("Invalid position '{0}'")]
    InvalidPosition(String),

    #[error("{field} cannot be negative (got {value})")]
    NegativeStat { field: &'static str, value: i64 },

    #[error("{field} is too large (got {value})")]
    StatTooLarge { field: &'static str, value: i64 },

    #[error("Hits ({hits}) cannot be greater than at bats ({at_bats})")]
    HitsExceedAtBats { hits: u32, at_bats: u32 },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Invalid lineup number {slot}: lineup has {len} player(s)")]
    OutOfRange { slot: usize, len: usize },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyName => vec!["Enter a player name with at least one character".into()],
            Self::InvalidPosition(_) => {
                vec![format!("Valid positions: {}", Position::codes())]
            }
            Self::NegativeStat { .. } => {
                vec!["At bats and hits must be zero or greater".into()]
            }
            Self::StatTooLarge { .. } => vec![format!("Stats are capped at {}", u32::MAX)],
            Self::HitsExceedAtBats { .. } => vec![
                "A player cannot have more hits than at bats".into(),
                "Check the numbers and try again".into(),
            ],
            Self::OutOfRange { len: 0, .. } => vec![
                "The lineup is empty".into(),
                "Add a player first: lineup add <NAME>".into(),
            ],
            Self::OutOfRange { len, .. } => vec![
                format!("Choose a lineup number between 1 and {len}"),
                "Try: lineup show".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::OutOfRange { .. } => ErrorCategory::NotFound,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
