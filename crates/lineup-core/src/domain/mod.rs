//! Core domain layer for the lineup manager.
//!
//! This module contains pure business logic with no I/O. Loading and saving
//! are handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem or console access
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Validate then mutate**: A failed operation leaves state untouched
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{BattingStats, PlayerRecord, Roster};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::Position;

pub use validation::DomainValidator;
