//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "add a player and save the lineup".

pub mod lineup_service;

pub use lineup_service::{LineupService, Outcome};
