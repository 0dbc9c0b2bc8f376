//! Lineup Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the lineup
//! manager, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           lineup-cli (CLI)              │
//! │   (menu session, one-shot commands)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (LineupService)              │
//! │   parse -> mutate roster -> save        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │            (RosterStore)                │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    lineup-adapters (Infrastructure)     │
//! │       (CsvFileStore, MemoryStore)       │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Roster, PlayerRecord, Position)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use lineup_core::domain::{PlayerRecord, Position, Roster};
//!
//! let mut roster = Roster::new();
//! roster.add(PlayerRecord::new("Alice", Position::Shortstop, 10, 3).unwrap());
//! roster.add(PlayerRecord::new("Bob", Position::Pitcher, 0, 0).unwrap());
//!
//! roster.move_player(1, 2).unwrap();
//! assert_eq!(roster.get(1).unwrap().name(), "Bob");
//! assert_eq!(roster.get(2).unwrap().batting_average(), 0.3);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{LineupService, Outcome, ports::RosterStore};
    pub use crate::domain::{BattingStats, PlayerRecord, Position, Roster};
    pub use crate::error::{LineupError, LineupResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
