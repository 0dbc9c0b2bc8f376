//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `lineup-adapters` crate provides implementations.

use crate::domain::PlayerRecord;
use crate::error::LineupResult;

/// Port for lineup persistence.
///
/// Implemented by:
/// - `lineup_adapters::store::CsvFileStore` (production)
/// - `lineup_adapters::store::MemoryStore` (testing)
///
/// ## Contract
///
/// - `load` returns an empty list when nothing has been saved yet; a missing
///   backing store is not an error
/// - `save` replaces everything previously stored (no append, no merge)
#[cfg_attr(test, mockall::automock)]
pub trait RosterStore: Send + Sync {
    /// Load every record, in batting order.
    fn load(&self) -> LineupResult<Vec<PlayerRecord>>;

    /// Overwrite the store with `players`, in batting order.
    fn save(&self, players: &[PlayerRecord]) -> LineupResult<()>;
}
