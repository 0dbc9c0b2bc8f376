use std::fmt;

use serde::Serialize;

use crate::domain::{error::DomainError, validation::DomainValidator, value_objects::Position};

/// Batting counts for one player.
///
/// Invariant: `hits <= at_bats`. Enforced at construction; there are no
/// setters, so a `BattingStats` value is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BattingStats {
    at_bats: u32,
    hits: u32,
}

impl BattingStats {
    /// Validate raw counts.
    ///
    /// Inputs are signed so that negative numbers typed by a user surface as
    /// [`DomainError::NegativeStat`] instead of a parse error.
    pub fn new(at_bats: i64, hits: i64) -> Result<Self, DomainError> {
        let (at_bats, hits) = DomainValidator::validate_stats(at_bats, hits)?;
        Ok(Self { at_bats, hits })
    }

    pub const fn at_bats(&self) -> u32 {
        self.at_bats
    }

    pub const fn hits(&self) -> u32 {
        self.hits
    }

    /// `hits / at_bats` rounded to three decimals; `0.0` with no at bats.
    pub fn batting_average(&self) -> f64 {
        if self.at_bats == 0 {
            return 0.0;
        }
        let raw = f64::from(self.hits) / f64::from(self.at_bats);
        (raw * 1000.0).round() / 1000.0
    }
}

/// One row of the lineup.
///
/// Only `Serialize` is derived: records are always rebuilt through
/// [`PlayerRecord::new`] so a stored record can never break its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRecord {
    name: String,
    position: Position,
    #[serde(flatten)]
    stats: BattingStats,
}

impl PlayerRecord {
    /// Build a record, validating every field before anything is stored.
    ///
    /// Check order: name, then stats.
    pub fn new(
        name: impl AsRef<str>,
        position: Position,
        at_bats: i64,
        hits: i64,
    ) -> Result<Self, DomainError> {
        let name = DomainValidator::validate_name(name.as_ref())?;
        let stats = BattingStats::new(at_bats, hits)?;
        Ok(Self {
            name,
            position,
            stats,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn position(&self) -> Position {
        self.position
    }

    pub const fn stats(&self) -> BattingStats {
        self.stats
    }

    pub const fn at_bats(&self) -> u32 {
        self.stats.at_bats
    }

    pub const fn hits(&self) -> u32 {
        self.stats.hits
    }

    pub fn batting_average(&self) -> f64 {
        self.stats.batting_average()
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub(crate) fn set_stats(&mut self, stats: BattingStats) {
        self.stats = stats;
    }
}

impl fmt::Display for PlayerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {}-for-{} {:.3}",
            self.name,
            self.position,
            self.stats.hits,
            self.stats.at_bats,
            self.batting_average()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_rounds_to_three_places() {
        assert_eq!(BattingStats::new(10, 3).unwrap().batting_average(), 0.3);
        assert_eq!(BattingStats::new(3, 1).unwrap().batting_average(), 0.333);
        assert_eq!(BattingStats::new(3, 2).unwrap().batting_average(), 0.667);
        assert_eq!(BattingStats::new(7, 7).unwrap().batting_average(), 1.0);
    }

    #[test]
    fn average_is_zero_without_at_bats() {
        assert_eq!(BattingStats::new(0, 0).unwrap().batting_average(), 0.0);
        assert_eq!(BattingStats::default().batting_average(), 0.0);
    }

    #[test]
    fn record_validates_name_before_stats() {
        assert_eq!(
            PlayerRecord::new("", Position::Pitcher, 1, 5),
            Err(DomainError::EmptyName)
        );
    }

    #[test]
    fn record_rejects_hits_over_at_bats() {
        assert_eq!(
            PlayerRecord::new("Alice", Position::Shortstop, 5, 7),
            Err(DomainError::HitsExceedAtBats {
                hits: 7,
                at_bats: 5
            })
        );
    }

    #[test]
    fn record_display_shows_average() {
        let record = PlayerRecord::new("Alice", Position::Shortstop, 10, 3).unwrap();
        assert_eq!(record.to_string(), "Alice (SS) 3-for-10 0.300");
    }
}
