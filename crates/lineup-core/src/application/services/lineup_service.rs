//! Lineup Service - main application orchestrator.
//!
//! Each use case runs the same three steps:
//! 1. Parse raw input into domain values
//! 2. Apply one `Roster` operation (validate, then mutate)
//! 3. Save the whole roster through the `RosterStore` port
//!
//! Nothing is saved when step 1 or 2 fails. When step 3 fails the mutation
//! stays in memory and the save error is returned; the next successful save
//! writes it out.

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::RosterStore,
    domain::{DomainValidator, PlayerRecord, Position, Roster},
    error::LineupResult,
};

/// What a successful mutation did, for reporting back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Player the operation touched.
    pub name: String,
    /// Slot the player occupies afterwards (or occupied, for a removal).
    pub slot: usize,
}

/// Owns the lineup for one session and keeps the store in step with it.
pub struct LineupService {
    store: Box<dyn RosterStore>,
    roster: Roster,
}

impl LineupService {
    /// Load the lineup through `store` and wrap it in a service.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use lineup_core::application::{LineupService, ports::RosterStore};
    ///
    /// # fn demo(store: Box<dyn RosterStore>) -> lineup_core::error::LineupResult<()> {
    /// let mut service = LineupService::open(store)?;
    /// service.add_player("Alice", "SS", 10, 3)?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip_all)]
    pub fn open(store: Box<dyn RosterStore>) -> LineupResult<Self> {
        let players = store.load()?;
        debug!(players = players.len(), "Lineup loaded");
        Ok(Self {
            store,
            roster: Roster::from_records(players),
        })
    }

    /// Read-only view of the current lineup.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Append a new player to the end of the batting order.
    #[instrument(skip(self))]
    pub fn add_player(
        &mut self,
        name: &str,
        position: &str,
        at_bats: i64,
        hits: i64,
    ) -> LineupResult<Outcome> {
        // Name, then position, then stats.
        DomainValidator::validate_name(name)?;
        let position: Position = position.parse()?;
        let record = PlayerRecord::new(name, position, at_bats, hits)?;

        let outcome = Outcome {
            name: record.name().to_string(),
            slot: self.roster.add(record),
        };
        info!(slot = outcome.slot, player = %outcome.name, "Player added");

        self.persist()?;
        Ok(outcome)
    }

    /// Remove the player in `slot`.
    #[instrument(skip(self))]
    pub fn remove_player(&mut self, slot: usize) -> LineupResult<Outcome> {
        let removed = self.roster.remove(slot)?;
        info!(slot, player = %removed.name(), "Player removed");

        self.persist()?;
        Ok(Outcome {
            name: removed.name().to_string(),
            slot,
        })
    }

    /// Move the player in `from` so they bat in `to`.
    #[instrument(skip(self))]
    pub fn move_player(&mut self, from: usize, to: usize) -> LineupResult<Outcome> {
        let name = self.roster.move_player(from, to)?.name().to_string();
        info!(from, to, player = %name, "Player moved");

        self.persist()?;
        Ok(Outcome { name, slot: to })
    }

    /// Change the position of the player in `slot`.
    #[instrument(skip(self))]
    pub fn edit_position(&mut self, slot: usize, position: &str) -> LineupResult<Outcome> {
        let position: Position = position.parse()?;
        let name = self
            .roster
            .edit_position(slot, position)?
            .name()
            .to_string();
        info!(slot, player = %name, %position, "Position updated");

        self.persist()?;
        Ok(Outcome { name, slot })
    }

    /// Replace the at-bats and hits of the player in `slot`.
    #[instrument(skip(self))]
    pub fn edit_stats(&mut self, slot: usize, at_bats: i64, hits: i64) -> LineupResult<Outcome> {
        let name = self
            .roster
            .edit_stats(slot, at_bats, hits)?
            .name()
            .to_string();
        info!(slot, player = %name, at_bats, hits, "Stats updated");

        self.persist()?;
        Ok(Outcome { name, slot })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn persist(&self) -> LineupResult<()> {
        self.store.save(self.roster.players()).inspect_err(|e| {
            warn!(error = %e, "Save failed; lineup kept in memory");
        })
    }
}
