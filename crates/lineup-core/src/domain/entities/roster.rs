//! The batting order.
//!
//! A `Roster` is an ordered list of [`PlayerRecord`]s where list position is
//! the batting slot. Callers address players by 1-based slot; translation to
//! 0-based storage happens in exactly one place ([`Roster::index_of`]).
//!
//! Every mutating operation validates first and mutates second, so a failed
//! call leaves the roster exactly as it was.

use crate::domain::{
    entities::player::{BattingStats, PlayerRecord},
    error::DomainError,
    value_objects::Position,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    players: Vec<PlayerRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrate from records in batting order (e.g. what a store loaded).
    pub fn from_records(players: Vec<PlayerRecord>) -> Self {
        Self { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Records in batting order.
    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    /// Player batting in `slot`, if any.
    pub fn get(&self, slot: usize) -> Option<&PlayerRecord> {
        self.index_of(slot).ok().map(|i| &self.players[i])
    }

    /// `(slot, record)` pairs, slots starting at 1.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &PlayerRecord)> {
        self.players.iter().enumerate().map(|(i, p)| (i + 1, p))
    }

    pub fn into_records(self) -> Vec<PlayerRecord> {
        self.players
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Append a record to the end of the order. Returns its slot.
    pub fn add(&mut self, record: PlayerRecord) -> usize {
        self.players.push(record);
        self.players.len()
    }

    /// Delete the record at `slot`; later players move up one slot.
    pub fn remove(&mut self, slot: usize) -> Result<PlayerRecord, DomainError> {
        let index = self.index_of(slot)?;
        Ok(self.players.remove(index))
    }

    /// Move the player at `from` so they bat in slot `to`.
    ///
    /// Both slots are checked against the size *before* the move. The record
    /// is removed first and then inserted at `to` in the shortened list, so
    /// moving slot 1 to slot 3 in `[a, b, c, d]` gives `[b, c, a, d]`.
    pub fn move_player(&mut self, from: usize, to: usize) -> Result<&PlayerRecord, DomainError> {
        let from_index = self.index_of(from)?;
        let to_index = self.index_of(to)?;

        let record = self.players.remove(from_index);
        self.players.insert(to_index, record);
        Ok(&self.players[to_index])
    }

    /// Change the fielding position at `slot`. Order and stats are untouched.
    pub fn edit_position(
        &mut self,
        slot: usize,
        position: Position,
    ) -> Result<&PlayerRecord, DomainError> {
        let index = self.index_of(slot)?;
        let record = &mut self.players[index];
        record.set_position(position);
        Ok(&*record)
    }

    /// Replace both counts at `slot`, or neither.
    ///
    /// The slot is checked before the numbers, so an out-of-range slot wins
    /// over bad stats.
    pub fn edit_stats(
        &mut self,
        slot: usize,
        at_bats: i64,
        hits: i64,
    ) -> Result<&PlayerRecord, DomainError> {
        let index = self.index_of(slot)?;
        let stats = BattingStats::new(at_bats, hits)?;
        let record = &mut self.players[index];
        record.set_stats(stats);
        Ok(&*record)
    }

    /// 1-based slot to storage index.
    fn index_of(&self, slot: usize) -> Result<usize, DomainError> {
        if slot == 0 || slot > self.players.len() {
            return Err(DomainError::OutOfRange {
                slot,
                len: self.players.len(),
            });
        }
        Ok(slot - 1)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a PlayerRecord;
    type IntoIter = std::slice::Iter<'a, PlayerRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, position: Position, at_bats: i64, hits: i64) -> PlayerRecord {
        PlayerRecord::new(name, position, at_bats, hits).unwrap()
    }

    fn names(roster: &Roster) -> Vec<&str> {
        roster.players().iter().map(PlayerRecord::name).collect()
    }

    fn abcd() -> Roster {
        Roster::from_records(vec![
            player("A", Position::Catcher, 0, 0),
            player("B", Position::FirstBase, 0, 0),
            player("C", Position::SecondBase, 0, 0),
            player("D", Position::ThirdBase, 0, 0),
        ])
    }

    fn alice_and_bob() -> Roster {
        Roster::from_records(vec![
            player("Alice", Position::Shortstop, 10, 3),
            player("Bob", Position::Pitcher, 0, 0),
        ])
    }

    // ========================================================================
    // add / remove
    // ========================================================================

    #[test]
    fn add_appends_and_returns_slot() {
        let mut roster = Roster::new();
        assert_eq!(roster.add(player("A", Position::Catcher, 1, 0)), 1);
        assert_eq!(roster.add(player("B", Position::Pitcher, 1, 1)), 2);
        assert_eq!(names(&roster), ["A", "B"]);
    }

    #[test]
    fn duplicate_names_allowed() {
        let mut roster = Roster::new();
        roster.add(player("Sam", Position::Catcher, 0, 0));
        roster.add(player("Sam", Position::Pitcher, 0, 0));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn add_then_remove_restores_roster() {
        let mut roster = abcd();
        let before = roster.clone();

        let slot = roster.add(player("E", Position::Pitcher, 3, 1));
        let removed = roster.remove(slot).unwrap();

        assert_eq!(removed.name(), "E");
        assert_eq!(roster, before);
    }

    #[test]
    fn remove_shifts_later_players_up() {
        let mut roster = abcd();
        let removed = roster.remove(2).unwrap();
        assert_eq!(removed.name(), "B");
        assert_eq!(names(&roster), ["A", "C", "D"]);
    }

    #[test]
    fn remove_from_empty_is_out_of_range() {
        let mut roster = Roster::new();
        assert_eq!(
            roster.remove(1),
            Err(DomainError::OutOfRange { slot: 1, len: 0 })
        );
    }

    // ========================================================================
    // move
    // ========================================================================

    #[test]
    fn move_to_same_slot_is_noop() {
        let mut roster = abcd();
        let before = roster.clone();
        for k in 1..=4 {
            roster.move_player(k, k).unwrap();
            assert_eq!(roster, before);
        }
    }

    #[test]
    fn move_first_to_last_shifts_others_left() {
        let mut roster = abcd();
        let moved = roster.move_player(1, 4).unwrap();
        assert_eq!(moved.name(), "A");
        assert_eq!(names(&roster), ["B", "C", "D", "A"]);
    }

    #[test]
    fn move_last_to_first() {
        let mut roster = abcd();
        roster.move_player(4, 1).unwrap();
        assert_eq!(names(&roster), ["D", "A", "B", "C"]);
    }

    // Rightward moves land on the target slot of the shortened list: the
    // player ends up batting in `to`, not in front of whoever held `to`.
    #[test]
    fn rightward_move_uses_post_removal_index() {
        let mut roster = abcd();
        roster.move_player(1, 3).unwrap();
        assert_eq!(names(&roster), ["B", "C", "A", "D"]);
        assert_eq!(roster.get(3).unwrap().name(), "A");
    }

    #[test]
    fn leftward_move_inserts_before_target() {
        let mut roster = abcd();
        roster.move_player(3, 2).unwrap();
        assert_eq!(names(&roster), ["A", "C", "B", "D"]);
    }

    #[test]
    fn move_alice_behind_bob() {
        let mut roster = alice_and_bob();
        roster.move_player(1, 2).unwrap();

        assert_eq!(names(&roster), ["Bob", "Alice"]);
        assert_eq!(roster.get(1).unwrap().batting_average(), 0.0);
        assert_eq!(roster.get(2).unwrap().batting_average(), 0.3);
        assert_eq!(roster.get(2).unwrap().position(), Position::Shortstop);
        assert_eq!(roster.get(2).unwrap().at_bats(), 10);
        assert_eq!(roster.get(2).unwrap().hits(), 3);
    }

    #[test]
    fn move_target_checked_against_pre_move_size() {
        let mut roster = abcd();
        assert!(roster.move_player(2, 4).is_ok());
        assert_eq!(
            roster.move_player(2, 5),
            Err(DomainError::OutOfRange { slot: 5, len: 4 })
        );
    }

    #[test]
    fn move_with_bad_source_leaves_roster_unchanged() {
        let mut roster = abcd();
        let before = roster.clone();
        assert!(roster.move_player(0, 2).is_err());
        assert!(roster.move_player(5, 2).is_err());
        assert_eq!(roster, before);
    }

    // ========================================================================
    // edits
    // ========================================================================

    #[test]
    fn edit_position_keeps_slot_and_stats() {
        let mut roster = alice_and_bob();
        let edited = roster.edit_position(1, Position::SecondBase).unwrap();
        assert_eq!(edited.name(), "Alice");

        let alice = roster.get(1).unwrap();
        assert_eq!(alice.position(), Position::SecondBase);
        assert_eq!(alice.at_bats(), 10);
        assert_eq!(alice.hits(), 3);
    }

    #[test]
    fn edit_stats_replaces_both_counts() {
        let mut roster = alice_and_bob();
        roster.edit_stats(2, 4, 1).unwrap();
        let bob = roster.get(2).unwrap();
        assert_eq!((bob.at_bats(), bob.hits()), (4, 1));
        assert_eq!(bob.batting_average(), 0.25);
    }

    #[test]
    fn edit_stats_hits_over_at_bats_changes_nothing() {
        let mut roster = alice_and_bob();
        let before = roster.clone();
        assert_eq!(
            roster.edit_stats(1, 5, 7),
            Err(DomainError::HitsExceedAtBats {
                hits: 7,
                at_bats: 5
            })
        );
        assert_eq!(roster, before);
    }

    #[test]
    fn edit_stats_negative_changes_nothing() {
        let mut roster = alice_and_bob();
        let before = roster.clone();
        assert!(matches!(
            roster.edit_stats(1, -1, 0),
            Err(DomainError::NegativeStat { .. })
        ));
        assert_eq!(roster, before);
    }

    #[test]
    fn edit_stats_out_of_range_reported_before_stats() {
        let mut roster = alice_and_bob();
        assert_eq!(
            roster.edit_stats(3, 5, 7),
            Err(DomainError::OutOfRange { slot: 3, len: 2 })
        );
    }

    // ========================================================================
    // slot bounds
    // ========================================================================

    #[test]
    fn slot_zero_and_past_end_rejected_everywhere() {
        let mut roster = abcd();
        let before = roster.clone();
        let n = roster.len();

        for slot in [0, n + 1] {
            let expected = DomainError::OutOfRange { slot, len: n };
            assert_eq!(roster.remove(slot), Err(expected.clone()));
            assert_eq!(roster.move_player(slot, 1).unwrap_err(), expected);
            assert_eq!(roster.move_player(1, slot).unwrap_err(), expected);
            assert_eq!(
                roster.edit_position(slot, Position::Pitcher).unwrap_err(),
                expected
            );
            assert_eq!(roster.edit_stats(slot, 1, 1).unwrap_err(), expected);
            assert!(roster.get(slot).is_none());
        }

        assert_eq!(roster, before);
    }

    #[test]
    fn iter_yields_one_based_slots() {
        let roster = alice_and_bob();
        let slots: Vec<_> = roster.iter().map(|(slot, p)| (slot, p.name())).collect();
        assert_eq!(slots, [(1, "Alice"), (2, "Bob")]);
    }
}
