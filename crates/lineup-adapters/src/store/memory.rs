//! In-memory roster store for testing.

use std::{
    path::PathBuf,
    sync::{Arc, RwLock},
};

use lineup_core::{
    application::{ApplicationError, ports::RosterStore},
    domain::PlayerRecord,
    error::LineupResult,
};

/// In-memory store. Clones share state, so a test can hand one clone to a
/// service and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<MemoryStoreInner>>,
}

#[derive(Debug, Default)]
struct MemoryStoreInner {
    players: Vec<PlayerRecord>,
    saves: usize,
    fail_saves: bool,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that loads `players`.
    pub fn with_players(players: Vec<PlayerRecord>) -> Self {
        let store = Self::new();
        if let Ok(mut inner) = store.inner.write() {
            inner.players = players;
        }
        store
    }

    /// What the last successful save wrote (or the seed data).
    pub fn players(&self) -> Vec<PlayerRecord> {
        self.inner
            .read()
            .map(|inner| inner.players.clone())
            .unwrap_or_default()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.inner.read().map(|inner| inner.saves).unwrap_or(0)
    }

    /// Make every following save fail (or succeed again).
    pub fn set_fail_saves(&self, fail: bool) {
        if let Ok(mut inner) = self.inner.write() {
            inner.fail_saves = fail;
        }
    }
}

impl RosterStore for MemoryStore {
    fn load(&self) -> LineupResult<Vec<PlayerRecord>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.players.clone())
    }

    fn save(&self, players: &[PlayerRecord]) -> LineupResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.fail_saves {
            return Err(ApplicationError::SaveFailed {
                path: PathBuf::from("<memory>"),
                reason: "saves disabled".into(),
            }
            .into());
        }

        inner.players = players.to_vec();
        inner.saves += 1;
        Ok(())
    }
}
