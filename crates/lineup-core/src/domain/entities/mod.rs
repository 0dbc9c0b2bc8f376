pub mod player;
pub mod roster;

pub use crate::domain::DomainError;
pub use player::{BattingStats, PlayerRecord};
pub use roster::Roster;
