//! Error types surfaced by the battle engine.
//!
//! Out-of-range numbers are never errors: health, stats and currency are
//! clamped where they are mutated. Only caller mistakes are reported here:
//! acting out of turn, fighting while defeated, picking an unknown or locked
//! location, or buying what the player cannot afford.

use thiserror::Error;

use crate::battle::BattlePhase;
use crate::combatant::Combatant;

/// Errors returned by the engine's entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    /// An action was submitted while the sequencer was not waiting for one.
    #[error("invalid action: encounter is in phase {phase}")]
    InvalidAction {
        /// Phase the encounter was in when the action arrived.
        phase: BattlePhase,
    },

    /// Only player combatants may heal.
    #[error("{name} cannot heal")]
    HealNotPermitted {
        /// Name of the combatant that attempted to heal.
        name: String,
    },

    /// The location key is not part of the catalog.
    #[error("unknown location: {0}")]
    UnknownLocation(String),

    /// The location exists but its unlock requirements are not met.
    #[error("location is locked: {0}")]
    LocationLocked(String),

    /// The player has no health left and cannot start a battle.
    #[error("{0} has been defeated and must recover first")]
    PlayerDefeated(String),

    /// The player cannot pay for a shop item.
    #[error("not enough resources for {item}: needs {shards} shards and {gold} gold")]
    InsufficientFunds {
        /// Item name.
        item: String,
        /// Shard cost of the item.
        shards: u32,
        /// Gold cost of the item.
        gold: u32,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BattleError>;

/// A refused encounter. Hands the player back untouched.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{error}")]
pub struct EncounterRejected {
    /// Why the encounter could not start.
    pub error: BattleError,
    /// The player passed in, unchanged.
    pub player: Box<Combatant>,
}

impl EncounterRejected {
    /// Splits the rejection into the error and the returned player.
    #[must_use]
    pub fn into_parts(self) -> (BattleError, Combatant) {
        (self.error, *self.player)
    }
}

impl From<EncounterRejected> for BattleError {
    fn from(rejected: EncounterRejected) -> Self {
        rejected.error
    }
}
