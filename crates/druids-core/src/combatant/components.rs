//! Component structs attached to a [`Combatant`](super::Combatant).
//!
//! Progress counters only ever change on the player; status flags record the
//! persistent in-battle modifiers so the presentation layer can label them.

use std::collections::BTreeMap;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Persistent modifiers picked up during a battle.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct StatusFlags: u8 {
        /// Attack lowered by a haunted location.
        const WEAKENED = 1 << 0;
        /// Defense lowered by a phasing enemy.
        const PHASED = 1 << 1;
        /// Attack raised by rage.
        const ENRAGED = 1 << 2;
        /// Defense raised by stoneskin.
        const STONESKIN = 1 << 3;
        /// Health reached zero.
        const DEFEATED = 1 << 4;
    }
}

/// Currency and victory counters for a player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Primary shop currency.
    pub dragon_shards: u32,
    /// Secondary shop currency.
    pub gold: u32,
    /// Total battles won. Only ever increases.
    pub victories: u32,
    /// Wins per location key. Keys appear on the first win there.
    pub location_victories: BTreeMap<String, u32>,
}

impl Progress {
    /// Starting purse of a freshly created player.
    #[must_use]
    pub fn starting() -> Self {
        Self {
            dragon_shards: 200,
            gold: 150,
            ..Default::default()
        }
    }

    /// Wins recorded at `key`, zero if none.
    #[must_use]
    pub fn wins_at(&self, key: &str) -> u32 {
        self.location_victories.get(key).copied().unwrap_or(0)
    }

    /// Records a victory, optionally at a location.
    pub fn record_victory(&mut self, location_key: Option<&str>) {
        self.victories = self.victories.saturating_add(1);
        if let Some(key) = location_key {
            let wins = self.location_victories.entry(key.to_string()).or_insert(0);
            *wins = wins.saturating_add(1);
        }
    }
}

/// Playable character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    /// Balanced melee fighter.
    Knight,
    /// Highest attack, lowest defense.
    Wizard,
    /// Fastest class.
    Rogue,
    /// Highest defense.
    Soldier,
}

/// Base stats and equipment for a character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassPreset {
    /// Attack stat.
    pub attack: u32,
    /// Defense stat.
    pub defense: u32,
    /// Speed stat.
    pub speed: u32,
    /// Starting weapon.
    pub weapon: &'static str,
    /// Starting special move.
    pub special: &'static str,
}

impl CharacterClass {
    /// All classes in selection-screen order.
    pub const ALL: [Self; 4] = [Self::Knight, Self::Wizard, Self::Rogue, Self::Soldier];

    /// Returns the preset for this class.
    #[must_use]
    pub const fn preset(self) -> ClassPreset {
        match self {
            Self::Knight => ClassPreset {
                attack: 25,
                defense: 15,
                speed: 20,
                weapon: "Strong Sword",
                special: "Swift Strike",
            },
            Self::Wizard => ClassPreset {
                attack: 30,
                defense: 10,
                speed: 15,
                weapon: "Lightning Wand",
                special: "Lightning Bolt",
            },
            Self::Rogue => ClassPreset {
                attack: 20,
                defense: 12,
                speed: 25,
                weapon: "Twin Daggers",
                special: "Quick Strike",
            },
            Self::Soldier => ClassPreset {
                attack: 22,
                defense: 20,
                speed: 10,
                weapon: "Basic Spear",
                special: "Shield Bash",
            },
        }
    }
}
