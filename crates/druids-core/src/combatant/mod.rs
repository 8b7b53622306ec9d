//! Combatant model shared by the player and generated enemies.
//!
//! - [`Role`]: tags a combatant as player or enemy
//! - [`Combatant`]: stats, vitals, equipment names and progress counters
//! - [`components`]: progress, status flags and class presets
//!
//! There is a single combatant type for both sides. The role only decides
//! which actions are legal (healing is player-only) and who earns rewards.
//!
//! # Example
//!
//! ```
//! use druids_core::combatant::{CharacterClass, Combatant};
//!
//! let mut knight = Combatant::player("Aria", CharacterClass::Knight);
//! assert_eq!(knight.attack, 25);
//!
//! knight.take_damage(130);
//! assert_eq!(knight.health, 0);
//! assert!(knight.is_defeated());
//! ```

pub mod components;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use components::{CharacterClass, ClassPreset, Progress, StatusFlags};

/// Starting and base maximum health of every new combatant.
pub const BASE_HEALTH: u32 = 100;

/// Which side of the battle a combatant fights on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// The human-controlled character.
    Player,
    /// A generated opponent.
    Enemy,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "Player"),
            Self::Enemy => write!(f, "Enemy"),
        }
    }
}

/// A player or enemy unit.
///
/// Every mutation goes through saturating arithmetic so health, stats and
/// currency never underflow. `health` is kept within `[0, max_health]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    /// Display name, including any title prefix for enemies.
    pub name: String,
    /// Player or enemy.
    pub role: Role,
    /// Attack stat.
    pub attack: u32,
    /// Defense stat, subtracted from incoming hits.
    pub defense: u32,
    /// Speed stat.
    pub speed: u32,
    /// Current health.
    pub health: u32,
    /// Maximum health. Only ever raised.
    pub max_health: u32,
    /// Weapon name; also picks the particle variant of attacks.
    pub weapon: String,
    /// Name of the special move, used in log lines.
    pub special: String,
    /// Currency and victory counters. All zero for enemies.
    pub progress: Progress,
    /// Persistent modifiers picked up in the current battle.
    pub status: StatusFlags,
}

impl Combatant {
    /// Creates a player of the given class with the starting purse.
    #[must_use]
    pub fn player(name: impl Into<String>, class: CharacterClass) -> Self {
        let preset = class.preset();
        Self {
            name: name.into(),
            role: Role::Player,
            attack: preset.attack,
            defense: preset.defense,
            speed: preset.speed,
            health: BASE_HEALTH,
            max_health: BASE_HEALTH,
            weapon: preset.weapon.to_string(),
            special: preset.special.to_string(),
            progress: Progress::starting(),
            status: StatusFlags::empty(),
        }
    }

    /// Creates an unscaled enemy. The encounter generator overwrites the
    /// vitals and combat stats.
    #[must_use]
    pub fn enemy(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: Role::Enemy,
            attack: 15,
            defense: 8,
            speed: 10,
            health: BASE_HEALTH,
            max_health: BASE_HEALTH,
            weapon: "Crude Weapon".to_string(),
            special: "Basic Attack".to_string(),
            progress: Progress::default(),
            status: StatusFlags::empty(),
        }
    }

    /// Returns true for the player side.
    #[must_use]
    pub fn is_player(&self) -> bool {
        self.role == Role::Player
    }

    /// Returns true once health has reached zero.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Removes up to `amount` health and returns how much was removed.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.health);
        self.health -= dealt;
        if self.health == 0 {
            self.status.insert(StatusFlags::DEFEATED);
        }
        dealt
    }

    /// Restores up to `amount` health, capped at max, and returns the delta.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_add(amount).min(self.max_health);
        self.revive_if_alive();
        self.health - before
    }

    /// Refills health to max. Used by the "try again" menu after a defeat.
    pub fn restore_health(&mut self) {
        self.health = self.max_health;
        self.status.remove(StatusFlags::DEFEATED);
    }

    /// Raises max health and current health by the same amount.
    pub fn raise_max_health(&mut self, amount: u32) {
        self.max_health = self.max_health.saturating_add(amount);
        self.health = self.health.saturating_add(amount).min(self.max_health);
        self.revive_if_alive();
    }

    fn revive_if_alive(&mut self) {
        if self.health > 0 {
            self.status.remove(StatusFlags::DEFEATED);
        }
    }

    /// Clears battle-scoped status flags, keeping the defeat marker.
    pub fn clear_battle_status(&mut self) {
        self.status &= StatusFlags::DEFEATED;
    }
}
