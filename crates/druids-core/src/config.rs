//! Engine configuration.
//!
//! All tunables that are not part of the game rules themselves (anchors,
//! animation lifetimes, log length, seed) live here so a presentation layer
//! can load them alongside its own settings.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Lifetimes and magnitudes of the transient battle effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Ticks a damage or heal marker stays on screen.
    pub marker_lifetime: u32,
    /// Pixels a marker rises per tick.
    pub marker_float_speed: f32,
    /// Ticks a particle burst stays alive.
    pub burst_lifetime: u32,
    /// Downward acceleration added to every particle each tick.
    pub particle_gravity: f32,
    /// Shake pulse emitted when the enemy lands a hit.
    pub enemy_hit_shake: u32,
    /// Shake pulse emitted by a player attack.
    pub attack_shake: u32,
    /// Shake pulse emitted by a player special.
    pub special_shake: u32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            marker_lifetime: 60,
            marker_float_speed: 2.0,
            burst_lifetime: 30,
            particle_gravity: 0.2,
            enemy_hit_shake: 8,
            attack_shake: 10,
            special_shake: 15,
        }
    }
}

/// Configuration for a [`BattleContext`](crate::context::BattleContext).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Seed for the shared random generator.
    pub seed: u64,
    /// Number of lines kept in the battle log.
    pub log_capacity: usize,
    /// Screen position of the player during battle.
    pub player_anchor: Vec2,
    /// Screen position of the enemy during battle.
    pub enemy_anchor: Vec2,
    /// Effect timeline settings.
    pub timeline: TimelineConfig,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            log_capacity: 8,
            player_anchor: Vec2::new(200.0, 400.0),
            enemy_anchor: Vec2::new(700.0, 400.0),
            timeline: TimelineConfig::default(),
        }
    }
}

impl BattleConfig {
    /// Default configuration with the given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }
}
