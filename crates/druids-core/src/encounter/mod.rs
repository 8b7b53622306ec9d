//! Encounter generator.
//!
//! Builds an enemy scaled to the player's progress and to the location the
//! battle takes place in.
//!
//! # Scaling
//!
//! ```text
//! level_multiplier = 1 + victories * 0.05     (x1.5 at capstones)
//! victory_bonus    = victories * 1.5          (+20 at capstones)
//!
//! health  = floor(base_health  * level_multiplier) + floor(victory_bonus)
//! attack  = floor(base_attack  * level_multiplier) + floor(victory_bonus / 2)
//! defense = floor(base_defense * level_multiplier) + floor(victory_bonus / 3)
//! ```
//!
//! Base rolls are drawn in a fixed order (health, attack, defense) after the
//! enemy name, so a seeded generator always yields the same enemy.

pub mod tables;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::combatant::Combatant;
use crate::location::Location;

pub use tables::{base_name, StatDelta};

/// Inclusive range of the base health roll.
pub const BASE_HEALTH_ROLL: (i64, i64) = (60, 80);
/// Inclusive range of the base attack roll.
pub const BASE_ATTACK_ROLL: (i64, i64) = (15, 25);
/// Inclusive range of the base defense roll.
pub const BASE_DEFENSE_ROLL: (i64, i64) = (8, 15);

/// Progress-derived scaling inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaling {
    /// Multiplier applied to every base roll.
    pub level_multiplier: f64,
    /// Flat bonus split across health, attack and defense.
    pub victory_bonus: f64,
}

impl Scaling {
    /// Scaling for a player with `victories` wins.
    #[must_use]
    pub fn new(victories: u32, capstone: bool) -> Self {
        let victories = f64::from(victories);
        let mut scaling = Self {
            level_multiplier: 1.0 + victories * 0.05,
            victory_bonus: victories * 1.5,
        };
        if capstone {
            scaling.level_multiplier *= 1.5;
            scaling.victory_bonus += 20.0;
        }
        scaling
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn scale(self, base: i64, bonus_divisor: f64) -> u32 {
        let scaled = (base.max(0) as f64 * self.level_multiplier).floor();
        let bonus = (self.victory_bonus / bonus_divisor).floor();
        (scaled + bonus).clamp(0.0, f64::from(u32::MAX)) as u32
    }
}

/// Picks the enemy name for a battle.
fn pick_enemy_name<R: Rng + ?Sized>(location: Option<&Location>, rng: &mut R) -> String {
    if let Some(name) = location.and_then(|location| location.enemy_pool.choose(rng)) {
        return name.clone();
    }
    tables::DEFAULT_ENEMY_POOL
        .choose(rng)
        .copied()
        .unwrap_or(tables::DEFAULT_ENEMY_POOL[0])
        .to_string()
}

/// Generates an enemy for `player`, optionally at `location`.
///
/// Unknown enemy names are never an error: they keep the unmodified base
/// rolls and carry the default weapon.
pub fn generate<R: Rng + ?Sized>(
    player: &Combatant,
    location: Option<&Location>,
    rng: &mut R,
) -> Combatant {
    let name = pick_enemy_name(location, rng);
    let victories = player.progress.victories;
    let scaling = Scaling::new(victories, location.is_some_and(Location::is_capstone));

    let mut base_health = rng.gen_range(BASE_HEALTH_ROLL.0..=BASE_HEALTH_ROLL.1);
    let mut base_attack = rng.gen_range(BASE_ATTACK_ROLL.0..=BASE_ATTACK_ROLL.1);
    let mut base_defense = rng.gen_range(BASE_DEFENSE_ROLL.0..=BASE_DEFENSE_ROLL.1);

    if let Some(delta) = tables::stat_delta(&name) {
        base_health += i64::from(delta.health);
        base_attack += i64::from(delta.attack);
        base_defense += i64::from(delta.defense);
    }

    let display_name = match tables::title_for(victories) {
        Some(title) => format!("{title}{name}"),
        None => name.clone(),
    };

    let mut enemy = Combatant::enemy(display_name);
    enemy.max_health = scaling.scale(base_health, 1.0);
    enemy.health = enemy.max_health;
    enemy.attack = scaling.scale(base_attack, 2.0);
    enemy.defense = scaling.scale(base_defense, 3.0);
    enemy.weapon = tables::weapon_for(&name).to_string();

    debug!(
        enemy = %enemy.name,
        health = enemy.health,
        attack = enemy.attack,
        defense = enemy.defense,
        level_multiplier = scaling.level_multiplier,
        "generated enemy"
    );
    enemy
}
