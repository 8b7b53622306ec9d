//! Damage and heal formulas for the three player actions.
//!
//! Percentages are applied in integer arithmetic, so `floor(0.8 * attack)` is
//! `attack * 8 / 10` and never suffers float rounding.

use rand::Rng;

use crate::combatant::Combatant;

use super::ActionKind;

/// Inclusive range of the heal roll.
pub const HEAL_ROLL: (u32, u32) = (15, 25);

fn percent_of(value: u32, tenths: u64) -> u32 {
    u32::try_from(u64::from(value) * tenths / 10).unwrap_or(u32::MAX)
}

/// Inclusive raw-damage range for an attack or special from `attack`.
///
/// Heal has no damage range and returns `(0, 0)`.
#[must_use]
pub fn damage_range(kind: ActionKind, attack: u32) -> (u32, u32) {
    match kind {
        ActionKind::Attack => (percent_of(attack, 8), percent_of(attack, 12)),
        ActionKind::Special => (percent_of(attack, 12), percent_of(attack, 15)),
        ActionKind::Heal => (0, 0),
    }
}

/// Damage after defense. Every hit lands for at least 1.
#[must_use]
pub fn mitigate(raw: u32, defense: u32) -> u32 {
    raw.saturating_sub(defense).max(1)
}

/// Rolls and applies a hit from `actor` on `target`. Returns the final damage.
pub fn strike<R: Rng + ?Sized>(
    actor: &Combatant,
    target: &mut Combatant,
    kind: ActionKind,
    rng: &mut R,
) -> u32 {
    let (low, high) = damage_range(kind, actor.attack);
    let raw = rng.gen_range(low..=high);
    let damage = mitigate(raw, target.defense);
    target.take_damage(damage);
    damage
}

/// Rolls a heal for `actor`. Returns the health actually restored.
pub fn heal<R: Rng + ?Sized>(actor: &mut Combatant, rng: &mut R) -> u32 {
    let roll = rng.gen_range(HEAL_ROLL.0..=HEAL_ROLL.1);
    actor.heal(roll)
}
