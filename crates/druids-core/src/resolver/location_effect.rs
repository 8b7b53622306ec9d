//! Location effects rolled after every player action.
//!
//! Only the effect matching the location's kind is rolled. Water and ruins
//! add damage to the action being resolved, so they are only rolled for
//! attacks and specials; the bonus is subtracted from the enemy's health.

use rand::Rng;

use crate::combatant::{Combatant, StatusFlags};
use crate::location::SpecialEffect;

use super::ActionKind;

/// Enemy attack lost to a haunting.
pub const HAUNT_ATTACK_LOSS: u32 = 5;
/// Direct damage of a lava burst.
pub const LAVA_DAMAGE: u32 = 10;
/// Health restored by a divine blessing.
pub const BLESSING_HEAL: u32 = 15;
/// Bonus damage of a tidal wave.
pub const TIDAL_BONUS: u32 = 10;
/// Bonus damage of ancient ruins.
pub const RUINS_BONUS: u32 = 8;

/// One-in-`n` trigger chance for an effect, `None` for inert kinds.
#[must_use]
pub const fn trigger_odds(effect: SpecialEffect) -> Option<u32> {
    match effect {
        SpecialEffect::Haunted | SpecialEffect::Ruins => Some(10),
        SpecialEffect::Fire => Some(8),
        SpecialEffect::Divine => Some(12),
        SpecialEffect::Water => Some(6),
        SpecialEffect::None => None,
    }
}

/// An effect that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationEffectOutcome {
    /// Enemy attack lowered by `amount` (after the floor at zero).
    Weakened {
        /// Attack actually removed.
        amount: u32,
    },
    /// Enemy burned for `damage`.
    LavaBurst {
        /// Direct damage dealt.
        damage: u32,
    },
    /// Player healed by `healed`.
    Blessing {
        /// Health actually restored.
        healed: u32,
    },
    /// The current hit gained `bonus` damage.
    BonusDamage {
        /// Which effect produced the bonus.
        effect: SpecialEffect,
        /// Extra damage dealt to the enemy.
        bonus: u32,
    },
}

impl LocationEffectOutcome {
    /// Battle log line for this outcome.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::Weakened { .. } => "Spooky presence weakens the enemy!",
            Self::LavaBurst { .. } => "Lava burst damages enemy!",
            Self::Blessing { .. } => "Divine blessing heals you!",
            Self::BonusDamage {
                effect: SpecialEffect::Water,
                ..
            } => "Tidal wave boosts your attack!",
            Self::BonusDamage { .. } => "Ancient magic amplifies your power!",
        }
    }
}

/// Rolls the location effect for one player action.
pub fn apply<R: Rng + ?Sized>(
    effect: SpecialEffect,
    action: ActionKind,
    player: &mut Combatant,
    enemy: &mut Combatant,
    rng: &mut R,
) -> Option<LocationEffectOutcome> {
    if matches!(effect, SpecialEffect::Water | SpecialEffect::Ruins) && !action.is_damaging() {
        return None;
    }
    let odds = trigger_odds(effect)?;
    if rng.gen_range(1..=odds) != 1 {
        return None;
    }

    let outcome = match effect {
        SpecialEffect::Haunted => {
            let amount = HAUNT_ATTACK_LOSS.min(enemy.attack);
            enemy.attack -= amount;
            enemy.status.insert(StatusFlags::WEAKENED);
            LocationEffectOutcome::Weakened { amount }
        }
        SpecialEffect::Fire => {
            enemy.take_damage(LAVA_DAMAGE);
            LocationEffectOutcome::LavaBurst { damage: LAVA_DAMAGE }
        }
        SpecialEffect::Divine => LocationEffectOutcome::Blessing {
            healed: player.heal(BLESSING_HEAL),
        },
        SpecialEffect::Water | SpecialEffect::Ruins => {
            let bonus = if effect == SpecialEffect::Water {
                TIDAL_BONUS
            } else {
                RUINS_BONUS
            };
            enemy.take_damage(bonus);
            LocationEffectOutcome::BonusDamage { effect, bonus }
        }
        SpecialEffect::None => return None,
    };
    Some(outcome)
}
