//! Enemy special abilities, rolled once after each enemy attack.
//!
//! Abilities are keyed by the enemy's base name, so titled enemies
//! ("Elite Vampire") keep the ability of their archetype.

use rand::Rng;

use crate::combatant::{Combatant, StatusFlags};
use crate::encounter::base_name;

/// Extra damage of a burn.
pub const BURN_DAMAGE: u32 = 5;
/// Player defense removed by a phase.
pub const PHASE_DEFENSE_LOSS: u32 = 2;
/// Attack gained by rage.
pub const RAGE_ATTACK_GAIN: u32 = 3;
/// Defense gained by stoneskin.
pub const STONESKIN_DEFENSE_GAIN: u32 = 5;

/// Archetype abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyAbility {
    /// Heals for half the damage just dealt.
    LifeSteal,
    /// Strips player defense for the rest of the battle.
    Phase,
    /// Deals extra direct damage.
    Burn,
    /// Raises own attack for the rest of the battle.
    Rage,
    /// Raises own defense for the rest of the battle.
    Stoneskin,
}

impl EnemyAbility {
    /// Ability of the enemy called `name` (title prefixes are ignored).
    #[must_use]
    pub fn for_enemy(name: &str) -> Option<Self> {
        match base_name(name) {
            "Vampire" => Some(Self::LifeSteal),
            "Ghost" => Some(Self::Phase),
            "Fire Elemental" => Some(Self::Burn),
            "Minotaur" => Some(Self::Rage),
            "Golem" => Some(Self::Stoneskin),
            _ => None,
        }
    }

    /// One-in-`n` trigger chance.
    #[must_use]
    pub const fn odds(self) -> u32 {
        match self {
            Self::LifeSteal => 6,
            Self::Phase => 8,
            Self::Burn => 5,
            Self::Rage => 7,
            Self::Stoneskin => 10,
        }
    }
}

/// An ability that fired, with the amount it moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbilityOutcome {
    /// Enemy healed itself.
    LifeSteal {
        /// Health actually restored.
        healed: u32,
    },
    /// Player lost defense.
    Phase {
        /// Defense actually removed.
        defense_lost: u32,
    },
    /// Player took burn damage.
    Burn {
        /// Burn damage dealt.
        damage: u32,
    },
    /// Enemy gained attack.
    Rage {
        /// Attack gained.
        gain: u32,
    },
    /// Enemy gained defense.
    Stoneskin {
        /// Defense gained.
        gain: u32,
    },
}

impl AbilityOutcome {
    /// Battle log line for this outcome.
    #[must_use]
    pub fn describe(&self, enemy: &str) -> String {
        match self {
            Self::LifeSteal { healed } => format!("{enemy} steals {healed} life!"),
            Self::Phase { .. } => format!("{enemy} phases through armor! Defense reduced!"),
            Self::Burn { damage } => format!("{enemy} burns you for {damage} damage!"),
            Self::Rage { .. } => format!("{enemy} enters a rage! Attack increased!"),
            Self::Stoneskin { .. } => format!("{enemy} hardens! Defense increased!"),
        }
    }
}

/// Rolls the enemy's ability after it dealt `damage_dealt` to the player.
pub fn apply<R: Rng + ?Sized>(
    enemy: &mut Combatant,
    player: &mut Combatant,
    damage_dealt: u32,
    rng: &mut R,
) -> Option<AbilityOutcome> {
    let ability = EnemyAbility::for_enemy(&enemy.name)?;
    if rng.gen_range(1..=ability.odds()) != 1 {
        return None;
    }

    let outcome = match ability {
        EnemyAbility::LifeSteal => AbilityOutcome::LifeSteal {
            healed: enemy.heal(damage_dealt / 2),
        },
        EnemyAbility::Phase => {
            let defense_lost = PHASE_DEFENSE_LOSS.min(player.defense);
            player.defense -= defense_lost;
            player.status.insert(StatusFlags::PHASED);
            AbilityOutcome::Phase { defense_lost }
        }
        EnemyAbility::Burn => AbilityOutcome::Burn {
            damage: player.take_damage(BURN_DAMAGE),
        },
        EnemyAbility::Rage => {
            enemy.attack = enemy.attack.saturating_add(RAGE_ATTACK_GAIN);
            enemy.status.insert(StatusFlags::ENRAGED);
            AbilityOutcome::Rage {
                gain: RAGE_ATTACK_GAIN,
            }
        }
        EnemyAbility::Stoneskin => {
            enemy.defense = enemy.defense.saturating_add(STONESKIN_DEFENSE_GAIN);
            enemy.status.insert(StatusFlags::STONESKIN);
            AbilityOutcome::Stoneskin {
                gain: STONESKIN_DEFENSE_GAIN,
            }
        }
    };
    Some(outcome)
}
