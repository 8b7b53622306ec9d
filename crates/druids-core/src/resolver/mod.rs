//! Action resolver.
//!
//! Turns a chosen action into state changes on the two combatants. The
//! resolver only mutates the combatants it is handed; sequencing, rewards
//! and animations are the battle's job.
//!
//! # Formulas
//!
//! | action  | raw roll                               | applied                      |
//! |---------|----------------------------------------|------------------------------|
//! | Attack  | `[floor(0.8 atk), floor(1.2 atk)]`     | `max(1, raw - defense)`      |
//! | Special | `[floor(1.2 atk), floor(1.5 atk)]`     | `max(1, raw - defense)`      |
//! | Heal    | `[15, 25]`                             | capped at max health         |
//!
//! # Submodules
//!
//! - [`action`]: the formulas above
//! - [`location_effect`]: random effects of the battle location
//! - [`ability`]: enemy archetype abilities
//!
//! # Example
//!
//! ```
//! use druids_core::combatant::{CharacterClass, Combatant};
//! use druids_core::resolver::{resolve_action, ActionKind};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let mut knight = Combatant::player("Aria", CharacterClass::Knight);
//! let mut goblin = Combatant::enemy("Goblin");
//!
//! let result = resolve_action(&mut knight, &mut goblin, ActionKind::Attack, &mut rng).unwrap();
//! assert!((12..=22).contains(&result.amount));
//! assert_eq!(goblin.health, 100 - result.amount);
//! ```

pub mod ability;
pub mod action;
pub mod location_effect;

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::combatant::Combatant;
use crate::error::{BattleError, Result};

pub use ability::{AbilityOutcome, EnemyAbility};
pub use location_effect::LocationEffectOutcome;

/// Actions a player can submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Basic weapon hit.
    Attack,
    /// Stronger named special move.
    Special,
    /// Restore some health. Player only.
    Heal,
}

impl ActionKind {
    /// Every action, in button order.
    pub const ALL: [Self; 3] = [Self::Attack, Self::Special, Self::Heal];

    /// Returns true for actions that hit the target.
    #[must_use]
    pub const fn is_damaging(self) -> bool {
        matches!(self, Self::Attack | Self::Special)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attack => write!(f, "Attack"),
            Self::Special => write!(f, "Special"),
            Self::Heal => write!(f, "Heal"),
        }
    }
}

/// Result of one resolved action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    /// Action that was resolved.
    pub kind: ActionKind,
    /// Final damage dealt, or health actually restored for heals.
    pub amount: u32,
    /// Log lines describing the action.
    pub log: Vec<String>,
}

impl ActionResult {
    /// Returns true if this was a special attack.
    #[must_use]
    pub fn is_special(&self) -> bool {
        self.kind == ActionKind::Special
    }
}

/// Resolves `kind` performed by `actor` against `target`.
///
/// # Errors
///
/// Returns [`BattleError::HealNotPermitted`] when a non-player tries to heal.
pub fn resolve_action<R: Rng + ?Sized>(
    actor: &mut Combatant,
    target: &mut Combatant,
    kind: ActionKind,
    rng: &mut R,
) -> Result<ActionResult> {
    let (amount, line) = match kind {
        ActionKind::Attack => {
            let damage = action::strike(actor, target, kind, rng);
            (damage, format!("{} attacks for {damage} damage!", actor.name))
        }
        ActionKind::Special => {
            let damage = action::strike(actor, target, kind, rng);
            (
                damage,
                format!("{} uses {} for {damage} damage!", actor.name, actor.special),
            )
        }
        ActionKind::Heal => {
            if !actor.is_player() {
                return Err(BattleError::HealNotPermitted {
                    name: actor.name.clone(),
                });
            }
            let healed = action::heal(actor, rng);
            (healed, format!("{} heals for {healed} HP!", actor.name))
        }
    };

    debug!(actor = %actor.name, action = %kind, amount, "resolved action");
    Ok(ActionResult {
        kind,
        amount,
        log: vec![line],
    })
}
