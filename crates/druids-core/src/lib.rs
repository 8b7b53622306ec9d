//! # Druids Core
//!
//! Battle resolution and encounter scaling engine for Battle of the Druids.
//!
//! This crate creates enemies scaled to the player's progress, resolves
//! attack, special and heal actions, rolls location and enemy abilities, pays
//! out rewards and keeps a timeline of the floating numbers, particle bursts
//! and screen shake that accompany each hit. Rendering, input and persistence
//! live elsewhere.
//!
//! ## Architecture
//!
//! - **Combatants**: one type for the player and enemies, tagged by role
//! - **Encounters**: enemy generation from location pools and stat tables
//! - **Resolver**: damage and heal formulas, location effects, enemy abilities
//! - **Battle**: the turn state machine that sequences the above
//! - **Timeline**: tick-driven effects for the presentation layer
//!
//! Everything random is drawn from the seeded generator owned by
//! [`BattleContext`], so the same seed replays the same battle.
//!
//! ## Usage
//!
//! ```
//! use druids_core::{ActionKind, BattleContext, BattlePhase, CharacterClass, Combatant};
//!
//! let mut ctx = BattleContext::with_seed(7);
//! let hero = Combatant::player("Aria", CharacterClass::Rogue);
//! let mut encounter = ctx.create_encounter(hero, Some("arena"))?;
//!
//! let outcome = ctx.submit_player_action(&mut encounter, ActionKind::Special)?;
//! assert!(outcome.enemy_health < encounter.enemy().max_health);
//!
//! encounter.timeline_mut().tick(1);
//! if outcome.phase == BattlePhase::Victory {
//!     assert_eq!(encounter.player().progress.wins_at("arena"), 1);
//! }
//! # Ok::<(), druids_core::BattleError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod battle;
pub mod combatant;
pub mod config;
pub mod context;
pub mod encounter;
pub mod error;
pub mod location;
pub mod log;
pub mod resolver;
pub mod reward;
pub mod shop;
pub mod timeline;

pub use battle::{BattlePhase, Encounter, TurnOutcome};
pub use combatant::{CharacterClass, Combatant, Progress, Role, StatusFlags};
pub use config::{BattleConfig, TimelineConfig};
pub use context::BattleContext;
pub use error::{BattleError, EncounterRejected, Result};
pub use location::{Location, LocationCatalog, LocationTier, SpecialEffect};
pub use resolver::{ActionKind, ActionResult};
pub use reward::Reward;
pub use timeline::{Timeline, TimelineEntry};

#[cfg(test)]
mod tests;
