//! Factories and drivers shared by the crate-level tests.

use crate::battle::{Encounter, TurnOutcome};
use crate::combatant::{CharacterClass, Combatant};
use crate::context::BattleContext;
use crate::resolver::ActionKind;

/// Upper bound on turns before a test battle is considered stuck.
pub const MAX_TURNS: usize = 500;

/// Keys of the six locations that gate the capstones.
pub const PREREQUISITES: [&str; 6] = ["arena", "docks", "city", "shrine", "mansion", "maze"];

/// A fresh knight.
pub fn knight() -> Combatant {
    Combatant::player("Hero", CharacterClass::Knight)
}

/// A knight strong enough to one-shot anything the generator can produce.
pub fn champion() -> Combatant {
    let mut hero = knight();
    hero.attack = 10_000;
    hero
}

/// A knight that cannot survive a single enemy attack or hurt the enemy much.
pub fn glass_knight() -> Combatant {
    let mut hero = knight();
    hero.attack = 0;
    hero.defense = 0;
    hero.health = 1;
    hero
}

/// A knight with one win at each location in `keys`, plus `extra` unplaced wins.
pub fn veteran_of(keys: &[&str], extra: u32) -> Combatant {
    let mut hero = knight();
    for key in keys {
        hero.progress.record_victory(Some(*key));
    }
    for _ in 0..extra {
        hero.progress.record_victory(None);
    }
    hero
}

/// Routes engine events to the test harness output. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Submits `action` until the encounter ends, returning every outcome.
///
/// # Panics
///
/// Panics if the battle is still running after [`MAX_TURNS`] turns.
pub fn fight(
    ctx: &mut BattleContext,
    encounter: &mut Encounter,
    action: ActionKind,
) -> Vec<TurnOutcome> {
    init_tracing();
    let mut outcomes = Vec::new();
    while !encounter.is_finished() {
        assert!(outcomes.len() < MAX_TURNS, "battle did not finish");
        outcomes.push(
            ctx.submit_player_action(encounter, action)
                .expect("action accepted while battle is running"),
        );
    }
    outcomes
}

/// Plays a full battle for `player` at `location` with a rotating script of
/// actions and returns the finished encounter plus every outcome.
pub fn scripted_battle(
    seed: u64,
    player: Combatant,
    location: Option<&str>,
) -> (Encounter, Vec<TurnOutcome>) {
    init_tracing();
    let script = [ActionKind::Attack, ActionKind::Special, ActionKind::Attack, ActionKind::Heal];
    let mut ctx = BattleContext::with_seed(seed);
    let mut encounter = ctx.create_encounter(player, location).expect("location is open");
    let mut outcomes = Vec::new();
    for action in script.iter().cycle() {
        if encounter.is_finished() {
            break;
        }
        assert!(outcomes.len() < MAX_TURNS, "battle did not finish");
        outcomes.push(ctx.submit_player_action(&mut encounter, *action).expect("action accepted"));
    }
    (encounter, outcomes)
}
