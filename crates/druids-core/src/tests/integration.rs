//! Integration tests for full battles.
//!
//! These drive a [`BattleContext`] end to end:
//! - Victory and defeat paths and what they do to the player
//! - Location unlocks and capstone scaling
//! - Rewards and progress carried between battles
//! - Timeline entries emitted by turns and their expiry

use crate::battle::BattlePhase;
use crate::context::BattleContext;
use crate::error::BattleError;
use crate::resolver::ActionKind;
use crate::timeline::TimelineEntry;

use super::helpers::{champion, fight, glass_knight, knight, veteran_of, PREREQUISITES};

// =============================================================================
// Victory and Defeat
// =============================================================================

#[test]
fn victory_records_location_win() {
    let mut ctx = BattleContext::with_seed(10);
    let mut encounter = ctx.create_encounter(champion(), Some("arena")).unwrap();

    let outcomes = fight(&mut ctx, &mut encounter, ActionKind::Attack);
    assert_eq!(outcomes.len(), 1);
    let outcome = &outcomes[0];
    assert_eq!(outcome.phase, BattlePhase::Victory);

    let reward = outcome.reward.expect("victory pays out");
    assert!((22..=37).contains(&reward.shards));
    assert!((16..=26).contains(&reward.gold));

    let player = encounter.into_player();
    assert_eq!(player.progress.victories, 1);
    assert_eq!(player.progress.wins_at("arena"), 1);
    assert_eq!(player.progress.dragon_shards, 200 + reward.shards);
    assert_eq!(player.progress.gold, 150 + reward.gold);
}

#[test]
fn wins_accumulate_across_encounters() {
    let mut ctx = BattleContext::with_seed(11);
    let mut player = champion();
    for _ in 0..3 {
        let mut encounter = ctx.create_encounter(player, Some("docks")).unwrap();
        fight(&mut ctx, &mut encounter, ActionKind::Special);
        assert_eq!(encounter.phase(), BattlePhase::Victory);
        player = encounter.into_player();
    }
    assert_eq!(player.progress.victories, 3);
    assert_eq!(player.progress.wins_at("docks"), 3);
    assert_eq!(player.progress.wins_at("arena"), 0);

    // two or more wins earn the "Tough " title
    let encounter = ctx.create_encounter(player, Some("docks")).unwrap();
    assert!(encounter.enemy().name.starts_with("Tough "));
}

#[test]
fn defeat_is_terminal() {
    let mut ctx = BattleContext::with_seed(12);
    let mut encounter = ctx.create_encounter(glass_knight(), None).unwrap();

    let outcome = ctx.submit_player_action(&mut encounter, ActionKind::Attack).unwrap();
    assert_eq!(outcome.phase, BattlePhase::Defeat);
    assert_eq!(outcome.reward, None);
    assert_eq!(
        outcome.phases,
        vec![
            BattlePhase::ResolvingPlayerAction,
            BattlePhase::AwaitingEnemyTurn,
            BattlePhase::ResolvingEnemyTurn,
            BattlePhase::Defeat,
        ]
    );

    let snapshot = encounter.clone();
    for action in ActionKind::ALL {
        let err = ctx.submit_player_action(&mut encounter, action).unwrap_err();
        assert_eq!(
            err,
            BattleError::InvalidAction {
                phase: BattlePhase::Defeat
            }
        );
    }
    assert_eq!(encounter, snapshot);

    let player = encounter.into_player();
    assert_eq!(player.health, 0);
    assert_eq!(player.progress.victories, 0);
    assert_eq!(player.progress.dragon_shards, 200);
}

#[test]
fn heal_still_draws_retaliation() {
    let mut ctx = BattleContext::with_seed(13);
    let mut encounter = ctx.create_encounter(knight(), Some("arena")).unwrap();
    let outcome = ctx.submit_player_action(&mut encounter, ActionKind::Heal).unwrap();

    assert_eq!(outcome.phase, BattlePhase::AwaitingPlayerAction);
    assert!(outcome.phases.contains(&BattlePhase::ResolvingEnemyTurn));
    assert!(outcome.player_health < 100);
    assert_eq!(outcome.enemy_health, encounter.enemy().max_health);
}

#[test]
fn health_stays_in_bounds_through_a_battle() {
    let mut ctx = BattleContext::with_seed(14);
    let mut encounter = ctx.create_encounter(knight(), Some("mansion")).unwrap();
    for outcome in fight(&mut ctx, &mut encounter, ActionKind::Attack) {
        assert!(outcome.player_health <= outcome.player_max_health);
        assert!(outcome.enemy_health <= outcome.enemy_max_health);
    }
    assert!(encounter.is_finished());
}

#[test]
fn log_keeps_recent_lines_only() {
    let mut ctx = BattleContext::with_seed(15);
    let mut encounter = ctx.create_encounter(knight(), Some("city")).unwrap();
    let outcomes = fight(&mut ctx, &mut encounter, ActionKind::Attack);

    let written: usize = outcomes.iter().map(|outcome| outcome.log.len()).sum();
    assert!(written + 2 > 8);
    assert_eq!(encounter.log().len(), 8);
    let last = outcomes.last().and_then(|outcome| outcome.log.last()).unwrap();
    assert_eq!(encounter.log().lines().last(), Some(last.as_str()));
}

// =============================================================================
// Unlocks and Capstones
// =============================================================================

#[test]
fn capstone_unlocks_after_all_six_locations() {
    let mut ctx = BattleContext::with_seed(20);
    for capstone in ["castle", "bot_attack"] {
        assert!(ctx.create_encounter(veteran_of(&PREREQUISITES, 0), Some(capstone)).is_ok());
        assert_eq!(
            ctx.create_encounter(veteran_of(&PREREQUISITES[..5], 10), Some(capstone))
                .unwrap_err()
                .error,
            BattleError::LocationLocked(capstone.to_string())
        );
    }
}

#[test]
fn elite_capstone_enemy() {
    let mut ctx = BattleContext::with_seed(21);
    let encounter = ctx
        .create_encounter(veteran_of(&PREREQUISITES, 4), Some("castle"))
        .unwrap();
    let enemy = encounter.enemy();

    assert!(enemy.name.starts_with("Elite "));
    let base = enemy.name.trim_start_matches("Elite ");
    assert!(["Druid Lord", "Ancient Guardian"].contains(&base));
    // (base + 40) * 2.25 + 35 and (base + 20) * 2.25 + 17 at the lowest rolls
    assert!(enemy.max_health >= 260);
    assert!(enemy.attack >= 95);
    assert_eq!(encounter.log().lines().nth(1), Some("Location: Battle of Druids"));
}

#[test]
fn capstone_victory_pays_double() {
    let mut ctx = BattleContext::with_seed(22);
    let mut hero = veteran_of(&PREREQUISITES, 0);
    hero.attack = 10_000;
    let mut encounter = ctx.create_encounter(hero, Some("bot_attack")).unwrap();
    let outcomes = fight(&mut ctx, &mut encounter, ActionKind::Attack);

    let reward = outcomes[0].reward.expect("one-shot victory");
    assert_eq!(reward.victories, 7);
    assert_eq!(reward.shards % 2, 0);
    assert_eq!(reward.gold % 2, 0);
    assert_eq!(encounter.player().progress.wins_at("bot_attack"), 1);
}

// =============================================================================
// Timeline
// =============================================================================

#[test]
fn turn_effects_reach_the_timeline_and_expire() {
    let mut ctx = BattleContext::with_seed(30);
    let mut encounter = ctx.create_encounter(knight(), None).unwrap();
    let outcome = ctx.submit_player_action(&mut encounter, ActionKind::Special).unwrap();

    assert!(matches!(outcome.effects.first(), Some(TimelineEntry::Marker(_))));
    assert!(outcome.effects.contains(&TimelineEntry::Shake(15)));
    assert_eq!(encounter.timeline().shake(), 8);
    assert_eq!(encounter.timeline().markers().len(), 2);
    assert_eq!(encounter.timeline().bursts().len(), 2);

    let timeline = encounter.timeline_mut();
    timeline.tick(30);
    assert!(timeline.bursts().is_empty());
    assert_eq!(timeline.markers().len(), 2);
    assert_eq!(timeline.shake(), 0);

    timeline.tick(30);
    assert!(timeline.is_empty());
    timeline.tick(5);
    assert!(timeline.is_empty());
}

#[test]
fn shake_offset_stays_within_magnitude() {
    let mut ctx = BattleContext::with_seed(31);
    let mut encounter = ctx.create_encounter(knight(), None).unwrap();
    ctx.submit_player_action(&mut encounter, ActionKind::Attack).unwrap();

    assert_eq!(encounter.timeline().shake(), 8);
    let magnitude = 8.0;
    for _ in 0..100 {
        let offset = encounter.timeline().shake_offset(ctx.rng_mut());
        assert!(offset.x.abs() <= magnitude && offset.y.abs() <= magnitude);
    }
}
