//! Victory rewards.
//!
//! ```text
//! shards = floor((roll[20, 35] + victories * 2) * multiplier)
//! gold   = floor((roll[15, 25] + victories)     * multiplier)
//! ```
//!
//! `victories` is the count after the win being rewarded. The multiplier is
//! 2.0 at capstones, 1.5 at hard locations and 1.0 everywhere else.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::location::{Location, LocationTier};

/// Inclusive range of the base shard roll.
pub const BASE_SHARDS_ROLL: (u32, u32) = (20, 35);
/// Inclusive range of the base gold roll.
pub const BASE_GOLD_ROLL: (u32, u32) = (15, 25);

/// Currency earned by a victory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    /// Dragon shards earned.
    pub shards: u32,
    /// Gold earned.
    pub gold: u32,
    /// Victory count this reward was computed for.
    pub victories: u32,
}

/// Reward multiplier in tenths, so it stays exact.
fn multiplier_tenths(location: Option<&Location>) -> u64 {
    match location.map(|location| location.tier) {
        Some(LocationTier::Capstone) => 20,
        Some(LocationTier::Hard) => 15,
        Some(LocationTier::Standard) | None => 10,
    }
}

fn scaled(base: u32, multiplier_tenths: u64) -> u32 {
    u32::try_from(u64::from(base) * multiplier_tenths / 10).unwrap_or(u32::MAX)
}

/// Rolls the reward for a player who now has `victories` wins.
pub fn compute<R: Rng + ?Sized>(
    victories: u32,
    location: Option<&Location>,
    rng: &mut R,
) -> Reward {
    let base_shards = rng.gen_range(BASE_SHARDS_ROLL.0..=BASE_SHARDS_ROLL.1);
    let base_gold = rng.gen_range(BASE_GOLD_ROLL.0..=BASE_GOLD_ROLL.1);
    let multiplier = multiplier_tenths(location);

    Reward {
        shards: scaled(base_shards.saturating_add(victories.saturating_mul(2)), multiplier),
        gold: scaled(base_gold.saturating_add(victories), multiplier),
        victories,
    }
}
