//! Lookup tables keyed by base enemy name.
//!
//! Names missing from a table take the documented fallback: unmodified base
//! rolls, the "Crude Weapon", and no special ability.

/// Enemies drawn when a battle has no location.
pub const DEFAULT_ENEMY_POOL: [&str; 4] = ["Goblin", "Dark Mage", "Skeleton", "Orc"];

/// Weapon given to enemies absent from [`WEAPONS`].
pub const DEFAULT_WEAPON: &str = "Crude Weapon";

/// Title prefixes, hardest first, with the victories needed for each.
pub const TITLES: [(u32, &str); 3] = [(10, "Elite "), (5, "Veteran "), (2, "Tough ")];

/// Fixed adjustment applied to an enemy's base rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatDelta {
    /// Added to the health roll.
    pub health: i32,
    /// Added to the attack roll.
    pub attack: i32,
    /// Added to the defense roll.
    pub defense: i32,
}

impl StatDelta {
    const fn new(health: i32, attack: i32, defense: i32) -> Self {
        Self {
            health,
            attack,
            defense,
        }
    }
}

const STAT_DELTAS: &[(&str, StatDelta)] = &[
    ("Ghost", StatDelta::new(-10, 5, -5)),
    ("Vampire", StatDelta::new(20, 10, 5)),
    ("Golem", StatDelta::new(30, -5, 15)),
    ("Fire Elemental", StatDelta::new(0, 15, -5)),
    ("Lava Beast", StatDelta::new(0, 15, -5)),
    ("Sea Serpent", StatDelta::new(15, 8, 0)),
    ("Kraken Spawn", StatDelta::new(15, 8, 0)),
    ("Temple Guardian", StatDelta::new(25, 0, 12)),
    ("Minotaur", StatDelta::new(35, 12, 8)),
    ("Druid Lord", StatDelta::new(40, 20, 15)),
    ("Ancient Guardian", StatDelta::new(40, 20, 15)),
    ("Mech Dragon", StatDelta::new(50, 25, 20)),
    ("War Machine", StatDelta::new(50, 25, 20)),
];

const WEAPONS: &[(&str, &str)] = &[
    ("Goblin", "Rusty Dagger"),
    ("Orc", "Heavy Club"),
    ("Dark Mage", "Dark Staff"),
    ("Skeleton", "Bone Sword"),
    ("Ghost", "Spectral Touch"),
    ("Vampire", "Blood Fangs"),
    ("Pirate", "Cutlass"),
    ("City Guard", "Guard Spear"),
    ("Assassin", "Poison Blade"),
    ("Golem", "Stone Fists"),
    ("Fire Elemental", "Flame Burst"),
    ("Temple Guardian", "Holy Mace"),
    ("Minotaur", "Giant Axe"),
    ("Druid Lord", "Nature Staff"),
    ("Mech Dragon", "Laser Cannon"),
];

/// Stat adjustment for `name`, or `None` for unlisted enemies.
#[must_use]
pub fn stat_delta(name: &str) -> Option<StatDelta> {
    STAT_DELTAS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, delta)| *delta)
}

/// Weapon carried by `name`.
#[must_use]
pub fn weapon_for(name: &str) -> &'static str {
    WEAPONS
        .iter()
        .find(|(key, _)| *key == name)
        .map_or(DEFAULT_WEAPON, |(_, weapon)| weapon)
}

/// Title earned by enemies once the player has `victories` wins.
#[must_use]
pub fn title_for(victories: u32) -> Option<&'static str> {
    TITLES
        .iter()
        .find(|(threshold, _)| victories >= *threshold)
        .map(|(_, title)| *title)
}

/// Strips a known title prefix from a display name.
#[must_use]
pub fn base_name(name: &str) -> &str {
    TITLES
        .iter()
        .find_map(|(_, title)| name.strip_prefix(title))
        .unwrap_or(name)
}
