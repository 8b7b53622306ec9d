//! Battle locations and the world catalog.
//!
//! Locations are defined once and never mutated. The only state that changes
//! as a result of fighting somewhere is the player's per-location win count,
//! which in turn unlocks the capstone locations.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::combatant::Progress;

/// Random effect a location may trigger after each player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpecialEffect {
    /// No location effect.
    #[default]
    None,
    /// May weaken the enemy's attack.
    Haunted,
    /// May burn the enemy directly.
    Fire,
    /// May heal the player.
    Divine,
    /// May add bonus damage to the player's hit.
    Water,
    /// May add bonus damage to the player's hit.
    Ruins,
}

impl SpecialEffect {
    /// Parses an effect name. Unrecognised names yield [`SpecialEffect::None`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "haunted" => Self::Haunted,
            "fire" => Self::Fire,
            "divine" => Self::Divine,
            "water" => Self::Water,
            "ruins" => Self::Ruins,
            _ => Self::None,
        }
    }
}

/// Difficulty class of a location. Drives enemy scaling and reward multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LocationTier {
    /// Regular location.
    #[default]
    Standard,
    /// Harder location with a 1.5x reward multiplier.
    Hard,
    /// Requirement-gated final location: tougher enemies, 2x rewards.
    Capstone,
}

/// Static descriptor of a battle site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Catalog key, also used for victory bookkeeping.
    pub key: String,
    /// Name shown to the player.
    pub display_name: String,
    /// Flavour text for the world map.
    pub description: String,
    /// Enemy names eligible here, drawn uniformly.
    pub enemy_pool: Vec<String>,
    /// Location keys that each need at least one win before entry.
    pub unlock_requirements: BTreeSet<String>,
    /// Random effect rolled after each player action.
    pub special_effect: SpecialEffect,
    /// Difficulty class.
    pub tier: LocationTier,
}

impl Location {
    /// Creates an always-unlocked standard location with no effect.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        display_name: impl Into<String>,
        enemy_pool: &[&str],
    ) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            description: String::new(),
            enemy_pool: enemy_pool.iter().map(|name| (*name).to_string()).collect(),
            unlock_requirements: BTreeSet::new(),
            special_effect: SpecialEffect::None,
            tier: LocationTier::Standard,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the special effect.
    #[must_use]
    pub fn with_effect(mut self, effect: SpecialEffect) -> Self {
        self.special_effect = effect;
        self
    }

    /// Sets the tier.
    #[must_use]
    pub fn with_tier(mut self, tier: LocationTier) -> Self {
        self.tier = tier;
        self
    }

    /// Sets the unlock requirements.
    #[must_use]
    pub fn requiring(mut self, keys: &[&str]) -> Self {
        self.unlock_requirements = keys.iter().map(|key| (*key).to_string()).collect();
        self
    }

    /// Returns true for the two hardest, gated locations.
    #[must_use]
    pub fn is_capstone(&self) -> bool {
        self.tier == LocationTier::Capstone
    }

    /// Returns true if every requirement has at least one recorded win.
    #[must_use]
    pub fn is_unlocked(&self, progress: &Progress) -> bool {
        self.unlock_requirements
            .iter()
            .all(|key| progress.wins_at(key) > 0)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

/// Keys of the six regular locations that gate the capstones.
const CAPSTONE_REQUIREMENTS: [&str; 6] = ["arena", "docks", "city", "shrine", "mansion", "maze"];

/// All locations of the world map, keyed by location key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationCatalog {
    locations: BTreeMap<String, Location>,
}

impl LocationCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The world map of Battle of the Druids.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.insert(
            Location::new("arena", "Arena", &["Goblin", "Orc"])
                .with_description("Test your might in the gladiator arena!"),
        );
        catalog.insert(
            Location::new("docks", "Docks", &["Pirate", "Sea Serpent", "Ghost Ship"])
                .with_description("Pirates and undead sailors guard the docks!")
                .with_effect(SpecialEffect::Water),
        );
        catalog.insert(
            Location::new("city", "City", &["City Guard", "Assassin", "Golem"])
                .with_description("The city streets hide many dangers.")
                .with_effect(SpecialEffect::Ruins),
        );
        catalog.insert(
            Location::new("shrine", "Shrine", &["Temple Guardian", "Spirit Monk", "Celestial"])
                .with_description("An ancient shrine with mystical guardians.")
                .with_effect(SpecialEffect::Divine),
        );
        catalog.insert(
            Location::new("mansion", "Mansion", &["Vampire", "Ghost", "Banshee"])
                .with_description("A haunted mansion full of dark magic!")
                .with_effect(SpecialEffect::Haunted)
                .with_tier(LocationTier::Hard),
        );
        catalog.insert(
            Location::new("maze", "Maze", &["Fire Elemental", "Lava Beast", "Minotaur"])
                .with_description("A fiery labyrinth - don't get lost!")
                .with_effect(SpecialEffect::Fire)
                .with_tier(LocationTier::Hard),
        );
        catalog.insert(
            Location::new("castle", "Battle of Druids", &["Druid Lord", "Ancient Guardian"])
                .with_description("The ultimate druid battle awaits!")
                .with_effect(SpecialEffect::parse("magical"))
                .with_tier(LocationTier::Capstone)
                .requiring(&CAPSTONE_REQUIREMENTS),
        );
        catalog.insert(
            Location::new("bot_attack", "Bot Attack", &["Mech Dragon", "War Machine"])
                .with_description("Futuristic enemies from another dimension!")
                .with_effect(SpecialEffect::parse("tech"))
                .with_tier(LocationTier::Capstone)
                .requiring(&CAPSTONE_REQUIREMENTS),
        );
        catalog
    }

    /// Adds or replaces a location.
    pub fn insert(&mut self, location: Location) {
        self.locations.insert(location.key.clone(), location);
    }

    /// Looks up a location by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Location> {
        self.locations.get(key)
    }

    /// Iterates locations in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// Number of locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Returns `Some(true)` if `key` is unlocked for `progress`, `None` if unknown.
    #[must_use]
    pub fn is_unlocked(&self, key: &str, progress: &Progress) -> Option<bool> {
        self.get(key).map(|location| location.is_unlocked(progress))
    }
}
