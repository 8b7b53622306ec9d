//! Shop catalog and purchases.
//!
//! Items are bought with both currencies at once. Boosts are permanent and
//! apply immediately; max-health boosts also raise current health by the
//! same amount, and heals are capped at max health.
//!
//! # Example
//!
//! ```
//! use druids_core::combatant::{CharacterClass, Combatant};
//! use druids_core::shop;
//!
//! let mut hero = Combatant::player("Aria", CharacterClass::Knight);
//! let sword = shop::find("Iron Sword").unwrap();
//!
//! let purchase = shop::purchase(&mut hero, sword).unwrap();
//! assert_eq!(purchase.benefits, vec!["ATK+5".to_string()]);
//! assert_eq!(hero.attack, 30);
//! assert_eq!(hero.weapon, "Iron Sword");
//! assert_eq!(hero.progress.dragon_shards, 150);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::combatant::Combatant;
use crate::error::{BattleError, Result};

/// Rarity tier, in increasing order of price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemTier {
    /// Starter items.
    Basic,
    /// Mid-game items.
    Intermediate,
    /// Late-game items.
    Advanced,
    /// Items that also grant a special move.
    Legendary,
    /// Top tier.
    Mythic,
}

impl fmt::Display for ItemTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Basic => "Basic",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Legendary => "Legendary",
            Self::Mythic => "Mythic",
        };
        write!(f, "{name}")
    }
}

/// Item category. Buying a weapon replaces the player's weapon name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    /// Replaces the equipped weapon.
    Weapon,
    /// Body armor or shield.
    Armor,
    /// Used up on purchase.
    Consumable,
    /// Rings, boots and similar.
    Accessory,
    /// Legendary gear.
    Legendary,
    /// Mythic gear.
    Mythic,
}

/// One entry of the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShopItem {
    /// Display name. Becomes the weapon name for weapons.
    pub name: &'static str,
    /// Category.
    pub item_type: ItemType,
    /// Rarity.
    pub tier: ItemTier,
    /// Price in dragon shards.
    pub cost_shards: u32,
    /// Price in gold.
    pub cost_gold: u32,
    /// Attack added.
    pub attack_boost: u32,
    /// Defense added.
    pub defense_boost: u32,
    /// Speed added.
    pub speed_boost: u32,
    /// Max health added (current health rises with it).
    pub max_health_boost: u32,
    /// Health restored, capped at max.
    pub heal: u32,
    /// New special move.
    pub special_power: Option<&'static str>,
}

impl ShopItem {
    const fn new(
        name: &'static str,
        item_type: ItemType,
        tier: ItemTier,
        cost_shards: u32,
        cost_gold: u32,
    ) -> Self {
        Self {
            name,
            item_type,
            tier,
            cost_shards,
            cost_gold,
            attack_boost: 0,
            defense_boost: 0,
            speed_boost: 0,
            max_health_boost: 0,
            heal: 0,
            special_power: None,
        }
    }

    const fn attack(mut self, amount: u32) -> Self {
        self.attack_boost = amount;
        self
    }

    const fn defense(mut self, amount: u32) -> Self {
        self.defense_boost = amount;
        self
    }

    const fn speed(mut self, amount: u32) -> Self {
        self.speed_boost = amount;
        self
    }

    const fn max_health(mut self, amount: u32) -> Self {
        self.max_health_boost = amount;
        self
    }

    const fn heals(mut self, amount: u32) -> Self {
        self.heal = amount;
        self
    }

    const fn special(mut self, name: &'static str) -> Self {
        self.special_power = Some(name);
        self
    }

    /// Returns true if `player` can pay for this item.
    #[must_use]
    pub fn is_affordable(&self, player: &Combatant) -> bool {
        player.progress.dragon_shards >= self.cost_shards && player.progress.gold >= self.cost_gold
    }
}

use ItemTier::{Advanced, Basic, Intermediate, Legendary, Mythic};

static CATALOG: [ShopItem; 17] = [
    ShopItem::new("Iron Sword", ItemType::Weapon, Basic, 50, 20).attack(5),
    ShopItem::new("Steel Armor", ItemType::Armor, Basic, 60, 25).defense(6),
    ShopItem::new("Health Potion", ItemType::Consumable, Basic, 20, 10).heals(40),
    ShopItem::new("Magic Ring", ItemType::Accessory, Basic, 80, 30).attack(3).defense(3),
    ShopItem::new("Swift Boots", ItemType::Accessory, Basic, 70, 25).speed(10),
    ShopItem::new("Lightning Wand+", ItemType::Weapon, Intermediate, 120, 50).attack(12),
    ShopItem::new("Dragon Scale Armor", ItemType::Armor, Intermediate, 150, 60).defense(15),
    ShopItem::new("Berserker Ring", ItemType::Accessory, Intermediate, 200, 80).attack(8).speed(5),
    ShopItem::new("Guardian Shield", ItemType::Armor, Intermediate, 180, 70).defense(20),
    ShopItem::new("Phoenix Feather", ItemType::Consumable, Intermediate, 100, 50).max_health(25),
    ShopItem::new("Dragonbone Sword", ItemType::Weapon, Advanced, 400, 150).attack(25),
    ShopItem::new("Void Armor", ItemType::Armor, Advanced, 450, 180).defense(30),
    ShopItem::new("Titan's Gauntlets", ItemType::Accessory, Advanced, 350, 140)
        .attack(15)
        .defense(10),
    ShopItem::new("DRUID CLOAK", ItemType::Legendary, Legendary, 600, 250)
        .attack(20)
        .defense(15)
        .special("Druid Magic"),
    ShopItem::new("GODSLAYER SWORD", ItemType::Legendary, Legendary, 800, 350)
        .attack(40)
        .special("Divine Strike"),
    ShopItem::new("EXCALIBUR", ItemType::Mythic, Mythic, 1500, 700)
        .attack(60)
        .special("Holy Light"),
    ShopItem::new("OMNIPOTENT RING", ItemType::Mythic, Mythic, 2000, 1000)
        .attack(35)
        .defense(35)
        .speed(20)
        .max_health(100),
];

/// Every item on sale, cheapest tier first.
#[must_use]
pub fn catalog() -> &'static [ShopItem] {
    &CATALOG
}

/// Looks up an item by exact name.
#[must_use]
pub fn find(name: &str) -> Option<&'static ShopItem> {
    CATALOG.iter().find(|item| item.name == name)
}

/// What a completed purchase did to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    /// Name of the item bought.
    pub item: String,
    /// Short labels of the applied boosts, e.g. `"ATK+5"`.
    pub benefits: Vec<String>,
}

impl Purchase {
    /// One-line summary for the shop screen.
    #[must_use]
    pub fn message(&self) -> String {
        format!("Bought {}! {}", self.item, self.benefits.join(" | "))
    }
}

/// Buys `item` for `player`.
///
/// # Errors
///
/// Returns [`BattleError::InsufficientFunds`] if either currency falls short.
/// The player is left untouched in that case.
pub fn purchase(player: &mut Combatant, item: &ShopItem) -> Result<Purchase> {
    if !item.is_affordable(player) {
        warn!(
            item = item.name,
            shards = player.progress.dragon_shards,
            gold = player.progress.gold,
            "purchase rejected"
        );
        return Err(BattleError::InsufficientFunds {
            item: item.name.to_string(),
            shards: item.cost_shards,
            gold: item.cost_gold,
        });
    }

    player.progress.dragon_shards -= item.cost_shards;
    player.progress.gold -= item.cost_gold;

    let mut benefits = Vec::new();
    if item.attack_boost > 0 {
        player.attack = player.attack.saturating_add(item.attack_boost);
        benefits.push(format!("ATK+{}", item.attack_boost));
    }
    if item.defense_boost > 0 {
        player.defense = player.defense.saturating_add(item.defense_boost);
        benefits.push(format!("DEF+{}", item.defense_boost));
    }
    if item.speed_boost > 0 {
        player.speed = player.speed.saturating_add(item.speed_boost);
        benefits.push(format!("SPD+{}", item.speed_boost));
    }
    if item.max_health_boost > 0 {
        player.raise_max_health(item.max_health_boost);
        benefits.push(format!("MaxHP+{}", item.max_health_boost));
    }
    if item.heal > 0 {
        let healed = player.heal(item.heal);
        benefits.push(format!("Healed {healed}HP"));
    }
    if let Some(special) = item.special_power {
        player.special = special.to_string();
        benefits.push("New Special Power!".to_string());
    }
    if item.item_type == ItemType::Weapon {
        player.weapon = item.name.to_string();
    }

    debug!(item = item.name, player = %player.name, ?benefits, "purchase");
    Ok(Purchase {
        item: item.name.to_string(),
        benefits,
    })
}
