//! Engine context.
//!
//! [`BattleContext`] owns everything an encounter needs beyond the two
//! combatants: the seeded random generator, the location catalog and the
//! configuration. Callers create one context and pass encounters through it;
//! there is no global state.
//!
//! # Determinism
//!
//! All randomness (enemy generation, damage rolls, effect triggers, particle
//! spread, rewards) is drawn from one `ChaCha8Rng` seeded from
//! [`BattleConfig::seed`]. The same seed and the same sequence of calls
//! always produce the same enemies, outcomes and log lines.
//!
//! # Example
//!
//! ```
//! use druids_core::combatant::{CharacterClass, Combatant};
//! use druids_core::context::BattleContext;
//! use druids_core::resolver::ActionKind;
//!
//! let mut ctx = BattleContext::with_seed(42);
//! let hero = Combatant::player("Aria", CharacterClass::Knight);
//! let mut encounter = ctx.create_encounter(hero, Some("arena")).unwrap();
//!
//! while !encounter.is_finished() {
//!     ctx.submit_player_action(&mut encounter, ActionKind::Attack).unwrap();
//! }
//! ```

use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::battle::{Encounter, TurnOutcome};
use crate::combatant::Combatant;
use crate::config::BattleConfig;
use crate::encounter;
use crate::error::{BattleError, EncounterRejected, Result};
use crate::location::{Location, LocationCatalog};
use crate::resolver::ActionKind;

/// Seeded generator, location catalog and configuration shared by encounters.
pub struct BattleContext {
    rng: ChaCha8Rng,
    catalog: LocationCatalog,
    config: BattleConfig,
}

impl fmt::Debug for BattleContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BattleContext")
            .field("catalog", &format!("[{} locations]", self.catalog.len()))
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl BattleContext {
    /// Creates a context with the standard location catalog.
    #[must_use]
    pub fn new(config: BattleConfig) -> Self {
        Self::with_catalog(config, LocationCatalog::standard())
    }

    /// Creates a context with default configuration and the given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(BattleConfig::with_seed(seed))
    }

    /// Creates a context with a custom location catalog.
    #[must_use]
    pub fn with_catalog(config: BattleConfig, catalog: LocationCatalog) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            catalog,
            config,
        }
    }

    /// Location catalog.
    #[must_use]
    pub fn catalog(&self) -> &LocationCatalog {
        &self.catalog
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// The shared generator, for callers that draw effect jitter.
    pub fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Checks that `player` may fight at `location_key` and returns the location.
    ///
    /// # Errors
    ///
    /// Returns [`BattleError::PlayerDefeated`] if the player has no health
    /// left, [`BattleError::UnknownLocation`] if the key is not in the catalog
    /// and [`BattleError::LocationLocked`] if the player has not met its
    /// unlock requirements.
    pub fn admit(
        &self,
        player: &Combatant,
        location_key: Option<&str>,
    ) -> Result<Option<&Location>> {
        if player.is_defeated() {
            warn!(player = %player.name, "defeated player cannot start a battle");
            return Err(BattleError::PlayerDefeated(player.name.clone()));
        }
        let Some(key) = location_key else {
            return Ok(None);
        };
        let location = self
            .catalog
            .get(key)
            .ok_or_else(|| BattleError::UnknownLocation(key.to_string()))?;
        if !location.is_unlocked(&player.progress) {
            warn!(location = key, player = %player.name, "location locked");
            return Err(BattleError::LocationLocked(key.to_string()));
        }
        Ok(Some(location))
    }

    /// Starts a battle for `player`, at `location_key` if given.
    ///
    /// # Errors
    ///
    /// Fails for the reasons listed on [`BattleContext::admit`]. The player is
    /// handed back inside the [`EncounterRejected`].
    pub fn create_encounter(
        &mut self,
        player: Combatant,
        location_key: Option<&str>,
    ) -> std::result::Result<Encounter, EncounterRejected> {
        let location = match self.admit(&player, location_key) {
            Ok(location) => location.cloned(),
            Err(error) => {
                return Err(EncounterRejected {
                    error,
                    player: Box::new(player),
                })
            }
        };

        let enemy = encounter::generate(&player, location.as_ref(), &mut self.rng);
        debug!(
            player = %player.name,
            enemy = %enemy.name,
            location = location_key.unwrap_or("-"),
            "encounter created"
        );
        Ok(Encounter::new(player, enemy, location, &self.config))
    }

    /// Resolves one player action in `encounter`.
    ///
    /// # Errors
    ///
    /// Propagates [`Encounter::submit`] errors.
    pub fn submit_player_action(
        &mut self,
        encounter: &mut Encounter,
        action: ActionKind,
    ) -> Result<TurnOutcome> {
        encounter.submit(action, &mut self.rng)
    }
}

impl Default for BattleContext {
    fn default() -> Self {
        Self::new(BattleConfig::default())
    }
}
