//! Crate-level tests that drive whole battles through a [`BattleContext`].
//!
//! - `determinism.rs`: same seed, same enemies, outcomes and log lines
//! - `integration.rs`: end-to-end battles, unlocks, rewards and effects
//! - `helpers.rs`: player factories and battle drivers
//!
//! [`BattleContext`]: crate::context::BattleContext

mod helpers;
mod integration;
