//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Unit catalogs (data-driven via RON)
//! - Game rules tables (data-driven via TOML)
//! - Scenarios: map, players, units, cities (data-driven via RON)
//! - Action scripts for replays (data-driven via RON)
//!
//! Catalogs and rules become the engine's read-only oracles; scenarios become
//! the initial [`game_core::GameState`].
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ActionScriptLoader, ContentFactory, LoadResult, RulesLoader, ScenarioLoader, UnitLoader,
};
