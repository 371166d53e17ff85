//! Deterministic rules for a turn-based hex strategy game.
//!
//! `game-core` defines the canonical rules (actions, engine, world state) and
//! exposes pure APIs that can be reused by content loaders and offline tools.
//! All state changes flow through [`engine::GameEngine`], which validates a
//! [`UnitAction`] against a [`GameState`] and hands back a successor snapshot
//! without touching the original. Supporting crates depend on the types
//! re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod hex;
pub mod state;

pub use action::{
    ActionKind, ActionOutcome, ActionPlan, ActorFault, Rejection, TargetFault, UnitAction,
    ValidatedAction, available_actions,
};
#[cfg(feature = "serde")]
pub use action::compute_script_root;
pub use config::GameConfig;
pub use engine::{
    ActionReport, ExecuteError, GameEngine, Transition, TransitionPhase, TransitionPhaseError,
};
pub use env::{
    Abilities, Env, GameEnv, GameRules, OracleError, RulesOracle, UnitDefinition, UnitKind,
    UnitOracle, UnitRegistry, get_unit_definition,
};
pub use error::{ErrorSeverity, GameError};
pub use hex::{Coordinate, HexDirection, InvalidCoordinate, MapDimensions};
#[cfg(feature = "serde")]
pub use state::StateDigest;
pub use state::{
    City, CityId, Faction, GameMap, GamePhase, GameState, Improvement, ImprovementKind,
    ImprovementLayer, InvariantViolation, Player, PlayerId, PlayerResources, Resource,
    ResourceSet, StateError, Terrain, Tile, Unit, UnitId, UnitStatus,
};
