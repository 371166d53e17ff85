//! Three-phase action execution.
//!
//! 1. **Pre-validation**: decide legality against the untouched state and
//!    resolve every reference into a [`ValidatedAction`]
//! 2. **Apply**: compute the successor state on a structurally shared copy
//! 3. **Post-validation**: check structural invariants of the successor
//!
//! The engine sequences the three; each is public so tools can run them
//! individually.

mod pipeline;
mod validation;

use crate::action::{ActionOutcome, Rejection, UnitAction, ValidatedAction};
use crate::env::GameEnv;
use crate::state::{GameState, InvariantViolation};

/// Pre-validation: checks every rule the request must satisfy.
///
/// Never mutates `state` and never panics on untrusted ids.
///
/// ## Errors
/// - `Rejection::InvalidActor` - unknown unit, wrong player, or not active
/// - `Rejection::UnknownUnitType` - unit type missing from the registry
/// - `Rejection::UnsupportedAction` - definition lacks the ability
/// - `Rejection::InvalidTarget`, `OutOfRange`, `TerrainMismatch`,
///   `InsufficientResources` - target checks
/// - `Rejection::InsufficientMovement` - not enough movement left
/// - `Rejection::AlreadyActed`, `NoTarget` - ATTACK only
pub fn pre_validate(
    action: &UnitAction,
    state: &GameState,
    env: &GameEnv<'_>,
) -> Result<ValidatedAction, Rejection> {
    validation::pre_validate(action, state, env)
}

/// Apply: mutates `state` into the successor of a validated action.
///
/// `state` must be the snapshot `action` was validated against (or a clone
/// of it). Callers that need the original must clone first.
///
/// ## Errors
/// An `InvariantViolation` means a checked counter would have gone negative
/// or a referenced record vanished. The partially updated `state` must be
/// discarded.
pub fn apply(
    action: &ValidatedAction,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<ActionOutcome, InvariantViolation> {
    pipeline::apply(action, state, env)
}

/// Post-validation: structural invariants of the successor state.
pub fn post_validate(state: &GameState) -> Result<(), InvariantViolation> {
    validation::post_validate(state)
}
