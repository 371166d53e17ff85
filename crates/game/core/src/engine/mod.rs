//! Action dispatch.
//!
//! The [`GameEngine`] is the single entry point for changing a [`GameState`].
//! It never mutates the state it is given: every accepted action yields a new
//! snapshot that shares untouched records with the old one, and every failure
//! leaves the caller with exactly what it had.

mod errors;
mod report;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
pub use report::ActionReport;

use crate::action::{ActionKind, ActionOutcome, UnitAction};
use crate::env::GameEnv;
use crate::hex::Coordinate;
use crate::state::{GameState, UnitId};

/// Successor state and what changed to reach it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub outcome: ActionOutcome,
}

/// Game engine that validates and executes unit actions.
///
/// All requests flow through the three-phase pipeline:
/// pre_validate → apply → post_validate
///
/// The engine holds only read-only oracles, so one engine can serve any
/// number of independent matches.
#[derive(Clone, Copy)]
pub struct GameEngine<'a> {
    env: GameEnv<'a>,
}

impl<'a> GameEngine<'a> {
    pub fn new(env: GameEnv<'a>) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &GameEnv<'a> {
        &self.env
    }

    /// Validates and executes `action` against `state`.
    ///
    /// # Errors
    ///
    /// `ExecuteError::Rejected` for illegal requests, `ExecuteError::Invariant`
    /// if execution would produce an inconsistent state.
    pub fn dispatch(
        &self,
        state: &GameState,
        action: &UnitAction,
    ) -> Result<Transition, ExecuteError> {
        transition::drive_transition(action, state, &self.env)
    }

    /// Envelope form of [`dispatch`](Self::dispatch).
    pub fn execute_unit_action(
        &self,
        state: &GameState,
        unit_id: impl Into<UnitId>,
        kind: ActionKind,
        target_unit_id: Option<UnitId>,
        target_coordinate: Option<Coordinate>,
    ) -> ActionReport {
        let action = UnitAction {
            actor: unit_id.into(),
            kind,
            target_unit: target_unit_id,
            target: target_coordinate,
        };
        self.dispatch(state, &action).into()
    }

    /// Every action `unit` could take right now.
    pub fn available_actions(&self, state: &GameState, unit: &UnitId) -> Vec<UnitAction> {
        crate::action::available_actions(state, &self.env, unit)
    }
}
