//! Action transition execution logic.

use crate::action::{self, UnitAction};
use crate::env::GameEnv;
use crate::error::GameError;
use crate::state::GameState;

use super::Transition;
use super::errors::{ExecuteError, TransitionPhase};

/// Executes a request through the three-phase pipeline.
///
/// Phases:
/// 1. `pre_validate` - check every rule against `state`
/// 2. `apply` - mutate a clone of `state`
/// 3. `post_validate` - verify structural invariants of the clone
///
/// `state` itself is only read.
pub(super) fn drive_transition(
    request: &UnitAction,
    state: &GameState,
    env: &GameEnv<'_>,
) -> Result<Transition, ExecuteError> {
    let validated = action::pre_validate(request, state, env).map_err(|rejection| {
        tracing::debug!(
            "Rejected {} by {}: [{}] {}",
            request.kind,
            request.actor,
            rejection.error_code(),
            rejection
        );
        ExecuteError::rejected(rejection)
    })?;

    let mut next = state.clone();

    let outcome = action::apply(&validated, &mut next, env)
        .map_err(|violation| invariant_failure(request, TransitionPhase::Apply, violation))?;

    action::post_validate(&next).map_err(|violation| {
        invariant_failure(request, TransitionPhase::PostValidate, violation)
    })?;

    tracing::debug!(
        "Accepted {} by {}: {}",
        request.kind,
        request.actor,
        outcome.summary()
    );

    Ok(Transition {
        state: next,
        outcome,
    })
}

fn invariant_failure(
    request: &UnitAction,
    phase: TransitionPhase,
    violation: crate::state::InvariantViolation,
) -> ExecuteError {
    tracing::error!(
        "{} by {} broke an invariant during {}: [{}] {}",
        request.kind,
        request.actor,
        phase.as_str(),
        violation.error_code(),
        violation
    );
    ExecuteError::invariant(phase, violation)
}
