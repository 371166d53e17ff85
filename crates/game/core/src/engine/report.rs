use crate::action::{ActionOutcome, Rejection};
use crate::error::GameError;
use crate::state::GameState;

use super::{ExecuteError, Transition};

/// Uniform result envelope of [`GameEngine::execute_unit_action`](super::GameEngine::execute_unit_action).
///
/// `new_state` is `Some` exactly when `success` is true; `rejection` is
/// `Some` only for ordinary refusals, never for invariant violations.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ActionReport {
    pub success: bool,
    pub message: String,
    pub new_state: Option<GameState>,
    pub rejection: Option<Rejection>,
    pub outcome: Option<ActionOutcome>,
    /// Stable code of the failure, if any.
    pub error_code: Option<&'static str>,
}

impl ActionReport {
    pub fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }
}

impl From<Result<Transition, ExecuteError>> for ActionReport {
    fn from(result: Result<Transition, ExecuteError>) -> Self {
        match result {
            Ok(Transition { state, outcome }) => Self {
                success: true,
                message: outcome.summary(),
                new_state: Some(state),
                rejection: None,
                outcome: Some(outcome),
                error_code: None,
            },
            Err(error) => {
                let message = match error.rejection() {
                    Some(rejection) => rejection.to_string(),
                    None => error.to_string(),
                };
                Self {
                    success: false,
                    message,
                    new_state: None,
                    error_code: Some(error.error_code()),
                    rejection: error.into_rejection(),
                    outcome: None,
                }
            }
        }
    }
}
