//! Error types for action execution pipeline.

use crate::action::Rejection;
use crate::error::{ErrorSeverity, GameError};
use crate::state::InvariantViolation;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    /// The request was illegal; always raised in [`TransitionPhase::PreValidate`].
    #[error("action rejected: {0}")]
    Rejected(TransitionPhaseError<Rejection>),

    /// The executor produced, or would have produced, an inconsistent state.
    #[error("invariant violated: {0}")]
    Invariant(TransitionPhaseError<InvariantViolation>),
}

impl ExecuteError {
    pub(crate) fn rejected(error: Rejection) -> Self {
        Self::Rejected(TransitionPhaseError::new(TransitionPhase::PreValidate, error))
    }

    pub(crate) fn invariant(phase: TransitionPhase, error: InvariantViolation) -> Self {
        Self::Invariant(TransitionPhaseError::new(phase, error))
    }

    pub fn phase(&self) -> TransitionPhase {
        match self {
            ExecuteError::Rejected(inner) => inner.phase,
            ExecuteError::Invariant(inner) => inner.phase,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            ExecuteError::Rejected(inner) => Some(&inner.error),
            ExecuteError::Invariant(_) => None,
        }
    }

    pub fn into_rejection(self) -> Option<Rejection> {
        match self {
            ExecuteError::Rejected(inner) => Some(inner.error),
            ExecuteError::Invariant(_) => None,
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ExecuteError::Rejected(inner) => inner.error.severity(),
            ExecuteError::Invariant(inner) => inner.error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ExecuteError::Rejected(inner) => inner.error.error_code(),
            ExecuteError::Invariant(inner) => inner.error.error_code(),
        }
    }
}
