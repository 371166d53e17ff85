//! Action rejection reasons.
//!
//! A [`Rejection`] is an ordinary outcome: the request was illegal in the
//! given state and nothing changed. Defects found after a request was
//! accepted are [`InvariantViolation`](crate::state::InvariantViolation)s.

use super::ActionKind;
use crate::env::UnitKind;
use crate::error::{ErrorSeverity, GameError};
use crate::hex::Coordinate;
use crate::state::{ImprovementKind, PlayerId, Terrain, UnitId, UnitStatus};

/// Why a unit cannot act at all.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActorFault {
    #[error("no such unit")]
    Unknown,

    #[error("owned by {owner}, who is not the current player")]
    NotCurrentPlayer {
        owner: PlayerId,
        current: Option<PlayerId>,
    },

    #[error("unit is {0}")]
    NotActive(UnitStatus),
}

/// Why a target is unusable.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TargetFault {
    #[error("no target coordinate given")]
    Missing,

    #[error("{0} is outside the map")]
    OutOfBounds(Coordinate),

    #[error("{0} has no tile")]
    NoTile(Coordinate),

    #[error("unit is already at {0}")]
    SameTile(Coordinate),

    #[error("{0} is impassable")]
    Impassable(Coordinate),

    #[error("{0} is occupied")]
    Occupied(Coordinate),

    #[error("no path to {0} within movement radius")]
    Unreachable(Coordinate),

    #[error("{at} already has a {kind}")]
    AlreadyImproved { kind: ImprovementKind, at: Coordinate },
}

/// Reasons the validator refuses an action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rejection {
    #[error("unit {unit} cannot act: {fault}")]
    InvalidActor { unit: UnitId, fault: ActorFault },

    #[error("unit type '{0}' is not registered")]
    UnknownUnitType(UnitKind),

    #[error("{unit_kind} units cannot {action}")]
    UnsupportedAction {
        unit_kind: UnitKind,
        action: ActionKind,
    },

    #[error("invalid target: {0}")]
    InvalidTarget(TargetFault),

    #[error("target is {distance} tiles away (range {range})")]
    OutOfRange { distance: u32, range: u32 },

    #[error("cannot {action} on {terrain} at {at}")]
    TerrainMismatch {
        action: ActionKind,
        terrain: Terrain,
        at: Coordinate,
    },

    #[error("needs {required} stars, has {available}")]
    InsufficientResources { required: u32, available: u32 },

    #[error("needs {required} movement, has {remaining}")]
    InsufficientMovement { required: u32, remaining: u32 },

    #[error("unit {0} has already attacked this turn")]
    AlreadyActed(UnitId),

    #[error("no enemy unit to attack{}", describe_target(.unit, .at))]
    NoTarget {
        unit: Option<UnitId>,
        at: Option<Coordinate>,
    },
}

fn describe_target(unit: &Option<UnitId>, at: &Option<Coordinate>) -> String {
    match (unit, at) {
        (Some(unit), Some(at)) => format!(" ({unit} at {at})"),
        (Some(unit), None) => format!(" ({unit})"),
        (None, Some(at)) => format!(" at {at}"),
        (None, None) => String::new(),
    }
}

impl Rejection {
    pub(crate) fn invalid_actor(unit: &UnitId, fault: ActorFault) -> Self {
        Self::InvalidActor {
            unit: unit.clone(),
            fault,
        }
    }
}

impl GameError for Rejection {
    fn severity(&self) -> ErrorSeverity {
        use Rejection::*;
        match self {
            InvalidActor { .. } | UnknownUnitType(_) | UnsupportedAction { .. } => {
                ErrorSeverity::Validation
            }
            InvalidTarget(_)
            | OutOfRange { .. }
            | TerrainMismatch { .. }
            | InsufficientResources { .. }
            | InsufficientMovement { .. }
            | AlreadyActed(_)
            | NoTarget { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use Rejection::*;
        match self {
            InvalidActor { .. } => "INVALID_ACTOR",
            UnknownUnitType(_) => "UNKNOWN_UNIT_TYPE",
            UnsupportedAction { .. } => "UNSUPPORTED_ACTION",
            InvalidTarget(_) => "INVALID_TARGET",
            OutOfRange { .. } => "OUT_OF_RANGE",
            TerrainMismatch { .. } => "TERRAIN_MISMATCH",
            InsufficientResources { .. } => "INSUFFICIENT_RESOURCES",
            InsufficientMovement { .. } => "INSUFFICIENT_MOVEMENT",
            AlreadyActed(_) => "ALREADY_ACTED",
            NoTarget { .. } => "NO_TARGET",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_read_naturally() {
        let rejection = Rejection::InvalidActor {
            unit: UnitId::from("w1"),
            fault: ActorFault::NotCurrentPlayer {
                owner: PlayerId(2),
                current: Some(PlayerId(1)),
            },
        };
        assert_eq!(
            rejection.to_string(),
            "unit 'w1' cannot act: owned by P2, who is not the current player"
        );
        assert_eq!(
            Rejection::NoTarget {
                unit: None,
                at: Some(Coordinate::ORIGIN)
            }
            .to_string(),
            "no enemy unit to attack at (0, 0, 0)"
        );
    }

    #[test]
    fn codes_and_severity() {
        let rejection = Rejection::InsufficientMovement {
            required: 2,
            remaining: 1,
        };
        assert_eq!(rejection.error_code(), "INSUFFICIENT_MOVEMENT");
        assert!(rejection.severity().is_recoverable());
        assert_eq!(
            Rejection::UnknownUnitType(UnitKind::Worker).severity(),
            ErrorSeverity::Validation
        );
    }
}
