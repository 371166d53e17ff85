//! State management errors.
//!
//! [`StateError`] covers scenario setup (adding players, units, cities).
//! [`InvariantViolation`] is raised when a snapshot breaks a structural rule;
//! after a validated action that is always a bug, never a rejection.

use crate::error::{ErrorSeverity, GameError};
use crate::hex::Coordinate;
use crate::state::{CityId, ImprovementLayer, PlayerId, UnitId};

/// Errors that occur while assembling a game state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("player list is full (max: {max})")]
    PlayerListFull { max: usize },

    #[error("player {0} already exists")]
    DuplicatePlayer(PlayerId),

    #[error("player {0} does not exist")]
    UnknownPlayer(PlayerId),

    #[error("unit {0} already exists")]
    DuplicateUnit(UnitId),

    #[error("unit id must be 1..={max} characters (got {len})")]
    InvalidUnitId { len: usize, max: usize },

    #[error("coordinate {coordinate} is not on the map")]
    OffMap { coordinate: Coordinate },

    #[error("coordinate {coordinate} is already occupied by unit {occupant}")]
    Occupied {
        coordinate: Coordinate,
        occupant: UnitId,
    },

    #[error("city {0} already exists")]
    DuplicateCity(CityId),

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Invariant(_) => ErrorSeverity::Fatal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::PlayerListFull { .. } => "STATE_PLAYER_LIST_FULL",
            Self::DuplicatePlayer(_) => "STATE_DUPLICATE_PLAYER",
            Self::UnknownPlayer(_) => "STATE_UNKNOWN_PLAYER",
            Self::DuplicateUnit(_) => "STATE_DUPLICATE_UNIT",
            Self::InvalidUnitId { .. } => "STATE_INVALID_UNIT_ID",
            Self::OffMap { .. } => "STATE_OFF_MAP",
            Self::Occupied { .. } => "STATE_OCCUPIED",
            Self::DuplicateCity(_) => "STATE_DUPLICATE_CITY",
            Self::Invariant(violation) => violation.error_code(),
        }
    }
}

/// Structural rule broken by a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvariantViolation {
    #[error("unit {unit} is missing")]
    UnitMissing { unit: UnitId },

    #[error("no player at index {index}")]
    PlayerMissing { index: usize },

    #[error("no tile at {coordinate}")]
    TileMissing { coordinate: Coordinate },

    #[error("unit {unit} references {coordinate}, which has no tile")]
    UnitOffMap { unit: UnitId, coordinate: Coordinate },

    #[error("unit {unit} is stored under key {key}")]
    UnitKeyMismatch { unit: UnitId, key: UnitId },

    #[error("dead unit {unit} remains on the board")]
    DeadUnitPresent { unit: UnitId },

    #[error("units {first} and {second} share {coordinate}")]
    StackedUnits {
        coordinate: Coordinate,
        first: UnitId,
        second: UnitId,
    },

    #[error("unit {unit} has {hp} hp, above its maximum {max_hp}")]
    HpAboveMax { unit: UnitId, hp: u32, max_hp: u32 },

    #[error("unit {unit} has {remaining} movement left, above its budget {movement}")]
    MovementAboveBudget {
        unit: UnitId,
        remaining: u32,
        movement: u32,
    },

    #[error("unit {unit} would spend {required} movement with {remaining} left")]
    MovementUnderflow {
        unit: UnitId,
        required: u32,
        remaining: u32,
    },

    #[error("player {player} would spend {required} stars with {available} left")]
    ResourceUnderflow {
        player: PlayerId,
        required: u32,
        available: u32,
    },

    #[error("resource counter of player {player} overflowed")]
    ResourceOverflow { player: PlayerId },

    #[error("unit {unit} belongs to unknown player {player}")]
    OrphanedUnit { unit: UnitId, player: PlayerId },

    #[error("{coordinate} holds more than one {layer} improvement")]
    DuplicateImprovement {
        coordinate: Coordinate,
        layer: ImprovementLayer,
    },

    #[error("improvement at {coordinate} has no tile")]
    ImprovementOffMap { coordinate: Coordinate },

    #[error("city {city} at {coordinate} is not marked on its tile")]
    CityTileMismatch { city: CityId, coordinate: Coordinate },
}

impl GameError for InvariantViolation {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        use InvariantViolation::*;
        match self {
            UnitMissing { .. } => "INVARIANT_UNIT_MISSING",
            PlayerMissing { .. } => "INVARIANT_PLAYER_MISSING",
            TileMissing { .. } => "INVARIANT_TILE_MISSING",
            UnitOffMap { .. } => "INVARIANT_UNIT_OFF_MAP",
            UnitKeyMismatch { .. } => "INVARIANT_UNIT_KEY_MISMATCH",
            DeadUnitPresent { .. } => "INVARIANT_DEAD_UNIT_PRESENT",
            StackedUnits { .. } => "INVARIANT_STACKED_UNITS",
            HpAboveMax { .. } => "INVARIANT_HP_ABOVE_MAX",
            MovementAboveBudget { .. } => "INVARIANT_MOVEMENT_ABOVE_BUDGET",
            MovementUnderflow { .. } => "INVARIANT_MOVEMENT_UNDERFLOW",
            ResourceUnderflow { .. } => "INVARIANT_RESOURCE_UNDERFLOW",
            ResourceOverflow { .. } => "INVARIANT_RESOURCE_OVERFLOW",
            OrphanedUnit { .. } => "INVARIANT_ORPHANED_UNIT",
            DuplicateImprovement { .. } => "INVARIANT_DUPLICATE_IMPROVEMENT",
            ImprovementOffMap { .. } => "INVARIANT_IMPROVEMENT_OFF_MAP",
            CityTileMismatch { .. } => "INVARIANT_CITY_TILE_MISMATCH",
        }
    }
}
