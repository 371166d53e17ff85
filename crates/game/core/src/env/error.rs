//! Oracle access errors.

use super::UnitKind;
use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when accessing oracle data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// No definition registered for this unit type.
    #[error("unit type '{0}' is not registered")]
    UnknownUnitType(UnitKind),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            OracleError::UnknownUnitType(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            OracleError::UnknownUnitType(_) => "ORACLE_UNKNOWN_UNIT_TYPE",
        }
    }
}
