//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g. [`Rejection`](crate::action::Rejection),
//! [`InvariantViolation`](crate::state::InvariantViolation)) live next to the
//! code that raises them. This module provides the classification shared by
//! all of them.
//!
//! # Design Principles
//!
//! - **Type Safety**: each layer has its own error type with specific variants
//! - **Rejections are values**: the validator never panics on untrusted ids
//! - **Severity Classification**: errors are categorized for recovery strategies

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the same unit may succeed with a different action or target
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistency; indicates a bug
/// - **Fatal**: unrecoverable, the snapshot cannot be trusted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Examples: target out of range, not enough movement left
    Recoverable,

    /// Examples: unknown actor, unsupported action
    Validation,

    /// Examples: resource underflow after validation passed
    Internal,

    /// Examples: state invariant broken before the action ran
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Error codes are stable strings suitable for logs and client mapping
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
