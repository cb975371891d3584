//! Domain-level error type for structural contract violations.
//!
//! User-facing rejections (an illegal move, a disallowed cut) are *not*
//! errors: they come back as result values carrying an [`ErrorCode`].
//! `DomainError` is reserved for callers breaking the engine's contract,
//! such as an out-of-range player index or an impossible tracker state.

use thiserror::Error;

use super::error_code::ErrorCode;

/// Structural validation failures the engine can raise.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Tracker constructed with a player count outside 2..=4
    InvalidPlayerCount,
    /// Player index does not address a seat at this table
    PlayerIndexOutOfRange,
    /// A player cannot cut their own play
    SelfCut,
    /// Penalty arithmetic would overflow the tally
    PenaltyOverflow,
    /// More single heos tracked than a deck can produce in a run
    TooManyTrackedHeos,
    /// Heo-only operation given a card that is not rank 2
    NotAHeo,
    /// Comparator given combinations of different kinds
    CombinationKindMismatch,
    /// Card token could not be parsed
    ParseCard,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Contract violation by the caller
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }

    pub fn kind(&self) -> &ValidationKind {
        match self {
            DomainError::Validation(kind, _) => kind,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            DomainError::Validation(_, detail) => detail,
        }
    }

    /// Stable error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self.kind() {
            ValidationKind::InvalidPlayerCount => ErrorCode::InvalidPlayerCount,
            ValidationKind::PlayerIndexOutOfRange => ErrorCode::PlayerIndexOutOfRange,
            ValidationKind::SelfCut => ErrorCode::SelfCut,
            ValidationKind::PenaltyOverflow => ErrorCode::PenaltyOverflow,
            ValidationKind::TooManyTrackedHeos => ErrorCode::TooManyTrackedHeos,
            ValidationKind::NotAHeo => ErrorCode::NotAHeo,
            ValidationKind::CombinationKindMismatch => ErrorCode::CombinationKindMismatch,
            ValidationKind::ParseCard => ErrorCode::ParseCard,
            ValidationKind::Other(_) => ErrorCode::ValidationError,
        }
    }
}
