//! Error codes for the rules engine.
//!
//! This module defines every code a move or cut verdict can carry, plus one
//! code per structural validation failure. Add new codes here; never pass
//! ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings an
//! orchestrator sees in serialized results.

use core::fmt;

use serde::{Serialize, Serializer};

/// Centralized error codes for the rules engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Move rejections
    /// Nothing was selected
    NoCardsSelected,
    /// Selected cards are missing from the player's hand
    CardsNotInHand,
    /// Selected cards do not form a recognized combination
    InvalidCombination,
    /// First trick of the game must include the three of spades
    MissingSpade3,
    /// Follower has no last play to answer
    InvalidState,
    /// Combination kind differs from the last play
    CombinationTypeMismatch,
    /// Combination does not beat the last play
    CombinationTooLow,

    // Cut rejections
    /// Cutting combination is not a power combination
    CannotCut,
    /// Three heos can never be cut
    ThreeHeoImmune,
    /// Cutter needs vòng first
    VongRequired,
    /// Target is not something this cutter may cut
    InvalidCutTarget,
    /// Same-kind target is not strictly lower
    CutTargetNotLower,

    // Structural validation
    /// General validation error
    ValidationError,
    /// Player count outside 2..=4
    InvalidPlayerCount,
    /// Player index out of range
    PlayerIndexOutOfRange,
    /// Player attempted to cut themself
    SelfCut,
    /// Penalty arithmetic overflowed
    PenaltyOverflow,
    /// More than four single heos tracked
    TooManyTrackedHeos,
    /// Card is not a heo
    NotAHeo,
    /// Comparator received different kinds
    CombinationKindMismatch,
    /// Parse card error
    ParseCard,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Move rejections
            Self::NoCardsSelected => "NO_CARDS_SELECTED",
            Self::CardsNotInHand => "CARDS_NOT_IN_HAND",
            Self::InvalidCombination => "INVALID_COMBINATION",
            Self::MissingSpade3 => "MISSING_SPADE_3",
            Self::InvalidState => "INVALID_STATE",
            Self::CombinationTypeMismatch => "COMBINATION_TYPE_MISMATCH",
            Self::CombinationTooLow => "COMBINATION_TOO_LOW",

            // Cut rejections
            Self::CannotCut => "CANNOT_CUT",
            Self::ThreeHeoImmune => "THREE_HEO_IMMUNE",
            Self::VongRequired => "VONG_REQUIRED",
            Self::InvalidCutTarget => "INVALID_CUT_TARGET",
            Self::CutTargetNotLower => "CUT_TARGET_NOT_LOWER",

            // Structural validation
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::PlayerIndexOutOfRange => "PLAYER_INDEX_OUT_OF_RANGE",
            Self::SelfCut => "SELF_CUT",
            Self::PenaltyOverflow => "PENALTY_OVERFLOW",
            Self::TooManyTrackedHeos => "TOO_MANY_TRACKED_HEOS",
            Self::NotAHeo => "NOT_A_HEO",
            Self::CombinationKindMismatch => "COMBINATION_KIND_MISMATCH",
            Self::ParseCard => "PARSE_CARD",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
