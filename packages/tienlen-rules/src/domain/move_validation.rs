//! Move validation façade: one verdict per proposed play.
//!
//! Checks run in a fixed order and stop at the first failure. A rejection is
//! a value, never an error, and carries a stable code plus metadata the
//! orchestrator can relay to the player.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use super::cards_logic::missing_from_hand;
use super::cards_types::{Card, THREE_OF_SPADES};
use super::combinations::{detect_combination, CardCombination, CombinationKind};
use super::comparison::{compare_combinations, ordering_sign};
use crate::errors::error_code::ErrorCode;

/// Everything the validator needs to judge one play.
#[derive(Debug, Clone, Copy)]
pub struct MoveValidationContext<'a> {
    /// Cards the player proposes to play.
    pub cards: &'a [Card],
    /// The player's full hand.
    pub hand: &'a [Card],
    /// Last accepted play in this trick, if any.
    pub last_play: Option<&'a CardCombination>,
    /// Whether the player leads the current trick.
    pub is_leading: bool,
    /// Whether this is the game's very first trick.
    pub is_initial_round: bool,
}

/// Diagnostic details attached to a rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum MoveMetadata {
    MissingCards {
        missing_cards: Vec<Card>,
    },
    RequiredCard {
        required: Card,
    },
    KindMismatch {
        expected: CombinationKind,
        actual: CombinationKind,
    },
    Comparison {
        /// 1, 0 or -1 from the played combination's point of view.
        comparison: i8,
        played_rank: u8,
        last_rank: u8,
        played_length: usize,
        last_length: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
    pub message: String,
    /// The combination the cards form, once detection succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combination: Option<CardCombination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MoveMetadata>,
}

impl MoveValidationResult {
    fn valid(combination: CardCombination) -> Self {
        Self {
            is_valid: true,
            error_code: None,
            message: format!("Valid {}", combination.kind()),
            combination: Some(combination),
            metadata: None,
        }
    }

    fn invalid(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_code: Some(code),
            message: message.into(),
            combination: None,
            metadata: None,
        }
    }

    fn with_combination(mut self, combination: CardCombination) -> Self {
        self.combination = Some(combination);
        self
    }

    fn with_metadata(mut self, metadata: MoveMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Judge a proposed play. Never mutates anything and never fails.
pub fn is_valid_move(ctx: &MoveValidationContext<'_>) -> MoveValidationResult {
    let result = validate(ctx);
    debug!(
        cards = ctx.cards.len(),
        leading = ctx.is_leading,
        initial = ctx.is_initial_round,
        valid = result.is_valid,
        code = ?result.error_code,
        "move validated"
    );
    result
}

fn validate(ctx: &MoveValidationContext<'_>) -> MoveValidationResult {
    if ctx.cards.is_empty() {
        return MoveValidationResult::invalid(ErrorCode::NoCardsSelected, "No cards selected");
    }

    let missing = missing_from_hand(ctx.hand, ctx.cards);
    if !missing.is_empty() {
        let listed: Vec<String> = missing.iter().map(Card::to_string).collect();
        return MoveValidationResult::invalid(
            ErrorCode::CardsNotInHand,
            format!("Cards not in hand: {}", listed.join(", ")),
        )
        .with_metadata(MoveMetadata::MissingCards {
            missing_cards: missing,
        });
    }

    let Some(combination) = detect_combination(ctx.cards) else {
        return MoveValidationResult::invalid(
            ErrorCode::InvalidCombination,
            "Selected cards do not form a valid combination",
        );
    };

    if ctx.is_leading {
        if ctx.is_initial_round && !combination.contains(THREE_OF_SPADES) {
            return MoveValidationResult::invalid(
                ErrorCode::MissingSpade3,
                format!("The first play of the game must include {THREE_OF_SPADES}"),
            )
            .with_combination(combination)
            .with_metadata(MoveMetadata::RequiredCard {
                required: THREE_OF_SPADES,
            });
        }
        return MoveValidationResult::valid(combination);
    }

    let Some(last) = ctx.last_play else {
        return MoveValidationResult::invalid(
            ErrorCode::InvalidState,
            "No previous play to beat while not leading",
        )
        .with_combination(combination);
    };

    if combination.kind() != last.kind() {
        return MoveValidationResult::invalid(
            ErrorCode::CombinationTypeMismatch,
            format!(
                "Must play {} to follow, got {}",
                last.kind(),
                combination.kind()
            ),
        )
        .with_metadata(MoveMetadata::KindMismatch {
            expected: last.kind(),
            actual: combination.kind(),
        })
        .with_combination(combination);
    }

    let ordering = match compare_combinations(&combination, last) {
        Ok(ordering) => ordering,
        Err(err) => {
            return MoveValidationResult::invalid(ErrorCode::InvalidState, err.to_string())
                .with_combination(combination)
        }
    };

    if ordering != Ordering::Greater {
        let metadata = MoveMetadata::Comparison {
            comparison: ordering_sign(ordering),
            played_rank: combination.rank_key(),
            last_rank: last.rank_key(),
            played_length: combination.length(),
            last_length: last.length(),
        };
        return MoveValidationResult::invalid(
            ErrorCode::CombinationTooLow,
            format!(
                "{} does not beat the last play (highest {} vs {})",
                combination.kind(),
                combination.highest_card(),
                last.highest_card()
            ),
        )
        .with_metadata(metadata)
        .with_combination(combination);
    }

    MoveValidationResult::valid(combination)
}
