#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod errors;
pub mod telemetry;

// Re-exports for public API
pub use domain::{
    can_cut, compare_combinations, detect_combination, is_valid_move, legal_plays, Card,
    CardCombination, CombinationKind, CutResult, MoveValidationContext, MoveValidationResult,
    Rank, Suit,
};
pub use errors::{DomainError, ErrorCode, ValidationKind};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    rules_test_support::logging::init();
}
