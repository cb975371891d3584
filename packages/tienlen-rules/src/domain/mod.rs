//! Domain layer: pure game rules, no I/O.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod combinations;
pub mod comparison;
pub mod cutting;
pub mod heo_tracking;
pub mod hints;
pub mod move_validation;
pub mod penalty;
pub mod rules;
pub mod vong;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_cutting;

// Re-exports for ergonomics
pub use cards_logic::{heo_penalty_points, is_four_heos};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{full_deck, Card, Rank, Suit, THREE_OF_SPADES};
pub use combinations::{detect_combination, CardCombination, CombinationKind};
pub use comparison::{beats, compare_combinations};
pub use cutting::{can_cut, CutChain, CutResult, CutRule};
pub use heo_tracking::SingleHeoTrackingState;
pub use hints::legal_plays;
pub use move_validation::{is_valid_move, MoveMetadata, MoveValidationContext, MoveValidationResult};
pub use penalty::{PenaltySummary, PenaltyTrackingState, PlayerPenalties};
pub use rules::PlayerId;
pub use vong::VongState;
