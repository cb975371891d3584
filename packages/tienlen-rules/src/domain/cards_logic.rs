//! Card logic: heo penalties, hand membership, four-heo detection

use super::cards_types::{Card, Rank};
use crate::errors::domain::{DomainError, ValidationKind};

/// Penalty points for a single heo: 1 for ♠/♣, 2 for ♦/♥.
pub fn heo_penalty_points(card: Card) -> Result<u32, DomainError> {
    if !card.is_heo() {
        return Err(DomainError::validation(
            ValidationKind::NotAHeo,
            format!("Card {card} is not a heo"),
        ));
    }
    Ok(card.points())
}

/// Sum of heo points for a run of heos.
pub fn heo_penalty_sum(cards: &[Card]) -> Result<u32, DomainError> {
    cards.iter().map(|&c| heo_penalty_points(c)).sum()
}

/// Cards from `selected` that `hand` cannot cover, respecting multiplicity.
///
/// Empty result means every selected card is in the hand.
pub fn missing_from_hand(hand: &[Card], selected: &[Card]) -> Vec<Card> {
    let mut available: Vec<Card> = hand.to_vec();
    let mut missing = Vec::new();
    for card in selected {
        match available.iter().position(|c| c == card) {
            Some(pos) => {
                available.swap_remove(pos);
            }
            None => missing.push(*card),
        }
    }
    missing
}

/// Exactly the four heos. The detector rejects this set; callers treat it as
/// an instant-win condition.
pub fn is_four_heos(cards: &[Card]) -> bool {
    if cards.len() != 4 || !cards.iter().all(|c| c.rank == Rank::Two) {
        return false;
    }
    missing_from_hand(cards, &crate::domain::rules::ALL_HEOS).is_empty()
}
