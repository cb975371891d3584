use std::ops::RangeInclusive;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

pub type PlayerId = u8; // 0..num_players

pub const MIN_PLAYERS: u8 = 2;
pub const MAX_PLAYERS: u8 = 4;

/// Longest run of single heos a deck can produce.
pub const MAX_TRACKED_HEOS: usize = 4;

pub const STRAIGHT_LEN: RangeInclusive<usize> = 3..=12;
pub const CONSECUTIVE_PAIRS_LEN: RangeInclusive<usize> = 3..=6;

/// Flat penalty for cutting any non-heo power combination.
pub const POWER_CUT_PENALTY: u32 = 4;

pub const ALL_HEOS: [Card; 4] = [
    Card::new(Rank::Two, Suit::Spades),
    Card::new(Rank::Two, Suit::Clubs),
    Card::new(Rank::Two, Suit::Diamonds),
    Card::new(Rank::Two, Suit::Hearts),
];

pub fn require_player_count(num_players: u8) -> Result<u8, DomainError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!("Player count must be {MIN_PLAYERS}..={MAX_PLAYERS}, got {num_players}"),
        ));
    }
    Ok(num_players)
}

pub fn require_player_index(num_players: u8, who: PlayerId) -> Result<PlayerId, DomainError> {
    if who >= num_players {
        return Err(DomainError::validation(
            ValidationKind::PlayerIndexOutOfRange,
            format!("Player index {who} out of range for {num_players} players"),
        ));
    }
    Ok(who)
}
