//! Card parsing from string representations (e.g., "3S", "TD", "10D", "2♥")

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

fn parse_error(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
}

fn parse_rank(token: &str) -> Option<Rank> {
    let rank = match token {
        "3" => Rank::Three,
        "4" => Rank::Four,
        "5" => Rank::Five,
        "6" => Rank::Six,
        "7" => Rank::Seven,
        "8" => Rank::Eight,
        "9" => Rank::Nine,
        "T" | "10" => Rank::Ten,
        "J" => Rank::Jack,
        "Q" => Rank::Queen,
        "K" => Rank::King,
        "A" => Rank::Ace,
        "2" => Rank::Two,
        _ => return None,
    };
    Some(rank)
}

fn parse_suit(ch: char) -> Option<Suit> {
    let suit = match ch {
        'S' | '♠' => Suit::Spades,
        'C' | '♣' => Suit::Clubs,
        'D' | '♦' => Suit::Diamonds,
        'H' | '♥' => Suit::Hearts,
        _ => return None,
    };
    Some(suit)
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Suit is always the last char; the symbol forms are multi-byte.
        let suit_ch = s.chars().last().ok_or_else(|| parse_error(s))?;
        let rank_part = &s[..s.len() - suit_ch.len_utf8()];
        let rank = parse_rank(rank_part).ok_or_else(|| parse_error(s))?;
        let suit = parse_suit(suit_ch).ok_or_else(|| parse_error(s))?;
        Ok(Card { rank, suit })
    }
}

/// Non-panicking helper to parse card tokens (e.g., "3S", "2H") into Card instances.
/// Returns Result<Vec<Card>, DomainError> if any token is invalid.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}

/// Compact token used by the wire format: rank char + suit letter ("TD", "2H").
pub fn to_token(card: Card) -> String {
    let rank = match card.rank {
        Rank::Ten => "T",
        other => other.label(),
    };
    let suit = match card.suit {
        Suit::Spades => 'S',
        Suit::Clubs => 'C',
        Suit::Diamonds => 'D',
        Suit::Hearts => 'H',
    };
    format!("{rank}{suit}")
}
