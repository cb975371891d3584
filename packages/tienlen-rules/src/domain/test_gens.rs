// Proptest generators for domain types.
// Card sets are drawn from the real deck so they never contain duplicates.

use proptest::prelude::*;
use proptest::sample::subsequence;

use crate::domain::cards_types::{full_deck, Card, Rank, Suit};
use crate::domain::rules::ALL_HEOS;

/// Ranks a run may use (three through ace).
const RUN_RANKS: usize = 12;

pub fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

pub fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

pub fn card() -> impl Strategy<Value = Card> {
    (rank(), suit()).prop_map(|(rank, suit)| Card::new(rank, suit))
}

/// Distinct cards in random order.
pub fn unique_cards(size: impl Into<prop::collection::SizeRange>) -> impl Strategy<Value = Vec<Card>> {
    subsequence(full_deck(), size).prop_shuffle()
}

/// A plausible hand: 1 to 13 distinct cards.
pub fn hand() -> impl Strategy<Value = Vec<Card>> {
    unique_cards(1..=13)
}

fn rank_at(index: usize) -> Rank {
    Rank::from_index(index as u8).unwrap_or(Rank::Three)
}

/// A straight of exactly `len` ranks.
pub fn straight_of(len: usize) -> impl Strategy<Value = Vec<Card>> {
    (0..=RUN_RANKS - len, prop::collection::vec(suit(), len)).prop_map(move |(start, suits)| {
        suits
            .into_iter()
            .enumerate()
            .map(|(i, suit)| Card::new(rank_at(start + i), suit))
            .collect()
    })
}

pub fn straight() -> impl Strategy<Value = Vec<Card>> {
    (3usize..=12).prop_flat_map(straight_of)
}

/// Consecutive pairs of exactly `pairs` ranks.
pub fn consecutive_pairs_of(pairs: usize) -> impl Strategy<Value = Vec<Card>> {
    let suit_pair = subsequence(Suit::ALL.to_vec(), 2);
    (
        0..=RUN_RANKS - pairs,
        prop::collection::vec(suit_pair, pairs),
    )
        .prop_map(move |(start, suit_pairs)| {
            suit_pairs
                .into_iter()
                .enumerate()
                .flat_map(|(i, suits)| {
                    let rank = rank_at(start + i);
                    suits.into_iter().map(move |s| Card::new(rank, s))
                })
                .collect()
        })
}

pub fn consecutive_pairs() -> impl Strategy<Value = Vec<Card>> {
    (3usize..=6).prop_flat_map(consecutive_pairs_of)
}

/// `size` cards of one rank.
pub fn same_rank(size: usize) -> impl Strategy<Value = Vec<Card>> {
    (rank(), subsequence(Suit::ALL.to_vec(), size))
        .prop_map(|(rank, suits)| suits.into_iter().map(|s| Card::new(rank, s)).collect())
}

/// Between 0 and 4 distinct heos in random order.
pub fn heo_run() -> impl Strategy<Value = Vec<Card>> {
    subsequence(ALL_HEOS.to_vec(), 0..=4).prop_shuffle()
}

/// Card sets that detect as something other than a single heo.
pub fn non_single_heo_play() -> impl Strategy<Value = Vec<Card>> {
    prop_oneof![
        (0..RUN_RANKS, suit()).prop_map(|(i, s)| vec![Card::new(rank_at(i), s)]),
        same_rank(2),
        same_rank(3),
        straight(),
        consecutive_pairs(),
    ]
}

/// Two plays of the same shape: pairs, or runs of equal length.
pub fn same_shape_plays() -> impl Strategy<Value = (Vec<Card>, Vec<Card>)> {
    prop_oneof![
        (same_rank(2), same_rank(2)),
        (3usize..=12).prop_flat_map(|len| (straight_of(len), straight_of(len))),
        (3usize..=6).prop_flat_map(|n| (consecutive_pairs_of(n), consecutive_pairs_of(n))),
    ]
}
