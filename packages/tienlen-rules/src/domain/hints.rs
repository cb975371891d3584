//! Play hints: combinations from a hand that the validator would accept.
//!
//! Enumerates one representative per distinct (kind, length, highest card).
//! Lower cards are filled with the weakest suits available, since only the
//! highest card decides same-kind comparisons.

use std::collections::BTreeMap;

use super::cards_types::{Card, Rank};
use super::combinations::{detect_combination, CardCombination};
use super::move_validation::{is_valid_move, MoveValidationContext};
use super::rules::{CONSECUTIVE_PAIRS_LEN, STRAIGHT_LEN};

/// Cards of `hand` grouped by rank, each group sorted ascending.
fn by_rank(hand: &[Card]) -> BTreeMap<Rank, Vec<Card>> {
    let mut groups: BTreeMap<Rank, Vec<Card>> = BTreeMap::new();
    for &card in hand {
        groups.entry(card.rank).or_default().push(card);
    }
    for cards in groups.values_mut() {
        cards.sort();
        cards.dedup();
    }
    groups
}

/// Sets of `size` same-rank cards, one per possible top card.
fn same_rank_candidates(group: &[Card], size: usize) -> Vec<Vec<Card>> {
    if group.len() < size {
        return Vec::new();
    }
    (size - 1..group.len())
        .map(|top| {
            let mut cards = group[..size - 1].to_vec();
            cards.push(group[top]);
            cards
        })
        .collect()
}

/// Runs of `width` cards per rank over `len` consecutive ranks, one per
/// possible top card.
fn run_candidates(groups: &BTreeMap<Rank, Vec<Card>>, len: usize, width: usize) -> Vec<Vec<Card>> {
    let mut out = Vec::new();
    // Runs stop at the ace; heos never take part.
    let run_ranks = Rank::Ace.index() as usize + 1;
    if len > run_ranks {
        return out;
    }
    for start in 0..=run_ranks - len {
        let ranks: Option<Vec<&Vec<Card>>> = (start..start + len)
            .map(|i| {
                Rank::from_index(i as u8)
                    .and_then(|r| groups.get(&r))
                    .filter(|g| g.len() >= width)
            })
            .collect();
        let Some(ranks) = ranks else {
            continue;
        };
        let (top, lower) = match ranks.split_last() {
            Some(split) => split,
            None => continue,
        };
        let base: Vec<Card> = lower
            .iter()
            .flat_map(|g| g[..width].iter().copied())
            .collect();
        for top_cards in same_rank_candidates(top, width) {
            let mut cards = base.clone();
            cards.extend(top_cards);
            out.push(cards);
        }
    }
    out
}

fn candidates(hand: &[Card]) -> Vec<Vec<Card>> {
    let groups = by_rank(hand);
    let mut out: Vec<Vec<Card>> = Vec::new();

    for group in groups.values() {
        for size in 1..=4 {
            out.extend(same_rank_candidates(group, size));
        }
    }
    for len in STRAIGHT_LEN {
        out.extend(run_candidates(&groups, len, 1));
    }
    for len in CONSECUTIVE_PAIRS_LEN {
        out.extend(run_candidates(&groups, len, 2));
    }
    out
}

/// Every distinct play from `hand` that [`is_valid_move`] would accept,
/// weakest first.
pub fn legal_plays(
    hand: &[Card],
    last_play: Option<&CardCombination>,
    is_leading: bool,
    is_initial_round: bool,
) -> Vec<CardCombination> {
    let mut plays: Vec<CardCombination> = candidates(hand)
        .iter()
        .filter_map(|cards| detect_combination(cards))
        .filter(|combo| {
            is_valid_move(&MoveValidationContext {
                cards: combo.cards(),
                hand,
                last_play,
                is_leading,
                is_initial_round,
            })
            .is_valid
        })
        .collect();
    plays.sort_by_key(|c| (c.kind() as u8, c.length(), c.rank_key()));
    plays.dedup();
    plays
}
