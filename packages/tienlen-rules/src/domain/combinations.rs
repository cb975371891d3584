//! Combination types and the detector that classifies a set of cards.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::trace;

use super::cards_types::{Card, Rank};
use super::rules::{CONSECUTIVE_PAIRS_LEN, STRAIGHT_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombinationKind {
    Single,
    Pair,
    Triple,
    Straight,
    ConsecutivePairs,
    FourOfKind,
}

impl CombinationKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "SINGLE",
            Self::Pair => "PAIR",
            Self::Triple => "TRIPLE",
            Self::Straight => "STRAIGHT",
            Self::ConsecutivePairs => "CONSECUTIVE_PAIRS",
            Self::FourOfKind => "FOUR_OF_KIND",
        }
    }
}

impl std::fmt::Display for CombinationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CombinationKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Cards sharing one rank (pair, triple, four of a kind). Sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Group {
    cards: Vec<Card>,
}

impl Group {
    pub fn rank(&self) -> Rank {
        self.cards[0].rank
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn highest(&self) -> Card {
        self.cards[self.cards.len() - 1]
    }
}

/// A run over consecutive ranks: one card per rank for a straight, two for
/// consecutive pairs. Sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Run {
    cards: Vec<Card>,
    length: usize,
}

impl Run {
    /// Number of ranks spanned.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn highest(&self) -> Card {
        self.cards[self.cards.len() - 1]
    }
}

/// A recognized play. Only [`detect_combination`] builds these, so the cards
/// always satisfy the kind's structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CardCombination {
    Single(Card),
    Pair(Group),
    Triple(Group),
    Straight(Run),
    ConsecutivePairs(Run),
    FourOfKind(Group),
}

impl CardCombination {
    pub fn kind(&self) -> CombinationKind {
        match self {
            Self::Single(_) => CombinationKind::Single,
            Self::Pair(_) => CombinationKind::Pair,
            Self::Triple(_) => CombinationKind::Triple,
            Self::Straight(_) => CombinationKind::Straight,
            Self::ConsecutivePairs(_) => CombinationKind::ConsecutivePairs,
            Self::FourOfKind(_) => CombinationKind::FourOfKind,
        }
    }

    pub fn cards(&self) -> &[Card] {
        match self {
            Self::Single(card) => std::slice::from_ref(card),
            Self::Pair(g) | Self::Triple(g) | Self::FourOfKind(g) => g.cards(),
            Self::Straight(r) | Self::ConsecutivePairs(r) => r.cards(),
        }
    }

    pub fn highest_card(&self) -> Card {
        match self {
            Self::Single(card) => *card,
            Self::Pair(g) | Self::Triple(g) | Self::FourOfKind(g) => g.highest(),
            Self::Straight(r) | Self::ConsecutivePairs(r) => r.highest(),
        }
    }

    /// Same-kind comparison key: value of the highest card.
    pub fn rank_key(&self) -> u8 {
        self.highest_card().value()
    }

    /// Cards for fixed-size kinds, ranks spanned for runs.
    pub fn length(&self) -> usize {
        match self {
            Self::Straight(r) | Self::ConsecutivePairs(r) => r.len(),
            other => other.cards().len(),
        }
    }

    pub fn is_single_heo(&self) -> bool {
        matches!(self, Self::Single(card) if card.is_heo())
    }

    pub fn is_pair_of_heos(&self) -> bool {
        matches!(self, Self::Pair(g) if g.rank().is_heo())
    }

    pub fn is_triple_heos(&self) -> bool {
        matches!(self, Self::Triple(g) if g.rank().is_heo())
    }

    /// Number of pairs when this is a consecutive-pairs run.
    pub fn consecutive_pairs_len(&self) -> Option<usize> {
        match self {
            Self::ConsecutivePairs(r) => Some(r.len()),
            _ => None,
        }
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards().contains(&card)
    }
}

impl Serialize for CardCombination {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("CardCombination", 5)?;
        s.serialize_field("kind", &self.kind())?;
        s.serialize_field("cards", self.cards())?;
        s.serialize_field("rank", &self.rank_key())?;
        s.serialize_field("highestCard", &self.highest_card())?;
        s.serialize_field("length", &self.length())?;
        s.end()
    }
}

/// Classify `cards` into a combination, most specific kind first.
///
/// Input order does not matter. Duplicate cards never form a combination.
pub fn detect_combination(cards: &[Card]) -> Option<CardCombination> {
    let mut sorted = cards.to_vec();
    sorted.sort();
    if sorted.is_empty() || sorted.windows(2).any(|w| w[0] == w[1]) {
        return None;
    }

    let detected = detect_four_of_kind(&sorted)
        .or_else(|| detect_consecutive_pairs(&sorted))
        .or_else(|| detect_straight(&sorted))
        .or_else(|| detect_group(&sorted, 3).map(CardCombination::Triple))
        .or_else(|| detect_group(&sorted, 2).map(CardCombination::Pair))
        .or_else(|| detect_single(&sorted));

    trace!(
        cards = sorted.len(),
        kind = ?detected.as_ref().map(CardCombination::kind),
        "detect_combination"
    );
    detected
}

fn all_same_rank(sorted: &[Card]) -> bool {
    sorted.iter().all(|c| c.rank == sorted[0].rank)
}

fn detect_single(sorted: &[Card]) -> Option<CardCombination> {
    match sorted {
        [card] => Some(CardCombination::Single(*card)),
        _ => None,
    }
}

fn detect_group(sorted: &[Card], size: usize) -> Option<Group> {
    if sorted.len() != size || !all_same_rank(sorted) {
        return None;
    }
    Some(Group {
        cards: sorted.to_vec(),
    })
}

fn detect_four_of_kind(sorted: &[Card]) -> Option<CardCombination> {
    let group = detect_group(sorted, 4)?;
    if group.rank().is_heo() {
        return None;
    }
    Some(CardCombination::FourOfKind(group))
}

/// Ranks step by exactly one and never include a heo.
fn ranks_consecutive(ranks: &[Rank]) -> bool {
    !ranks.iter().any(|r| r.is_heo())
        && ranks
            .windows(2)
            .all(|w| w[1].index() == w[0].index() + 1)
}

fn detect_straight(sorted: &[Card]) -> Option<CardCombination> {
    if !STRAIGHT_LEN.contains(&sorted.len()) {
        return None;
    }
    let ranks: Vec<Rank> = sorted.iter().map(|c| c.rank).collect();
    if !ranks_consecutive(&ranks) {
        return None;
    }
    Some(CardCombination::Straight(Run {
        cards: sorted.to_vec(),
        length: sorted.len(),
    }))
}

fn detect_consecutive_pairs(sorted: &[Card]) -> Option<CardCombination> {
    if sorted.len() % 2 != 0 || !CONSECUTIVE_PAIRS_LEN.contains(&(sorted.len() / 2)) {
        return None;
    }
    let mut ranks = Vec::with_capacity(sorted.len() / 2);
    for pair in sorted.chunks(2) {
        if pair[0].rank != pair[1].rank {
            return None;
        }
        ranks.push(pair[0].rank);
    }
    // Sorted input plus strictly increasing pair ranks means each rank appears exactly twice.
    if !ranks_consecutive(&ranks) {
        return None;
    }
    Some(CardCombination::ConsecutivePairs(Run {
        cards: sorted.to_vec(),
        length: ranks.len(),
    }))
}
