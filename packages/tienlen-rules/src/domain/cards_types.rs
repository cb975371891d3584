//! Core card-related types: Card, Rank, Suit

/// Suits in Tiến Lên order, lowest first: ♠ < ♣ < ♦ < ♥.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Spades,
    Clubs,
    Diamonds,
    Hearts,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Clubs, Suit::Diamonds, Suit::Hearts];

    /// 0-based position in suit order.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
        }
    }
}

/// Ranks in Tiến Lên order: three is lowest, two ("heo") is highest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ];

    /// 0-based position in rank order (three = 0, two = 12).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Rank> {
        Rank::ALL.get(index as usize).copied()
    }

    pub const fn is_heo(self) -> bool {
        matches!(self, Rank::Two)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Total-order value: rank first, then suit. 3♠ = 0, 2♥ = 51.
    pub const fn value(self) -> u8 {
        self.rank.index() * 4 + self.suit.index()
    }

    pub const fn is_heo(self) -> bool {
        self.rank.is_heo()
    }

    /// Penalty weight. Only heos carry points: black heos 1, red heos 2.
    pub const fn points(self) -> u32 {
        match (self.rank, self.suit) {
            (Rank::Two, Suit::Spades | Suit::Clubs) => 1,
            (Rank::Two, Suit::Diamonds | Suit::Hearts) => 2,
            _ => 0,
        }
    }
}

// Ord on Card is the game ordering, so sorting a hand puts it in play strength order.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value().cmp(&other.value())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

pub const THREE_OF_SPADES: Card = Card::new(Rank::Three, Suit::Spades);

/// All 52 cards in ascending value order.
pub fn full_deck() -> Vec<Card> {
    Rank::ALL
        .iter()
        .flat_map(|&rank| Suit::ALL.iter().map(move |&suit| Card { rank, suit }))
        .collect()
}
