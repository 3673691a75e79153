//! Playing cards: suits, ranks, and the Durak beating relation.
//!
//! A `Card` is an immutable (rank, suit) value. The only mutable bit is the
//! derived trump flag, set once per game when the trump suit is fixed.
//!
//! ## Comparison
//!
//! ```
//! use durak_sim::cards::{Card, Comparison, Rank, Suit};
//!
//! let mut six = Card::new(Rank::Six, Suit::Hearts);
//! let mut ace = Card::new(Rank::Ace, Suit::Spades);
//! six.mark_trump(Suit::Hearts);
//! ace.mark_trump(Suit::Hearts);
//!
//! // Any trump beats any non-trump.
//! assert_eq!(ace.compare(&six), Comparison::Less);
//! assert_eq!(six.compare(&ace), Comparison::More);
//! ```

use serde::{Deserialize, Serialize};

/// Card suit, in registry construction order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Diamonds,
    Clubs,
    Hearts,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts];

    /// Upper-case English label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Suit::Spades => "SPADES",
            Suit::Diamonds => "DIAMONDS",
            Suit::Clubs => "CLUBS",
            Suit::Hearts => "HEARTS",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Suit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown suit '{s}'"))
    }
}

/// Card rank. Discriminants are the numeric values 2..=14.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
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
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
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
    ];

    /// Numeric value, 2 (Two) through 14 (Ace).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank with the given numeric value, or `None` outside 2..=14.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Rank::ALL.into_iter().find(|r| r.value() == value)
    }

    /// Upper-case English label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Two => "TWO",
            Rank::Three => "THREE",
            Rank::Four => "FOUR",
            Rank::Five => "FIVE",
            Rank::Six => "SIX",
            Rank::Seven => "SEVEN",
            Rank::Eight => "EIGHT",
            Rank::Nine => "NINE",
            Rank::Ten => "TEN",
            Rank::Jack => "JACK",
            Rank::Queen => "QUEEN",
            Rank::King => "KING",
            Rank::Ace => "ACE",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of comparing two cards under the current trump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    /// Same rank and suit: the card compared with itself.
    Clone,
    /// Lower rank of the same suit, or non-trump against trump.
    Less,
    /// Same rank, different suit, neither is trump.
    Equal,
    /// Inverse of `Less`.
    More,
    /// Different suit and rank, neither trump: no relation holds.
    Unrelated,
}

impl Comparison {
    /// The comparison seen from the other card.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Comparison::Less => Comparison::More,
            Comparison::More => Comparison::Less,
            other => other,
        }
    }
}

/// Identity of a card: suit and rank, never location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardKey {
    pub suit: Suit,
    pub rank: Rank,
}

/// A playing card with its derived trump flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
    is_trump: bool,
}

impl Card {
    /// Create a non-trump card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            is_trump: false,
        }
    }

    /// Identity used for lookup and equality across snapshots.
    #[must_use]
    pub const fn key(&self) -> CardKey {
        CardKey {
            suit: self.suit,
            rank: self.rank,
        }
    }

    #[must_use]
    pub const fn is_trump(&self) -> bool {
        self.is_trump
    }

    /// Derive the trump flag from the game's trump suit. Idempotent.
    pub fn mark_trump(&mut self, trump: Suit) -> bool {
        self.is_trump = self.suit == trump;
        self.is_trump
    }

    /// Compare against `other`.
    ///
    /// Checks run in a fixed order: clone, less, equal, more. A non-trump
    /// card is always `Less` than a trump; among two trumps or two cards of
    /// one suit, rank decides.
    #[must_use]
    pub fn compare(&self, other: &Card) -> Comparison {
        if self.key() == other.key() {
            Comparison::Clone
        } else if self.is_less(other) {
            Comparison::Less
        } else if self.is_equal(other) {
            Comparison::Equal
        } else if self.is_more(other) {
            Comparison::More
        } else {
            Comparison::Unrelated
        }
    }

    /// True when `self` is strictly weaker than `other`.
    #[must_use]
    pub fn is_less(&self, other: &Card) -> bool {
        (self.rank < other.rank && self.suit == other.suit) || (!self.is_trump && other.is_trump)
    }

    /// True when `self` is strictly stronger than `other`.
    #[must_use]
    pub fn is_more(&self, other: &Card) -> bool {
        (self.rank > other.rank && self.suit == other.suit) || (self.is_trump && !other.is_trump)
    }

    #[must_use]
    pub fn is_equal(&self, other: &Card) -> bool {
        self.rank == other.rank && self.suit != other.suit && !self.is_trump && !other.is_trump
    }

    /// True when `defense` may cover this attack card.
    #[must_use]
    pub fn is_beaten_by(&self, defense: &Card) -> bool {
        self.compare(defense) == Comparison::Less
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)?;
        if self.is_trump {
            f.write_str(" (trump)")?;
        }
        Ok(())
    }
}
