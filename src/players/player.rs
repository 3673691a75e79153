//! A seat's view of its own hand, plus the built-in play heuristics.
//!
//! The cached hand is a snapshot of the registry. It is only valid right
//! after `refresh_hand`; the registry stays authoritative.

use smallvec::SmallVec;

use crate::cards::{Card, CardRegistry, Comparison, Rank};
use crate::core::PlayerId;
use crate::zones::OwnerState;

/// Small card collection; hands rarely exceed a dozen cards.
pub type CardSet = SmallVec<[Card; 8]>;

/// A participant at the table.
#[derive(Clone, Debug)]
pub struct Player {
    id: String,
    seat: PlayerId,
    hand: CardSet,
}

impl Player {
    /// Create a player with an empty cached hand.
    #[must_use]
    pub fn new(id: impl Into<String>, seat: PlayerId) -> Self {
        Self {
            id: id.into(),
            seat,
            hand: CardSet::new(),
        }
    }

    /// Stable identifier, used in reports.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn seat(&self) -> PlayerId {
        self.seat
    }

    /// The owner state keying this player's hand in the registry.
    #[must_use]
    pub fn owner_state(&self) -> OwnerState {
        OwnerState::Hand(self.seat)
    }

    /// Cached hand, in registry storage order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Overwrite the cached hand from the registry.
    pub fn refresh_hand(&mut self, registry: &CardRegistry) -> &[Card] {
        self.hand.clear();
        self.hand.extend(registry.cards_with_owner(self.owner_state()));
        &self.hand
    }

    /// Every card sharing the rank of the weakest card in hand.
    ///
    /// The weakest card is found by a `Less` chain over the cached hand; the
    /// first card encountered wins ties. An empty hand yields an empty set.
    #[must_use]
    pub fn least_cards(&self) -> CardSet {
        let Some((first, rest)) = self.hand.split_first() else {
            return CardSet::new();
        };

        let weakest = rest.iter().fold(first, |least, card| {
            if card.compare(least) == Comparison::Less {
                card
            } else {
                least
            }
        });

        self.cards_of_rank(weakest.rank, None)
    }

    /// Cached cards matching `rank` or `alt_rank`, in cache order.
    #[must_use]
    pub fn cards_of_rank(&self, rank: Rank, alt_rank: Option<Rank>) -> CardSet {
        self.hand
            .iter()
            .filter(|card| card.rank == rank || Some(card.rank) == alt_rank)
            .copied()
            .collect()
    }
}
