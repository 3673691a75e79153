//! Card registry: the single source of truth for where every card is.
//!
//! The `CardRegistry` stores the 52 cards in storage order (the shuffled
//! deck order) and an owner state per card. Every move in the game, from
//! dealing to taking the table, is one or more calls to `transfer`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::card::{Card, CardKey, Rank, Suit};
use crate::core::{GameRng, SetupError, DECK_SIZE};
use crate::zones::{OwnerIndex, OwnerState};

/// Owner states before and after a transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub previous: OwnerState,
    pub new: OwnerState,
}

/// The full card set plus per-card ownership.
///
/// ## Example
///
/// ```
/// use durak_sim::cards::{Card, CardRegistry, Rank, Suit};
/// use durak_sim::core::{GameRng, PlayerId};
/// use durak_sim::zones::OwnerState;
///
/// let mut rng = GameRng::new(42);
/// let mut registry = CardRegistry::shuffled(&mut rng, Some(Suit::Hearts)).unwrap();
///
/// let ace = Card::new(Rank::Ace, Suit::Spades);
/// let hand = OwnerState::Hand(PlayerId::new(0));
/// let moved = registry.transfer_card(&ace, hand).unwrap();
///
/// assert_eq!(moved.previous, OwnerState::Deck);
/// assert_eq!(registry.count_with_owner(hand), 1);
/// ```
#[derive(Clone, Debug)]
pub struct CardRegistry {
    cards: Vec<Card>,
    slots: FxHashMap<CardKey, usize>,
    owners: OwnerIndex,
    trump: Suit,
}

impl CardRegistry {
    /// All 52 cards, suit-major then rank, none marked trump.
    #[must_use]
    pub fn standard_order() -> Vec<Card> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
            .collect()
    }

    /// Build the 52 cards, shuffle them with `rng`, and fix the trump.
    ///
    /// With `trump == None` the suit of the last card after the shuffle wins.
    pub fn shuffled(rng: &mut GameRng, trump: Option<Suit>) -> Result<Self, SetupError> {
        let mut cards = Self::standard_order();
        rng.permute(&mut cards);
        Self::from_order(cards, trump)
    }

    /// Build a registry from an explicit deck order. Everything starts in
    /// the deck.
    ///
    /// Fails unless `cards` holds each of the 52 cards exactly once.
    pub fn from_order(mut cards: Vec<Card>, trump: Option<Suit>) -> Result<Self, SetupError> {
        if cards.len() != DECK_SIZE {
            return Err(SetupError::DeckSize(cards.len()));
        }

        let mut slots = FxHashMap::default();
        for (slot, card) in cards.iter().enumerate() {
            if slots.insert(card.key(), slot).is_some() {
                return Err(SetupError::DuplicateCard(*card));
            }
        }

        let trump = match (trump, cards.last()) {
            (Some(suit), _) => suit,
            (None, Some(last)) => last.suit,
            (None, None) => return Err(SetupError::DeckSize(0)),
        };

        for card in &mut cards {
            card.mark_trump(trump);
        }

        let owners = OwnerIndex::new(cards.len(), OwnerState::Deck);

        Ok(Self {
            cards,
            slots,
            owners,
            trump,
        })
    }

    /// The trump suit, fixed at construction.
    #[must_use]
    pub fn trump(&self) -> Suit {
        self.trump
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards in storage order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Card at a storage slot.
    #[must_use]
    pub fn card(&self, slot: usize) -> Option<&Card> {
        self.cards.get(slot)
    }

    /// Storage slot of a card, by identity.
    #[must_use]
    pub fn find_index(&self, card: &Card) -> Option<usize> {
        self.slots.get(&card.key()).copied()
    }

    /// Owner state of the card at a slot.
    #[must_use]
    pub fn owner_of_slot(&self, slot: usize) -> Option<OwnerState> {
        self.owners.owner_of(slot)
    }

    /// Owner state of a card.
    #[must_use]
    pub fn owner_of(&self, card: &Card) -> Option<OwnerState> {
        self.find_index(card).and_then(|slot| self.owner_of_slot(slot))
    }

    /// Reassign the card at `slot` to `new_owner`.
    ///
    /// Returns `None` if the slot is out of range; the registry is unchanged.
    pub fn transfer(&mut self, slot: usize, new_owner: OwnerState) -> Option<Transfer> {
        let previous = self.owners.move_to(slot, new_owner)?;
        trace!(slot, card = %self.cards[slot], from = %previous, to = %new_owner, "transfer");
        Some(Transfer {
            previous,
            new: new_owner,
        })
    }

    /// Reassign a card, found by identity, to `new_owner`.
    ///
    /// Returns `None` if the card is not in this registry.
    pub fn transfer_card(&mut self, card: &Card, new_owner: OwnerState) -> Option<Transfer> {
        let slot = self.find_index(card)?;
        self.transfer(slot, new_owner)
    }

    /// Cards held by `owner`, in storage order.
    pub fn cards_with_owner(&self, owner: OwnerState) -> impl Iterator<Item = Card> + '_ {
        self.owners
            .slots_with(owner)
            .iter()
            .map(move |&slot| self.cards[slot])
    }

    /// Number of cards held by `owner`.
    #[must_use]
    pub fn count_with_owner(&self, owner: OwnerState) -> usize {
        self.owners.count(owner)
    }

    /// Every owner state that currently holds at least one card.
    pub fn owners(&self) -> impl Iterator<Item = OwnerState> + '_ {
        self.owners.owners()
    }
}
