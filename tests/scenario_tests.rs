//! Fixed-deck scenarios for the turn protocol.
//!
//! Every test here builds its deck by hand, so the outcome of each turn is
//! fully determined and can be asserted exactly.

use durak_sim::cards::{Card, CardRegistry, Rank, Suit};
use durak_sim::core::PlayerId;
use durak_sim::games::durak::{DurakGame, DurakGameBuilder, TurnStatus};
use durak_sim::zones::OwnerState;

/// Deck with `front` dealt first, then the rest in standard order.
fn deck_with(front: &[Card]) -> Vec<Card> {
    let mut deck = front.to_vec();
    deck.extend(
        CardRegistry::standard_order()
            .into_iter()
            .filter(|card| !front.iter().any(|f| f.key() == card.key())),
    );
    deck
}

fn game_with(players: usize, deck: Vec<Card>, trump: Suit) -> DurakGame {
    DurakGameBuilder::new()
        .player_count(players)
        .trump(trump)
        .with_deck(deck)
        .build()
        .unwrap()
}

fn cards(spec: &[(Rank, Suit)]) -> Vec<Card> {
    spec.iter().map(|&(rank, suit)| Card::new(rank, suit)).collect()
}

/// The first three pairings of a four-seat game rotate 0/1, 2/3, 0/1.
#[test]
fn test_first_three_pairings() {
    let mut game = game_with(4, CardRegistry::standard_order(), Suit::Hearts);

    let mut pairings = Vec::new();
    for _ in 0..3 {
        match game.play_turn() {
            TurnStatus::Played(record) => pairings.push(record.pairing()),
            TurnStatus::GameOver => panic!("game cannot end while the deck has cards"),
        }
    }

    let p = PlayerId::new;
    assert_eq!(pairings, vec![(p(0), p(1)), (p(2), p(3)), (p(0), p(1))]);
    assert_eq!(
        game.history().iter().map(|r| r.turn).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

/// Three seats rotate through every attacker/defender combination.
#[test]
fn test_three_seat_rotation() {
    let mut game = game_with(3, CardRegistry::standard_order(), Suit::Hearts);

    let mut pairings = Vec::new();
    for _ in 0..3 {
        if let TurnStatus::Played(record) = game.play_turn() {
            pairings.push(record.pairing());
        }
    }

    let p = PlayerId::new;
    assert_eq!(pairings, vec![(p(0), p(1)), (p(2), p(0)), (p(1), p(2))]);
}

/// A defender with nothing that beats a trump takes the whole table.
#[test]
fn test_defender_without_cover_takes_table() {
    use Rank::*;
    use Suit::*;

    let front = cards(&[
        // Seat 0: trumps only, weakest is NINE of HEARTS
        (Ace, Hearts),
        (King, Hearts),
        (Queen, Hearts),
        (Jack, Hearts),
        (Ten, Hearts),
        (Nine, Hearts),
        // Seat 1: low non-trumps
        (Two, Spades),
        (Three, Spades),
        (Four, Spades),
        (Two, Diamonds),
        (Three, Diamonds),
        (Four, Diamonds),
    ]);
    let mut game = game_with(2, deck_with(&front), Hearts);
    let defender = PlayerId::new(1);

    let TurnStatus::Played(record) = game.play_turn() else {
        panic!("turn should be played");
    };

    assert!(record.took);
    assert!(record.beaten.is_empty());
    assert_eq!(record.attacked.len(), 1);
    assert_eq!(record.attacked[0].key(), Card::new(Nine, Hearts).key());

    let hand = game.player(defender).unwrap().hand();
    assert_eq!(hand.len(), 7);
    for card in &record.attacked {
        assert!(hand.contains(card));
    }
    assert_eq!(
        game.registry().owner_of(&Card::new(Nine, Hearts)),
        Some(OwnerState::Hand(defender))
    );
    // Nothing reached the discard pile.
    assert_eq!(game.registry().count_with_owner(OwnerState::Discard), 0);
}

/// A successful defense discards both piles and both hands are topped up.
#[test]
fn test_successful_defense_discards_table() {
    use Rank::*;
    use Suit::*;

    let front = cards(&[
        (Two, Clubs),
        (Nine, Clubs),
        (Ten, Clubs),
        (Jack, Clubs),
        (Queen, Clubs),
        (King, Clubs),
        // Seat 1 covers TWO of CLUBS with the first beating card: FIVE of CLUBS
        (Seven, Spades),
        (Five, Clubs),
        (Eight, Diamonds),
        (Six, Hearts),
        (Ace, Clubs),
        (Three, Spades),
    ]);
    let mut game = game_with(2, deck_with(&front), Hearts);

    let TurnStatus::Played(record) = game.play_turn() else {
        panic!("turn should be played");
    };

    assert!(!record.took);
    assert_eq!(record.beaten, vec![record.attacked[0]]);
    assert_eq!(game.registry().owner_of(&Card::new(Two, Clubs)), Some(OwnerState::Discard));
    assert_eq!(game.registry().owner_of(&Card::new(Five, Clubs)), Some(OwnerState::Discard));
    assert_eq!(game.registry().owner_of(&Card::new(Six, Hearts)), Some(OwnerState::Hand(PlayerId::new(1))));

    for seat in PlayerId::all(2) {
        assert_eq!(game.player(seat).unwrap().hand().len(), 6);
    }
    assert_eq!(game.deal_position(), 14);
}

/// Throw-ins after a cover land on the table and are discarded with it.
#[test]
fn test_throw_in_after_cover() {
    use Rank::*;
    use Suit::*;

    let front = cards(&[
        // Seat 0 opens with FOUR of SPADES
        (Four, Spades),
        (Jack, Diamonds),
        (Queen, Diamonds),
        (King, Diamonds),
        (Ace, Diamonds),
        (Ace, Spades),
        // Seat 1 covers with SIX of SPADES
        (Six, Spades),
        (Two, Clubs),
        (Three, Clubs),
        (Four, Clubs),
        (Five, Clubs),
        (Seven, Clubs),
        // Seat 2 holds a SIX and a FOUR to throw in
        (Six, Diamonds),
        (Four, Diamonds),
        (Nine, Clubs),
        (Ten, Clubs),
        (Jack, Clubs),
        (Queen, Clubs),
    ]);
    let mut game = game_with(3, deck_with(&front), Hearts);

    let TurnStatus::Played(record) = game.play_turn() else {
        panic!("turn should be played");
    };

    // Seat 2 piled on FOUR of DIAMONDS before the defense.
    assert_eq!(record.attacked.len(), 2);
    assert_eq!(record.attacked[1].key(), Card::new(Four, Diamonds).key());

    // SIX of SPADES covered FOUR of SPADES; seat 2 then threw in SIX of
    // DIAMONDS. FOUR of DIAMONDS had no cover, so the defender took.
    assert_eq!(record.beaten.len(), 1);
    assert_eq!(record.thrown_in.len(), 1);
    assert_eq!(record.thrown_in[0].key(), Card::new(Six, Diamonds).key());
    assert!(record.took);

    let hand = game.player(PlayerId::new(1)).unwrap().hand();
    assert!(hand.contains(&record.thrown_in[0]));
    assert!(hand.contains(&record.attacked[0]));
    assert!(hand.contains(&record.attacked[1]));
}

/// The attack pile never holds more than six cards.
#[test]
fn test_attack_pile_capped() {
    use Rank::*;
    use Suit::*;

    let front = cards(&[
        (Two, Spades),
        (Two, Diamonds),
        (Two, Clubs),
        (Ace, Hearts),
        (King, Hearts),
        (Queen, Hearts),
        // Defender
        (Three, Spades),
        (Four, Spades),
        (Five, Spades),
        (Six, Spades),
        (Seven, Spades),
        (Eight, Spades),
        // Seat 2 with threes to throw in
        (Three, Diamonds),
        (Three, Clubs),
        (Two, Hearts),
        (Nine, Diamonds),
        (Ten, Diamonds),
        (Jack, Diamonds),
        // Seat 3 with more threes
        (Three, Hearts),
        (Four, Diamonds),
        (Four, Clubs),
        (Nine, Spades),
        (Ten, Spades),
        (Jack, Spades),
    ]);
    let mut game = game_with(4, deck_with(&front), Hearts);

    let TurnStatus::Played(record) = game.play_turn() else {
        panic!("turn should be played");
    };

    // Three TWOs from the opener, TWO of HEARTS piled on by seat 2.
    assert_eq!(record.attacked.len(), 4);
    // After THREE of SPADES covers, seat 2 fills the table with its THREEs
    // and seat 3 finds no room.
    assert_eq!(record.thrown_in.len(), 2);
    assert_eq!(record.attacked.len() + record.thrown_in.len(), 6);
    assert!(record.took);
}

/// A complete game on a fixed deck ends with one seat holding cards.
#[test]
fn test_fixed_deck_game_completes() {
    let mut game = game_with(2, CardRegistry::standard_order(), Suit::Hearts);

    let report = game.run();

    assert!(!report.stalled);
    assert!(game.is_over());
    assert_eq!(game.deal_position(), 52);
    assert_eq!(report.players.iter().filter(|p| p.winner).count(), game.winners().len());
    assert_eq!(report.total_winner(), game.winners().first().copied());
}
