//! Property tests for the card ordering and the ownership registry.

use proptest::prelude::*;

use durak_sim::cards::{CardRegistry, Comparison, Suit};
use durak_sim::core::{PlayerId, DECK_SIZE, TABLE_SIZE};
use durak_sim::games::durak::{DurakGame, DurakGameBuilder, TurnStatus};
use durak_sim::zones::OwnerState;

fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

/// Every owner state a game with `players` seats can use.
fn all_owner_states(players: usize) -> Vec<OwnerState> {
    let mut states = vec![
        OwnerState::Deck,
        OwnerState::Discard,
        OwnerState::AttackPile,
        OwnerState::DefensePile,
    ];
    states.extend(PlayerId::all(players).map(OwnerState::Hand));
    states
}

/// Each card sits in exactly one owner state and together they cover the deck.
fn assert_partition(game: &DurakGame, players: usize) {
    let registry = game.registry();
    let mut keys: Vec<_> = all_owner_states(players)
        .into_iter()
        .flat_map(|owner| registry.cards_with_owner(owner).map(|c| c.key()).collect::<Vec<_>>())
        .collect();

    assert_eq!(keys.len(), DECK_SIZE);
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), DECK_SIZE);

    for card in registry.cards() {
        assert!(registry.owner_of(card).is_some());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn compare_is_antisymmetric(a in 0usize..52, b in 0usize..52, trump in suit()) {
        let registry = CardRegistry::from_order(CardRegistry::standard_order(), Some(trump)).unwrap();
        let (x, y) = (registry.cards()[a], registry.cards()[b]);

        prop_assert_eq!(x.compare(&y), y.compare(&x).reverse());
        if a == b {
            prop_assert_eq!(x.compare(&y), Comparison::Clone);
        }
        if x.is_trump() && !y.is_trump() {
            prop_assert_eq!(x.compare(&y), Comparison::More);
        }
    }

    #[test]
    fn registry_stays_partitioned(seed in any::<u64>(), players in 2usize..=8) {
        let mut game = DurakGameBuilder::new()
            .player_count(players)
            .seed(seed)
            .build()
            .unwrap();
        assert_partition(&game, players);

        let mut last_deal = game.deal_position();
        for _ in 0..300 {
            match game.play_turn() {
                TurnStatus::GameOver => break,
                TurnStatus::Played(record) => {
                    prop_assert!(record.attacked.len() + record.thrown_in.len() <= TABLE_SIZE);
                    prop_assert!(!record.attacked.is_empty());
                    prop_assert_ne!(record.attacker, record.defender);
                    prop_assert_eq!(game.registry().count_with_owner(OwnerState::AttackPile), 0);
                    prop_assert_eq!(game.registry().count_with_owner(OwnerState::DefensePile), 0);
                }
            }
            assert_partition(&game, players);
            prop_assert!(game.deal_position() >= last_deal);
            prop_assert!(game.deal_position() <= DECK_SIZE);
            last_deal = game.deal_position();
        }
    }

    #[test]
    fn two_player_games_terminate(seed in any::<u64>()) {
        let mut game = DurakGameBuilder::new().player_count(2).seed(seed).build().unwrap();
        let report = game.run();

        prop_assert!(!report.stalled);
        prop_assert!(game.is_over());
        prop_assert!(report.players.iter().filter(|p| p.hand_count > 0).count() <= 1);
    }

    #[test]
    fn finished_games_have_one_durak(seed in any::<u64>(), players in 2usize..=8) {
        let mut game = DurakGameBuilder::new()
            .player_count(players)
            .seed(seed)
            .build()
            .unwrap();
        let report = game.run();

        if !report.stalled {
            let holders: Vec<_> = report.players.iter().filter(|p| p.hand_count > 0).collect();
            prop_assert!(holders.len() <= 1);
            prop_assert_eq!(game.winners().len(), players - holders.len());
            for p in &report.players {
                prop_assert_eq!(p.winner, p.hand_count == 0);
            }
            prop_assert_eq!(report.total_winner(), game.winners().first().copied());
            prop_assert_eq!(report.durak(), holders.first().map(|p| p.seat));
        }
    }
}

#[test]
fn same_seed_same_game() {
    let run = |seed| {
        DurakGameBuilder::new()
            .player_count(5)
            .seed(seed)
            .build()
            .unwrap()
            .run()
    };

    assert_eq!(run(2024), run(2024));
}
