//! Durak engine: setup, dealing, role selection, win detection.
//!
//! The turn protocol itself lives in `turn.rs`; this file owns the game
//! state and everything around a turn.

use tracing::{debug, info, warn};

use crate::cards::{Card, CardRegistry, Suit};
use crate::core::{GameConfig, GameRng, PlayerId, PlayerMap, SetupError};
use crate::players::Player;
use crate::rules::{GameReport, PlayerResult, TurnRecord};
use crate::zones::OwnerState;

/// Result of a deal or replenish pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DealOutcome {
    /// Everyone was served; carries the new deal cursor.
    Dealt(usize),
    /// The deck ran out before every hand was topped up.
    Exhausted,
    /// The game was already over; nothing was dealt.
    GameOver,
}

/// Result of `DurakGame::play_turn`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnStatus {
    Played(TurnRecord),
    GameOver,
}

/// A full game of Durak between automated players.
#[derive(Clone, Debug)]
pub struct DurakGame {
    pub(super) config: GameConfig,
    id: String,
    pub(super) registry: CardRegistry,
    pub(super) players: PlayerMap<Player>,
    attacker: Option<PlayerId>,
    defender: Option<PlayerId>,
    /// Next deck slot to deal. Never decreases.
    deal_position: usize,
    game_over: bool,
    stalled: bool,
    winners: Vec<PlayerId>,
    total_winner: Option<PlayerId>,
    step: usize,
    turn: u32,
    history: Vec<TurnRecord>,
}

/// Builder for creating a DurakGame.
#[derive(Clone, Debug, Default)]
pub struct DurakGameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
}

impl DurakGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a complete configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn trump(mut self, trump: Suit) -> Self {
        self.config.trump = Some(trump);
        self
    }

    pub fn max_turns(mut self, max_turns: u32) -> Self {
        self.config.max_turns = max_turns;
        self
    }

    /// Use this deck order instead of shuffling. Slot 0 is dealt first.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Build the registry and players, then make the first deal.
    pub fn build(self) -> Result<DurakGame, SetupError> {
        self.config.validate()?;

        let rng = GameRng::new(self.config.seed);
        let registry = match self.deck {
            Some(deck) => CardRegistry::from_order(deck, self.config.trump)?,
            None => CardRegistry::shuffled(&mut rng.for_context("deck"), self.config.trump)?,
        };

        let mut ids = rng.for_context("ids");
        let id = ids.tag("game");
        let players = PlayerMap::new(self.config.player_count, |seat| {
            Player::new(ids.tag("player"), seat)
        });

        debug!(
            game = %id,
            trump = %registry.trump(),
            deck = ?registry.cards().iter().map(ToString::to_string).collect::<Vec<_>>(),
            "shuffled deck"
        );

        let mut game = DurakGame {
            config: self.config,
            id,
            registry,
            players,
            attacker: None,
            defender: None,
            deal_position: 0,
            game_over: false,
            stalled: false,
            winners: Vec::new(),
            total_winner: None,
            step: 0,
            turn: 0,
            history: Vec::new(),
        };
        game.first_deal();

        Ok(game)
    }
}

impl DurakGame {
    /// Deal `hand_size` cards to each player in seat order, straight from
    /// deck slot 0 upward.
    fn first_deal(&mut self) -> usize {
        self.deal_position = 0;
        for seat in self.players.player_ids().collect::<Vec<_>>() {
            for _ in 0..self.config.hand_size {
                self.registry.transfer(self.deal_position, OwnerState::Hand(seat));
                self.deal_position += 1;
            }
            self.refresh(seat);
        }
        self.deal_position
    }

    /// Top every hand up to `hand_size` in seat order.
    ///
    /// Stops at the first card the deck cannot supply and re-checks the win
    /// condition.
    pub fn replenish(&mut self) -> DealOutcome {
        if self.is_game_over() {
            return DealOutcome::GameOver;
        }

        for seat in self.players.player_ids().collect::<Vec<_>>() {
            let held = self.registry.count_with_owner(OwnerState::Hand(seat));
            let missing = self.config.hand_size.saturating_sub(held);

            for _ in 0..missing {
                if self.deal_position >= self.registry.len() {
                    debug!(seat = %seat, "deck exhausted while replenishing");
                    self.refresh(seat);
                    self.is_game_over();
                    return DealOutcome::Exhausted;
                }
                self.registry.transfer(self.deal_position, OwnerState::Hand(seat));
                self.deal_position += 1;
            }
            self.refresh(seat);
        }

        DealOutcome::Dealt(self.deal_position)
    }

    /// Evaluate the win condition.
    ///
    /// Nothing can end before the deck is fully dealt. After that every seat
    /// with an empty hand joins the winners, the first of them becoming the
    /// total winner, and the game ends once at most one seat holds cards.
    pub fn is_game_over(&mut self) -> bool {
        if self.game_over {
            return true;
        }
        if self.deal_position < self.registry.len() {
            return false;
        }

        for seat in self.players.player_ids() {
            let empty = self.registry.count_with_owner(OwnerState::Hand(seat)) == 0;
            if empty && !self.winners.contains(&seat) {
                self.total_winner.get_or_insert(seat);
                self.winners.push(seat);
            }
        }

        if self.players.player_count() - self.winners.len() <= 1 {
            self.game_over = true;
            info!(
                game = %self.id,
                turns = self.turn,
                winners = self.winners.len(),
                "game over"
            );
        }
        self.game_over
    }

    /// Advance the step counter to the next seat that has not won.
    ///
    /// Returns `None` as soon as the game is over.
    fn next_active(&mut self) -> Option<PlayerId> {
        let count = self.players.player_count();
        loop {
            let seat = PlayerId::new((self.step % count) as u8);
            if self.is_game_over() {
                return None;
            }
            self.step += 1;
            if !self.is_winner(seat) {
                return Some(seat);
            }
        }
    }

    /// Run exactly one turn.
    pub fn play_turn(&mut self) -> TurnStatus {
        if self.is_game_over() {
            return TurnStatus::GameOver;
        }
        let Some(attacker) = self.next_active() else {
            return TurnStatus::GameOver;
        };
        let Some(defender) = self.next_active() else {
            return TurnStatus::GameOver;
        };

        self.attacker = Some(attacker);
        self.defender = Some(defender);
        self.turn += 1;

        let record = self.resolve_turn(attacker, defender);
        self.replenish();

        debug!(
            turn = self.turn,
            discard = self.registry.count_with_owner(OwnerState::Discard),
            deck = self.registry.count_with_owner(OwnerState::Deck),
            attack = self.registry.count_with_owner(OwnerState::AttackPile),
            defense = self.registry.count_with_owner(OwnerState::DefensePile),
            attacker = %self.players[attacker].id(),
            defender = %self.players[defender].id(),
            took = record.took,
            "turn"
        );

        self.history.push(record.clone());
        TurnStatus::Played(record)
    }

    /// Play until the win condition holds or `max_turns` is reached.
    pub fn run(&mut self) -> GameReport {
        loop {
            if self.turn >= self.config.max_turns {
                warn!(game = %self.id, turns = self.turn, "turn limit reached");
                self.stalled = true;
                break;
            }
            if self.play_turn() == TurnStatus::GameOver {
                break;
            }
        }
        self.report()
    }

    /// Standings as of now.
    #[must_use]
    pub fn report(&self) -> GameReport {
        let players = self
            .players
            .iter()
            .map(|(seat, player)| PlayerResult {
                seat,
                id: player.id().to_string(),
                total_winner: self.total_winner == Some(seat),
                hand_count: self.registry.count_with_owner(OwnerState::Hand(seat)),
                winner: self.is_winner(seat),
            })
            .collect();

        GameReport {
            game_id: self.id.clone(),
            turns: self.turn,
            stalled: self.stalled,
            players,
        }
    }

    /// Refresh one seat's cached hand.
    pub(super) fn refresh(&mut self, seat: PlayerId) {
        self.players[seat].refresh_hand(&self.registry);
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    #[must_use]
    pub fn player(&self, seat: PlayerId) -> Option<&Player> {
        self.players.get(seat)
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// Seat that attacked in the latest turn.
    #[must_use]
    pub fn attacker(&self) -> Option<PlayerId> {
        self.attacker
    }

    /// Seat that defended in the latest turn.
    #[must_use]
    pub fn defender(&self) -> Option<PlayerId> {
        self.defender
    }

    #[must_use]
    pub fn deal_position(&self) -> usize {
        self.deal_position
    }

    /// The terminal flag, without re-evaluating.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        &self.winners
    }

    #[must_use]
    pub fn is_winner(&self, seat: PlayerId) -> bool {
        self.winners.contains(&seat)
    }

    #[must_use]
    pub fn total_winner(&self) -> Option<PlayerId> {
        self.total_winner
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }
}
