//! The turn protocol.
//!
//! One turn, in strict order:
//! 1. refresh attacker and defender
//! 2. attacker opens with its weakest rank group
//! 3. everyone but the defender piles on cards of the opening rank
//! 4. defender covers each card of the attack snapshot, first match wins
//! 5. after each cover, everyone but the defender may throw in cards of
//!    the two covered ranks
//! 6. the first uncovered card makes the defender take the table, ending
//!    the defense
//! 7. whatever is left on the table is discarded
//!
//! Every step caps the attack pile at `table_size`.

use tracing::trace;

use super::game::DurakGame;
use crate::cards::{Card, Rank};
use crate::core::PlayerId;
use crate::players::CardSet;
use crate::rules::TurnRecord;
use crate::zones::OwnerState;

impl DurakGame {
    /// Run steps 1-7 for one attacker/defender pair.
    pub(super) fn resolve_turn(&mut self, attacker: PlayerId, defender: PlayerId) -> TurnRecord {
        let mut record = TurnRecord::new(self.turn(), attacker, defender);

        self.refresh(attacker);
        self.refresh(defender);

        if let Some(rank) = self.open_attack(attacker) {
            self.pile_on(attacker, defender, rank);
        }

        self.defend(defender, &mut record);
        self.close_turn();

        record
    }

    fn attack_has_room(&self) -> bool {
        self.registry.count_with_owner(OwnerState::AttackPile) < self.config.table_size
    }

    /// Move `cards` to the attack pile until it is full. Returns the cards
    /// actually placed.
    fn place_attack(&mut self, cards: &[Card]) -> CardSet {
        let mut placed = CardSet::new();
        for card in cards {
            if !self.attack_has_room() {
                break;
            }
            if self.registry.transfer_card(card, OwnerState::AttackPile).is_some() {
                placed.push(*card);
            }
        }
        placed
    }

    /// Step 2. Returns the opening rank if at least one card was placed.
    fn open_attack(&mut self, attacker: PlayerId) -> Option<Rank> {
        let opening = self.players[attacker].least_cards();
        let placed = self.place_attack(&opening);
        self.refresh(attacker);

        trace!(seat = %attacker, cards = placed.len(), "opened attack");
        placed.first().map(|card| card.rank)
    }

    /// Step 3.
    fn pile_on(&mut self, attacker: PlayerId, defender: PlayerId, rank: Rank) {
        for seat in self.players.player_ids().collect::<Vec<_>>() {
            if seat == attacker || seat == defender {
                continue;
            }
            self.refresh(seat);
            let matching = self.players[seat].cards_of_rank(rank, None);
            let placed = self.place_attack(&matching);
            self.refresh(seat);

            if !placed.is_empty() {
                trace!(seat = %seat, cards = placed.len(), "piled on");
            }
        }
    }

    /// Steps 4-6 over a snapshot of the attack pile taken once up front.
    fn defend(&mut self, defender: PlayerId, record: &mut TurnRecord) {
        let snapshot: Vec<Card> = self.registry.cards_with_owner(OwnerState::AttackPile).collect();
        record.attacked.clone_from(&snapshot);

        for attack in snapshot {
            let cover = self.players[defender]
                .hand()
                .iter()
                .copied()
                .find(|defense| attack.is_beaten_by(defense));

            let Some(defense) = cover else {
                self.take_table(defender);
                record.took = true;
                return;
            };

            self.registry.transfer_card(&defense, OwnerState::DefensePile);
            if let Some(attacker) = self.attacker() {
                self.refresh(attacker);
            }
            self.refresh(defender);
            record.beaten.push(attack);

            let thrown = self.throw_in(defender, defense.rank, attack.rank);
            record.thrown_in.extend(thrown);
        }
    }

    /// Step 5: non-defenders add cards matching either covered rank.
    fn throw_in(&mut self, defender: PlayerId, defense_rank: Rank, attack_rank: Rank) -> CardSet {
        let mut thrown = CardSet::new();
        for seat in self.players.player_ids().collect::<Vec<_>>() {
            if seat == defender || !self.attack_has_room() {
                continue;
            }
            self.refresh(seat);
            let matching = self.players[seat].cards_of_rank(defense_rank, Some(attack_rank));
            thrown.extend(self.place_attack(&matching));
            self.refresh(seat);
        }
        thrown
    }

    /// Step 6: the defender picks up both piles.
    fn take_table(&mut self, defender: PlayerId) {
        let table: Vec<Card> = self
            .registry
            .cards_with_owner(OwnerState::AttackPile)
            .chain(self.registry.cards_with_owner(OwnerState::DefensePile))
            .collect();

        for card in &table {
            self.registry.transfer_card(card, OwnerState::Hand(defender));
        }
        self.refresh(defender);

        trace!(seat = %defender, cards = table.len(), "took the table");
    }

    /// Step 7: discard everything still on the table.
    fn close_turn(&mut self) -> usize {
        let table: Vec<Card> = self
            .registry
            .cards_with_owner(OwnerState::AttackPile)
            .chain(self.registry.cards_with_owner(OwnerState::DefensePile))
            .collect();

        for card in &table {
            self.registry.transfer_card(card, OwnerState::Discard);
        }
        table.len()
    }
}
