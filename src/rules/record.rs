//! Per-turn history records.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;

/// What happened in one executed turn.
///
/// Used for:
/// - Scenario tests (attacker/defender pairings)
/// - Debug output
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number, starting at 1.
    pub turn: u32,

    /// Seat that opened the attack.
    pub attacker: PlayerId,

    /// Seat that defended.
    pub defender: PlayerId,

    /// Cards in the attack pile when defense started.
    pub attacked: Vec<Card>,

    /// Attack cards the defender covered, in order.
    pub beaten: Vec<Card>,

    /// Cards thrown in after a successful defense.
    pub thrown_in: Vec<Card>,

    /// The defender picked up the table.
    pub took: bool,
}

impl TurnRecord {
    /// Create an empty record for a pairing.
    #[must_use]
    pub fn new(turn: u32, attacker: PlayerId, defender: PlayerId) -> Self {
        Self {
            turn,
            attacker,
            defender,
            attacked: Vec::new(),
            beaten: Vec::new(),
            thrown_in: Vec::new(),
            took: false,
        }
    }

    /// The attacker/defender pair.
    #[must_use]
    pub fn pairing(&self) -> (PlayerId, PlayerId) {
        (self.attacker, self.defender)
    }
}
