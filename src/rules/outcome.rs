//! End-of-game reporting.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Final line for one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerResult {
    pub seat: PlayerId,
    pub id: String,
    /// First seat to empty its hand after the deck ran out.
    pub total_winner: bool,
    pub hand_count: usize,
    pub winner: bool,
}

/// Result of a completed (or abandoned) game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    pub game_id: String,
    pub turns: u32,
    /// The turn bound was hit before the win condition.
    pub stalled: bool,
    pub players: Vec<PlayerResult>,
}

impl GameReport {
    /// Check if a seat is among the winners.
    #[must_use]
    pub fn is_winner(&self, seat: PlayerId) -> bool {
        self.players.iter().any(|p| p.seat == seat && p.winner)
    }

    /// The seat left holding cards, if the game finished.
    #[must_use]
    pub fn durak(&self) -> Option<PlayerId> {
        if self.stalled {
            return None;
        }
        let mut losers = self.players.iter().filter(|p| !p.winner);
        match (losers.next(), losers.next()) {
            (Some(loser), None) => Some(loser.seat),
            _ => None,
        }
    }

    /// The designated total winner.
    #[must_use]
    pub fn total_winner(&self) -> Option<PlayerId> {
        self.players.iter().find(|p| p.total_winner).map(|p| p.seat)
    }
}

impl std::fmt::Display for GameReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "= game over =")?;
        if self.stalled {
            writeln!(f, "= stalled after {} turns =", self.turns)?;
        }
        for p in &self.players {
            writeln!(
                f,
                "= results =  {} {} {} {}",
                p.id, p.total_winner, p.hand_count, p.winner
            )?;
        }
        Ok(())
    }
}
