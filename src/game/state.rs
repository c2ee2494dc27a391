//! Game state types.

use core::fmt;

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Fresh deck, empty hands, nothing dealt yet.
    #[default]
    Init,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer reveals their hand. The round is over.
    DealerTurn,
}

/// A position at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => f.write_str("player"),
            Self::Dealer => f.write_str("dealer"),
        }
    }
}

/// A player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Deal the initial cards, or one more card to the player.
    Hit,
    /// End the player's turn.
    Stand,
    /// Abandon the current round and start a new one.
    NewGame,
}
