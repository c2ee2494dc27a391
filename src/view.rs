//! Read-only table snapshot for presentation layers.

use crate::deck::Deck;
use crate::game::GameState;
use crate::hand::Hand;

/// A borrowed, read-only view of a [`GameSession`](crate::GameSession).
///
/// Renderers take one of these per frame; holding it keeps the session from
/// being mutated until it is dropped.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    state: GameState,
    deck: &'a Deck,
    player: &'a Hand,
    dealer: &'a Hand,
}

impl<'a> TableView<'a> {
    pub(crate) const fn new(
        state: GameState,
        deck: &'a Deck,
        player: &'a Hand,
        dealer: &'a Hand,
    ) -> Self {
        Self {
            state,
            deck,
            player,
            dealer,
        }
    }

    /// Returns the round phase.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub const fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &'a Hand {
        self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &'a Hand {
        self.dealer
    }

    /// Returns the player's total.
    #[must_use]
    pub const fn player_total(&self) -> u8 {
        self.player.total()
    }

    /// Returns the dealer's total once the dealer turn has started.
    ///
    /// Before that the hole card is hidden and `None` is returned.
    #[must_use]
    pub fn dealer_total(&self) -> Option<u8> {
        (self.state == GameState::DealerTurn).then(|| self.dealer.total())
    }

    /// Returns the total of the dealer's face-up cards.
    #[must_use]
    pub fn dealer_visible_total(&self) -> u8 {
        self.dealer.visible_total()
    }

    /// Returns whether the round has reached the dealer turn.
    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.state == GameState::DealerTurn
    }
}
