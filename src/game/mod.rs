//! Game session and round state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, CardVisibility};
use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::Hand;
use crate::options::{SessionOptions, ShuffleMode};
use crate::view::TableView;

mod actions;
mod dealer;
pub mod state;

pub use state::{Action, GameState, Seat};

/// A single-table blackjack session.
///
/// The session owns the deck, both hands, the round phase and the random
/// number generator. Drive it with [`take_turn`](Self::take_turn) or
/// [`apply`](Self::apply) and read it back through [`view`](Self::view).
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Session options.
    options: SessionOptions,
    /// Current round phase.
    state: GameState,
    /// Cards not dealt yet this round.
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: Hand,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl GameSession {
    /// Creates a new session with the given seed and starts the first round.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{GameSession, GameState, SessionOptions};
    ///
    /// let session = GameSession::new(SessionOptions::default(), 42);
    /// assert_eq!(session.state(), GameState::Init);
    /// assert_eq!(session.deck().remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: SessionOptions, seed: u64) -> Self {
        let mut session = Self {
            options,
            state: GameState::Init,
            deck: Deck::new(),
            player: Hand::new(),
            dealer: Hand::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        session.reset_round();
        session
    }

    /// Starts a new round.
    ///
    /// Clears both hands, replaces the deck with a freshly shuffled one and
    /// returns to [`GameState::Init`].
    pub fn reset_round(&mut self) {
        self.player.reset();
        self.dealer.reset();

        let mut deck = Deck::new();
        match self.options.shuffle {
            ShuffleMode::FullRange => deck.shuffle(&mut self.rng),
            ShuffleMode::Unbiased => deck.shuffle_unbiased(&mut self.rng),
        }
        self.deck = deck;
        self.state = GameState::Init;

        log::debug!("new round, deck shuffled ({:?})", self.options.shuffle);
    }

    /// Replaces the current deck, e.g. to replay a known card order.
    ///
    /// Hands and state are left as they are.
    pub fn replace_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }

    /// Moves the top card of the deck into the hand at `seat`.
    ///
    /// The hand is checked before drawing so a full hand never costs a card.
    fn deal(&mut self, seat: Seat, visibility: CardVisibility) -> Result<Card, DealError> {
        let hand = match seat {
            Seat::Player => &mut self.player,
            Seat::Dealer => &mut self.dealer,
        };

        if hand.is_full() {
            return Err(DealError::HandFull);
        }

        let card = self.deck.draw().ok_or(DealError::EmptyDeck)?;
        hand.add_card(card, visibility)?;

        Ok(card)
    }

    /// Deals a card, logging instead of failing when it cannot be dealt.
    fn deal_or_warn(&mut self, seat: Seat, visibility: CardVisibility) -> bool {
        match self.deal(seat, visibility) {
            Ok(_) => true,
            Err(err) => {
                log::warn!("cannot deal to {seat}: {err}");
                false
            }
        }
    }

    /// Sets the round phase.
    fn transition(&mut self, next: GameState) {
        if self.state != next {
            log::debug!("{:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the hand at `seat`.
    #[must_use]
    pub const fn hand(&self, seat: Seat) -> &Hand {
        match seat {
            Seat::Player => &self.player,
            Seat::Dealer => &self.dealer,
        }
    }

    /// Returns a read-only view of the table for presentation.
    #[must_use]
    pub const fn view(&self) -> TableView<'_> {
        TableView::new(self.state, &self.deck, &self.player, &self.dealer)
    }
}
