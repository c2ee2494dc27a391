use crate::BLACKJACK;
use crate::card::CardVisibility;

use super::{Action, GameSession, GameState, Seat};

impl GameSession {
    /// Advances the round by one player decision.
    ///
    /// - In [`GameState::Init`] the opening cards are dealt (player, dealer,
    ///   player, dealer) whatever `player_hits` says. The dealer's second card
    ///   stays face down.
    /// - In [`GameState::PlayerTurn`] a hit deals one face-up card to the
    ///   player. Reaching [`BLACKJACK`] or more ends the turn as if the player
    ///   had stood.
    /// - Standing, or any call in [`GameState::DealerTurn`], plays the dealer
    ///   turn within the same call.
    ///
    /// Cards that cannot be dealt are logged and skipped. Returns the state
    /// after the call.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{GameSession, GameState, SessionOptions};
    ///
    /// let mut session = GameSession::new(SessionOptions::default(), 7);
    /// assert_eq!(session.take_turn(true), GameState::PlayerTurn);
    /// assert_eq!(session.take_turn(false), GameState::DealerTurn);
    /// assert!(session.dealer_hand().cards().iter().all(|c| c.is_face_up()));
    /// ```
    pub fn take_turn(&mut self, player_hits: bool) -> GameState {
        let mut player_hits = player_hits;

        loop {
            if self.state == GameState::PlayerTurn && !player_hits {
                self.transition(GameState::DealerTurn);
            }

            match self.state {
                GameState::Init => {
                    self.deal_opening();
                    self.transition(GameState::PlayerTurn);
                    break;
                }
                GameState::PlayerTurn => {
                    self.deal_or_warn(Seat::Player, CardVisibility::FaceUp);

                    if self.player.total() < BLACKJACK {
                        break;
                    }
                    player_hits = false;
                }
                GameState::DealerTurn => {
                    self.play_dealer();
                    break;
                }
            }
        }

        self.state
    }

    /// Applies a player input.
    ///
    /// [`Action::Hit`] and [`Action::Stand`] map onto
    /// [`take_turn`](Self::take_turn); [`Action::NewGame`] resets the round.
    pub fn apply(&mut self, action: Action) -> GameState {
        match action {
            Action::Hit => self.take_turn(true),
            Action::Stand => self.take_turn(false),
            Action::NewGame => {
                self.reset_round();
                self.state
            }
        }
    }

    fn deal_opening(&mut self) {
        self.deal_or_warn(Seat::Player, CardVisibility::FaceUp);
        self.deal_or_warn(Seat::Dealer, CardVisibility::FaceUp);
        self.deal_or_warn(Seat::Player, CardVisibility::FaceUp);
        self.deal_or_warn(Seat::Dealer, CardVisibility::FaceDown);
    }
}
