use crate::card::CardVisibility;

use super::{GameSession, Seat};

impl GameSession {
    /// Plays the dealer turn.
    ///
    /// Reveals every dealer card. When
    /// [`dealer_stands_on`](crate::SessionOptions::dealer_stands_on) is set,
    /// the dealer then draws face-up cards until the total reaches it or no
    /// card can be dealt.
    pub(super) fn play_dealer(&mut self) {
        self.dealer.reveal_all();

        let Some(stand_on) = self.options.dealer_stands_on else {
            return;
        };

        while self.dealer.total() < stand_on {
            if !self.deal_or_warn(Seat::Dealer, CardVisibility::FaceUp) {
                break;
            }
        }
    }
}
