//! Player and dealer hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, CardVisibility};
use crate::error::DealError;

/// Maximum number of cards a hand can hold.
///
/// With aces counted as 1, any eleven distinct cards total at least
/// [`BLACKJACK`](crate::BLACKJACK): the lowest eleven (four aces, four twos and
/// three threes) make exactly 21.
pub const MAX_HAND_SIZE: usize = 11;

/// Cards held by one seat during a round.
///
/// The running total counts every card, face up or not.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    /// Cards in the hand, in the order they were dealt.
    cards: Vec<Card>,
    /// Sum of card values.
    total: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            total: 0,
        }
    }

    /// Adds a card to the hand with the given visibility.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::HandFull`] if the hand already holds
    /// [`MAX_HAND_SIZE`] cards. The hand is left unchanged.
    pub fn add_card(&mut self, mut card: Card, visibility: CardVisibility) -> Result<(), DealError> {
        if self.is_full() {
            return Err(DealError::HandFull);
        }

        card.visibility = visibility;
        self.total = self.total.saturating_add(card.value());
        self.cards.push(card);

        Ok(())
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the value of every card in the hand.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Returns the value of the face-up cards only.
    #[must_use]
    pub fn visible_total(&self) -> u8 {
        self.cards
            .iter()
            .filter(|card| card.is_face_up())
            .map(Card::value)
            .fold(0, u8::saturating_add)
    }

    /// Turns every card face up.
    pub fn reveal_all(&mut self) {
        for card in &mut self.cards {
            card.visibility = CardVisibility::FaceUp;
        }
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand cannot take another card.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= MAX_HAND_SIZE
    }

    /// Clears the hand for a new round.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.total = 0;
    }
}
