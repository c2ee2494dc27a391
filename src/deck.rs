//! The 52-card deck.

use core::fmt;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, RANK_COUNT, Suit};

/// A single 52-card deck.
///
/// Cards live in a fixed array; only the first [`remaining`](Self::remaining)
/// entries are still in the deck and the last of those is the top card.
/// Equality and `Debug` only look at those remaining cards.
#[derive(Clone)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    len: usize,
}

impl Deck {
    /// Creates an unshuffled deck in suit-major, rank-minor order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = [Card::new(Suit::Hearts, 0); DECK_SIZE];
        let faces = Suit::ALL
            .into_iter()
            .flat_map(|suit| (0..RANK_COUNT).map(move |rank| Card::new(suit, rank)));

        for (slot, card) in cards.iter_mut().zip(faces) {
            *slot = card;
        }

        Self {
            cards,
            len: DECK_SIZE,
        }
    }

    /// Creates a deck that deals `draws` in the given order.
    ///
    /// Returns `None` if more than [`DECK_SIZE`] cards are given or if the
    /// same suit and rank appears twice.
    ///
    /// ```
    /// use bjtable::{Card, Deck, Suit};
    ///
    /// let mut deck = Deck::from_draw_order(&[
    ///     Card::new(Suit::Hearts, 0),
    ///     Card::new(Suit::Spades, 12),
    /// ])
    /// .unwrap();
    /// assert_eq!(deck.draw().map(|c| c.rank), Some(0));
    /// assert_eq!(deck.draw().map(|c| c.rank), Some(12));
    /// assert!(deck.draw().is_none());
    /// ```
    #[must_use]
    pub fn from_draw_order(draws: &[Card]) -> Option<Self> {
        if draws.len() > DECK_SIZE {
            return None;
        }

        let repeated = draws
            .iter()
            .enumerate()
            .any(|(i, card)| draws[i + 1..].iter().any(|other| card.same_face(other)));
        if repeated {
            return None;
        }

        let mut cards = [Card::new(Suit::Hearts, 0); DECK_SIZE];
        for (slot, card) in cards.iter_mut().zip(draws.iter().rev()) {
            *slot = *card;
        }

        Some(Self {
            cards,
            len: draws.len(),
        })
    }

    /// Shuffles the remaining cards in place.
    ///
    /// Walks `i` from the top down to 1 and swaps it with an index drawn from
    /// the whole remaining range, not just `0..=i`. This keeps the dealing
    /// order of earlier releases for a given seed but is not a uniform
    /// permutation; see [`shuffle_unbiased`](Self::shuffle_unbiased).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let len = self.len;
        for i in (1..len).rev() {
            let j = rng.random_range(0..len);
            self.cards.swap(i, j);
        }
    }

    /// Shuffles the remaining cards with the textbook Fisher-Yates walk.
    pub fn shuffle_unbiased<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.len).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// Removes and returns the top card.
    ///
    /// Returns `None` once the deck is empty.
    pub const fn draw(&mut self) -> Option<Card> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        Some(self.cards[self.len])
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.len
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards[..self.len]
    }
}

impl PartialEq for Deck {
    fn eq(&self, other: &Self) -> bool {
        self.cards() == other.cards()
    }
}

impl Eq for Deck {}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deck")
            .field("remaining", &self.len)
            .field("cards", &self.cards())
            .finish()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn shuffle_swaps_across_full_range() {
        let mut deck = Deck::new();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(7));

        let mut expected = Deck::new().cards;
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for i in (1..DECK_SIZE).rev() {
            let j = rng.random_range(0..DECK_SIZE);
            expected.swap(i, j);
        }

        assert_eq!(deck.cards, expected);
    }

    #[test]
    fn shuffle_only_touches_remaining_cards() {
        let mut deck = Deck::new();
        for _ in 0..50 {
            deck.draw();
        }
        let before = deck.cards;

        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(3));
        assert_eq!(deck.remaining(), 2);
        assert_eq!(deck.cards[2..], before[2..]);
    }

    #[test]
    fn from_draw_order_rejects_oversized_input() {
        let mut cards = Deck::new().cards().to_vec();
        assert!(Deck::from_draw_order(&cards).is_some());

        cards.push(Card::new(Suit::Clubs, 4));
        assert!(Deck::from_draw_order(&cards).is_none());
    }

    #[test]
    fn equality_ignores_dealt_cards() {
        let mut a = Deck::new();
        let mut b = Deck::new();
        b.cards.swap(0, DECK_SIZE - 1);
        for _ in 0..DECK_SIZE {
            a.draw();
            b.draw();
        }

        assert_eq!(a, b);
        assert_eq!(format!("{a:?}"), "Deck { remaining: 0, cards: [] }");
    }
}
