//! Card types.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];
}

/// Whether a card's face is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardVisibility {
    /// Only the back of the card is shown.
    #[default]
    FaceDown,
    /// Suit and rank are shown.
    FaceUp,
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (0 = Ace, 10 = Jack, 11 = Queen, 12 = King).
    pub rank: u8,
    /// Whether the card is face up.
    pub visibility: CardVisibility,
}

impl Card {
    /// Creates a new face-down card.
    ///
    /// Note: This function does not validate the rank. Values outside 0..=12
    /// are accepted and score as a ten.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            visibility: CardVisibility::FaceDown,
        }
    }

    /// Returns the blackjack value of the card.
    ///
    /// Aces always count as 1.
    ///
    /// ```
    /// use bjtable::{Card, Suit};
    ///
    /// assert_eq!(Card::new(Suit::Spades, 0).value(), 1);
    /// assert_eq!(Card::new(Suit::Spades, 8).value(), 9);
    /// assert_eq!(Card::new(Suit::Spades, 12).value(), 10);
    /// ```
    #[must_use]
    pub const fn value(&self) -> u8 {
        if self.rank < 10 { self.rank + 1 } else { 10 }
    }

    /// Returns whether the card is face up.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        matches!(self.visibility, CardVisibility::FaceUp)
    }

    /// Returns whether two cards have the same suit and rank, ignoring
    /// visibility.
    #[must_use]
    pub fn same_face(&self, other: &Self) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self.suit {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        };
        match self.rank {
            0 => write!(f, "A{suit}"),
            10 => write!(f, "J{suit}"),
            11 => write!(f, "Q{suit}"),
            12 => write!(f, "K{suit}"),
            rank => write!(f, "{}{suit}", u16::from(rank) + 1),
        }
    }
}

/// Number of ranks per suit.
pub const RANK_COUNT: u8 = 13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
