//! Error types for dealing operations.

use thiserror::Error;

/// Errors that can occur while dealing a card.
///
/// Both are recoverable: the deal becomes a no-op and the round simply cannot
/// progress through that action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
    /// The hand cannot hold more cards.
    #[error("hand cannot hold more cards")]
    HandFull,
}
