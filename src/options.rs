//! Session configuration options.

/// How the deck is shuffled at the start of each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ShuffleMode {
    /// Every swap picks its partner from the whole deck.
    ///
    /// Reproduces the dealing order of the original table for a given seed.
    /// The resulting permutation is slightly biased.
    #[default]
    FullRange,
    /// Textbook Fisher-Yates, uniform over all permutations.
    Unbiased,
}

/// Configuration options for a [`GameSession`](crate::GameSession).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::{SessionOptions, ShuffleMode};
///
/// let options = SessionOptions::default()
///     .with_shuffle(ShuffleMode::Unbiased)
///     .with_dealer_stands_on(Some(17));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionOptions {
    /// Shuffle algorithm used when a round is reset.
    pub shuffle: ShuffleMode,
    /// Total at which the dealer stops drawing during the dealer turn.
    ///
    /// `None` means the dealer only reveals the hole card and never draws.
    pub dealer_stands_on: Option<u8>,
}

impl SessionOptions {
    /// Sets the shuffle algorithm.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{SessionOptions, ShuffleMode};
    ///
    /// let options = SessionOptions::default().with_shuffle(ShuffleMode::Unbiased);
    /// assert_eq!(options.shuffle, ShuffleMode::Unbiased);
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: ShuffleMode) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Sets the total the dealer draws to.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_dealer_stands_on(Some(17));
    /// assert_eq!(options.dealer_stands_on, Some(17));
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: Option<u8>) -> Self {
        self.dealer_stands_on = total;
        self
    }
}
