//! A single-table blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`GameSession`] that owns a 52-card [`Deck`], the
//! player and dealer [`Hand`]s and the round phase. An external frame loop
//! drives it with [`GameSession::take_turn`] or [`Action`]s, and renders from
//! the read-only [`TableView`].
//!
//! Scoring is deliberately simple: aces always count as 1, and the player's
//! turn ends automatically at [`BLACKJACK`] or more.
//!
//! # Example
//!
//! ```
//! use bjtable::{Action, GameSession, GameState, SessionOptions};
//!
//! let mut session = GameSession::new(SessionOptions::default(), 42);
//! session.apply(Action::Hit);
//! assert_eq!(session.player_hand().len(), 2);
//! assert_eq!(session.apply(Action::Stand), GameState::DealerTurn);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod scene;
pub mod view;

// Re-export main types
pub use card::{Card, CardVisibility, DECK_SIZE, RANK_COUNT, Suit};
pub use deck::Deck;
pub use error::DealError;
pub use game::{Action, GameSession, GameState, Seat};
pub use hand::{Hand, MAX_HAND_SIZE};
pub use options::{SessionOptions, ShuffleMode};
pub use scene::{Loader, SceneDirector, SceneKind};
pub use view::TableView;

/// Total that ends the player's turn.
pub const BLACKJACK: u8 = 21;
