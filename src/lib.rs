//! A single-table blackjack simulator engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs rounds against a dealer:
//! betting through pluggable [`BettingStrategy`] policies, the deal, the
//! blackjack check, player turns, the dealer turn, and settlement.
//!
//! # Example
//!
//! ```
//! use bjsim::{Action, Game, GameOptions};
//!
//! let mut game = Game::new(3, 1000, GameOptions::default(), 42);
//! let result = game
//!     .play_round(|turn| {
//!         if turn.player.hand_value() < 17 {
//!             Action::Hit
//!         } else {
//!             Action::Stand
//!         }
//!     })
//!     .unwrap();
//! assert_eq!(result.players.len(), 3);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod strategy;

// Re-export main types
pub use action::Action;
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{
    ActionError, BetError, DealError, DeckError, ParseActionError, PlayError, ReshuffleError,
    RoundError,
};
pub use game::{Game, GameState, TurnView};
pub use hand::{BLACKJACK_VALUE, Hand};
pub use options::{GameOptions, RoundingMode};
pub use player::{Dealer, Player};
pub use result::{HandOutcome, PlayerResult, RoundResult};
pub use strategy::{BettingStrategy, DefaultBettingStrategy, FlatBettingStrategy};
