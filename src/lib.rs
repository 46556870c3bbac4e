//! A single-round blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that deals one round from a [`Deck`],
//! takes hit and stay actions, plays the dealer, and reports a
//! [`RoundResult`]. Hands are scored with [`ScoreSet`], which keeps every
//! total an ace-holding hand can reach instead of a soft/hard pair.
//!
//! Standings across rounds are the caller's business: a round only knows who
//! beat the dealer.
//!
//! # Example
//!
//! ```
//! use core::time::Duration;
//! use bjround::{Round, RoundOptions, Shoe};
//!
//! let round = Round::new(Shoe::new(1, 42), RoundOptions::default()).unwrap();
//! while round.is_playing(0) {
//!     let _ = round.hit(0);
//! }
//! round.poll(Duration::ZERO);
//! let result = round.result().unwrap();
//! assert_eq!(result.players.len(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod completion;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
pub mod score;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use completion::RoundCompletion;
pub use deck::{Deck, Shoe, draw_reshuffle_if_needed};
pub use error::{ActionError, ConfigError, RankParseError};
pub use hand::{DEALER_STANDS_ON, DealerHand, PlayerHand};
pub use options::{DEFAULT_TIMEOUT, MAX_PLAYERS, RoundOptions, Timeout, TimeoutAction};
pub use result::{DealerResult, PlayerResult, RoundResult};
pub use round::{Hit, Round, RoundPhase, TimerState};
pub use score::{BLACKJACK, Score, ScoreSet};
