//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that drives one round at a time:
//! dealing, the player decision loop, the fixed dealer policy, and outcome
//! resolution. Rendering and input collection stay outside the crate; the
//! [`input`] and [`view`] modules define the contracts a driver works
//! against.
//!
//! # Example
//!
//! ```
//! use twentyone::{Game, RoundState};
//!
//! let mut game = Game::new(42);
//! game.deal()?;
//! if game.state() == RoundState::PlayerTurn {
//!     game.stand()?;
//!     game.dealer_play()?;
//! }
//! let result = game.outcome()?;
//! let _ = result.outcome;
//! # Ok::<(), Box<dyn std::error::Error>>(())
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
pub mod input;
pub mod result;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, InvalidInput, InvalidRank, ShowdownError};
pub use game::{Game, RoundState};
pub use hand::Hand;
pub use input::{Decision, NextRound};
pub use result::{RoundOutcome, RoundResult};
pub use view::{DealerView, HandView, TableView};
