//! A single-player blackjack rule engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals a round from a single
//! 52-card [`Deck`], takes the player's hits and stand, plays the dealer one
//! card at a time and decides the [`Outcome`].
//!
//! # Example
//!
//! ```
//! use bjgame::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.start_round()?;
//! game.stand()?;
//! while game.dealer_hit()? {}
//! assert_eq!(game.state(), GameState::RoundOver);
//! let outcome = game.determine_winner()?;
//! println!("{outcome}");
//! # Ok::<(), bjgame::GameError>(())
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
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{EmptyDeckError, GameError};
pub use game::{Game, GameState};
pub use hand::{BLACKJACK, Hand};
pub use options::GameOptions;
pub use player::Player;
pub use result::Outcome;
