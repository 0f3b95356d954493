//! Error types for game operations.

use thiserror::Error;

use crate::game::GameState;

/// A card was requested from an exhausted deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the deck is empty")]
pub struct EmptyDeckError;

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The operation is not valid in the current game state.
    #[error("operation not valid in the {0:?} state")]
    InvalidState(GameState),
    /// The deck cannot supply the cards the operation needs.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}
