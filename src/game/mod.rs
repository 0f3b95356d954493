//! Game engine and state management.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::GameError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::player::Player;

mod actions;
mod dealer;
pub mod state;

pub use state::GameState;

/// A single-player blackjack engine.
///
/// The game owns the deck, the player and the dealer. One deck is used for
/// the whole session; it is never reshuffled or refilled, so a session ends
/// when [`Game::start_round`] reports an empty deck.
#[derive(Debug, Clone)]
pub struct Game {
    deck: Deck,
    player: Player,
    dealer: Player,
    options: GameOptions,
    state: GameState,
}

impl Game {
    /// Creates a new game whose deck is shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjgame::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::NotStarted);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_rng(options, &mut rng)
    }

    /// Creates a new game whose deck is shuffled with `rng`.
    #[must_use]
    pub fn with_rng<R: Rng + ?Sized>(options: GameOptions, rng: &mut R) -> Self {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        Self::from_deck(options, deck)
    }

    /// Creates a new game that deals from `deck` exactly as ordered.
    #[must_use]
    pub fn from_deck(options: GameOptions, deck: Deck) -> Self {
        tracing::debug!(cards = deck.len(), "new game");

        Self {
            deck,
            player: Player::new(options.player_name.clone()),
            dealer: Player::new(options.dealer_name.clone()),
            options,
            state: GameState::NotStarted,
        }
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Result<Card, GameError> {
        self.deck.deal().map_err(|err| {
            tracing::warn!(state = ?self.state, "deck exhausted");
            GameError::from(err)
        })
    }

    fn ensure_state(&self, expected: GameState) -> Result<(), GameError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(GameError::InvalidState(self.state))
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the human player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Player {
        &self.dealer
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        self.player.hand()
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        self.dealer.hand()
    }

    /// Returns the value of the player's hand.
    #[must_use]
    pub fn player_value(&self) -> u8 {
        self.player.value()
    }

    /// Returns the value of the dealer's hand.
    #[must_use]
    pub fn dealer_value(&self) -> u8 {
        self.dealer.value()
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
