use crate::error::{EmptyDeckError, GameError};
use crate::hand::BLACKJACK;

use super::{Game, GameState};

/// Cards dealt at the start of a round: two each.
const INITIAL_CARDS: usize = 4;

impl Game {
    /// Starts a new round.
    ///
    /// Both hands are replaced with empty ones, then two cards each are dealt
    /// alternately: player, dealer, player, dealer.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] if a round is in progress, or
    /// [`GameError::EmptyDeck`] if fewer than four cards remain. Nothing is
    /// changed when an error is returned.
    pub fn start_round(&mut self) -> Result<(), GameError> {
        if self.state.in_progress() {
            return Err(GameError::InvalidState(self.state));
        }

        if self.deck.len() < INITIAL_CARDS {
            tracing::warn!(
                remaining = self.deck.len(),
                "not enough cards to start a round"
            );
            return Err(EmptyDeckError.into());
        }

        self.player.reset_hand();
        self.dealer.reset_hand();

        for _ in 0..2 {
            let card = self.draw()?;
            self.player.take(card);
            let card = self.draw()?;
            self.dealer.take(card);
        }

        self.state = GameState::PlayerTurn;

        tracing::info!(
            player_value = self.player.value(),
            dealer_value = self.dealer.value(),
            remaining = self.deck.len(),
            "round started"
        );

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Returns `true` if the player busted. A bust ends the round at once; the
    /// dealer does not play.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] outside the player's turn, or
    /// [`GameError::EmptyDeck`] if the deck is exhausted.
    pub fn hit(&mut self) -> Result<bool, GameError> {
        self.ensure_state(GameState::PlayerTurn)?;

        let card = self.draw()?;
        self.player.take(card);

        let value = self.player.value();
        tracing::debug!(card = %card, value, "player hits");

        let bust = value > BLACKJACK;
        if bust {
            tracing::info!(value, "player busts");
            self.state = GameState::RoundOver;
        }

        Ok(bust)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The turn passes to the dealer; drive it with [`Game::dealer_hit`] or
    /// [`Game::dealer_play`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] outside the player's turn.
    pub fn stand(&mut self) -> Result<(), GameError> {
        self.ensure_state(GameState::PlayerTurn)?;

        tracing::info!(value = self.player.value(), "player stands");
        self.state = GameState::DealerTurn;

        Ok(())
    }
}
