use alloc::vec::Vec;

use crate::card::Card;
use crate::error::GameError;
use crate::hand::BLACKJACK;
use crate::result::Outcome;

use super::{Game, GameState};

/// Dealer stands at or above this total.
const DEALER_STANDS_ON: u8 = 17;

impl Game {
    /// Returns whether the dealer's current hand is done drawing.
    fn dealer_stands(&self) -> bool {
        let hand = self.dealer.hand();
        let value = hand.value();

        if value > DEALER_STANDS_ON {
            return true;
        }
        value == DEALER_STANDS_ON && (!hand.is_soft() || self.options.stand_on_soft_17)
    }

    /// Dealer draws at most one card.
    ///
    /// Returns `true` when a card was drawn and the dealer is still at 21 or
    /// below, so the caller should call again. Returns `false` when the dealer
    /// stops: either the hand already stood without drawing, or the drawn card
    /// busted it. Once `false` is returned the round is over.
    ///
    /// Calling this repeatedly lets a front end pace the dealer's reveal.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] outside the dealer's turn, or
    /// [`GameError::EmptyDeck`] if the dealer must draw from an empty deck.
    pub fn dealer_hit(&mut self) -> Result<bool, GameError> {
        self.ensure_state(GameState::DealerTurn)?;

        if self.dealer_stands() {
            tracing::info!(value = self.dealer.value(), "dealer stands");
            self.state = GameState::RoundOver;
            return Ok(false);
        }

        let card = self.draw()?;
        self.dealer.take(card);

        let value = self.dealer.value();
        tracing::debug!(card = %card, value, "dealer draws");

        if value > BLACKJACK {
            tracing::info!(value, "dealer busts");
            self.state = GameState::RoundOver;
            return Ok(false);
        }

        Ok(true)
    }

    /// Plays the dealer's hand out without pausing.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Same as [`Game::dealer_hit`].
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, GameError> {
        self.ensure_state(GameState::DealerTurn)?;

        let start = self.dealer.hand().len();
        while self.dealer_hit()? {}

        let cards = self.dealer.hand().cards();
        Ok(cards.get(start..).unwrap_or_default().to_vec())
    }

    /// Compares the final hands.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] unless the round is over.
    pub fn determine_winner(&self) -> Result<Outcome, GameError> {
        self.ensure_state(GameState::RoundOver)?;

        let player_value = self.player.value();
        let dealer_value = self.dealer.value();
        let outcome = Outcome::from_values(player_value, dealer_value);

        tracing::info!(player_value, dealer_value, %outcome, "round decided");

        Ok(outcome)
    }
}
