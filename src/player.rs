//! Hand holders.

use alloc::string::String;

use crate::card::Card;
use crate::hand::Hand;

/// A named party at the table, used for both the player and the dealer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Hand,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the value of the current hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.hand.value()
    }

    /// Replaces the hand with a new empty one.
    pub fn reset_hand(&mut self) {
        self.hand = Hand::new();
    }

    pub(crate) fn take(&mut self, card: Card) {
        self.hand.add_card(card);
    }
}
