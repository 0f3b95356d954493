//! Round outcomes.

use core::fmt;

use crate::hand::BLACKJACK;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21; the house wins without the dealer playing.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player total beats the dealer's.
    PlayerWins,
    /// Dealer total beats the player's.
    DealerWins,
    /// Equal totals.
    Push,
}

impl Outcome {
    /// Compares final totals.
    ///
    /// A player bust is checked first, so it loses even when the dealer would
    /// also have busted.
    #[must_use]
    pub const fn from_values(player_value: u8, dealer_value: u8) -> Self {
        if player_value > BLACKJACK {
            Self::PlayerBust
        } else if dealer_value > BLACKJACK {
            Self::DealerBust
        } else if player_value > dealer_value {
            Self::PlayerWins
        } else if dealer_value > player_value {
            Self::DealerWins
        } else {
            Self::Push
        }
    }

    /// Returns whether the player won the round.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(self, Self::DealerBust | Self::PlayerWins)
    }

    /// Human-readable description of the outcome.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBust => "player busts, house wins",
            Self::DealerBust => "dealer busts, player wins",
            Self::PlayerWins => "player wins",
            Self::DealerWins => "dealer wins",
            Self::Push => "push/tie",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
