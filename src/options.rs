//! Game configuration options.

use alloc::string::String;

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjgame::GameOptions;
///
/// let options = GameOptions::default()
///     .with_player_name("Alice")
///     .with_stand_on_soft_17(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Display name of the human player.
    pub player_name: String,
    /// Display name of the dealer.
    pub dealer_name: String,
    /// Whether the dealer stands on soft 17. When `false` the dealer hits it.
    pub stand_on_soft_17: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            player_name: String::from("Player"),
            dealer_name: String::from("Dealer"),
            stand_on_soft_17: true,
        }
    }
}

impl GameOptions {
    /// Sets the player's display name.
    ///
    /// # Example
    ///
    /// ```
    /// use bjgame::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_name("Alice");
    /// assert_eq!(options.player_name, "Alice");
    /// ```
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Sets the dealer's display name.
    #[must_use]
    pub fn with_dealer_name(mut self, name: impl Into<String>) -> Self {
        self.dealer_name = name.into();
        self
    }

    /// Sets whether the dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjgame::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert!(!options.stand_on_soft_17);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }
}
