//! Game state types.

/// Round lifecycle.
///
/// `PlayerTurn` and `DealerTurn` are the two halves of a round in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// No round has been dealt yet.
    #[default]
    NotStarted,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// The player stood; the dealer draws.
    DealerTurn,
    /// The round is decided and a new one may be started.
    RoundOver,
}

impl GameState {
    /// Returns whether a round is being played.
    #[must_use]
    pub const fn in_progress(self) -> bool {
        matches!(self, Self::PlayerTurn | Self::DealerTurn)
    }
}
