//! Round state types.

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    /// No round has been dealt yet this session.
    Idle,
    /// Initial cards are going out.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// The round has been paid out. Hands stay visible until the next deal.
    Settled,
}

impl RoundState {
    /// Returns whether a new bet and deal may start from this state.
    #[must_use]
    pub const fn is_between_rounds(self) -> bool {
        matches!(self, Self::Idle | Self::Settled)
    }
}
