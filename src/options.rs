//! Game configuration options.

/// Configuration options for a game session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtty::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_bankroll(500)
///     .with_default_bet(25)
///     .with_pause_between_rounds(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Bankroll at the start of the session.
    pub starting_bankroll: usize,
    /// Bet used when the player answers the bet prompt with a blank line.
    pub default_bet: usize,
    /// Whether to wait for a continue command after each round.
    pub pause_between_rounds: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_bankroll: 100,
            default_bet: 10,
            pause_between_rounds: false,
        }
    }
}

impl GameOptions {
    /// Largest starting bankroll that still leaves room to win a bet.
    ///
    /// Bets whose payout would not fit are refused with
    /// [`BetError::TableLimit`](crate::BetError::TableLimit).
    pub const MAX_BANKROLL: usize = usize::MAX / 2;

    /// Returns whether the starting bankroll is between 1 and
    /// [`GameOptions::MAX_BANKROLL`].
    #[must_use]
    pub const fn has_playable_bankroll(&self) -> bool {
        self.starting_bankroll >= 1 && self.starting_bankroll <= Self::MAX_BANKROLL
    }

    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtty::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_bankroll(250);
    /// assert_eq!(options.starting_bankroll, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_bankroll(mut self, amount: usize) -> Self {
        self.starting_bankroll = amount;
        self
    }

    /// Sets the default bet.
    ///
    /// The default is still checked against the bankroll when used.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtty::GameOptions;
    ///
    /// let options = GameOptions::default().with_default_bet(5);
    /// assert_eq!(options.default_bet, 5);
    /// ```
    #[must_use]
    pub const fn with_default_bet(mut self, amount: usize) -> Self {
        self.default_bet = amount;
        self
    }

    /// Sets whether to pause between rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtty::GameOptions;
    ///
    /// let options = GameOptions::default().with_pause_between_rounds(true);
    /// assert!(options.pause_between_rounds);
    /// ```
    #[must_use]
    pub const fn with_pause_between_rounds(mut self, pause: bool) -> Self {
        self.pause_between_rounds = pause;
        self
    }
}
