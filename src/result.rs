//! Round outcome, settlement and session summary types.

use crate::hand::BLACKJACK;

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher value).
    Won,
    /// Player loses (player busts or dealer has the higher value).
    Lost,
    /// Equal values; the stake is returned.
    Tied,
}

impl Outcome {
    /// Compares final hand values.
    ///
    /// A busted player loses even if the dealer also busted.
    #[must_use]
    pub const fn determine(player_value: u8, dealer_value: u8) -> Self {
        if player_value > BLACKJACK {
            Self::Lost
        } else if dealer_value > BLACKJACK || player_value > dealer_value {
            Self::Won
        } else if player_value < dealer_value {
            Self::Lost
        } else {
            Self::Tied
        }
    }

    /// Returns the amount credited back to the bankroll for `bet`, or
    /// `None` if a winning payout does not fit in a `usize`.
    #[must_use]
    pub const fn payout(self, bet: usize) -> Option<usize> {
        match self {
            Self::Won => bet.checked_mul(2),
            Self::Lost => Some(0),
            Self::Tied => Some(bet),
        }
    }
}

/// Money movement produced by settling one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// The outcome that was settled.
    pub outcome: Outcome,
    /// The stake at risk, including any double-down.
    pub bet: usize,
    /// The amount credited back to the bankroll.
    pub payout: usize,
    /// The bankroll balance after the payout.
    pub balance: usize,
}

impl Settlement {
    /// Net result of the round (positive = profit, negative = loss).
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "stakes fit in isize")]
    pub const fn net(&self) -> isize {
        self.payout as isize - self.bet as isize
    }
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: u32,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the player doubled down.
    pub doubled: bool,
    /// Money movement for the round.
    pub settlement: Settlement,
}

impl RoundResult {
    /// Returns the round outcome.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.settlement.outcome
    }
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionEnd {
    /// The bankroll reached zero.
    Broke,
    /// The player quit at a prompt between rounds.
    Quit,
    /// The input source ran out of lines.
    InputClosed,
}

/// Final status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Number of rounds that reached settlement.
    pub rounds_played: u32,
    /// Bankroll at the start of the session.
    pub starting_balance: usize,
    /// Bankroll when the session ended.
    pub final_balance: usize,
    /// Why the session ended.
    pub end: SessionEnd,
}

impl SessionSummary {
    /// Net result of the session (positive = profit, negative = loss).
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "balances fit in isize")]
    pub const fn net(&self) -> isize {
        self.final_balance as isize - self.starting_balance as isize
    }
}
