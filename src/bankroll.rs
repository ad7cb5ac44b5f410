//! The bankroll and its per-round betting state machine.

use tracing::debug;

use crate::error::{ActionError, BetError};
use crate::result::{Outcome, Settlement};

/// Where the bankroll is within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BetPhase {
    /// No stake on the table.
    AwaitingBet,
    /// A stake has been debited but no cards dealt.
    BetPlaced,
    /// Cards are out and the stake is at risk.
    RoundInProgress,
    /// The last round was paid out.
    Settled,
}

/// The player's money and the stake for the current round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bankroll {
    balance: usize,
    bet: usize,
    phase: BetPhase,
}

impl Bankroll {
    /// Creates a bankroll holding `balance`.
    #[must_use]
    pub const fn new(balance: usize) -> Self {
        Self {
            balance,
            bet: 0,
            phase: BetPhase::AwaitingBet,
        }
    }

    /// Returns the money not currently at risk.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the current stake, 0 when none is on the table.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the betting phase.
    #[must_use]
    pub const fn phase(&self) -> BetPhase {
        self.phase
    }

    /// Returns whether a new bet can be placed.
    #[must_use]
    pub const fn accepts_bet(&self) -> bool {
        matches!(self.phase, BetPhase::AwaitingBet | BetPhase::Settled)
    }

    /// Returns whether the bankroll is empty with nothing at risk.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.balance == 0 && self.bet == 0
    }

    /// Places a bet, debiting it from the balance.
    ///
    /// # Errors
    ///
    /// Returns an error if a bet is already on the table, the amount is zero,
    /// the amount exceeds the balance, or a win would not fit in the
    /// balance. Nothing is debited on error.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if !self.accepts_bet() {
            return Err(BetError::InvalidState);
        }
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.balance {
            return Err(BetError::InsufficientFunds);
        }
        if winning_balance(self.balance - amount, amount).is_none() {
            return Err(BetError::TableLimit);
        }

        self.balance -= amount;
        self.bet = amount;
        self.phase = BetPhase::BetPlaced;
        debug!(bet = amount, balance = self.balance, "bet placed");

        Ok(())
    }

    /// Marks the placed bet as in play.
    ///
    /// # Errors
    ///
    /// Returns an error unless a bet has just been placed.
    pub const fn begin_round(&mut self) -> Result<(), BetError> {
        if !matches!(self.phase, BetPhase::BetPlaced) {
            return Err(BetError::InvalidState);
        }

        self.phase = BetPhase::RoundInProgress;
        Ok(())
    }

    /// Returns whether the balance covers matching the current bet.
    #[must_use]
    pub fn can_double(&self) -> bool {
        matches!(self.phase, BetPhase::RoundInProgress)
            && self.balance >= self.bet
            && self.double_fits()
    }

    /// Whether a win on the doubled bet fits in the balance. Assumes
    /// `balance >= bet`.
    fn double_fits(&self) -> bool {
        self.bet
            .checked_mul(2)
            .and_then(|doubled| winning_balance(self.balance - self.bet, doubled))
            .is_some()
    }

    /// Debits a second stake equal to the current bet and doubles the bet.
    ///
    /// Returns the new bet.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, the balance cannot
    /// cover the extra stake, or a win would not fit in the balance.
    /// Nothing is debited on error.
    pub fn double_down(&mut self) -> Result<usize, ActionError> {
        if !matches!(self.phase, BetPhase::RoundInProgress) {
            return Err(ActionError::InvalidState);
        }
        if self.balance < self.bet {
            return Err(ActionError::InsufficientFunds);
        }
        if !self.double_fits() {
            return Err(ActionError::TableLimit);
        }

        self.balance -= self.bet;
        self.bet *= 2;
        debug!(bet = self.bet, balance = self.balance, "bet doubled");

        Ok(self.bet)
    }

    /// Pays out the round and clears the bet.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, or
    /// [`BetError::TableLimit`] if the payout does not fit in the balance.
    /// Nothing changes on error.
    pub fn settle(&mut self, outcome: Outcome) -> Result<Settlement, BetError> {
        if !matches!(self.phase, BetPhase::RoundInProgress) {
            return Err(BetError::InvalidState);
        }

        let bet = self.bet;
        let payout = outcome.payout(bet).ok_or(BetError::TableLimit)?;
        self.balance = self
            .balance
            .checked_add(payout)
            .ok_or(BetError::TableLimit)?;
        self.bet = 0;
        self.phase = BetPhase::Settled;

        Ok(Settlement {
            outcome,
            bet,
            payout,
            balance: self.balance,
        })
    }

    /// Returns an unresolved stake to the balance.
    ///
    /// Used when a round is abandoned before settlement. Returns the amount
    /// refunded, 0 if nothing was at risk.
    pub fn refund(&mut self) -> usize {
        if !matches!(self.phase, BetPhase::BetPlaced | BetPhase::RoundInProgress) {
            return 0;
        }

        let refunded = self.bet;
        self.balance += refunded;
        self.bet = 0;
        self.phase = BetPhase::AwaitingBet;
        refunded
    }
}

/// Balance after winning `bet` on top of `balance`, if it fits.
fn winning_balance(balance: usize, bet: usize) -> Option<usize> {
    bet.checked_mul(2)
        .and_then(|payout| balance.checked_add(payout))
}
