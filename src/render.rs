//! The display boundary between the engine and a front end.

use crate::card::Card;
use crate::error::{ActionError, BetError, InputError};
use crate::hand::{DealerHand, Hand};
use crate::input::Command;
use crate::result::{RoundResult, SessionSummary};

/// A snapshot of the table handed to a [`Renderer`].
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    /// The dealer's hand.
    pub dealer: &'a DealerHand,
    /// The player's hand.
    pub player: &'a Hand,
    /// Whether the dealer's second card may be shown.
    pub reveal_hole: bool,
    /// Bankroll balance not at risk.
    pub bankroll: usize,
    /// Current stake.
    pub bet: usize,
}

/// Something the front end should tell the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Waiting for a bet or quit.
    BetPrompt {
        /// Balance available to bet.
        balance: usize,
        /// Amount used for a blank answer.
        default_bet: usize,
    },
    /// The bet line could not be parsed.
    InvalidBet(InputError),
    /// The bet was refused by the bankroll.
    BetRejected(BetError),
    /// A new round has been dealt.
    RoundStarted {
        /// Round number, starting at 1.
        round: u32,
    },
    /// Waiting for a player command.
    ActionPrompt {
        /// Whether a double-down is currently affordable.
        can_double: bool,
    },
    /// The player's command was accepted.
    PlayerAction(Command),
    /// The command means nothing during the player's turn.
    InvalidCommand,
    /// The double-down was refused.
    DoubleDownRejected(ActionError),
    /// The dealer drew a card.
    DealerDrew(Card),
    /// The round has been paid out.
    RoundSettled(RoundResult),
    /// Waiting for the player to continue or quit between rounds.
    ContinuePrompt,
    /// The session is over.
    SessionEnded(SessionSummary),
}

/// A sink for table snapshots and events.
///
/// Rendering never fails from the engine's point of view; implementations
/// deal with their own output errors.
pub trait Renderer {
    /// Shows the table.
    fn render(&mut self, table: &TableView<'_>);

    /// Reports an event.
    fn notify(&mut self, event: &Event);
}
