use rand::RngCore;
use tracing::{debug, info};

use crate::error::{ActionError, BetError, InputError, SessionError};
use crate::input::{BetInput, Command, InputSource};
use crate::render::{Event, Renderer};
use crate::result::{RoundResult, SessionEnd, SessionSummary};

use super::{Game, RoundState, TurnStep};

impl<R: RngCore> Game<R> {
    /// Prompts until a bet is placed or the player quits.
    ///
    /// Returns `false` on quit.
    fn take_bet<I, D>(&mut self, input: &mut I, renderer: &mut D) -> Result<bool, SessionError>
    where
        I: InputSource + ?Sized,
        D: Renderer + ?Sized,
    {
        loop {
            renderer.notify(&Event::BetPrompt {
                balance: self.balance(),
                default_bet: self.options.default_bet,
            });

            let amount = match input.read_bet(self.options.default_bet) {
                Ok(BetInput::Amount(amount)) => amount,
                Ok(BetInput::Quit) => return Ok(false),
                Err(err @ (InputError::NotANumber | InputError::Unreadable)) => {
                    renderer.notify(&Event::InvalidBet(err));
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            match self.place_bet(amount) {
                Ok(()) => return Ok(true),
                Err(BetError::InvalidState) => return Err(BetError::InvalidState.into()),
                Err(err) => renderer.notify(&Event::BetRejected(err)),
            }
        }
    }

    /// Prompts until the player continues or quits.
    ///
    /// Returns `false` on quit.
    fn wait_for_continue<I, D>(&self, input: &mut I, renderer: &mut D) -> Result<bool, InputError>
    where
        I: InputSource + ?Sized,
        D: Renderer + ?Sized,
    {
        loop {
            renderer.notify(&Event::ContinuePrompt);
            match input.read_command()? {
                Command::Continue => return Ok(true),
                Command::Quit => return Ok(false),
                _ => renderer.notify(&Event::InvalidCommand),
            }
        }
    }

    /// Plays one round on the bet already placed.
    ///
    /// Deals, runs the player's turn from `input`, plays the dealer, and
    /// settles. The table is rendered before every player prompt and after
    /// every dealer card.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Input`] if input closes mid-round, leaving the
    /// round unsettled (see [`Game::abandon_round`]), or another variant if
    /// the game is not ready to deal.
    pub fn play_round<I, D>(
        &mut self,
        input: &mut I,
        renderer: &mut D,
    ) -> Result<RoundResult, SessionError>
    where
        I: InputSource + ?Sized,
        D: Renderer + ?Sized,
    {
        self.deal()?;
        renderer.notify(&Event::RoundStarted { round: self.round });

        while self.state == RoundState::PlayerTurn {
            renderer.render(&self.table_view());
            renderer.notify(&Event::ActionPrompt {
                can_double: self.bankroll.can_double(),
            });

            let command = input.read_command()?;
            match self.apply(command) {
                Ok(TurnStep::Continue | TurnStep::Done) => {
                    renderer.notify(&Event::PlayerAction(command));
                }
                Ok(TurnStep::Ignored) => renderer.notify(&Event::InvalidCommand),
                Err(err @ (ActionError::InsufficientFunds | ActionError::TableLimit)) => {
                    renderer.notify(&Event::DoubleDownRejected(err));
                }
                Err(err) => return Err(err.into()),
            }
        }

        while let Some(card) = self.dealer_step()? {
            renderer.notify(&Event::DealerDrew(card));
            renderer.render(&self.table_view());
        }

        let result = self.showdown()?;
        renderer.render(&self.table_view());
        renderer.notify(&Event::RoundSettled(result));

        Ok(result)
    }

    /// Abandons an unsettled round, refunding the stake.
    ///
    /// Returns the amount refunded, 0 if nothing was at risk.
    pub fn abandon_round(&mut self) -> usize {
        let refunded = self.bankroll.refund();
        if !self.state.is_between_rounds() {
            self.state = RoundState::Settled;
        }
        debug!(round = self.round, refunded, "round abandoned");
        refunded
    }

    /// Runs the session until the bankroll is empty, the player quits, or
    /// input closes.
    ///
    /// # Errors
    ///
    /// Returns an error only if the engine is driven out of sequence, which
    /// cannot happen from a fresh game or between rounds.
    pub fn run<I, D>(&mut self, input: &mut I, renderer: &mut D) -> Result<SessionSummary, SessionError>
    where
        I: InputSource + ?Sized,
        D: Renderer + ?Sized,
    {
        let starting_balance = self.balance();
        let end = self.session_loop(input, renderer)?;

        let summary = SessionSummary {
            rounds_played: self.rounds_played,
            starting_balance,
            final_balance: self.balance(),
            end,
        };
        info!(
            rounds = summary.rounds_played,
            balance = summary.final_balance,
            ?end,
            "session ended"
        );
        renderer.notify(&Event::SessionEnded(summary));

        Ok(summary)
    }

    fn session_loop<I, D>(&mut self, input: &mut I, renderer: &mut D) -> Result<SessionEnd, SessionError>
    where
        I: InputSource + ?Sized,
        D: Renderer + ?Sized,
    {
        while self.balance() > 0 {
            match self.take_bet(input, renderer) {
                Ok(true) => {}
                Ok(false) => return Ok(SessionEnd::Quit),
                Err(SessionError::Input(InputError::Closed)) => return Ok(SessionEnd::InputClosed),
                Err(err) => return Err(err),
            }

            match self.play_round(input, renderer) {
                Ok(_) => {}
                Err(SessionError::Input(InputError::Closed)) => {
                    self.abandon_round();
                    return Ok(SessionEnd::InputClosed);
                }
                Err(err) => return Err(err),
            }

            if self.options.pause_between_rounds && self.balance() > 0 {
                match self.wait_for_continue(input, renderer) {
                    Ok(true) => {}
                    Ok(false) => return Ok(SessionEnd::Quit),
                    Err(_) => return Ok(SessionEnd::InputClosed),
                }
            }
        }

        Ok(SessionEnd::Broke)
    }
}
