use rand::RngCore;
use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::input::Command;

use super::{Game, RoundState};

/// What a player command did to the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStep {
    /// The command was carried out and the turn continues.
    Continue,
    /// The command was carried out and the turn is over.
    Done,
    /// The command does not apply to the player's turn; nothing changed.
    Ignored,
}

impl<R: RngCore> Game<R> {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.deck.draw();
        self.player_hand.add_card(card);
        debug!(%card, value = self.player_hand.value(), "player hits");

        if self.player_hand.is_bust() {
            self.state = RoundState::DealerTurn;
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        debug!(value = self.player_hand.value(), "player stands");
        self.state = RoundState::DealerTurn;
        Ok(())
    }

    /// Player action: Double down.
    ///
    /// Debits a second stake equal to the bet, doubles the bet, draws exactly
    /// one card, and ends the turn whatever that card is. A bust is only
    /// acted on at settlement.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, or
    /// [`ActionError::InsufficientFunds`] if the bankroll cannot match the
    /// bet. Nothing changes on error.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let bet = self.bankroll.double_down()?;
        self.doubled = true;

        let card = self.deck.draw();
        self.player_hand.add_card(card);
        debug!(%card, bet, value = self.player_hand.value(), "player doubles down");

        self.state = RoundState::DealerTurn;
        Ok(card)
    }

    /// Applies one classified command to the player's turn.
    ///
    /// Commands with no meaning during the turn (continue, quit, invalid)
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, or
    /// [`ActionError::InsufficientFunds`] for an unaffordable double-down.
    pub fn apply(&mut self, command: Command) -> Result<TurnStep, ActionError> {
        self.ensure_player_turn()?;

        match command {
            Command::Hit => {
                self.hit()?;
            }
            Command::Stand => self.stand()?,
            Command::DoubleDown => {
                self.double_down()?;
            }
            Command::Continue | Command::Quit | Command::Invalid => return Ok(TurnStep::Ignored),
        }

        if self.state == RoundState::PlayerTurn {
            Ok(TurnStep::Continue)
        } else {
            Ok(TurnStep::Done)
        }
    }
}
