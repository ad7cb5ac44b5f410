use rand::RngCore;
use tracing::debug;

use crate::error::{BetError, DealError};

use super::{Game, RoundState};

impl<R: RngCore> Game<R> {
    /// Places a bet for the next round.
    ///
    /// The amount is debited immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or a bet is already placed,
    /// the bet is zero, or it exceeds the bankroll.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if !self.state.is_between_rounds() {
            return Err(BetError::InvalidState);
        }

        self.bankroll.place_bet(amount)
    }

    /// Clears the previous round and deals two cards each: player, player,
    /// dealer, dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress or no bet has been
    /// placed.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if !self.state.is_between_rounds() {
            return Err(DealError::InvalidState);
        }
        self.bankroll
            .begin_round()
            .map_err(|_| DealError::NoBet)?;

        self.state = RoundState::Dealing;
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.doubled = false;

        self.player_hand.add_card(self.deck.draw());
        self.player_hand.add_card(self.deck.draw());
        self.dealer_hand.add_card(self.deck.draw());
        self.dealer_hand.add_card(self.deck.draw());

        self.round += 1;
        debug!(
            round = self.round,
            player = self.player_hand.value(),
            dealer_up = ?self.dealer_hand.up_card(),
            "dealt"
        );

        self.state = RoundState::PlayerTurn;
        Ok(())
    }
}
