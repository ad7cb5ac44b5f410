use alloc::vec::Vec;

use rand::RngCore;
use tracing::{debug, info};

use crate::card::Card;
use crate::error::ShowdownError;
use crate::policy::{DealerAction, dealer_action, dealer_plays};
use crate::result::{Outcome, RoundResult};

use super::{Game, RoundState};

impl<R: RngCore> Game<R> {
    /// Returns whether the dealer has nothing left to do this round.
    fn dealer_finished(&self) -> bool {
        let player_value = self.player_hand.value();
        !dealer_plays(player_value)
            || dealer_action(self.dealer_hand.cards(), player_value) == DealerAction::Stand
    }

    /// Reveals the hole card and performs one dealer decision.
    ///
    /// Returns the card drawn, or `None` once the dealer stands. The dealer
    /// never draws against a busted player.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the dealer turn.
    pub fn dealer_step(&mut self) -> Result<Option<Card>, ShowdownError> {
        if self.state != RoundState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        self.dealer_hand.reveal_hole();

        if self.dealer_finished() {
            return Ok(None);
        }

        let card = self.deck.draw();
        self.dealer_hand.add_card(card);
        debug!(%card, value = self.dealer_hand.value(), "dealer hits");

        Ok(Some(card))
    }

    /// Dealer plays their hand according to the house rule.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the dealer turn.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        let mut drawn = Vec::new();
        while let Some(card) = self.dealer_step()? {
            drawn.push(card);
        }
        Ok(drawn)
    }

    /// Scores both hands, settles the bet, and ends the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the dealer turn or the dealer
    /// still has to draw.
    pub fn showdown(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != RoundState::DealerTurn || !self.dealer_finished() {
            return Err(ShowdownError::InvalidState);
        }

        self.dealer_hand.reveal_hole();

        let player_value = self.player_hand.value();
        let dealer_value = self.dealer_hand.value();
        let outcome = Outcome::determine(player_value, dealer_value);
        let settlement = self
            .bankroll
            .settle(outcome)
            .map_err(|_| ShowdownError::InvalidState)?;

        self.state = RoundState::Settled;
        self.rounds_played += 1;

        info!(
            round = self.round,
            ?outcome,
            player_value,
            dealer_value,
            bet = settlement.bet,
            payout = settlement.payout,
            balance = settlement.balance,
            "round settled"
        );

        Ok(RoundResult {
            round: self.round,
            player_value,
            dealer_value,
            doubled: self.doubled,
            settlement,
        })
    }
}
