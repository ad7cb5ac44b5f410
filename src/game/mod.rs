//! Game engine and session state.

use rand_chacha::ChaCha8Rng;

use crate::bankroll::Bankroll;
use crate::deck::{Deck, DeckKind};
use crate::error::DeckError;
use crate::hand::{DealerHand, Hand};
use crate::options::GameOptions;
use crate::render::TableView;

mod actions;
mod bet;
mod dealer;
mod session;
pub mod state;

pub use actions::TurnStep;
pub use state::RoundState;

/// A single-player blackjack session against a fixed-rule dealer.
///
/// The game owns the deck, the bankroll, and both hands for the whole
/// session. Rounds can be driven step by step ([`Game::place_bet`],
/// [`Game::deal`], [`Game::hit`], [`Game::dealer_play`], [`Game::showdown`])
/// or end to end through an input source and renderer with [`Game::run`].
#[derive(Debug)]
pub struct Game<R = ChaCha8Rng> {
    /// Game options.
    pub options: GameOptions,
    /// The session's deck.
    deck: Deck<R>,
    /// Current round state.
    state: RoundState,
    /// Player money and stake.
    bankroll: Bankroll,
    /// Player's hand.
    player_hand: Hand,
    /// Dealer's hand.
    dealer_hand: DealerHand,
    /// Whether the player doubled down this round.
    doubled: bool,
    /// Number of rounds dealt.
    round: u32,
    /// Number of rounds paid out.
    rounds_played: u32,
}

impl Game<ChaCha8Rng> {
    /// Creates a new game with a standard deck shuffled from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Allocation`] if the deck cannot be allocated.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtty::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.balance(), 100);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, DeckError> {
        let deck = Deck::new(DeckKind::Standard, seed)?;
        Ok(Self::with_deck(options, deck))
    }
}

impl<R> Game<R> {
    /// Creates a new game that deals from `deck`.
    #[must_use]
    pub fn with_deck(options: GameOptions, deck: Deck<R>) -> Self {
        let bankroll = Bankroll::new(options.starting_bankroll);
        Self {
            options,
            deck,
            state: RoundState::Idle,
            bankroll,
            player_hand: Hand::new(),
            dealer_hand: DealerHand::new(),
            doubled: false,
            round: 0,
            rounds_played: 0,
        }
    }

    /// Returns the current round state.
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the bankroll.
    pub const fn bankroll(&self) -> &Bankroll {
        &self.bankroll
    }

    /// Returns the money not currently at risk.
    pub const fn balance(&self) -> usize {
        self.bankroll.balance()
    }

    /// Returns the current stake.
    pub const fn bet(&self) -> usize {
        self.bankroll.bet()
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the deck.
    pub const fn deck(&self) -> &Deck<R> {
        &self.deck
    }

    /// Returns whether the player doubled down this round.
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns the number of the most recently dealt round, 0 before the
    /// first deal.
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Returns the number of rounds paid out this session.
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Returns a snapshot of the table for rendering.
    ///
    /// The dealer's hole card is shown only once it has been revealed.
    pub const fn table_view(&self) -> TableView<'_> {
        TableView {
            dealer: &self.dealer_hand,
            player: &self.player_hand,
            reveal_hole: self.dealer_hand.is_hole_revealed(),
            bankroll: self.bankroll.balance(),
            bet: self.bankroll.bet(),
        }
    }
}
