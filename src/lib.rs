//! A terminal blackjack game against a fixed-rule dealer, with an optional
//! `no_std` round engine.
//!
//! The crate provides a [`Game`] type that owns the deck, the bankroll and
//! both hands, and resolves rounds: betting, dealing, the player's turn,
//! the dealer's turn, and settlement. Input and output go through the
//! [`InputSource`] and [`Renderer`] traits so the engine never touches a
//! terminal itself.
//!
//! # Example
//!
//! ```
//! use bjtty::{Game, GameOptions, RoundState};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! game.place_bet(10).unwrap();
//! game.deal().unwrap();
//! game.stand().unwrap();
//! game.dealer_play().unwrap();
//! let result = game.showdown().unwrap();
//! assert_eq!(game.state(), RoundState::Settled);
//! assert_eq!(game.balance(), 90 + result.settlement.payout);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bankroll;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod input;
pub mod options;
pub mod policy;
pub mod render;
pub mod result;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod terminal;

// Re-export main types
pub use bankroll::{Bankroll, BetPhase};
pub use card::{Card, DECK_SIZE, JOKER_DECK_SIZE, Rank, Suit};
pub use deck::{Deck, DeckKind};
pub use error::{
    ActionError, BetError, DealError, DeckError, InputError, SessionError, ShowdownError,
};
pub use game::{Game, RoundState, TurnStep};
pub use hand::{BLACKJACK, DealerHand, Hand, Score, hand_value};
#[cfg(feature = "std")]
pub use input::LineInput;
pub use input::{BetInput, Command, InputSource, parse_bet};
pub use options::GameOptions;
pub use policy::{DealerAction, dealer_action, dealer_plays, is_soft_17};
pub use render::{Event, Renderer, TableView};
pub use result::{Outcome, RoundResult, SessionEnd, SessionSummary, Settlement};
#[cfg(feature = "std")]
pub use terminal::TerminalRenderer;
