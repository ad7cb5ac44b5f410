//! Error types for the deck, the bankroll, the round steps and the session.

use thiserror::Error;

/// Errors that can occur while building a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The card storage could not be allocated.
    #[error("failed to allocate the deck")]
    Allocation,
    /// A stacked deck was given no cards.
    #[error("deck has no cards")]
    Empty,
}

/// Errors produced while reading player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The bet line was neither blank, a quit request, nor a whole number.
    #[error("bet must be a whole number")]
    NotANumber,
    /// The line was consumed but could not be decoded as text.
    #[error("input line is not valid UTF-8")]
    Unreadable,
    /// The input source has no more lines.
    #[error("input closed")]
    Closed,
}

/// Bankroll transitions that were refused. Nothing is debited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// The bankroll is not between rounds.
    #[error("a bet is already on the table")]
    InvalidState,
    /// The bet is zero.
    #[error("bet must be at least 1")]
    ZeroBet,
    /// The bet is larger than the balance.
    #[error("bet exceeds the bankroll")]
    InsufficientFunds,
    /// Winning this bet would overflow the bankroll.
    #[error("bet is over the table limit")]
    TableLimit,
}

/// Reasons a round cannot be dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The previous round has not been settled.
    #[error("a round is still in progress")]
    InvalidState,
    /// Nothing was wagered.
    #[error("no bet on the table")]
    NoBet,
}

/// Player moves that were refused. The turn continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// It is not the player's turn.
    #[error("not the player's turn")]
    InvalidState,
    /// The balance cannot match the current bet for a double-down.
    #[error("not enough money to double down")]
    InsufficientFunds,
    /// Winning the doubled bet would overflow the bankroll.
    #[error("doubled bet is over the table limit")]
    TableLimit,
}

/// The dealer turn or settlement was requested at the wrong time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Not the dealer's turn, or the dealer has not finished drawing.
    #[error("the dealer cannot play or settle now")]
    InvalidState,
}

/// Errors that end a session driven by [`Game::run`](crate::Game::run).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Deck construction failed.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// Input could not be read.
    #[error(transparent)]
    Input(#[from] InputError),
    /// A bet transition was rejected out of sequence.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// The deal was rejected out of sequence.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action was rejected out of sequence.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The dealer turn or showdown was rejected out of sequence.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
}
