//! The deck: construction, shuffling, and draw-with-reshuffle.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, JOKER_DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// Which set of cards a deck is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeckKind {
    /// 52 cards, Ace through King in every suit.
    #[default]
    Standard,
    /// The standard 52 plus two jokers. Never used for round resolution.
    WithJokers,
}

impl DeckKind {
    /// Returns the number of cards in a deck of this kind.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Self::Standard => DECK_SIZE,
            Self::WithJokers => JOKER_DECK_SIZE,
        }
    }
}

/// A finite deck of cards with a draw cursor.
///
/// Drawn cards are never removed. Once the cursor passes the last card the
/// whole deck is reshuffled in place and drawing starts over from the top, so
/// [`Deck::draw`] never runs dry.
#[derive(Debug, Clone)]
pub struct Deck<R = ChaCha8Rng> {
    cards: Vec<Card>,
    cursor: usize,
    rng: R,
}

impl Deck<ChaCha8Rng> {
    /// Creates and shuffles a deck seeded with `seed`.
    ///
    /// The same seed always yields the same sequence of shuffles.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Allocation`] if the card storage cannot be
    /// allocated.
    pub fn new(kind: DeckKind, seed: u64) -> Result<Self, DeckError> {
        Self::with_rng(kind, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Deck<R> {
    /// Creates and shuffles a deck driven by the given random source.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Allocation`] if the card storage cannot be
    /// allocated.
    pub fn with_rng(kind: DeckKind, rng: R) -> Result<Self, DeckError> {
        let mut cards = Vec::new();
        cards
            .try_reserve_exact(kind.size())
            .map_err(|_| DeckError::Allocation)?;

        for suit in Suit::ALL {
            for rank in Rank::STANDARD {
                cards.push(Card::new(suit, rank));
            }
        }
        if kind == DeckKind::WithJokers {
            cards.push(Card::new(Suit::Spades, Rank::Joker));
            cards.push(Card::new(Suit::Spades, Rank::Joker));
        }

        let mut deck = Self {
            cards,
            cursor: 0,
            rng,
        };
        deck.shuffle();
        Ok(deck)
    }

    /// Creates a deck that deals `cards` in the given order.
    ///
    /// The deck is not shuffled until it is exhausted, after which it behaves
    /// like any other deck. Useful for replaying a known sequence of cards.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if `cards` is empty.
    pub fn from_cards(cards: Vec<Card>, rng: R) -> Result<Self, DeckError> {
        if cards.is_empty() {
            return Err(DeckError::Empty);
        }

        Ok(Self {
            cards,
            cursor: 0,
            rng,
        })
    }

    /// Shuffles every card back into the deck and resets the cursor.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        self.cursor = 0;
    }

    /// Draws the card under the cursor.
    ///
    /// Drawing the last card reshuffles the deck, so the next call starts on
    /// a fresh permutation.
    pub fn draw(&mut self) -> Card {
        let card = self.cards[self.cursor];
        self.cursor += 1;

        if self.cursor >= self.cards.len() {
            debug!(size = self.cards.len(), "deck exhausted, reshuffling");
            self.shuffle();
        }

        card
    }

    /// Returns the total number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck holds no cards. Always `false` for a
    /// constructed deck.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards left before the next reshuffle.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Returns the index of the next card to be drawn.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns every card in current deck order, drawn or not.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
