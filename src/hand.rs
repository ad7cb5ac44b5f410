//! Player and dealer hands, and the hand scorer.

use alloc::vec::Vec;

use crate::card::Card;

/// Highest value a hand can have without busting.
pub const BLACKJACK: u8 = 21;

/// Bonus for counting one ace as 11 instead of 1.
const ACE_BONUS: u8 = 10;

/// A scored set of cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Score {
    /// Best total.
    pub total: u8,
    /// Whether an ace is counted as 11 in `total`.
    pub soft: bool,
}

impl Score {
    /// Scores `cards`.
    ///
    /// Every ace starts at 1. Aces are then raised to 11 one at a time while
    /// the total stays at or under [`BLACKJACK`], so the result is the best
    /// non-busting total if one exists and the all-ones total otherwise.
    #[must_use]
    pub fn of(cards: &[Card]) -> Self {
        let (hard, aces) = cards.iter().fold((0u8, 0u8), |(sum, aces), card| {
            (
                sum.saturating_add(card.rank.value()),
                aces.saturating_add(u8::from(card.is_ace())),
            )
        });

        let mut score = Self {
            total: hard,
            soft: false,
        };
        for _ in 0..aces {
            match score.total.checked_add(ACE_BONUS) {
                Some(raised) if raised <= BLACKJACK => {
                    score.total = raised;
                    score.soft = true;
                }
                _ => break,
            }
        }
        score
    }

    /// Returns whether the total is over [`BLACKJACK`].
    #[must_use]
    pub const fn is_bust(self) -> bool {
        self.total > BLACKJACK
    }
}

/// Scores a sequence of cards. An empty slice scores 0.
///
/// Shorthand for `Score::of(cards).total`.
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    Score::of(cards).total
}

/// An ordered, growable set of cards held by one party.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Takes a card.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Cards in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Scores the hand.
    #[must_use]
    pub fn score(&self) -> Score {
        Score::of(&self.cards)
    }

    /// Best total of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.score().total
    }

    /// Returns whether an ace is counted as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.score().soft
    }

    /// Returns whether the hand is over [`BLACKJACK`].
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score().is_bust()
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether no cards are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether any card is an ace.
    #[must_use]
    pub fn has_ace(&self) -> bool {
        self.cards.iter().any(Card::is_ace)
    }

    /// Discards every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// Position of the face-down card in the dealer's hand.
const HOLE: usize = 1;

/// The dealer's hand: a [`Hand`] whose second card stays face down until
/// the dealer's turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    hand: Hand,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates an empty hand with the hole card hidden.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            hole_revealed: false,
        }
    }

    /// The full hand, hole card included.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Takes a card.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Every card, hole card included.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// The first, always face-up card.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// Returns whether the hole card is face up.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Turns the hole card face up.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Cards the player may see: all of them once the hole is revealed,
    /// otherwise all but the second.
    #[must_use]
    pub fn visible_cards(&self) -> Vec<Card> {
        let cards = self.hand.cards();
        if self.hole_revealed {
            return cards.to_vec();
        }

        let mut visible = Vec::with_capacity(cards.len().saturating_sub(1));
        for (index, card) in cards.iter().enumerate() {
            if index != HOLE {
                visible.push(*card);
            }
        }
        visible
    }

    /// Total of [`DealerHand::visible_cards`].
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        hand_value(&self.visible_cards())
    }

    /// Best total, hole card included.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.hand.value()
    }

    /// Returns whether any card is an ace.
    #[must_use]
    pub fn has_ace(&self) -> bool {
        self.hand.has_ace()
    }

    /// Returns whether an ace is counted as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.hand.is_soft()
    }

    /// Returns whether the full hand is over [`BLACKJACK`].
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether no cards are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Discards every card and hides the hole again.
    pub fn clear(&mut self) {
        self.hand.clear();
        self.hole_revealed = false;
    }
}
