//! The dealer's fixed decision rule.
//!
//! The dealer hits any 17 that contains an ace, and keeps hitting above 17
//! while behind the player. It stands only once it is at 17 or more, not on
//! an ace-bearing 17, and level with or ahead of the player, or once it has
//! busted.

use crate::card::Card;
use crate::hand::{BLACKJACK, hand_value};

/// What the dealer does next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DealerAction {
    /// Draw one more card.
    Hit,
    /// Stop drawing.
    Stand,
}

/// Returns whether the dealer takes a turn at all.
///
/// A busted player has already lost, so the dealer does not draw.
#[must_use]
pub const fn dealer_plays(player_value: u8) -> bool {
    player_value <= BLACKJACK
}

/// Returns whether `cards` total exactly 17 with at least one ace present.
#[must_use]
pub fn is_soft_17(cards: &[Card]) -> bool {
    hand_value(cards) == 17 && cards.iter().any(Card::is_ace)
}

/// Decides the dealer's next move against the player's final value.
#[must_use]
pub fn dealer_action(cards: &[Card], player_value: u8) -> DealerAction {
    let value = hand_value(cards);

    if value > BLACKJACK {
        return DealerAction::Stand;
    }
    if value >= 17 && !is_soft_17(cards) && value >= player_value {
        return DealerAction::Stand;
    }

    DealerAction::Hit
}
