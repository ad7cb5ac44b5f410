//! Game integration tests.

use bjtty::{
    ActionError, BetError, BetPhase, Card, Command, DealError, Deck, Game, GameOptions, Outcome,
    Rank, RoundState, ShowdownError, Suit, TurnStep,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Builds a game whose deck deals `draws` in order: player, player, dealer,
/// dealer, then any hits.
fn stacked_game(bankroll: usize, draws: &[Card]) -> Game {
    let deck = Deck::from_cards(draws.to_vec(), ChaCha8Rng::seed_from_u64(7)).unwrap();
    Game::with_deck(
        GameOptions::default().with_starting_bankroll(bankroll),
        deck,
    )
}

#[test]
fn blackjack_beats_dealer_after_dealer_busts_chasing() {
    let mut game = stacked_game(
        100,
        &[
            card(Suit::Spades, Rank::Ace), // player
            card(Suit::Hearts, Rank::King), // player
            card(Suit::Clubs, Rank::Ten), // dealer up
            card(Suit::Diamonds, Rank::Seven), // dealer hole
            card(Suit::Clubs, Rank::King), // dealer draw
        ],
    );

    game.place_bet(10).unwrap();
    assert_eq!(game.balance(), 90);
    game.deal().unwrap();
    assert_eq!(game.player_hand().value(), 21);
    assert_eq!(game.dealer_hand().value(), 17);

    game.stand().unwrap();
    // 17 is behind 21, so the dealer keeps drawing.
    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn, vec![card(Suit::Clubs, Rank::King)]);

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome(), Outcome::Won);
    assert_eq!(result.settlement.payout, 20);
    assert_eq!(result.settlement.net(), 10);
    assert_eq!(game.balance(), 110);
    assert_eq!(game.bet(), 0);
    assert_eq!(game.state(), RoundState::Settled);
}

#[test]
fn standing_player_wins_when_dealer_busts() {
    let mut game = stacked_game(
        100,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Eight),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Hearts, Rank::Queen),
        ],
    );

    game.place_bet(10).unwrap();
    game.deal().unwrap();
    game.stand().unwrap();
    assert_eq!(game.state(), RoundState::DealerTurn);

    game.dealer_play().unwrap();
    assert!(game.dealer_hand().is_bust());

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome(), Outcome::Won);
    assert_eq!(result.player_value, 18);
    assert_eq!(result.dealer_value, 26);
    assert_eq!(game.balance(), 110);
}

#[test]
fn double_down_rejected_without_funds_keeps_turn() {
    let mut game = stacked_game(
        10,
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Spades, Rank::Six),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Seven),
        ],
    );

    game.place_bet(10).unwrap();
    game.deal().unwrap();
    assert_eq!(game.balance(), 0);

    assert_eq!(
        game.double_down().unwrap_err(),
        ActionError::InsufficientFunds
    );
    assert_eq!(game.state(), RoundState::PlayerTurn);
    assert_eq!(game.bet(), 10);
    assert_eq!(game.balance(), 0);
    assert_eq!(game.player_hand().len(), 2);
    assert!(!game.is_doubled());

    game.stand().unwrap();
    assert_eq!(game.state(), RoundState::DealerTurn);
}

#[test]
fn double_down_draws_one_card_and_ends_turn_even_on_bust() {
    let mut game = stacked_game(
        100,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Six),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Seven),
            card(Suit::Hearts, Rank::King), // double draw
        ],
    );

    game.place_bet(10).unwrap();
    game.deal().unwrap();

    let drawn = game.double_down().unwrap();
    assert_eq!(drawn, card(Suit::Hearts, Rank::King));
    assert_eq!(game.state(), RoundState::DealerTurn);
    assert_eq!(game.bet(), 20);
    assert_eq!(game.balance(), 80);
    assert!(game.is_doubled());

    // Busted player: the dealer takes no turn.
    assert!(game.dealer_play().unwrap().is_empty());
    assert_eq!(game.dealer_hand().len(), 2);

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome(), Outcome::Lost);
    assert!(result.doubled);
    assert_eq!(result.settlement.bet, 20);
    assert_eq!(game.balance(), 80);
}

#[test]
fn winning_double_down_pays_the_doubled_bet() {
    let mut game = stacked_game(
        100,
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Spades, Rank::Six),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Seven),
            card(Suit::Hearts, Rank::Ten), // double draw, 21
            card(Suit::Clubs, Rank::Nine), // dealer draw, bust
        ],
    );

    game.place_bet(10).unwrap();
    game.deal().unwrap();
    game.double_down().unwrap();
    game.dealer_play().unwrap();

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome(), Outcome::Won);
    assert_eq!(result.settlement.payout, 40);
    assert_eq!(game.balance(), 120);
}

#[test]
fn hit_to_bust_ends_turn_and_skips_dealer() {
    let mut game = stacked_game(
        100,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Six),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Two),
            card(Suit::Hearts, Rank::King),
        ],
    );

    game.place_bet(10).unwrap();
    game.deal().unwrap();

    game.hit().unwrap();
    assert!(game.player_hand().is_bust());
    assert_eq!(game.state(), RoundState::DealerTurn);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);

    // Dealer sits on 12 because the player already lost.
    assert!(game.dealer_play().unwrap().is_empty());
    let result = game.showdown().unwrap();
    assert_eq!(result.outcome(), Outcome::Lost);
    assert_eq!(result.dealer_value, 12);
    assert_eq!(game.balance(), 90);
}

#[test]
fn equal_values_push_and_return_stake() {
    let mut game = stacked_game(
        100,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Nine),
            card(Suit::Clubs, Rank::Queen),
            card(Suit::Diamonds, Rank::Nine),
        ],
    );

    game.place_bet(10).unwrap();
    game.deal().unwrap();
    game.stand().unwrap();
    assert!(game.dealer_play().unwrap().is_empty());

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome(), Outcome::Tied);
    assert_eq!(result.settlement.net(), 0);
    assert_eq!(game.balance(), 100);
}

#[test]
fn dealer_hits_every_seventeen_holding_an_ace() {
    let mut game = stacked_game(
        100,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Seven),
            card(Suit::Clubs, Rank::Ace),
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Hearts, Rank::Ten), // A,6,10 is a hard 17 but still holds an ace
            card(Suit::Clubs, Rank::Five),
        ],
    );

    game.place_bet(10).unwrap();
    game.deal().unwrap();
    game.stand().unwrap();

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn.len(), 2);
    assert_eq!(game.dealer_hand().value(), 22);

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome(), Outcome::Won);
}

#[test]
fn dealer_stands_on_plain_seventeen_when_level() {
    let mut game = stacked_game(
        100,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Seven),
            card(Suit::Clubs, Rank::Jack),
            card(Suit::Diamonds, Rank::Seven),
        ],
    );

    game.place_bet(10).unwrap();
    game.deal().unwrap();
    game.stand().unwrap();

    assert!(game.dealer_play().unwrap().is_empty());
    assert_eq!(game.showdown().unwrap().outcome(), Outcome::Tied);
}

#[test]
fn dealer_keeps_hitting_above_seventeen_while_behind() {
    let mut game = stacked_game(
        100,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::King),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Eight),
            card(Suit::Hearts, Rank::Two),
        ],
    );

    game.place_bet(10).unwrap();
    game.deal().unwrap();
    game.stand().unwrap();

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn, vec![card(Suit::Hearts, Rank::Two)]);
    assert_eq!(game.showdown().unwrap().outcome(), Outcome::Tied);
}

#[test]
fn dealer_step_reveals_hole_and_draws_one_card_at_a_time() {
    let mut game = stacked_game(
        100,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Nine),
            card(Suit::Clubs, Rank::Two),
            card(Suit::Diamonds, Rank::Three),
            card(Suit::Hearts, Rank::Four),
            card(Suit::Clubs, Rank::Ten),
        ],
    );

    game.place_bet(10).unwrap();
    game.deal().unwrap();
    assert!(!game.dealer_hand().is_hole_revealed());
    assert_eq!(game.dealer_hand().visible_value(), 2);

    game.stand().unwrap();
    assert_eq!(
        game.dealer_step().unwrap(),
        Some(card(Suit::Hearts, Rank::Four))
    );
    assert!(game.dealer_hand().is_hole_revealed());
    assert_eq!(
        game.showdown().unwrap_err(),
        ShowdownError::InvalidState,
        "dealer at 9 must still draw"
    );
    assert_eq!(
        game.dealer_step().unwrap(),
        Some(card(Suit::Clubs, Rank::Ten))
    );
    assert_eq!(game.dealer_step().unwrap(), None);
    assert_eq!(game.dealer_hand().value(), 19);
    assert_eq!(game.showdown().unwrap().outcome(), Outcome::Tied);
}

#[test]
fn bet_errors() {
    let mut game = stacked_game(
        100,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Nine),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Eight),
        ],
    );

    assert_eq!(game.place_bet(0).unwrap_err(), BetError::ZeroBet);
    assert_eq!(
        game.place_bet(101).unwrap_err(),
        BetError::InsufficientFunds
    );
    assert_eq!(game.balance(), 100);

    game.place_bet(100).unwrap();
    assert_eq!(game.bankroll().phase(), BetPhase::BetPlaced);
    assert_eq!(game.place_bet(1).unwrap_err(), BetError::InvalidState);

    game.deal().unwrap();
    assert_eq!(game.bankroll().phase(), BetPhase::RoundInProgress);
    assert_eq!(game.place_bet(1).unwrap_err(), BetError::InvalidState);
}

#[test]
fn deal_errors() {
    let mut game = stacked_game(
        100,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Nine),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Eight),
        ],
    );

    assert_eq!(game.deal().unwrap_err(), DealError::NoBet);
    assert_eq!(game.state(), RoundState::Idle);

    game.place_bet(10).unwrap();
    game.deal().unwrap();
    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);
}

#[test]
fn out_of_phase_steps_are_rejected() {
    let mut game = stacked_game(
        100,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Nine),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Eight),
        ],
    );

    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.double_down().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.dealer_play().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(game.showdown().unwrap_err(), ShowdownError::InvalidState);

    game.place_bet(10).unwrap();
    game.deal().unwrap();
    assert_eq!(game.dealer_step().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(game.showdown().unwrap_err(), ShowdownError::InvalidState);
}

#[test]
fn apply_ignores_commands_outside_the_turn_vocabulary() {
    let mut game = stacked_game(
        100,
        &[
            card(Suit::Hearts, Rank::Two),
            card(Suit::Spades, Rank::Three),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Eight),
            card(Suit::Hearts, Rank::Four),
        ],
    );

    game.place_bet(10).unwrap();
    game.deal().unwrap();

    assert_eq!(game.apply(Command::Quit).unwrap(), TurnStep::Ignored);
    assert_eq!(game.apply(Command::Continue).unwrap(), TurnStep::Ignored);
    assert_eq!(game.apply(Command::Invalid).unwrap(), TurnStep::Ignored);
    assert_eq!(game.player_hand().len(), 2);

    assert_eq!(game.apply(Command::Hit).unwrap(), TurnStep::Continue);
    assert_eq!(game.player_hand().value(), 9);
    assert_eq!(game.apply(Command::Stand).unwrap(), TurnStep::Done);
    assert_eq!(
        game.apply(Command::Hit).unwrap_err(),
        ActionError::InvalidState
    );
}

#[test]
fn next_deal_discards_previous_hands() {
    let mut game = stacked_game(
        100,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Nine),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Nine),
            card(Suit::Hearts, Rank::Two),
            card(Suit::Spades, Rank::Three),
            card(Suit::Clubs, Rank::Four),
            card(Suit::Diamonds, Rank::Five),
        ],
    );

    game.place_bet(10).unwrap();
    game.deal().unwrap();
    game.stand().unwrap();
    game.dealer_play().unwrap();
    game.showdown().unwrap();

    // Settled hands stay on the table until the next deal.
    assert_eq!(game.player_hand().len(), 2);
    assert!(game.dealer_hand().is_hole_revealed());

    game.place_bet(10).unwrap();
    game.deal().unwrap();
    assert_eq!(game.round(), 2);
    assert_eq!(
        game.player_hand().cards(),
        &[card(Suit::Hearts, Rank::Two), card(Suit::Spades, Rank::Three)]
    );
    assert_eq!(game.dealer_hand().len(), 2);
    assert!(!game.dealer_hand().is_hole_revealed());
    assert_eq!(game.rounds_played(), 1);
}

#[test]
fn abandon_round_refunds_stake() {
    let mut game = stacked_game(
        100,
        &[
            card(Suit::Hearts, Rank::Two),
            card(Suit::Spades, Rank::Three),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Eight),
        ],
    );

    game.place_bet(30).unwrap();
    game.deal().unwrap();
    assert_eq!(game.balance(), 70);

    assert_eq!(game.abandon_round(), 30);
    assert_eq!(game.balance(), 100);
    assert_eq!(game.bet(), 0);
    assert_eq!(game.state(), RoundState::Settled);
    assert_eq!(game.abandon_round(), 0);
    assert_eq!(game.rounds_played(), 0);
}

#[test]
fn seeded_games_replay_identically() {
    let play = |seed| {
        let mut game = Game::new(GameOptions::default(), seed).unwrap();
        let mut balances = Vec::new();
        for _ in 0..20 {
            game.place_bet(5).unwrap();
            game.deal().unwrap();
            while game.player_hand().value() < 15 {
                game.hit().unwrap();
            }
            if game.state() == RoundState::PlayerTurn {
                game.stand().unwrap();
            }
            game.dealer_play().unwrap();
            balances.push(game.showdown().unwrap().settlement.balance);
        }
        balances
    };

    assert_eq!(play(11), play(11));
}

#[test]
fn oversized_stake_is_refused_before_the_deal() {
    let mut game = stacked_game(
        usize::MAX,
        &[
            card(Suit::Spades, Rank::Ace),
            card(Suit::Hearts, Rank::King),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Seven),
            card(Suit::Clubs, Rank::King),
        ],
    );

    assert_eq!(
        game.place_bet(usize::MAX / 2 + 1),
        Err(BetError::TableLimit)
    );
    assert_eq!(game.balance(), usize::MAX);
    assert_eq!(game.deal(), Err(DealError::NoBet));
}

#[test]
fn win_settles_exactly_at_the_limit() {
    let mut game = stacked_game(
        usize::MAX - 10,
        &[
            card(Suit::Spades, Rank::Ace),
            card(Suit::Hearts, Rank::King),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Seven),
            card(Suit::Clubs, Rank::King),
        ],
    );

    game.place_bet(10).unwrap();
    game.deal().unwrap();
    assert_eq!(game.double_down(), Err(ActionError::TableLimit));
    game.stand().unwrap();
    game.dealer_play().unwrap();

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome(), Outcome::Won);
    assert_eq!(game.balance(), usize::MAX);
}
