//! Bankroll state machine tests.

use bjtty::{ActionError, Bankroll, BetError, BetPhase, GameOptions, Outcome};

#[test]
fn bet_round_settle_cycle() {
    let mut bankroll = Bankroll::new(100);
    assert_eq!(bankroll.phase(), BetPhase::AwaitingBet);
    assert!(bankroll.accepts_bet());

    bankroll.place_bet(30).unwrap();
    assert_eq!(bankroll.phase(), BetPhase::BetPlaced);
    assert_eq!(bankroll.balance(), 70);
    assert_eq!(bankroll.bet(), 30);
    assert!(!bankroll.accepts_bet());

    bankroll.begin_round().unwrap();
    assert_eq!(bankroll.phase(), BetPhase::RoundInProgress);

    let settlement = bankroll.settle(Outcome::Won).unwrap();
    assert_eq!(settlement.payout, 60);
    assert_eq!(settlement.balance, 130);
    assert_eq!(bankroll.bet(), 0);
    assert_eq!(bankroll.phase(), BetPhase::Settled);
    assert!(bankroll.accepts_bet());
}

#[test]
fn payouts_by_outcome() {
    for (outcome, balance) in [(Outcome::Won, 110), (Outcome::Lost, 90), (Outcome::Tied, 100)] {
        let mut bankroll = Bankroll::new(100);
        bankroll.place_bet(10).unwrap();
        bankroll.begin_round().unwrap();
        let settlement = bankroll.settle(outcome).unwrap();
        assert_eq!(settlement.balance, balance, "{outcome:?}");
        assert_eq!(bankroll.balance(), balance);
    }
}

#[test]
fn rejected_bets_leave_balance_untouched() {
    let mut bankroll = Bankroll::new(50);
    assert_eq!(bankroll.place_bet(0), Err(BetError::ZeroBet));
    assert_eq!(bankroll.place_bet(51), Err(BetError::InsufficientFunds));
    assert_eq!(bankroll.balance(), 50);
    assert_eq!(bankroll.phase(), BetPhase::AwaitingBet);

    bankroll.place_bet(50).unwrap();
    assert_eq!(bankroll.balance(), 0);
    assert_eq!(bankroll.place_bet(1), Err(BetError::InvalidState));
    assert!(!bankroll.is_broke());
}

#[test]
fn out_of_order_transitions_fail() {
    let mut bankroll = Bankroll::new(100);
    assert_eq!(bankroll.begin_round(), Err(BetError::InvalidState));
    assert_eq!(bankroll.settle(Outcome::Won), Err(BetError::InvalidState));
    assert_eq!(bankroll.double_down(), Err(ActionError::InvalidState));

    bankroll.place_bet(10).unwrap();
    assert_eq!(bankroll.settle(Outcome::Won), Err(BetError::InvalidState));
    assert_eq!(bankroll.double_down(), Err(ActionError::InvalidState));
}

#[test]
fn double_down_needs_a_matching_stake() {
    let mut bankroll = Bankroll::new(30);
    bankroll.place_bet(20).unwrap();
    bankroll.begin_round().unwrap();
    assert!(!bankroll.can_double());
    assert_eq!(bankroll.double_down(), Err(ActionError::InsufficientFunds));
    assert_eq!(bankroll.bet(), 20);
    assert_eq!(bankroll.balance(), 10);

    let mut bankroll = Bankroll::new(40);
    bankroll.place_bet(20).unwrap();
    bankroll.begin_round().unwrap();
    assert!(bankroll.can_double());
    assert_eq!(bankroll.double_down(), Ok(40));
    assert_eq!(bankroll.balance(), 0);

    let settlement = bankroll.settle(Outcome::Won).unwrap();
    assert_eq!(settlement.payout, 80);
    assert_eq!(settlement.net(), 40);
    assert_eq!(bankroll.balance(), 80);
}

#[test]
fn losing_everything_is_broke() {
    let mut bankroll = Bankroll::new(10);
    bankroll.place_bet(10).unwrap();
    bankroll.begin_round().unwrap();
    let settlement = bankroll.settle(Outcome::Lost).unwrap();
    assert_eq!(settlement.net(), -10);
    assert!(bankroll.is_broke());
}

#[test]
fn refund_returns_only_unresolved_stakes() {
    let mut bankroll = Bankroll::new(100);
    assert_eq!(bankroll.refund(), 0);

    bankroll.place_bet(25).unwrap();
    bankroll.begin_round().unwrap();
    assert_eq!(bankroll.refund(), 25);
    assert_eq!(bankroll.balance(), 100);
    assert_eq!(bankroll.phase(), BetPhase::AwaitingBet);

    bankroll.place_bet(25).unwrap();
    bankroll.begin_round().unwrap();
    bankroll.settle(Outcome::Lost).unwrap();
    assert_eq!(bankroll.refund(), 0);
    assert_eq!(bankroll.balance(), 75);
}

#[test]
fn payout_reports_overflow() {
    assert_eq!(Outcome::Won.payout(10), Some(20));
    assert_eq!(Outcome::Lost.payout(10), Some(0));
    assert_eq!(Outcome::Tied.payout(usize::MAX), Some(usize::MAX));
    assert_eq!(Outcome::Won.payout(usize::MAX / 2 + 1), None);
}

#[test]
fn bets_whose_win_would_overflow_are_refused() {
    let mut bankroll = Bankroll::new(usize::MAX);
    assert_eq!(
        bankroll.place_bet(usize::MAX / 2 + 1),
        Err(BetError::TableLimit)
    );
    assert_eq!(bankroll.place_bet(1), Err(BetError::TableLimit));
    assert_eq!(bankroll.balance(), usize::MAX);
    assert_eq!(bankroll.phase(), BetPhase::AwaitingBet);
}

#[test]
fn winning_up_to_the_limit() {
    let mut bankroll = Bankroll::new(usize::MAX - 10);
    assert_eq!(bankroll.place_bet(11), Err(BetError::TableLimit));

    bankroll.place_bet(10).unwrap();
    bankroll.begin_round().unwrap();
    assert!(!bankroll.can_double());
    assert_eq!(bankroll.double_down(), Err(ActionError::TableLimit));
    assert_eq!(bankroll.bet(), 10);

    let settlement = bankroll.settle(Outcome::Won).unwrap();
    assert_eq!(settlement.payout, 20);
    assert_eq!(bankroll.balance(), usize::MAX);
}

#[test]
fn starting_bankroll_bounds() {
    assert!(GameOptions::default().has_playable_bankroll());
    assert!(
        GameOptions::default()
            .with_starting_bankroll(GameOptions::MAX_BANKROLL)
            .has_playable_bankroll()
    );
    assert!(
        !GameOptions::default()
            .with_starting_bankroll(0)
            .has_playable_bankroll()
    );
    assert!(
        !GameOptions::default()
            .with_starting_bankroll(usize::MAX)
            .has_playable_bankroll()
    );
}
