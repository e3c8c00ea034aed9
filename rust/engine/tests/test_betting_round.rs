use std::collections::VecDeque;

use fivedraw_engine::decision::{DecisionSource, Seat, TurnView};
use fivedraw_engine::player::{Decision, Player};
use fivedraw_engine::round::{
    collect_entry_fee, eligible_count, run_betting_cycle, BetState, RoundState,
};
use fivedraw_engine::view::NullSink;

/// Plays back a fixed decision sequence, then calls forever.
struct Scripted {
    moves: VecDeque<Decision>,
}

impl Scripted {
    fn new(moves: &[Decision]) -> Self {
        Self {
            moves: moves.iter().cloned().collect(),
        }
    }
}

impl DecisionSource for Scripted {
    fn decide(&mut self, _view: &TurnView<'_>) -> Decision {
        self.moves.pop_front().unwrap_or(Decision::Call)
    }

    fn choose_discards(&mut self, _view: &TurnView<'_>) -> Vec<usize> {
        Vec::new()
    }
}

/// Fails the test if the betting machine ever asks it anything.
struct MustNotAct;

impl DecisionSource for MustNotAct {
    fn decide(&mut self, _view: &TurnView<'_>) -> Decision {
        panic!("player should not have been prompted");
    }

    fn choose_discards(&mut self, _view: &TurnView<'_>) -> Vec<usize> {
        panic!("player should not have been prompted");
    }
}

fn seat<'a>(name: &str, money: u32, source: Box<dyn DecisionSource + 'a>) -> Seat<'a> {
    let mut player = Player::new(name, money, 0.5);
    player.enter_round();
    Seat::new(player, source)
}

fn scripted_seat(name: &str, money: u32, moves: &[Decision]) -> Seat<'static> {
    seat(name, money, Box::new(Scripted::new(moves)))
}

#[test]
fn all_calling_an_opened_bid_equalizes_and_fills_the_pool() {
    let mut seats = vec![
        scripted_seat("Edwin", 10_000, &[Decision::Raise(100)]),
        scripted_seat("Marie", 10_000, &[]),
        scripted_seat("Stella", 10_000, &[]),
    ];
    let mut round = RoundState::new();
    run_betting_cycle(&mut seats, &mut round, &mut NullSink).unwrap();

    assert_eq!(round.pool(), 300);
    assert_eq!(round.current_bid(), 100);
    assert!(seats.iter().all(|s| s.player.bet() == 100));
    assert!(!round.is_over());
    assert_eq!(round.state(), BetState::BidOpen);
}

#[test]
fn checking_all_around_ends_the_cycle_without_a_bid() {
    let mut seats = vec![
        scripted_seat("Edwin", 10_000, &[]),
        scripted_seat("Marie", 10_000, &[]),
    ];
    let mut round = RoundState::new();
    run_betting_cycle(&mut seats, &mut round, &mut NullSink).unwrap();

    assert_eq!(round.pool(), 0);
    assert_eq!(round.state(), BetState::AwaitingBid);
    assert!(!round.is_over());
}

#[test]
fn a_raise_reopens_the_action_for_earlier_players() {
    let mut seats = vec![
        scripted_seat("Edwin", 10_000, &[Decision::Raise(100)]),
        scripted_seat("Marie", 10_000, &[Decision::Raise(200)]),
        scripted_seat("Stella", 10_000, &[]),
    ];
    let mut round = RoundState::new();
    run_betting_cycle(&mut seats, &mut round, &mut NullSink).unwrap();

    assert_eq!(round.current_bid(), 200);
    assert!(seats.iter().all(|s| s.player.bet() == 200));
    assert_eq!(round.pool(), 600);
}

#[test]
fn short_stack_is_put_all_in_without_being_prompted() {
    let mut seats = vec![
        scripted_seat("Edwin", 10_000, &[Decision::Raise(100)]),
        seat("Marie", 60, Box::new(MustNotAct)),
        scripted_seat("Stella", 10_000, &[]),
    ];
    let mut round = RoundState::new();
    run_betting_cycle(&mut seats, &mut round, &mut NullSink).unwrap();

    let marie = &seats[1].player;
    assert!(marie.is_all_in());
    assert!(marie.is_eligible());
    assert_eq!(marie.money(), 0);
    assert_eq!(marie.bet(), 60);
    assert_eq!(round.pool(), 260);
    assert!(!round.is_over());
}

#[test]
fn folds_down_to_one_player_end_the_round_immediately() {
    let mut seats = vec![
        scripted_seat("Edwin", 10_000, &[Decision::Raise(100)]),
        scripted_seat("Marie", 10_000, &[Decision::Fold]),
        scripted_seat("Stella", 10_000, &[Decision::Fold]),
    ];
    let mut round = RoundState::new();
    run_betting_cycle(&mut seats, &mut round, &mut NullSink).unwrap();

    assert!(round.is_over());
    assert_eq!(round.state(), BetState::RoundOver);
    assert_eq!(eligible_count(&seats), 1);
    // Edwin's raise stays in the pool even though nobody matched it
    assert_eq!(round.pool(), 100);
}

#[test]
fn undersized_raise_from_a_bot_is_demoted_to_a_check() {
    // 97 rounds down to 90, below the opening floor of 100
    let mut seats = vec![
        scripted_seat("Edwin", 10_000, &[Decision::Raise(97)]),
        scripted_seat("Marie", 10_000, &[]),
    ];
    let mut round = RoundState::new();
    run_betting_cycle(&mut seats, &mut round, &mut NullSink).unwrap();

    assert_eq!(round.current_bid(), 0);
    assert_eq!(round.pool(), 0);
    assert_eq!(round.state(), BetState::AwaitingBid);
}

#[test]
fn oversized_raise_becomes_an_all_in_at_the_full_bankroll() {
    let mut seats = vec![
        scripted_seat("Edwin", 500, &[Decision::Raise(5_000)]),
        scripted_seat("Marie", 10_000, &[]),
    ];
    let mut round = RoundState::new();
    run_betting_cycle(&mut seats, &mut round, &mut NullSink).unwrap();

    assert_eq!(round.current_bid(), 500);
    assert!(seats[0].player.is_all_in());
    assert_eq!(seats[0].player.money(), 0);
    assert_eq!(seats[1].player.bet(), 500);
    assert_eq!(round.pool(), 1_000);
}

#[test]
fn entry_fee_is_capped_at_the_remaining_bankroll() {
    let mut seats = vec![
        scripted_seat("Edwin", 10_000, &[]),
        scripted_seat("Marie", 30, &[]),
    ];
    let mut round = RoundState::new();
    collect_entry_fee(&mut seats, &mut round, 50);

    assert_eq!(round.pool(), 80);
    assert_eq!(seats[0].player.money(), 9_950);
    assert_eq!(seats[1].player.money(), 0);
    assert!(seats[1].player.is_all_in());
    assert!(seats[1].player.is_eligible());
    // the fee is not a bid contribution
    assert_eq!(seats[1].player.bet(), 0);
}
