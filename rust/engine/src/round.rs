use crate::decision::{Seat, TurnView};
use crate::errors::EngineError;
use crate::player::{Decision, Player};
use crate::rules::{min_raise, DENOMINATION};
use crate::view::SnapshotSink;

/// Betting state as seen from the outside.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BetState {
    /// No bid has been opened; calls are checks
    AwaitingBid,
    /// A bid stands and must be matched
    BidOpen,
    /// The round has been decided
    RoundOver,
}

/// Round-scoped counters: the money pool, the standing bid, the number of
/// completed dealing passes and the one-shot replacement flag. Reset at
/// the start of every round; never shared between rounds.
#[derive(Debug, Default)]
pub struct RoundState {
    pool: u32,
    current_bid: u32,
    turn: u8,
    used_replacement: bool,
    over: bool,
}

impl RoundState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn pool(&self) -> u32 {
        self.pool
    }
    pub fn current_bid(&self) -> u32 {
        self.current_bid
    }
    pub fn turn(&self) -> u8 {
        self.turn
    }
    pub fn used_replacement(&self) -> bool {
        self.used_replacement
    }
    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn state(&self) -> BetState {
        if self.over {
            BetState::RoundOver
        } else if self.current_bid > 0 {
            BetState::BidOpen
        } else {
            BetState::AwaitingBid
        }
    }

    pub fn add_to_pool(&mut self, amount: u32) {
        self.pool += amount;
    }

    pub fn raise_to(&mut self, bid: u32) {
        debug_assert!(bid > self.current_bid);
        self.current_bid = bid;
    }

    pub fn advance_turn(&mut self) {
        self.turn += 1;
    }

    pub fn mark_replacement_used(&mut self) {
        self.used_replacement = true;
    }

    pub fn finish(&mut self) {
        self.over = true;
    }

    /// Empties the pool for the award transfer.
    pub fn take_pool(&mut self) -> u32 {
        std::mem::take(&mut self.pool)
    }
}

/// Charges the round's entry fee to every seated player before any card
/// is dealt. The fee is capped at the remaining bankroll; a player felted
/// by it stays eligible for the pool as an all-in.
pub fn collect_entry_fee(seats: &mut [Seat<'_>], round: &mut RoundState, fee: u32) {
    for seat in seats.iter_mut() {
        if seat.player.is_eligible() {
            let paid = seat.player.pay(fee);
            round.add_to_pool(paid);
        }
    }
}

/// Runs betting passes in seating order until every active player's
/// contribution equals the standing bid, or until folds leave a single
/// eligible player (which ends the round outright).
///
/// A raise reopens the action: the pass loop keeps going until a full
/// pass ends with the bids equalized. Players whose bankroll cannot cover
/// the amount due are put all-in for whatever remains without being asked.
pub fn run_betting_cycle(
    seats: &mut [Seat<'_>],
    round: &mut RoundState,
    sink: &mut dyn SnapshotSink,
) -> Result<(), EngineError> {
    for seat in seats.iter_mut() {
        seat.player.set_did_raise(false);
    }
    loop {
        for i in 0..seats.len() {
            if eligible_count(seats) <= 1 {
                round.finish();
                return Ok(());
            }
            if !seats[i].player.is_active() {
                continue;
            }

            let due = round.current_bid() - seats[i].player.bet();
            if due > 0 && seats[i].player.money() <= due {
                // bankruptcy shortcut: all-in call, no decision taken
                let name = seats[i].player.name().to_string();
                apply_call(&mut seats[i].player, round);
                sink.on_decision(&name, &Decision::Call, round.current_bid());
                continue;
            }

            let opponents = eligible_count(seats).saturating_sub(1);
            let current_bid = round.current_bid();
            let pool = round.pool();
            let seat = &mut seats[i];
            let view = TurnView {
                current_bid,
                pool,
                money: seat.player.money(),
                bet: seat.player.bet(),
                hand: seat.player.hand(),
                rank: seat.player.rank(),
                aggressiveness: seat.player.aggressiveness(),
                did_raise: seat.player.did_raise(),
                opponents,
            };
            let decision = seat.source.decide(&view);
            let name = seat.player.name().to_string();
            match decision {
                Decision::Fold => seat.player.fold(),
                Decision::Call => apply_call(&mut seat.player, round),
                Decision::Raise(amount) => apply_raise(&mut seat.player, round, amount),
            }
            sink.on_decision(&name, &decision, round.current_bid());
        }
        if eligible_count(seats) <= 1 {
            round.finish();
            return Ok(());
        }
        if bids_equalized(seats, round.current_bid()) {
            return Ok(());
        }
    }
}

pub fn eligible_count(seats: &[Seat<'_>]) -> usize {
    seats.iter().filter(|s| s.player.is_eligible()).count()
}

fn bids_equalized(seats: &[Seat<'_>], current_bid: u32) -> bool {
    seats
        .iter()
        .filter(|s| s.player.is_active())
        .all(|s| s.player.bet() == current_bid)
}

/// Tops the player's contribution up to the standing bid, or as far as
/// the bankroll reaches (an all-in). A call against a zero bid is a check.
fn apply_call(player: &mut Player, round: &mut RoundState) {
    let due = round.current_bid() - player.bet();
    let paid = player.pay(due);
    player.add_bet(paid);
    round.add_to_pool(paid);
}

/// Applies a raise after normalizing it: rounded down to the denomination,
/// clamped to the player's funds (an all-in raise may land off the
/// denomination), and demoted to a call when it fails to clear the table
/// bid or the minimum increment.
///
/// Human targets arrive pre-validated and pass through unchanged; the
/// normalization is what lets probabilistic sources stay unconstrained.
fn apply_raise(player: &mut Player, round: &mut RoundState, amount: u32) {
    let available = player.money() + player.bet();
    let mut target = amount / DENOMINATION * DENOMINATION;
    if target >= available {
        target = available;
    }
    let all_in = target == available;
    if target <= round.current_bid() || (target < min_raise(round.current_bid()) && !all_in) {
        apply_call(player, round);
        return;
    }
    let paid = player.pay(target - player.bet());
    player.add_bet(paid);
    round.add_to_pool(paid);
    round.raise_to(player.bet());
    player.set_did_raise(true);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_reflects_bid_and_termination() {
        let mut round = RoundState::new();
        assert_eq!(round.state(), BetState::AwaitingBid);
        round.raise_to(100);
        assert_eq!(round.state(), BetState::BidOpen);
        round.finish();
        assert_eq!(round.state(), BetState::RoundOver);
    }

    #[test]
    fn reset_clears_every_counter() {
        let mut round = RoundState::new();
        round.add_to_pool(300);
        round.raise_to(100);
        round.advance_turn();
        round.mark_replacement_used();
        round.finish();
        round.reset();
        assert_eq!(round.pool(), 0);
        assert_eq!(round.current_bid(), 0);
        assert_eq!(round.turn(), 0);
        assert!(!round.used_replacement());
        assert!(!round.is_over());
    }

    #[test]
    fn take_pool_empties_it() {
        let mut round = RoundState::new();
        round.add_to_pool(450);
        assert_eq!(round.take_pool(), 450);
        assert_eq!(round.pool(), 0);
    }
}
