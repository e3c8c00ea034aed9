use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::{classify, sort_hand, RankResult};

/// A betting decision as returned by a decision source.
/// Amount validation for human input happens at the provider boundary;
/// the state machine normalizes whatever it receives.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Decision {
    /// Surrender the hand; contributed money stays in the pool
    Fold,
    /// Match the table bid (a check when no bid is open)
    Call,
    /// Set a new table bid strictly above the current one
    Raise(u32),
}

/// Default bankroll for each player at game start, in currency units
pub const STARTING_MONEY: u32 = 10_000;

/// Represents a player at the table with their bankroll, hand and
/// round-scoped betting state. The bankroll persists across rounds;
/// everything else is reset when a new round begins.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    money: u32,
    hand: Vec<Card>,
    rank: Option<RankResult>,
    bet: u32,
    is_playing: bool,
    all_in: bool,
    did_raise: bool,
    revealed: bool,
    aggressiveness: f64,
}

impl Player {
    pub fn new(name: &str, money: u32, aggressiveness: f64) -> Self {
        Self {
            name: name.to_string(),
            money,
            hand: Vec::with_capacity(5),
            rank: None,
            bet: 0,
            is_playing: false,
            all_in: false,
            did_raise: false,
            revealed: false,
            aggressiveness,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn money(&self) -> u32 {
        self.money
    }
    pub fn bet(&self) -> u32 {
        self.bet
    }
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
    pub fn rank(&self) -> Option<&RankResult> {
        self.rank.as_ref()
    }
    pub fn aggressiveness(&self) -> f64 {
        self.aggressiveness
    }
    pub fn did_raise(&self) -> bool {
        self.did_raise
    }
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Still contesting the round: has not folded. All-in players remain
    /// eligible for the pool even though they take no further turns.
    pub fn is_eligible(&self) -> bool {
        self.is_playing
    }

    /// Takes betting turns: eligible and not locked in by an all-in.
    pub fn is_active(&self) -> bool {
        self.is_playing && !self.all_in
    }

    pub fn is_all_in(&self) -> bool {
        self.all_in
    }

    /// Re-enters the player for a new round and clears round-scoped state.
    pub fn enter_round(&mut self) {
        self.hand.clear();
        self.rank = None;
        self.bet = 0;
        self.is_playing = self.money > 0;
        self.all_in = false;
        self.did_raise = false;
        self.revealed = false;
    }

    pub fn draw_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Removes the cards at the given indices. Indices are expected
    /// deduplicated and in range; they may arrive in any order.
    pub fn discard(&mut self, indices: &[usize]) {
        let mut picks = indices.to_vec();
        picks.sort_unstable();
        for &i in picks.iter().rev() {
            self.hand.remove(i);
        }
    }

    /// Sorts the hand and rebuilds the rank snapshot from scratch.
    pub fn refresh_rank(&mut self) {
        sort_hand(&mut self.hand);
        self.rank = classify(&self.hand);
    }

    /// Deducts up to `amount` from the bankroll and returns what was
    /// actually paid. Paying the last unit marks the player all-in.
    pub fn pay(&mut self, amount: u32) -> u32 {
        let paid = amount.min(self.money);
        self.money -= paid;
        if self.money == 0 && self.is_playing {
            self.all_in = true;
        }
        paid
    }

    pub fn add_bet(&mut self, amount: u32) {
        self.bet += amount;
    }

    pub fn fold(&mut self) {
        self.is_playing = false;
    }

    pub fn set_did_raise(&mut self, raised: bool) {
        self.did_raise = raised;
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    pub fn award(&mut self, amount: u32) {
        self.money = self.money.saturating_add(amount);
        // winning the pool releases an all-in lock for the next round
        if self.money > 0 {
            self.all_in = false;
        }
    }
}
