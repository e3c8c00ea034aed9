use crate::cards::Card;
use crate::hand::RankResult;
use crate::player::{Decision, Player};

/// Read-only view of everything a decision source may consider on its turn.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    /// The amount every active player must match
    pub current_bid: u32,
    /// Total contributions this round
    pub pool: u32,
    /// The acting player's remaining bankroll
    pub money: u32,
    /// The acting player's contribution so far this round
    pub bet: u32,
    /// The acting player's hand, sorted ascending
    pub hand: &'a [Card],
    /// Current classification of the hand, if any card is held
    pub rank: Option<&'a RankResult>,
    /// The acting player's fixed temperament, in [0.4, 0.6]
    pub aggressiveness: f64,
    /// Whether the acting player already raised during this pass
    pub did_raise: bool,
    /// How many other players are still contesting the round
    pub opponents: usize,
}

/// Where a seat's betting and replacement choices come from.
///
/// A source is selected per player at seat assignment: the table bot for
/// computer seats, a terminal-backed provider for the user. The engine
/// blocks on these calls and assumes nothing about how long they take.
///
/// Human providers must resolve amount validation (funds, minimum raise,
/// denomination) before returning; see [`crate::rules::validate_raise`].
pub trait DecisionSource {
    /// One betting decision for the current turn.
    fn decide(&mut self, view: &TurnView<'_>) -> Decision;

    /// Indices of the cards to discard during the replacement phase,
    /// at most four of them.
    fn choose_discards(&mut self, view: &TurnView<'_>) -> Vec<usize>;
}

/// A player joined with its decision source.
pub struct Seat<'a> {
    pub player: Player,
    pub source: Box<dyn DecisionSource + 'a>,
}

impl<'a> Seat<'a> {
    pub fn new(player: Player, source: Box<dyn DecisionSource + 'a>) -> Self {
        Self { player, source }
    }
}
