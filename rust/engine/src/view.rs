use serde::Serialize;

use crate::cards::Card;
use crate::hand::RankResult;
use crate::player::{Decision, Player};

/// Phase boundary after which a snapshot is emitted.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub enum Phase {
    Deal,
    Betting,
    Replacement,
    Showdown,
}

/// Read-only picture of one player for the presentation layer.
/// The hand is withheld until the player's cards are revealed at showdown.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub name: String,
    pub money: u32,
    pub bet: u32,
    pub folded: bool,
    pub all_in: bool,
    pub hand: Option<Vec<Card>>,
    pub rank: Option<RankResult>,
}

impl PlayerView {
    pub fn of(player: &Player) -> Self {
        let visible = player.is_revealed();
        Self {
            name: player.name().to_string(),
            money: player.money(),
            bet: player.bet(),
            folded: !player.is_eligible(),
            all_in: player.is_all_in(),
            hand: visible.then(|| player.hand().to_vec()),
            rank: if visible { player.rank().cloned() } else { None },
        }
    }
}

/// Read-only picture of the whole table after a mutating phase.
#[derive(Debug, Clone, Serialize)]
pub struct TableSnapshot {
    pub phase: Phase,
    pub round: u32,
    pub pool: u32,
    pub current_bid: u32,
    pub players: Vec<PlayerView>,
}

/// Receives table snapshots and per-decision notifications for rendering.
/// The engine makes no assumption about rendering timing or medium.
pub trait SnapshotSink {
    fn on_update(&mut self, snapshot: &TableSnapshot);

    /// Called as each betting decision is applied. `current_bid` is the
    /// table bid in force when the decision was taken.
    fn on_decision(&mut self, _player: &str, _decision: &Decision, _current_bid: u32) {}
}

/// Sink that drops everything; used when nothing renders the game.
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn on_update(&mut self, _snapshot: &TableSnapshot) {}
}
