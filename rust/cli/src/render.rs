//! Terminal renderer for engine table snapshots.

use std::cell::RefCell;
use std::io::Write;

use fivedraw_engine::player::Decision;
use fivedraw_engine::view::{Phase, SnapshotSink, TableSnapshot};

use crate::formatters::{format_category, format_hand};

/// Prints the table after each phase and narrates betting decisions.
pub struct TableRenderer<'a, 'b> {
    output: &'a RefCell<&'b mut dyn Write>,
}

impl<'a, 'b> TableRenderer<'a, 'b> {
    pub fn new(output: &'a RefCell<&'b mut dyn Write>) -> Self {
        Self { output }
    }
}

impl SnapshotSink for TableRenderer<'_, '_> {
    fn on_update(&mut self, snapshot: &TableSnapshot) {
        let mut out = self.output.borrow_mut();
        match snapshot.phase {
            Phase::Deal => {
                let _ = writeln!(out);
                let _ = writeln!(out, "=== Round {} ===", snapshot.round);
            }
            Phase::Replacement => {
                let _ = writeln!(out, "-- replacement --");
            }
            Phase::Showdown => {
                let _ = writeln!(out, "-- showdown --");
            }
            Phase::Betting => {}
        }
        let _ = writeln!(
            out,
            "Money pool: ${}    Current bid: ${}",
            snapshot.pool, snapshot.current_bid
        );
        for p in &snapshot.players {
            let marker = if p.folded {
                " (fold)"
            } else if p.all_in {
                " (all in)"
            } else {
                ""
            };
            let _ = writeln!(
                out,
                "{}{}\tCash: {}\tBet: {}",
                p.name, marker, p.money, p.bet
            );
            if let Some(hand) = &p.hand {
                let _ = writeln!(out, "  {}", format_hand(hand));
                if let Some(rank) = &p.rank {
                    let _ = writeln!(
                        out,
                        "  {}: {}",
                        format_category(rank.category),
                        format_hand(&rank.cards)
                    );
                }
            }
        }
    }

    fn on_decision(&mut self, player: &str, decision: &Decision, current_bid: u32) {
        let mut out = self.output.borrow_mut();
        let _ = match decision {
            Decision::Fold => writeln!(out, "{} folds.", player),
            Decision::Call if current_bid == 0 => writeln!(out, "{} checks.", player),
            Decision::Call => writeln!(out, "{} calls with {}.", player, current_bid),
            Decision::Raise(_) => writeln!(out, "{} bets {}.", player, current_bid),
        };
    }
}
