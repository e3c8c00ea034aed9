//! Probabilistic table opponent.
//!
//! Implements the engine's decision-source boundary with the table's
//! classic temperament model: a steep fold curve over weak hands, a raise
//! appetite scaled by hand strength and a bounded bluff term, all driven
//! by the player's fixed aggressiveness and an owned seeded generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fivedraw_engine::cards::Card;
use fivedraw_engine::decision::{DecisionSource, TurnView};
use fivedraw_engine::game::MAX_DISCARDS;
use fivedraw_engine::hand::{matched_high, RankCategory, RankResult};
use fivedraw_engine::player::Decision;
use fivedraw_engine::rules::{min_raise, DENOMINATION};

/// Just above the positional value of the strongest high-card-only hand,
/// `[8 T J Q K]`.
const HAND_VALUE_CEILING: f64 = 568_244.0;
/// Positional value of the weakest five-card high-card hand, `[A 2 3 4 6]`.
const HAND_VALUE_FLOOR: f64 = 17_507.0;

/// Rule-of-thumb opponent for computer seats.
///
/// Decisions are sampled independently on every turn: the fold check comes
/// first, then the raise check, and a call is the fallback. The generator
/// is owned and seedable, so simulations replay identically.
#[derive(Debug)]
pub struct TableBot {
    rng: StdRng,
}

impl TableBot {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Probability of abandoning the hand this turn.
    ///
    /// High-card hands fold along a logarithmic curve over the positional
    /// hand value, sharpened by aggressiveness: a timid player lets almost
    /// every weak hand go, an aggressive one clings to them. Made hands
    /// fold rarely, and only under bid pressure relative to the bankroll.
    fn fold_probability(view: &TurnView<'_>, rank: &RankResult) -> f64 {
        let aggressiveness = view.aggressiveness.clamp(0.0, 1.0);
        if rank.category == RankCategory::HighCard {
            let value = hand_value(view.hand).max(HAND_VALUE_FLOOR);
            let base = HAND_VALUE_CEILING / (HAND_VALUE_FLOOR * (1.0 - 0.999 * aggressiveness));
            let curve = (HAND_VALUE_CEILING / value).ln() / base.ln();
            curve.clamp(0.0, 1.0).powf(2.5 + aggressiveness)
        } else {
            let strength = rank.category as u8 as f64;
            let due = view.current_bid.saturating_sub(view.bet) as f64;
            let pressure = due / (view.money as f64 + due).max(1.0);
            (0.15 * pressure * (1.0 - strength / 9.0) * (1.5 - aggressiveness)).clamp(0.0, 0.35)
        }
    }

    /// Probability of pushing the bid up instead of calling.
    fn raise_probability(&mut self, view: &TurnView<'_>, rank: &RankResult) -> f64 {
        let strength = rank.category as u8 as f64;
        let top = matched_high(rank).step() as f64 / 13.0;
        let bluff = self.rng.random::<f64>() * 0.12;
        let mut p = (0.05 + 0.055 * strength + 0.10 * top) * (0.5 + view.aggressiveness) + bluff;
        if view.did_raise {
            // already raised this pass; damp the urge by an order of magnitude
            p /= 10.0;
        }
        p.min(0.85)
    }

    fn raise_decision(&mut self, view: &TurnView<'_>) -> Decision {
        if view.current_bid == 0 {
            // opening bet: up to 50 denominations, never under the floor
            let denoms = self.rng.random_range(10..=50);
            Decision::Raise(denoms * DENOMINATION)
        } else {
            let stretch: f64 = self.rng.random();
            let scaled = (view.current_bid as f64 * (view.aggressiveness + stretch)) as u32;
            Decision::Raise(scaled.max(min_raise(view.current_bid)))
        }
    }
}

impl Default for TableBot {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionSource for TableBot {
    fn decide(&mut self, view: &TurnView<'_>) -> Decision {
        let Some(rank) = view.rank else {
            return Decision::Call;
        };
        if self.rng.random::<f64>() < Self::fold_probability(view, rank) {
            return Decision::Fold;
        }
        let raise_p = self.raise_probability(view, rank);
        if self.rng.random::<f64>() < raise_p {
            return self.raise_decision(view);
        }
        Decision::Call
    }

    /// Keeps the matched cards and exchanges everything else.
    fn choose_discards(&mut self, view: &TurnView<'_>) -> Vec<usize> {
        let Some(rank) = view.rank else {
            return Vec::new();
        };
        view.hand
            .iter()
            .enumerate()
            .filter(|(_, card)| !rank.cards.contains(card))
            .map(|(i, _)| i)
            .take(MAX_DISCARDS)
            .collect()
    }
}

/// Positional value of a sorted hand: each card weighs `(step + 1)`
/// raised to its position, so the top card dominates the total.
fn hand_value(hand: &[Card]) -> f64 {
    hand.iter()
        .enumerate()
        .map(|(i, card)| f64::from(card.rank.step() + 1).powi(i as i32 + 1))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fivedraw_engine::cards::{Rank as R, Suit as S};
    use fivedraw_engine::hand::classify;

    fn c(s: S, r: R) -> Card {
        Card { suit: s, rank: r }
    }

    fn view_over<'a>(
        hand: &'a [Card],
        rank: &'a RankResult,
        current_bid: u32,
        did_raise: bool,
    ) -> TurnView<'a> {
        TurnView {
            current_bid,
            pool: 300,
            money: 10_000,
            bet: 0,
            hand,
            rank: Some(rank),
            aggressiveness: 0.5,
            did_raise,
            opponents: 2,
        }
    }

    #[test]
    fn weakest_high_card_hand_folds_far_more_often_than_the_best() {
        let weak = vec![
            c(S::Spades, R::Ace),
            c(S::Clubs, R::Two),
            c(S::Hearts, R::Three),
            c(S::Diamonds, R::Four),
            c(S::Clubs, R::Six),
        ];
        let strong = vec![
            c(S::Spades, R::Eight),
            c(S::Clubs, R::Ten),
            c(S::Hearts, R::Jack),
            c(S::Diamonds, R::Queen),
            c(S::Spades, R::King),
        ];
        let weak_rank = classify(&weak).unwrap();
        let strong_rank = classify(&strong).unwrap();

        let p_weak = TableBot::fold_probability(&view_over(&weak, &weak_rank, 100, false), &weak_rank);
        let p_strong =
            TableBot::fold_probability(&view_over(&strong, &strong_rank, 100, false), &strong_rank);
        assert!(p_weak > 0.3, "weak hand fold probability was {}", p_weak);
        assert!(p_strong < 0.01, "strong hand fold probability was {}", p_strong);
        assert!(p_weak > p_strong * 10.0);
    }

    #[test]
    fn made_hand_never_folds_for_free() {
        let hand = vec![
            c(S::Spades, R::Nine),
            c(S::Clubs, R::Nine),
            c(S::Hearts, R::Two),
            c(S::Diamonds, R::Five),
            c(S::Clubs, R::Jack),
        ];
        let rank = classify(&hand).unwrap();
        let p = TableBot::fold_probability(&view_over(&hand, &rank, 0, false), &rank);
        assert_eq!(p, 0.0);
    }

    #[test]
    fn bid_pressure_raises_the_made_hand_fold_probability() {
        let hand = vec![
            c(S::Spades, R::Nine),
            c(S::Clubs, R::Nine),
            c(S::Hearts, R::Two),
            c(S::Diamonds, R::Five),
            c(S::Clubs, R::Jack),
        ];
        let rank = classify(&hand).unwrap();
        let mut cheap = view_over(&hand, &rank, 100, false);
        cheap.money = 10_000;
        let mut dear = view_over(&hand, &rank, 8_000, false);
        dear.money = 2_000;
        let p_cheap = TableBot::fold_probability(&cheap, &rank);
        let p_dear = TableBot::fold_probability(&dear, &rank);
        assert!(p_dear > p_cheap);
    }

    #[test]
    fn raises_respect_floor_and_minimum_increment() {
        let hand = vec![
            c(S::Spades, R::King),
            c(S::Clubs, R::King),
            c(S::Hearts, R::Two),
            c(S::Diamonds, R::Five),
            c(S::Clubs, R::Jack),
        ];
        let rank = classify(&hand).unwrap();
        let mut bot = TableBot::with_seed(7);
        for bid in [0u32, 100, 250] {
            for _ in 0..50 {
                if let Decision::Raise(amount) = bot.raise_decision(&view_over(&hand, &rank, bid, false))
                {
                    assert!(amount >= min_raise(bid), "raise {} under minimum", amount);
                }
            }
        }
    }

    #[test]
    fn discards_keep_the_matched_subset() {
        let hand = {
            let mut h = vec![
                c(S::Spades, R::Five),
                c(S::Clubs, R::Five),
                c(S::Hearts, R::Nine),
                c(S::Diamonds, R::Nine),
                c(S::Clubs, R::King),
            ];
            fivedraw_engine::hand::sort_hand(&mut h);
            h
        };
        let rank = classify(&hand).unwrap();
        let mut bot = TableBot::with_seed(1);
        let picks = bot.choose_discards(&view_over(&hand, &rank, 0, false));
        // two pairs leave a single kicker to exchange
        assert_eq!(picks.len(), 1);
        assert_eq!(hand[picks[0]].rank, R::King);
    }

    #[test]
    fn high_card_keeps_only_the_top_card() {
        let hand = vec![
            c(S::Spades, R::Two),
            c(S::Clubs, R::Six),
            c(S::Hearts, R::Nine),
            c(S::Diamonds, R::Jack),
            c(S::Clubs, R::King),
        ];
        let rank = classify(&hand).unwrap();
        let mut bot = TableBot::with_seed(1);
        let picks = bot.choose_discards(&view_over(&hand, &rank, 0, false));
        assert_eq!(picks, vec![0, 1, 2, 3]);
    }

    #[test]
    fn seeded_bots_are_deterministic() {
        let hand = vec![
            c(S::Spades, R::Two),
            c(S::Clubs, R::Six),
            c(S::Hearts, R::Nine),
            c(S::Diamonds, R::Jack),
            c(S::Clubs, R::King),
        ];
        let rank = classify(&hand).unwrap();
        let mut a = TableBot::with_seed(42);
        let mut b = TableBot::with_seed(42);
        for _ in 0..20 {
            let view = view_over(&hand, &rank, 100, false);
            assert_eq!(a.decide(&view), b.decide(&view));
        }
    }

    #[test]
    fn a_repeat_raise_is_an_order_of_magnitude_rarer() {
        let hand = vec![
            c(S::Spades, R::King),
            c(S::Clubs, R::King),
            c(S::Hearts, R::King),
            c(S::Diamonds, R::Five),
            c(S::Clubs, R::Jack),
        ];
        let rank = classify(&hand).unwrap();
        // fix the bluff term by comparing averages over many samples
        let mut fresh = TableBot::with_seed(3);
        let mut repeat = TableBot::with_seed(3);
        let n = 200;
        let p_fresh: f64 = (0..n)
            .map(|_| fresh.raise_probability(&view_over(&hand, &rank, 100, false), &rank))
            .sum::<f64>()
            / n as f64;
        let p_repeat: f64 = (0..n)
            .map(|_| repeat.raise_probability(&view_over(&hand, &rank, 100, true), &rank))
            .sum::<f64>()
            / n as f64;
        assert!((p_fresh / p_repeat - 10.0).abs() < 0.5);
    }
}
