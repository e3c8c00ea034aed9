use std::cmp::Ordering;

use crate::cards::{Card, Rank};
use crate::errors::EngineError;
use crate::hand::{matched_high, RankCategory, RankResult};

/// One player's claim at the showdown: seat index, full hand, classification.
#[derive(Debug, Clone, Copy)]
pub struct Contestant<'a> {
    pub seat: usize,
    pub hand: &'a [Card],
    pub rank: &'a RankResult,
}

/// Picks the winning seat among the eligible players.
///
/// The best dominant category wins outright; within a category the
/// tie-break rules below apply. Exact ties after every rule resolve to the
/// first contender encountered in seating order; there is no split pot.
pub fn determine_winner(contestants: &[Contestant<'_>]) -> Result<usize, EngineError> {
    let (first, rest) = contestants
        .split_first()
        .ok_or(EngineError::NoEligiblePlayers)?;
    if rest.is_empty() {
        return Ok(first.seat);
    }

    let best_category = contestants
        .iter()
        .map(|c| c.rank.category)
        .max()
        .ok_or(EngineError::NoEligiblePlayers)?;

    let mut contenders = contestants
        .iter()
        .filter(|c| c.rank.category == best_category);
    let mut best = contenders.next().ok_or(EngineError::NoEligiblePlayers)?;
    for challenger in contenders {
        if tie_break(challenger, best) == Ordering::Greater {
            best = challenger;
        }
    }
    Ok(best.seat)
}

/// Compares two contestants that share the same dominant category.
fn tie_break(a: &Contestant<'_>, b: &Contestant<'_>) -> Ordering {
    match a.rank.category {
        RankCategory::HighCard | RankCategory::OnePair => {
            matched_high(a.rank)
                .cmp(&matched_high(b.rank))
                .then_with(|| kickers_desc(a).cmp(&kickers_desc(b)))
        }
        RankCategory::ThreeOfAKind
        | RankCategory::FourOfAKind
        | RankCategory::Straight
        | RankCategory::StraightFlush
        | RankCategory::FullHouse => matched_high(a.rank).cmp(&matched_high(b.rank)),
        RankCategory::TwoPairs => {
            let (a_high, a_low, a_kick) = two_pair_ranks(a);
            let (b_high, b_low, b_kick) = two_pair_ranks(b);
            a_high
                .cmp(&b_high)
                .then(a_low.cmp(&b_low))
                .then(a_kick.cmp(&b_kick))
        }
        RankCategory::Flush => ranks_desc(a.rank.cards.iter()).cmp(&ranks_desc(b.rank.cards.iter())),
    }
}

/// Ranks of the cards outside the matched subset, highest first.
/// Single-deck cards are distinct, so membership is enough.
fn kickers_desc(c: &Contestant<'_>) -> Vec<Rank> {
    ranks_desc(c.hand.iter().filter(|card| !c.rank.cards.contains(card)))
}

fn ranks_desc<'a, I: Iterator<Item = &'a Card>>(cards: I) -> Vec<Rank> {
    let mut ranks: Vec<Rank> = cards.map(|c| c.rank).collect();
    ranks.sort_unstable_by(|x, y| y.cmp(x));
    ranks
}

/// Higher pair, lower pair and kicker ranks of a TwoPairs holding.
fn two_pair_ranks(c: &Contestant<'_>) -> (Rank, Rank, Rank) {
    let mut pairs = ranks_desc(c.rank.cards.iter());
    pairs.dedup();
    let kicker = *kickers_desc(c)
        .first()
        .expect("a five-card hand leaves one kicker beside two pairs");
    (pairs[0], pairs[1], kicker)
}
