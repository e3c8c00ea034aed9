use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};

/// Standard poker categories, ordered weakest to strongest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum RankCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPairs = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

/// The single dominant category detected in a hand, together with the
/// cards that form it.
///
/// A classification is an immutable snapshot: overlapping detections are
/// collapsed by the merge rules before the result is built, so the result
/// never carries two pairs left unmerged, a pair alongside a triple, or a
/// straight alongside a flush.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RankResult {
    pub category: RankCategory,
    pub cards: Vec<Card>,
}

/// Sorts a hand ascending by rank. Stable, so equal ranks keep their
/// insertion order.
pub fn sort_hand(hand: &mut [Card]) {
    hand.sort_by_key(|c| c.rank);
}

/// Classifies a hand of up to five cards into its dominant category.
///
/// Returns `None` only for an empty hand. The result is rebuilt from
/// scratch on every call; nothing is maintained incrementally.
///
/// Categories that require a complete hand (Flush, Straight, and their
/// StraightFlush merge) are only detected when exactly five cards are held.
pub fn classify(hand: &[Card]) -> Option<RankResult> {
    if hand.is_empty() {
        return None;
    }
    let mut cards = hand.to_vec();
    sort_hand(&mut cards);

    let mut suit_counts = [0u8; 4];
    let mut rank_counts = [0u8; 13];
    for c in &cards {
        suit_counts[suit_index(c.suit)] += 1;
        rank_counts[(c.rank.step() - 1) as usize] += 1;
    }

    let flush = suit_counts.iter().any(|&n| n == 5);

    let mut quads: Option<Vec<Card>> = None;
    let mut trips: Option<Vec<Card>> = None;
    let mut pair: Option<Vec<Card>> = None;
    let mut two_pairs: Option<Vec<Card>> = None;
    for (i, &count) in rank_counts.iter().enumerate() {
        let step = (i + 1) as u8;
        match count {
            4 => quads = Some(of_rank(&cards, step)),
            3 => trips = Some(of_rank(&cards, step)),
            2 => {
                if let Some(mut first) = pair.take() {
                    // second pair: merge both into TwoPairs
                    first.extend(of_rank(&cards, step));
                    two_pairs = Some(first);
                } else {
                    pair = Some(of_rank(&cards, step));
                }
            }
            _ => {}
        }
    }

    // pair + triple collapse into a full house over the whole hand
    let full_house = if pair.is_some() && trips.is_some() {
        pair = None;
        trips = None;
        Some(cards.clone())
    } else {
        None
    };

    let straight = cards.len() == 5
        && cards
            .windows(2)
            .all(|w| w[1].rank.step() == w[0].rank.step() + 1);

    if straight && flush {
        return Some(RankResult {
            category: RankCategory::StraightFlush,
            cards,
        });
    }
    if let Some(matched) = quads {
        return Some(RankResult {
            category: RankCategory::FourOfAKind,
            cards: matched,
        });
    }
    if let Some(matched) = full_house {
        return Some(RankResult {
            category: RankCategory::FullHouse,
            cards: matched,
        });
    }
    if flush {
        return Some(RankResult {
            category: RankCategory::Flush,
            cards,
        });
    }
    if straight {
        return Some(RankResult {
            category: RankCategory::Straight,
            cards,
        });
    }
    if let Some(matched) = trips {
        return Some(RankResult {
            category: RankCategory::ThreeOfAKind,
            cards: matched,
        });
    }
    if let Some(matched) = two_pairs {
        return Some(RankResult {
            category: RankCategory::TwoPairs,
            cards: matched,
        });
    }
    if let Some(matched) = pair {
        return Some(RankResult {
            category: RankCategory::OnePair,
            cards: matched,
        });
    }
    // no grouping left: the hand is worth its single highest card
    let high = *cards.last()?;
    Some(RankResult {
        category: RankCategory::HighCard,
        cards: vec![high],
    })
}

fn of_rank(cards: &[Card], step: u8) -> Vec<Card> {
    cards
        .iter()
        .copied()
        .filter(|c| c.rank.step() == step)
        .collect()
}

fn suit_index(s: Suit) -> usize {
    match s {
        Suit::Spades => 0,
        Suit::Clubs => 1,
        Suit::Hearts => 2,
        Suit::Diamonds => 3,
    }
}

/// Highest rank among the matched cards of a classification.
pub fn matched_high(result: &RankResult) -> Rank {
    result
        .cards
        .iter()
        .map(|c| c.rank)
        .max()
        .expect("a rank result always holds at least one card")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank as R, Suit as S};

    fn c(suit: S, rank: R) -> Card {
        Card { suit, rank }
    }

    #[test]
    fn empty_hand_has_no_rank() {
        assert_eq!(classify(&[]), None);
    }

    #[test]
    fn partial_hand_never_yields_flush() {
        let hand = [
            c(S::Spades, R::Two),
            c(S::Spades, R::Five),
            c(S::Spades, R::Nine),
            c(S::Spades, R::Jack),
        ];
        let result = classify(&hand).unwrap();
        assert_eq!(result.category, RankCategory::HighCard);
        assert_eq!(result.cards, vec![c(S::Spades, R::Jack)]);
    }

    #[test]
    fn partial_hand_still_detects_multiples() {
        let hand = [
            c(S::Spades, R::Eight),
            c(S::Clubs, R::Eight),
            c(S::Hearts, R::Eight),
        ];
        let result = classify(&hand).unwrap();
        assert_eq!(result.category, RankCategory::ThreeOfAKind);
        assert_eq!(result.cards.len(), 3);
    }

    #[test]
    fn matched_high_picks_top_of_subset() {
        let hand = [
            c(S::Spades, R::Four),
            c(S::Clubs, R::Four),
            c(S::Hearts, R::King),
            c(S::Diamonds, R::Nine),
            c(S::Clubs, R::Two),
        ];
        let result = classify(&hand).unwrap();
        assert_eq!(result.category, RankCategory::OnePair);
        assert_eq!(matched_high(&result), R::Four);
    }
}
