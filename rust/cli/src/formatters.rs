//! Card, hand, and category formatters for terminal display.
//!
//! Pure functions turning engine values into display strings. Suits render
//! as Unicode symbols with an ASCII fallback for terminals that cannot
//! show them.

use fivedraw_engine::cards::{Card, Rank, Suit};
use fivedraw_engine::hand::RankCategory;

/// Check if the terminal supports Unicode suit symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM), or VS Code (VSCODE_INJECTION). On Unix-like systems,
/// assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Spades => "♠",
            Suit::Clubs => "♣",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
        }
        .to_string()
    } else {
        match suit {
            Suit::Spades => "s",
            Suit::Clubs => "c",
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
        }
        .to_string()
    }
}

pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Ace => "A",
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
    }
    .to_string()
}

/// Formats a card like "7♦" (Unicode) or "7d" (ASCII).
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Formats a card sequence as space-separated symbols.
pub fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_category(category: RankCategory) -> &'static str {
    match category {
        RankCategory::HighCard => "High card",
        RankCategory::OnePair => "One pair",
        RankCategory::TwoPairs => "Two pairs",
        RankCategory::ThreeOfAKind => "Three of a kind",
        RankCategory::Straight => "Straight",
        RankCategory::Flush => "Flush",
        RankCategory::FullHouse => "Full house",
        RankCategory::FourOfAKind => "Four of a kind",
        RankCategory::StraightFlush => "Straight flush",
    }
}
