//! Deal a single hand and print its classification.

use std::io::Write;

use fivedraw_engine::deck::Deck;
use fivedraw_engine::game::HAND_SIZE;
use fivedraw_engine::hand::{classify, sort_hand};

use crate::error::CliError;
use crate::formatters::{format_category, format_hand};

pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    writeln!(out, "deal: seed={}", seed)?;

    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();
    let mut hand = Vec::with_capacity(HAND_SIZE);
    for _ in 0..HAND_SIZE {
        hand.push(deck.draw()?);
    }
    sort_hand(&mut hand);

    writeln!(out, "Hand: {}", format_hand(&hand))?;
    if let Some(result) = classify(&hand) {
        writeln!(
            out,
            "{}: {}",
            format_category(result.category),
            format_hand(&result.cards)
        )?;
    }
    Ok(())
}
