use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::EngineError;

/// A 52-card deck with a draw position and its own seeded generator.
///
/// The generator is seeded once at construction and reused for every
/// shuffle over the deck's lifetime; it is never re-seeded per draw.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    /// Restores the full 52 cards and reorders them with an unbiased shuffle.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    /// Removes and returns the top card.
    ///
    /// Round accounting guarantees at most 5 dealt plus 4 replacement cards
    /// per active player, so a draw on an exhausted deck is a contract
    /// violation.
    pub fn draw(&mut self) -> Result<Card, EngineError> {
        if self.position >= self.cards.len() {
            Err(EngineError::EmptyDeck)
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Ok(c)
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
