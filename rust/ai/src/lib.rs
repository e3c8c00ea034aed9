//! # fivedraw-ai: Computer Opponents for Five-Card Draw
//!
//! Provides the probabilistic table opponent used for computer seats.
//! Bots implement the engine's [`DecisionSource`] boundary, so a seat can
//! hold a bot or a human provider interchangeably.
//!
//! ## Core Components
//!
//! - [`bot::TableBot`] - Probabilistic opponent with a seedable generator
//! - [`create_bot`] - Factory for boxed seat sources
//!
//! ## Quick Start
//!
//! ```rust
//! use fivedraw_ai::create_bot;
//! use fivedraw_engine::game::{Game, TableConfig};
//!
//! let mut game = Game::new(42, TableConfig::default());
//! game.add_seat("Edwin", create_bot(1));
//! game.add_seat("Marie", create_bot(2));
//! game.add_seat("Stella", create_bot(3));
//!
//! let summary = game.play_round().expect("round completes");
//! println!("{} takes the pool of {}", summary.winner, summary.pool);
//! ```

use fivedraw_engine::decision::DecisionSource;

pub mod bot;

pub use bot::TableBot;

/// Builds a boxed, seeded bot ready to occupy a seat.
///
/// Seeding each seat distinctly (for instance from a per-game seed stream)
/// keeps whole simulations reproducible.
pub fn create_bot(seed: u64) -> Box<dyn DecisionSource> {
    Box::new(TableBot::with_seed(seed))
}
