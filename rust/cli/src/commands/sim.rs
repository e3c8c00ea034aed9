//! Bot-only simulations with optional JSONL round history output.

use std::collections::BTreeMap;
use std::io::Write;

use fivedraw_ai::TableBot;
use fivedraw_engine::game::{Game, TableConfig};
use fivedraw_engine::logger::{RoundLogger, RoundRecord};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::commands::BOT_NAMES;
use crate::config;
use crate::error::CliError;

pub fn handle_sim_command(
    games: u32,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    // a table of bots only still needs at least two seats
    let seats = usize::from(cfg.bots.clamp(1, 4)).max(2);

    writeln!(out, "sim: games={} seats={} seed={}", games, seats, seed)?;

    let mut logger = match &output {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };

    let mut seed_rng = ChaCha20Rng::seed_from_u64(seed);
    let mut wins: BTreeMap<String, u32> = BTreeMap::new();
    let mut total_rounds = 0u32;

    for _ in 0..games {
        let game_seed = seed_rng.next_u64();
        let table = TableConfig {
            starting_money: cfg.starting_money,
            entry_fee_step: cfg.entry_fee,
        };
        let mut game = Game::new(game_seed, table);
        for bot_name in BOT_NAMES.iter().take(seats) {
            game.add_seat(bot_name, Box::new(TableBot::with_seed(seed_rng.next_u64())));
        }
        game.shuffle_seating();

        while game.seated() > 1 {
            let summary = game.play_round()?;
            total_rounds += 1;
            if let Some(logger) = &mut logger {
                logger.write(&RoundRecord {
                    round: summary.round,
                    seed: Some(game_seed),
                    entry_fee: summary.entry_fee,
                    pool: summary.pool,
                    winner: summary.winner.clone(),
                    category: summary.category,
                    players: summary.outcomes.clone(),
                    ts: None,
                })?;
            }
        }
        if let Some(champion) = game.players().next() {
            *wins.entry(champion.name().to_string()).or_insert(0) += 1;
        }
    }

    writeln!(out, "Games: {}   Rounds: {}", games, total_rounds)?;
    let mut ranking: Vec<(&String, &u32)> = wins.iter().collect();
    ranking.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
    for (name, count) in ranking {
        writeln!(out, "  {}: {} wins", name, count)?;
    }
    if let Some(path) = &output {
        writeln!(out, "History written to {}", path)?;
    }
    Ok(())
}
