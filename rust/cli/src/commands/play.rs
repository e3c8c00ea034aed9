//! Interactive table: the user's seat against computer opponents.
//!
//! The human decision provider and the table renderer share the output
//! stream through a `RefCell`, and a shared quit flag lets a `q` at any
//! prompt end the game between rounds.

use std::cell::{Cell, RefCell};
use std::io::{BufRead, Write};
use std::rc::Rc;

use fivedraw_ai::TableBot;
use fivedraw_engine::game::{Game, TableConfig};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::config;
use crate::error::CliError;
use crate::human::HumanSource;
use crate::io_utils::read_stdin_line;
use crate::render::TableRenderer;

/// Computer opponents join the table under these names, in order.
pub const BOT_NAMES: [&str; 4] = ["Edwin", "Marie", "Stella", "Hugo"];

pub fn handle_play_command(
    name: Option<String>,
    bots: Option<u8>,
    seed: Option<u64>,
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let bots = usize::from(bots.unwrap_or(cfg.bots).clamp(1, 4));

    writeln!(out, "play: bots={} seed={}", bots, seed)?;

    let user_name = match name {
        Some(n) => n,
        None => {
            writeln!(out, "Welcome to the table! What is your name?")?;
            write!(out, "> ")?;
            out.flush()?;
            match read_stdin_line(stdin) {
                Some(n) if !n.is_empty() => n,
                _ => "Player".to_string(),
            }
        }
    };

    let quit = Rc::new(Cell::new(false));
    let out_cell: RefCell<&mut dyn Write> = RefCell::new(out);
    let in_cell: RefCell<&mut dyn BufRead> = RefCell::new(stdin);

    let table = TableConfig {
        starting_money: cfg.starting_money,
        entry_fee_step: cfg.entry_fee,
    };
    let mut seed_rng = ChaCha20Rng::seed_from_u64(seed);
    let mut game = Game::new(seed_rng.next_u64(), table);
    game.set_sink(Box::new(TableRenderer::new(&out_cell)));
    for bot_name in BOT_NAMES.iter().take(bots) {
        game.add_seat(bot_name, Box::new(TableBot::with_seed(seed_rng.next_u64())));
    }
    game.add_seat(
        &user_name,
        Box::new(HumanSource::new(&in_cell, &out_cell, Rc::clone(&quit))),
    );
    game.shuffle_seating();

    while game.seated() > 1 && !quit.get() {
        let summary = game.play_round()?;
        let mut o = out_cell.borrow_mut();
        writeln!(o, "{} wins the pool of ${}.", summary.winner, summary.pool)?;
        for loser in &summary.eliminated {
            writeln!(o, "{} leaves the table.", loser)?;
        }
    }

    let champion = if game.seated() == 1 {
        game.players().next().map(|p| p.name().to_string())
    } else {
        None
    };
    let rounds = game.round_number();
    drop(game);

    let out = out_cell.into_inner();
    match champion {
        Some(champion) => writeln!(out, "{} wins the game after {} rounds!", champion, rounds)?,
        None => writeln!(out, "Game abandoned.")?,
    }
    Ok(())
}
