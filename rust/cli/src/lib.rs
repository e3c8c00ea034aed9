//! # Fivedraw CLI Library
//!
//! Command-line interface for the fivedraw poker engine: an interactive
//! table against computer opponents, single-hand dealing, bot-only
//! simulations with round histories, and history statistics.
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ## Available Subcommands
//!
//! - `play`: Sit at the table against computer opponents
//! - `deal`: Deal one hand and show its classification
//! - `sim`: Simulate bot-only games, optionally writing a JSONL history
//! - `stats`: Aggregate statistics from a JSONL round history
//! - `cfg`: Show the resolved configuration
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["fivedraw", "deal", "--seed", "42"];
//! let code = fivedraw_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod formatters;
pub mod human;
pub mod io_utils;
pub mod render;
pub mod ui;
pub mod validation;

use cli::{Commands, FivedrawCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_sim_command,
    handle_stats_command,
};
pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "deal", "sim", "stats", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = FivedrawCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return 2;
                    }
                    0
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err, "Fivedraw Poker CLI").is_err()
                        || writeln!(err, "Usage: fivedraw <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return 2;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return 2;
                        }
                    }
                    if writeln!(err, "\nFor full help, run: fivedraw --help").is_err() {
                        return 2;
                    }
                    2
                }
            }
        }
        Ok(cli) => {
            let outcome = match cli.cmd {
                Commands::Play { seed, name, bots } => {
                    // Use stdin for real input (supports both TTY and piped stdin)
                    let stdin = std::io::stdin();
                    let mut stdin_lock = stdin.lock();
                    handle_play_command(name, bots, seed, out, &mut stdin_lock)
                }
                Commands::Deal { seed } => handle_deal_command(seed, out),
                Commands::Sim {
                    games,
                    seed,
                    output,
                } => handle_sim_command(games, seed, output, out),
                Commands::Stats { input } => handle_stats_command(input, out, err),
                Commands::Cfg => handle_cfg_command(out),
            };
            match outcome {
                Ok(()) => 0,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return 2;
                    }
                    2
                }
            }
        }
    }
}
