//! Command-line argument types for the fivedraw binary.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "fivedraw", version, about = "Five-card-draw poker at the terminal")]
pub struct FivedrawCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sit at the table against computer opponents
    Play {
        /// RNG seed for a reproducible game
        #[arg(long)]
        seed: Option<u64>,
        /// Name to play under (prompted for when omitted)
        #[arg(long)]
        name: Option<String>,
        /// Number of computer opponents
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
        bots: Option<u8>,
    },
    /// Deal one hand and show its classification
    Deal {
        /// RNG seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Simulate bot-only games
    Sim {
        /// Number of games to run
        #[arg(long, default_value_t = 1)]
        games: u32,
        /// RNG seed for a reproducible simulation
        #[arg(long)]
        seed: Option<u64>,
        /// Write a JSONL round history to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Aggregate statistics from a JSONL round history
    Stats {
        /// Path to a history file written by `sim --output`
        #[arg(long)]
        input: String,
    },
    /// Show the resolved configuration
    Cfg,
}
