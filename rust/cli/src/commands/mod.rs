//! Subcommand handlers for the fivedraw CLI.

mod cfg;
mod deal;
mod play;
mod sim;
mod stats;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::{handle_play_command, BOT_NAMES};
pub use sim::handle_sim_command;
pub use stats::handle_stats_command;
