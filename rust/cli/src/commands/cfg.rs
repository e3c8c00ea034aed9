//! Show the resolved configuration and where each value came from.

use std::io::Write;

use crate::config;
use crate::error::CliError;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;
    let cfg = &resolved.config;
    let sources = &resolved.sources;

    writeln!(out, "Configuration:")?;
    writeln!(
        out,
        "  starting_money = {} ({})",
        cfg.starting_money,
        sources.starting_money.as_str()
    )?;
    writeln!(out, "  bots = {} ({})", cfg.bots, sources.bots.as_str())?;
    writeln!(
        out,
        "  entry_fee = {} ({})",
        cfg.entry_fee,
        sources.entry_fee.as_str()
    )?;
    match cfg.seed {
        Some(seed) => writeln!(out, "  seed = {} ({})", seed, sources.seed.as_str())?,
        None => writeln!(out, "  seed = (random)")?,
    }
    Ok(())
}
