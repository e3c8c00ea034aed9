use serde::{Deserialize, Serialize};

use crate::hand::RankCategory;

/// One player's position when a round ended.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerOutcome {
    pub name: String,
    pub money: u32,
    pub bet: u32,
    pub folded: bool,
    #[serde(default)]
    pub category: Option<RankCategory>,
}

/// Complete record of one round, serialized to JSONL for history files.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number within the game
    pub round: u32,
    /// RNG seed of the game (enables deterministic replay)
    pub seed: Option<u64>,
    /// Per-player entry fee charged this round
    pub entry_fee: u32,
    /// Pool transferred to the winner
    pub pool: u32,
    pub winner: String,
    /// Winning hand category, if the round reached a contested showdown
    #[serde(default)]
    pub category: Option<RankCategory>,
    pub players: Vec<PlayerOutcome>,
    /// Timestamp when the round finished (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends round records to a history file, one JSON object per line.
pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
        })
    }

    /// A logger that validates records without touching the filesystem.
    pub fn disabled() -> Self {
        Self { writer: None }
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
