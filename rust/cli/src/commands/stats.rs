//! Aggregate statistics over a JSONL round history.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::{DateTime, FixedOffset};
use fivedraw_engine::logger::RoundRecord;

use crate::error::CliError;
use crate::formatters::format_category;
use crate::ui;

pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let text = std::fs::read_to_string(&input)
        .map_err(|e| CliError::InvalidInput(format!("cannot read {}: {}", input, e)))?;

    let mut rounds = 0u32;
    let mut skipped = 0u32;
    let mut pool_total = 0u64;
    let mut biggest_pool = 0u32;
    let mut wins: BTreeMap<String, u32> = BTreeMap::new();
    let mut categories: BTreeMap<&'static str, u32> = BTreeMap::new();
    let mut first_ts: Option<DateTime<FixedOffset>> = None;
    let mut last_ts: Option<DateTime<FixedOffset>> = None;

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let record: RoundRecord = match serde_json::from_str(line) {
            Ok(record) => record,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        rounds += 1;
        pool_total += u64::from(record.pool);
        biggest_pool = biggest_pool.max(record.pool);
        *wins.entry(record.winner.clone()).or_insert(0) += 1;
        if let Some(category) = record.category {
            *categories.entry(format_category(category)).or_insert(0) += 1;
        }
        if let Some(ts) = record
            .ts
            .as_deref()
            .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
        {
            if first_ts.is_none_or(|first| ts < first) {
                first_ts = Some(ts);
            }
            if last_ts.is_none_or(|last| ts > last) {
                last_ts = Some(ts);
            }
        }
    }

    if rounds == 0 {
        return Err(CliError::InvalidInput(format!(
            "no valid round records in {}",
            input
        )));
    }

    writeln!(out, "Rounds: {}", rounds)?;
    writeln!(out, "Total pool money: {}", pool_total)?;
    writeln!(out, "Biggest pool: {}", biggest_pool)?;
    writeln!(out, "Round wins:")?;
    let mut ranking: Vec<(&String, &u32)> = wins.iter().collect();
    ranking.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
    for (name, count) in ranking {
        writeln!(out, "  {}: {}", name, count)?;
    }
    if !categories.is_empty() {
        writeln!(out, "Winning categories:")?;
        for (category, count) in &categories {
            writeln!(out, "  {}: {}", category, count)?;
        }
    }
    if let (Some(first), Some(last)) = (first_ts, last_ts) {
        writeln!(out, "Recorded between {} and {}", first, last)?;
    }
    if skipped > 0 {
        ui::display_warning(err, &format!("skipped {} corrupted records", skipped))?;
    }
    Ok(())
}
