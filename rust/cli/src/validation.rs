//! Input parsing for the interactive table.
//!
//! Turns raw prompt lines into betting decisions and replacement picks.
//! Amount constraints (funds, minimum raise, denomination) are checked
//! separately against [`fivedraw_engine::rules`] by the human provider's
//! retry loop.

use fivedraw_engine::player::Decision;

/// Result of parsing a betting prompt line.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid decision parsed from input
    Action(Decision),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parses a betting prompt line.
///
/// Accepted forms (case-insensitive):
/// - "f" or "fold"
/// - "c", "call" or "check"
/// - "b N", "bet N", "r N" or "raise N"
/// - "q" or "quit"
pub fn parse_decision(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    if parts[0] == "q" || parts[0] == "quit" {
        return ParseResult::Quit;
    }

    match parts[0] {
        "fold" | "f" => ParseResult::Action(Decision::Fold),
        "call" | "check" | "c" => ParseResult::Action(Decision::Call),
        "bet" | "raise" | "b" | "r" => {
            if parts.len() < 2 {
                return ParseResult::Invalid(
                    "A bet needs an amount (e.g. 'bet 100')".to_string(),
                );
            }
            match parts[1].parse::<u32>() {
                Ok(amount) if amount > 0 => ParseResult::Action(Decision::Raise(amount)),
                Ok(_) => ParseResult::Invalid("Bet amount must be positive".to_string()),
                Err(_) => ParseResult::Invalid("Invalid bet amount".to_string()),
            }
        }
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}' (try call, bet <amount>, fold)",
            other
        )),
    }
}

/// Parses a replacement prompt line into 0-based hand indices.
///
/// The prompt uses card numbers 1 through `hand_len`; a single "0" keeps
/// the whole hand. At most four cards may be exchanged.
pub fn parse_discards(input: &str, hand_len: usize) -> Result<Vec<usize>, String> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.is_empty() {
        return Err("Enter 0 for none, or card numbers to replace".to_string());
    }
    if parts == ["0"] {
        return Ok(Vec::new());
    }
    let mut picks = Vec::with_capacity(parts.len());
    for part in parts {
        let number: usize = part
            .parse()
            .map_err(|_| format!("'{}' is not a card number", part))?;
        if number == 0 || number > hand_len {
            return Err(format!("Card numbers go from 1 to {}", hand_len));
        }
        let index = number - 1;
        if picks.contains(&index) {
            return Err(format!("Card {} listed twice", number));
        }
        picks.push(index);
    }
    if picks.len() > 4 {
        return Err("You can replace at most four cards".to_string());
    }
    Ok(picks)
}
