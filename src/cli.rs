use crate::simulation::engine::{ShuffleError, ShuffleReport};
use std::num::IntErrorKind;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Largest deck the CLI accepts; ranks are stored as `u32`
pub const MAX_DECK_SIZE: u32 = u32::MAX;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Specify the number of cards in the deck.")]
    Missing,
    #[error("Invalid input type, '{0}' is not an integer.")]
    NotAnInteger(String),
    #[error("Negative deck size '{0}'. Input a positive deck size.")]
    Negative(String),
    #[error("Deck size '{value}' too large. Max deck size: {max}")]
    TooLarge { value: String, max: u32 },
    #[error("Empty range: --from {from} is greater than --to {to}")]
    EmptyRange { from: u32, to: u32 },
}

/// Anything that ends a CLI run with a failure exit code
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Input(#[from] InputError),
    #[error("{0}")]
    Shuffle(#[from] ShuffleError),
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validate a raw deck size argument
pub fn parse_deck_size(raw: &str) -> Result<u32, InputError> {
    let trimmed = raw.trim();
    let value = trimmed.parse::<i64>().map_err(|e: std::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => InputError::TooLarge {
            value: trimmed.to_string(),
            max: MAX_DECK_SIZE,
        },
        IntErrorKind::NegOverflow => InputError::Negative(trimmed.to_string()),
        _ => InputError::NotAnInteger(trimmed.to_string()),
    })?;

    if value < 0 {
        return Err(InputError::Negative(trimmed.to_string()));
    }
    u32::try_from(value).map_err(|_| InputError::TooLarge {
        value: trimmed.to_string(),
        max: MAX_DECK_SIZE,
    })
}

/// Like `parse_deck_size`, but a missing argument is an error too
pub fn require_deck_size(raw: Option<&str>) -> Result<u32, InputError> {
    raw.ok_or(InputError::Missing).and_then(parse_deck_size)
}

pub fn sweep_range(from: u32, to: u32) -> Result<RangeInclusive<u32>, InputError> {
    if from > to {
        return Err(InputError::EmptyRange { from, to });
    }
    Ok(from..=to)
}

pub fn render_report(report: &ShuffleReport, json: bool) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string(report);
    }
    Ok(format!(
        "Deck size: {}\nNumber of shuffles to get back to original deck order: {}",
        report.deck_size, report.rounds
    ))
}

pub fn render_sweep(reports: &[ShuffleReport], json: bool) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string_pretty(reports);
    }
    let mut out = format!("{:>10} {:>12}\n{:-<23}", "Deck size", "Rounds", "");
    for report in reports {
        out.push_str(&format!("\n{:>10} {:>12}", report.deck_size, report.rounds));
    }
    Ok(out)
}
