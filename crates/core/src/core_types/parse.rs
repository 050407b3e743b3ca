//! Parsing speeds and units from text
//!
//! Accepts `<number><optional whitespace><unit symbol>`, which makes every
//! finite `Speed` round-trip through its `Display` output.

use super::units::{Speed, SpeedUnit};
use std::str::FromStr;
use tracing::debug;

/// Accepted unit symbols (lowercase), longest first so suffix matching never
/// picks a shorter symbol hiding inside a longer one.
const UNIT_SYMBOLS: [(&str, SpeedUnit); 12] = [
    ("knots", SpeedUnit::Knots),
    ("km/h", SpeedUnit::KilometersPerHour),
    ("mi/h", SpeedUnit::MilesPerHour),
    ("knot", SpeedUnit::Knots),
    ("m/s", SpeedUnit::MetersPerSecond),
    ("mps", SpeedUnit::MetersPerSecond),
    ("kmh", SpeedUnit::KilometersPerHour),
    ("kph", SpeedUnit::KilometersPerHour),
    ("mph", SpeedUnit::MilesPerHour),
    ("kts", SpeedUnit::Knots),
    ("kn", SpeedUnit::Knots),
    ("kt", SpeedUnit::Knots),
];

/// Errors that can occur when parsing a speed or unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseSpeedError {
    /// Input was empty or whitespace
    Empty,
    /// A number without a unit symbol
    MissingUnit(String),
    /// The numeric part did not parse as a number
    InvalidNumber(String),
    /// The unit symbol is not one of the supported units
    UnknownUnit(String),
}

impl std::fmt::Display for ParseSpeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseSpeedError::Empty => write!(f, "Empty speed"),
            ParseSpeedError::MissingUnit(text) => write!(f, "Missing unit in '{text}'"),
            ParseSpeedError::InvalidNumber(text) => write!(f, "Invalid number '{text}'"),
            ParseSpeedError::UnknownUnit(text) => write!(f, "Unknown speed unit '{text}'"),
        }
    }
}

impl std::error::Error for ParseSpeedError {}

fn lookup_unit(symbol: &str) -> Option<SpeedUnit> {
    let symbol = symbol.to_ascii_lowercase();
    UNIT_SYMBOLS
        .iter()
        .find(|(candidate, _)| *candidate == symbol)
        .map(|&(_, unit)| unit)
}

fn parse_number(text: &str) -> Result<f64, ParseSpeedError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| ParseSpeedError::InvalidNumber(text.trim().to_string()))
}

/// Split glued input such as `36km/h` into number and unit.
fn split_glued(text: &str) -> Result<(f64, SpeedUnit), ParseSpeedError> {
    let lower = text.to_ascii_lowercase();
    if let Some(&(symbol, unit)) = UNIT_SYMBOLS.iter().find(|(s, _)| lower.ends_with(s)) {
        let number = &text[..text.len() - symbol.len()];
        return Ok((parse_number(number)?, unit));
    }

    if text.parse::<f64>().is_ok() {
        return Err(ParseSpeedError::MissingUnit(text.to_string()));
    }

    // Longest numeric prefix decides whether the tail is a bad unit or the
    // whole thing is garbage.
    let numeric_prefix = text
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .rfind(|&end| text[..end].parse::<f64>().is_ok());
    match numeric_prefix {
        Some(end) => Err(ParseSpeedError::UnknownUnit(text[end..].to_string())),
        None => Err(ParseSpeedError::InvalidNumber(text.to_string())),
    }
}

fn parse_speed(text: &str) -> Result<Speed, ParseSpeedError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseSpeedError::Empty);
    }

    let (value, unit) = match text.rsplit_once(char::is_whitespace) {
        Some((number, symbol)) => {
            let unit = lookup_unit(symbol)
                .ok_or_else(|| ParseSpeedError::UnknownUnit(symbol.to_string()))?;
            (parse_number(number)?, unit)
        }
        None => split_glued(text)?,
    };

    Ok(Speed::from_unit(value, unit))
}

impl FromStr for Speed {
    type Err = ParseSpeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_speed(s).inspect_err(|err| debug!(input = s, error = %err, "Rejected speed text"))
    }
}

impl FromStr for SpeedUnit {
    type Err = ParseSpeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = s.trim();
        if symbol.is_empty() {
            return Err(ParseSpeedError::Empty);
        }
        lookup_unit(symbol).ok_or_else(|| {
            debug!(input = s, "Rejected speed unit");
            ParseSpeedError::UnknownUnit(symbol.to_string())
        })
    }
}
