use crate::pudelko::error::PudelkoError;
use crate::pudelko::formatter::SEPARATOR;
use crate::pudelko::types::Pudelko;
use crate::pudelko::unit::UnitOfMeasure;
use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;

lazy_static! {
    /// Locale-invariant float literal: optional sign, digits with a '.' decimal
    /// point, optional exponent. Rejects "1,5", "inf" and "NaN".
    static ref NUMBER_PATTERN: Regex = Regex::new(
        r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$"
    ).unwrap();
}

/// Parse "<n> <u> × <n> <u> × <n> <u>"; each segment may use its own unit
pub fn parse_pudelko(input: &str) -> Result<Pudelko, PudelkoError> {
    parse_with(input, |c| c == SEPARATOR)
}

/// Like [`parse_pudelko`] but also accepts ASCII 'x' or 'X' between edges
pub fn parse_pudelko_lenient(input: &str) -> Result<Pudelko, PudelkoError> {
    parse_with(input, |c| c == SEPARATOR || c == 'x' || c == 'X')
}

fn parse_with(input: &str, is_separator: impl Fn(char) -> bool) -> Result<Pudelko, PudelkoError> {
    if input.trim().is_empty() {
        return Err(PudelkoError::EmptyInput);
    }

    let segments: Vec<&str> = input.split(is_separator).filter(|s| !s.is_empty()).collect();
    if segments.len() != 3 {
        return Err(PudelkoError::MalformedInput(format!(
            "expected 3 dimensions, found {}",
            segments.len()
        )));
    }

    let mut meters = [0.0; 3];
    for (slot, segment) in meters.iter_mut().zip(segments) {
        *slot = parse_segment(segment)?;
    }
    log::trace!("parsed '{}' as {:?} m", input, meters);

    Pudelko::from_meters(meters, UnitOfMeasure::Meter)
}

/// "2.5 cm" -> 0.025 (meters)
fn parse_segment(segment: &str) -> Result<f64, PudelkoError> {
    let tokens: Vec<&str> = segment.split_whitespace().collect();
    let (number, code) = match tokens.as_slice() {
        [number, code] => (*number, *code),
        _ => {
            return Err(PudelkoError::MalformedInput(format!(
                "expected '<value> <unit>', got '{}'",
                segment.trim()
            )))
        }
    };

    if !NUMBER_PATTERN.is_match(number) {
        return Err(PudelkoError::MalformedInput(format!(
            "invalid number '{}'",
            number
        )));
    }
    let value = number
        .parse::<f64>()
        .map_err(|e| PudelkoError::MalformedInput(format!("invalid number '{}': {}", number, e)))?;

    let unit = UnitOfMeasure::from_code(code)
        .ok_or_else(|| PudelkoError::MalformedInput(format!("unknown unit '{}'", code)))?;

    Ok(unit.to_meters(value))
}

impl Pudelko {
    pub fn parse(input: &str) -> Result<Self, PudelkoError> {
        parse_pudelko(input)
    }

    pub fn parse_lenient(input: &str) -> Result<Self, PudelkoError> {
        parse_pudelko_lenient(input)
    }
}

impl FromStr for Pudelko {
    type Err = PudelkoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pudelko(s)
    }
}
