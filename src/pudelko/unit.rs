use crate::pudelko::error::PudelkoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit of measure a box can be built from or printed in.
/// Meters are the base unit every dimension is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitOfMeasure {
    #[serde(alias = "mm")]
    Millimeter,
    #[serde(alias = "cm")]
    Centimeter,
    #[default]
    #[serde(alias = "m")]
    Meter,
}

impl UnitOfMeasure {
    pub const ALL: [UnitOfMeasure; 3] = [
        UnitOfMeasure::Meter,
        UnitOfMeasure::Centimeter,
        UnitOfMeasure::Millimeter,
    ];

    /// How many of this unit make up one meter
    pub fn per_meter(self) -> f64 {
        match self {
            UnitOfMeasure::Millimeter => 1000.0,
            UnitOfMeasure::Centimeter => 100.0,
            UnitOfMeasure::Meter => 1.0,
        }
    }

    /// Convert a value expressed in this unit to meters
    pub fn to_meters(self, value: f64) -> f64 {
        value / self.per_meter()
    }

    /// Short code used in the text format ("m", "cm", "mm")
    pub fn code(self) -> &'static str {
        match self {
            UnitOfMeasure::Millimeter => "mm",
            UnitOfMeasure::Centimeter => "cm",
            UnitOfMeasure::Meter => "m",
        }
    }

    /// Look up a unit by its short code only
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "mm" => Some(UnitOfMeasure::Millimeter),
            "cm" => Some(UnitOfMeasure::Centimeter),
            "m" => Some(UnitOfMeasure::Meter),
            _ => None,
        }
    }

    /// Digits printed after the decimal point. Dimensions are held at
    /// millimeter resolution, so each unit shows exactly that much.
    pub fn decimals(self) -> usize {
        match self {
            UnitOfMeasure::Millimeter => 0,
            UnitOfMeasure::Centimeter => 1,
            UnitOfMeasure::Meter => 3,
        }
    }
}

impl fmt::Display for UnitOfMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnitOfMeasure::Millimeter => "millimeter",
            UnitOfMeasure::Centimeter => "centimeter",
            UnitOfMeasure::Meter => "meter",
        };
        write!(f, "{}", name)
    }
}

/// Accepts either the short code or the full (case-insensitive) name.
impl FromStr for UnitOfMeasure {
    type Err = PudelkoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(unit) = Self::from_code(trimmed) {
            return Ok(unit);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "millimeter" | "millimeters" | "millimetre" | "millimetres" => {
                Ok(UnitOfMeasure::Millimeter)
            }
            "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Ok(UnitOfMeasure::Centimeter)
            }
            "meter" | "meters" | "metre" | "metres" => Ok(UnitOfMeasure::Meter),
            _ => Err(PudelkoError::InvalidUnit(trimmed.to_string())),
        }
    }
}
