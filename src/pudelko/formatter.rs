use crate::pudelko::error::PudelkoError;
use crate::pudelko::types::Pudelko;
use crate::pudelko::unit::UnitOfMeasure;
use std::fmt;

/// Separator between the three edges in the text format
pub const SEPARATOR: char = '×';

/// Resolve a format code; an empty code means meters
pub fn unit_for_format(code: &str) -> Result<UnitOfMeasure, PudelkoError> {
    if code.is_empty() {
        return Ok(UnitOfMeasure::Meter);
    }
    UnitOfMeasure::from_code(code).ok_or_else(|| PudelkoError::UnsupportedFormat(code.to_string()))
}

/// Format a box as "<A> <u> × <B> <u> × <C> <u>" for the given code ("m", "cm", "mm" or "")
pub fn format_pudelko(pudelko: &Pudelko, code: &str) -> Result<String, PudelkoError> {
    let unit = unit_for_format(code)?;
    Ok(pudelko.display_in(unit).to_string())
}

/// Display adapter returned by [`Pudelko::display_in`]
#[derive(Debug, Clone, Copy)]
pub struct InUnit<'a> {
    pudelko: &'a Pudelko,
    unit: UnitOfMeasure,
}

impl fmt::Display for InUnit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.unit;
        // Work from whole millimeters so cm/m output carries no float noise
        let divisor = 1000.0 / unit.per_meter();
        for (i, mm) in self.pudelko.millimeters().into_iter().enumerate() {
            if i > 0 {
                write!(f, " {} ", SEPARATOR)?;
            }
            write!(
                f,
                "{:.prec$} {}",
                mm as f64 / divisor,
                unit.code(),
                prec = unit.decimals()
            )?;
        }
        Ok(())
    }
}

impl Pudelko {
    /// Text form in the unit named by `code`; fails on unknown codes
    pub fn format(&self, code: &str) -> Result<String, PudelkoError> {
        format_pudelko(self, code)
    }

    pub fn display_in(&self, unit: UnitOfMeasure) -> InUnit<'_> {
        InUnit {
            pudelko: self,
            unit,
        }
    }
}

impl fmt::Display for Pudelko {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_in(UnitOfMeasure::Meter), f)
    }
}
