// Box value type: validated construction, metrics, text format, arithmetic

pub mod compress;
pub mod error;
pub mod formatter;
pub mod models;
pub mod ordering;
pub mod parser;
pub mod types;
pub mod unit;

#[cfg(test)]
mod tests;

pub use compress::compress;
pub use error::{Axis, PudelkoError};
pub use formatter::{format_pudelko, InUnit};
pub use models::{BoxDefinition, BoxDimensions};
pub use ordering::{compare_capacity, sort_by_capacity};
pub use parser::{parse_pudelko, parse_pudelko_lenient};
pub use types::{Pudelko, PudelkoBuilder, DEFAULT_DIMENSION, MAX_DIMENSION};
pub use unit::UnitOfMeasure;
