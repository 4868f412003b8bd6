use std::fmt;
use thiserror::Error;

/// One of the three edges of a box, in construction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    A,
    B,
    C,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::A, Axis::B, Axis::C];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::A => write!(f, "a"),
            Axis::B => write!(f, "b"),
            Axis::C => write!(f, "c"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PudelkoError {
    #[error("Invalid unit of measure: {0}")]
    InvalidUnit(String),
    #[error(
        "Dimension(s) {} out of range: must be positive and at most 10 m",
        join_axes(.0)
    )]
    DimensionOutOfRange(Vec<Axis>),
    #[error("Input string cannot be empty")]
    EmptyInput,
    #[error("Input string is not in the correct format: {0}")]
    MalformedInput(String),
    #[error("The format '{0}' is not supported")]
    UnsupportedFormat(String),
    #[error("Index {0} out of range: must be 0, 1 or 2")]
    IndexOutOfRange(usize),
}

fn join_axes(axes: &[Axis]) -> String {
    axes.iter()
        .map(Axis::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
