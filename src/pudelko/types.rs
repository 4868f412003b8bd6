use crate::pudelko::error::{Axis, PudelkoError};
use crate::pudelko::unit::UnitOfMeasure;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Index};

/// Edge length used for every dimension the caller leaves out (10 cm)
pub const DEFAULT_DIMENSION: f64 = 0.1;
/// Largest allowed edge length in meters
pub const MAX_DIMENSION: f64 = 10.0;
/// Slack on the upper bound for binary floating point noise (1 nm)
const UPPER_BOUND_SLACK: f64 = 1e-9;

/// Round half away from zero to a fixed number of decimal places
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Immutable rectangular box. Edges are stored in meters with millimeter
/// resolution; `unit` only records what the box was built from.
#[derive(Debug, Clone, Copy)]
pub struct Pudelko {
    dims: [f64; 3],
    unit: UnitOfMeasure,
}

impl Pudelko {
    /// Build a box from three edges given in `unit`
    pub fn new(a: f64, b: f64, c: f64, unit: UnitOfMeasure) -> Result<Self, PudelkoError> {
        Self::from_meters([unit.to_meters(a), unit.to_meters(b), unit.to_meters(c)], unit)
    }

    pub fn builder() -> PudelkoBuilder {
        PudelkoBuilder::default()
    }

    /// Build a box from whole millimeters. The resulting box reports meters.
    pub fn from_millimeters(a: i32, b: i32, c: i32) -> Result<Self, PudelkoError> {
        let mm = UnitOfMeasure::Millimeter;
        Self::from_meters(
            [
                mm.to_meters(f64::from(a)),
                mm.to_meters(f64::from(b)),
                mm.to_meters(f64::from(c)),
            ],
            UnitOfMeasure::Meter,
        )
    }

    /// Every constructor ends up here: round to millimeters, then check bounds.
    pub(crate) fn from_meters(meters: [f64; 3], unit: UnitOfMeasure) -> Result<Self, PudelkoError> {
        let mut dims = [0.0; 3];
        let mut failed = Vec::new();

        for ((dim, &value), axis) in dims.iter_mut().zip(meters.iter()).zip(Axis::ALL) {
            let rounded = round_to(value, 3);
            if !value.is_finite() || value > MAX_DIMENSION + UPPER_BOUND_SLACK || rounded <= 0.0 {
                failed.push(axis);
            }
            *dim = rounded;
        }

        if !failed.is_empty() {
            log::trace!("rejected box {:?}: axes {:?} out of range", meters, failed);
            return Err(PudelkoError::DimensionOutOfRange(failed));
        }

        Ok(Self { dims, unit })
    }

    pub fn a(&self) -> f64 {
        self.dims[0]
    }

    pub fn b(&self) -> f64 {
        self.dims[1]
    }

    pub fn c(&self) -> f64 {
        self.dims[2]
    }

    pub fn unit(&self) -> UnitOfMeasure {
        self.unit
    }

    /// Volume in cubic meters, rounded to 9 decimal places
    pub fn volume(&self) -> f64 {
        let [a, b, c] = self.dims;
        round_to(a * b * c, 9)
    }

    /// Surface area in square meters, rounded to 6 decimal places
    pub fn surface_area(&self) -> f64 {
        let [a, b, c] = self.dims;
        round_to(2.0 * (a * b + b * c + a * c), 6)
    }

    /// Sum of the three edges in meters
    pub fn edge_sum(&self) -> f64 {
        round_to(self.dims.iter().sum(), 3)
    }

    /// Edges as whole millimeters, in A, B, C order
    pub fn millimeters(&self) -> [i64; 3] {
        self.dims.map(|d| (d * 1000.0).round() as i64)
    }

    pub fn to_array(&self) -> [f64; 3] {
        self.dims
    }

    /// Checked indexed access: 0 is A, 1 is B, 2 is C
    pub fn get(&self, index: usize) -> Result<f64, PudelkoError> {
        self.dims
            .get(index)
            .copied()
            .ok_or(PudelkoError::IndexOutOfRange(index))
    }

    /// Yields A, B, then C. Each call starts a fresh pass.
    pub fn iter(&self) -> std::array::IntoIter<f64, 3> {
        self.dims.into_iter()
    }

    /// Position-wise sum of two boxes, validated like any other box
    pub fn checked_add(&self, other: &Pudelko) -> Result<Pudelko, PudelkoError> {
        let (lhs, rhs) = (self.millimeters(), other.millimeters());
        let mm = UnitOfMeasure::Millimeter;
        Self::from_meters(
            [
                mm.to_meters((lhs[0] + rhs[0]) as f64),
                mm.to_meters((lhs[1] + rhs[1]) as f64),
                mm.to_meters((lhs[2] + rhs[2]) as f64),
            ],
            UnitOfMeasure::Meter,
        )
    }

    fn sorted_millimeters(&self) -> [i64; 3] {
        let mut mm = self.millimeters();
        mm.sort_unstable();
        mm
    }
}

impl Default for Pudelko {
    fn default() -> Self {
        Self {
            dims: [DEFAULT_DIMENSION; 3],
            unit: UnitOfMeasure::Meter,
        }
    }
}

/// Builder for boxes with optional edges; missing edges are 0.1 m.
#[derive(Debug, Clone, Copy, Default)]
pub struct PudelkoBuilder {
    a: Option<f64>,
    b: Option<f64>,
    c: Option<f64>,
    unit: UnitOfMeasure,
}

impl PudelkoBuilder {
    pub fn a(mut self, value: f64) -> Self {
        self.a = Some(value);
        self
    }

    pub fn b(mut self, value: f64) -> Self {
        self.b = Some(value);
        self
    }

    pub fn c(mut self, value: f64) -> Self {
        self.c = Some(value);
        self
    }

    pub fn unit(mut self, unit: UnitOfMeasure) -> Self {
        self.unit = unit;
        self
    }

    pub fn build(self) -> Result<Pudelko, PudelkoError> {
        let unit = self.unit;
        let to_meters = |value: Option<f64>| value.map_or(DEFAULT_DIMENSION, |v| unit.to_meters(v));
        Pudelko::from_meters([to_meters(self.a), to_meters(self.b), to_meters(self.c)], unit)
    }
}

// Equality ignores edge order and unit
impl PartialEq for Pudelko {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_millimeters() == other.sorted_millimeters()
    }
}

impl Eq for Pudelko {}

impl Hash for Pudelko {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted_millimeters().hash(state);
    }
}

impl Add for Pudelko {
    type Output = Result<Pudelko, PudelkoError>;

    fn add(self, rhs: Pudelko) -> Self::Output {
        self.checked_add(&rhs)
    }
}

impl Add<&Pudelko> for &Pudelko {
    type Output = Result<Pudelko, PudelkoError>;

    fn add(self, rhs: &Pudelko) -> Self::Output {
        self.checked_add(rhs)
    }
}

/// Panics outside 0..=2, like slice indexing. Use [`Pudelko::get`] to check.
impl Index<usize> for Pudelko {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.dims[index]
    }
}

impl IntoIterator for Pudelko {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Pudelko {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Pudelko> for [f64; 3] {
    fn from(pudelko: Pudelko) -> Self {
        pudelko.to_array()
    }
}

/// Whole millimeters, e.g. `(100, 255, 3)`.
impl TryFrom<(i32, i32, i32)> for Pudelko {
    type Error = PudelkoError;

    fn try_from((a, b, c): (i32, i32, i32)) -> Result<Self, Self::Error> {
        Pudelko::from_millimeters(a, b, c)
    }
}
