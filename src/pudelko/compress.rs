use crate::pudelko::error::PudelkoError;
use crate::pudelko::types::Pudelko;

impl Pudelko {
    /// Cube with the same volume as this box. Keeps the reported unit.
    pub fn compress(&self) -> Result<Pudelko, PudelkoError> {
        compress(self)
    }
}

pub fn compress(pudelko: &Pudelko) -> Result<Pudelko, PudelkoError> {
    let side = pudelko.volume().cbrt();
    Pudelko::from_meters([side; 3], pudelko.unit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pudelko::unit::UnitOfMeasure;

    #[test]
    fn test_compress_unit_cube() {
        let cube = Pudelko::new(1.0, 1.0, 1.0, UnitOfMeasure::Meter)
            .unwrap()
            .compress()
            .unwrap();
        assert_eq!(cube.to_array(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_compress_preserves_volume() {
        let p = Pudelko::new(1.0, 2.0, 3.0, UnitOfMeasure::Meter).unwrap();
        let cube = compress(&p).unwrap();
        assert_eq!(cube.a(), cube.b());
        assert_eq!(cube.b(), cube.c());
        assert!((cube.volume() - p.volume()).abs() < 0.01);
        assert!((cube.a() - 1.817).abs() < 0.001);
    }

    #[test]
    fn test_compress_keeps_unit() {
        let p = Pudelko::new(100.0, 200.0, 400.0, UnitOfMeasure::Centimeter).unwrap();
        let cube = p.compress().unwrap();
        assert_eq!(cube.unit(), UnitOfMeasure::Centimeter);
        assert!((cube.a() - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_compress_smallest_box() {
        let p = Pudelko::from_millimeters(1, 1, 1).unwrap();
        assert_eq!(p.compress().unwrap().millimeters(), [1, 1, 1]);
    }
}
