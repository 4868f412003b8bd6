#[cfg(test)]
mod tests {
    use super::super::error::PudelkoError;
    use super::super::types::Pudelko;
    use super::super::unit::UnitOfMeasure;
    use rstest::rstest;

    const ACCURACY: f64 = 0.001;

    fn assert_pudelko(p: &Pudelko, expected_a: f64, expected_b: f64, expected_c: f64) {
        assert!((p.a() - expected_a).abs() <= ACCURACY, "a: {} vs {}", p.a(), expected_a);
        assert!((p.b() - expected_b).abs() <= ACCURACY, "b: {} vs {}", p.b(), expected_b);
        assert!((p.c() - expected_c).abs() <= ACCURACY, "c: {} vs {}", p.c(), expected_c);
    }

    fn is_out_of_range(result: Result<Pudelko, PudelkoError>) -> bool {
        matches!(result, Err(PudelkoError::DimensionOutOfRange(_)))
    }

    #[rstest]
    #[case(1.0, 2.543, 3.1, 1.0, 2.543, 3.1)]
    #[case(1.0001, 2.54387, 3.1004, 1.0, 2.544, 3.1)]
    fn test_three_params_in_meters(
        #[case] a: f64,
        #[case] b: f64,
        #[case] c: f64,
        #[case] expected_a: f64,
        #[case] expected_b: f64,
        #[case] expected_c: f64,
    ) {
        let p = Pudelko::new(a, b, c, UnitOfMeasure::Meter).unwrap();
        assert_pudelko(&p, expected_a, expected_b, expected_c);
        assert_eq!(p.unit(), UnitOfMeasure::Meter);
    }

    #[rstest]
    #[case(100.0, 25.5, 3.1, 1.0, 0.255, 0.031)]
    #[case(100.0, 25.54, 3.13, 1.0, 0.255, 0.031)]
    fn test_three_params_in_centimeters(
        #[case] a: f64,
        #[case] b: f64,
        #[case] c: f64,
        #[case] expected_a: f64,
        #[case] expected_b: f64,
        #[case] expected_c: f64,
    ) {
        let p = Pudelko::new(a, b, c, UnitOfMeasure::Centimeter).unwrap();
        assert_pudelko(&p, expected_a, expected_b, expected_c);
        assert_eq!(p.unit(), UnitOfMeasure::Centimeter);
    }

    #[rstest]
    #[case(100.0, 255.0, 3.0, 0.1, 0.255, 0.003)]
    #[case(100.0, 25.58, 3.13, 0.1, 0.026, 0.003)]
    fn test_three_params_in_millimeters(
        #[case] a: f64,
        #[case] b: f64,
        #[case] c: f64,
        #[case] expected_a: f64,
        #[case] expected_b: f64,
        #[case] expected_c: f64,
    ) {
        let p = Pudelko::new(a, b, c, UnitOfMeasure::Millimeter).unwrap();
        assert_pudelko(&p, expected_a, expected_b, expected_c);
    }

    #[rstest]
    #[case(UnitOfMeasure::Meter, 1.0, 2.5, 1.0, 2.5)]
    #[case(UnitOfMeasure::Meter, 1.0014, 2.5991, 1.001, 2.599)]
    #[case(UnitOfMeasure::Centimeter, 11.0, 2.5, 0.11, 0.025)]
    #[case(UnitOfMeasure::Centimeter, 100.1, 2.599, 1.001, 0.026)]
    #[case(UnitOfMeasure::Millimeter, 11.0, 2.0, 0.011, 0.002)]
    #[case(UnitOfMeasure::Millimeter, 100.1, 2599.0, 0.1, 2.599)]
    fn test_two_params_default_third(
        #[case] unit: UnitOfMeasure,
        #[case] a: f64,
        #[case] b: f64,
        #[case] expected_a: f64,
        #[case] expected_b: f64,
    ) {
        let p = Pudelko::builder().a(a).b(b).unit(unit).build().unwrap();
        assert_pudelko(&p, expected_a, expected_b, 0.1);
        assert_eq!(p.unit(), unit);
    }

    #[rstest]
    #[case(UnitOfMeasure::Meter, 2.5, 2.5)]
    #[case(UnitOfMeasure::Centimeter, 11.0, 0.11)]
    #[case(UnitOfMeasure::Centimeter, 2.0019, 0.02)]
    #[case(UnitOfMeasure::Millimeter, 200.19, 0.2)]
    fn test_one_param_defaults_rest(
        #[case] unit: UnitOfMeasure,
        #[case] a: f64,
        #[case] expected_a: f64,
    ) {
        let p = Pudelko::builder().a(a).unit(unit).build().unwrap();
        assert_pudelko(&p, expected_a, 0.1, 0.1);
    }

    #[rstest]
    #[case(-1.0, 2.5, 3.1)]
    #[case(1.0, -2.5, 3.1)]
    #[case(1.0, 2.5, -3.1)]
    #[case(-1.0, -2.5, -3.1)]
    #[case(0.0, 2.5, 3.1)]
    #[case(1.0, 0.0, 3.1)]
    #[case(1.0, 2.5, 0.0)]
    #[case(0.0, 0.0, 0.0)]
    #[case(10.1, 2.5, 3.1)]
    #[case(10.0, 10.1, 3.1)]
    #[case(10.0, 10.0, 10.1)]
    #[case(10.0001, 1.0, 1.0)]
    #[case(0.0004, 1.0, 1.0)]
    #[case(f64::NAN, 1.0, 1.0)]
    #[case(f64::INFINITY, 1.0, 1.0)]
    fn test_out_of_range_in_meters(#[case] a: f64, #[case] b: f64, #[case] c: f64) {
        assert!(is_out_of_range(Pudelko::new(a, b, c, UnitOfMeasure::Meter)));
    }

    #[rstest]
    #[case(-1.0, 1.0, 1.0)]
    #[case(0.0, 1.0, 1.0)]
    #[case(0.01, 0.1, 1.0)]
    #[case(0.1, 0.1, 0.01)]
    #[case(1001.0, 1.0, 1.0)]
    #[case(1.0, 1.0, 1001.0)]
    #[case(1001.0, 1001.0, 1001.0)]
    fn test_out_of_range_in_centimeters(#[case] a: f64, #[case] b: f64, #[case] c: f64) {
        assert!(is_out_of_range(Pudelko::new(a, b, c, UnitOfMeasure::Centimeter)));
    }

    #[rstest]
    #[case(-1.0, 1.0, 1.0)]
    #[case(0.0, 1.0, 1.0)]
    #[case(0.1, 1.0, 1.0)]
    #[case(1.0, 0.1, 1.0)]
    #[case(10001.0, 1.0, 1.0)]
    #[case(1.0, 10001.0, 10001.0)]
    fn test_out_of_range_in_millimeters(#[case] a: f64, #[case] b: f64, #[case] c: f64) {
        assert!(is_out_of_range(Pudelko::new(a, b, c, UnitOfMeasure::Millimeter)));
    }

    #[rstest]
    #[case(UnitOfMeasure::Meter, 10.0)]
    #[case(UnitOfMeasure::Centimeter, 1000.0)]
    #[case(UnitOfMeasure::Millimeter, 10000.0)]
    fn test_upper_bound_is_inclusive(#[case] unit: UnitOfMeasure, #[case] value: f64) {
        let p = Pudelko::new(value, value, value, unit).unwrap();
        assert_eq!(p.to_array(), [10.0, 10.0, 10.0]);
        assert_eq!(p.volume(), 1000.0);
    }

    #[test]
    fn test_builder_out_of_range() {
        assert!(is_out_of_range(Pudelko::builder().a(10.1).b(10.0).build()));
        assert!(is_out_of_range(
            Pudelko::builder().a(1.0).b(0.01).unit(UnitOfMeasure::Centimeter).build()
        ));
    }

    #[test]
    fn test_default_ignores_unit() {
        let p = Pudelko::builder().unit(UnitOfMeasure::Millimeter).build().unwrap();
        assert_eq!(p.to_array(), [0.1, 0.1, 0.1]);
        assert_eq!(p.unit(), UnitOfMeasure::Millimeter);
    }

    #[test]
    fn test_reported_axes() {
        assert_eq!(
            Pudelko::new(0.0, 2.0, 11.0, UnitOfMeasure::Meter),
            Err(PudelkoError::DimensionOutOfRange(vec![
                super::super::error::Axis::A,
                super::super::error::Axis::C,
            ]))
        );
    }
}
