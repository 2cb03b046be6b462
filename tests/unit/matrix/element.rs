//! Tests for element capability helpers: saturating narrowing and NaN-low ordering

#[cfg(test)]
mod tests {
    use num_complex::Complex64;
    use rastermatrix::matrix::{Real, Scalar, compare_nan_low};
    use std::cmp::Ordering;

    // Tests saturation at both bounds, truncation and NaN mapping to zero
    #[test]
    fn test_from_wide_saturates() {
        assert_eq!(u8::from_wide(300.0), 255);
        assert_eq!(u8::from_wide(-5.0), 0);
        assert_eq!(i8::from_wide(-200.0), -128);
        assert_eq!(i32::from_wide(2.9), 2);
        assert_eq!(i32::from_wide(-2.9), -2);
        assert_eq!(u16::from_wide(f64::NAN), 0);
        assert!((f32::from_wide(1.5) - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_to_wide() {
        assert!((7u8.to_wide() - 7.0).abs() < f64::EPSILON);
        assert!(((-3i64).to_wide() + 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nan_sorts_lowest() {
        assert_eq!(compare_nan_low(&f64::NAN, &-1e300), Ordering::Less);
        assert_eq!(compare_nan_low(&0.0, &f64::NAN), Ordering::Greater);
        assert_eq!(compare_nan_low(&f64::NAN, &f64::NAN), Ordering::Equal);
        assert_eq!(compare_nan_low(&1, &2), Ordering::Less);

        let mut values = vec![3.0, f64::NAN, -1.0, 2.0];
        values.sort_by(compare_nan_low);
        assert!(values.first().is_some_and(|v| v.is_nan()));
        assert_eq!(values.get(1..), Some(&[-1.0, 2.0, 3.0][..]));
    }

    // Tests the wrapping forms on integers and plain arithmetic on floats
    #[test]
    fn test_wrapped_operations() {
        assert_eq!(250u8.add_wrapped(10), 4);
        assert_eq!(3u8.sub_wrapped(5), 254);
        assert_eq!(i8::MIN.div_wrapped(-1), i8::MIN);
        assert_eq!(i64::MIN.neg_wrapped(), i64::MIN);
        assert!((1.5f64.mul_wrapped(2.0) - 3.0).abs() < f64::EPSILON);
        assert!(u8::INTEGRAL);
        assert!(!f32::INTEGRAL);
    }

    #[test]
    fn test_magnitude() {
        assert!(((-7i32).magnitude() - 7.0).abs() < f64::EPSILON);
        assert!(((-2.5f32).magnitude() - 2.5).abs() < f64::EPSILON);
        assert!((Complex64::new(3.0, -4.0).magnitude() - 5.0).abs() < 1e-12);
    }
}
