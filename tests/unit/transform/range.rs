//! Tests for range statistics, remapping to bytes and saturating conversion

#[cfg(test)]
mod tests {
    use rastermatrix::Matrix;
    use rastermatrix::transform::range::{
        absolutize, log_absolutize, normalize, shrink_i8, shrink_u8,
    };

    #[test]
    fn test_min_max() {
        let m = Matrix::from_values(3, 1, [3, -1, 7]);
        assert_eq!(m.min_max(), (-1, 7));
        assert_eq!(m.min(), -1);
        assert_eq!(m.max(), 7);
        assert_eq!(Matrix::<f64>::empty().min_max(), (0.0, 0.0));
    }

    // Tests truncation toward zero, saturation and NaN handling
    #[test]
    fn test_convert_saturates() {
        let m = Matrix::from_values(4, 1, [1.9, -1.9, f64::NAN, 1e12]);
        let ints: Matrix<i32> = m.convert();
        assert_eq!(ints.to_vec(), vec![1, -1, 0, i32::MAX]);

        let bytes: Matrix<u8> = Matrix::from_values(2, 1, [-3i64, 999]).convert();
        assert_eq!(bytes.to_vec(), vec![0, 255]);
    }

    #[test]
    fn test_normalize_stretches_range() {
        let m = Matrix::from_values(3, 1, [2, 4, 6]);
        assert_eq!(normalize(&m).to_vec(), vec![0, 127, 255]);

        let negative = Matrix::from_values(2, 1, [-10.0, 10.0]);
        assert_eq!(normalize(&negative).to_vec(), vec![0, 255]);
    }

    // Tests that a constant matrix has no range and maps to zeros
    #[test]
    fn test_normalize_constant() {
        let m = Matrix::uniform(2, 2, 42);
        assert_eq!(normalize(&m).to_vec(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_absolutize() {
        let m = Matrix::from_values(4, 1, [-2, 1, 0, 4]);
        assert_eq!(absolutize(&m).to_vec(), vec![127, 63, 0, 255]);

        let zeros: Matrix<i32> = Matrix::new(2, 2);
        assert_eq!(absolutize(&zeros).to_vec(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_log_absolutize_compresses() {
        let m = Matrix::from_values(3, 1, [0.0, -10.0, 1000.0]);
        let out = log_absolutize(&m).to_vec();
        assert_eq!(out.first(), Some(&0));
        assert!(out.get(2).is_some_and(|&v| v >= 254));
        // Logarithmic scaling lifts small magnitudes well above linear
        assert!(out.get(1).is_some_and(|&v| v > 80));
    }

    #[test]
    fn test_shrink() {
        let m = Matrix::from_values(3, 1, [-200, 5, 300]);
        assert_eq!(shrink_u8(&m).to_vec(), vec![0, 5, 255]);
        assert_eq!(shrink_i8(&m).to_vec(), vec![-128, 5, 127]);
    }
}
