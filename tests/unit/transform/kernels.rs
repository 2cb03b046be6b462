//! Tests for Gaussian kernels and the classic edge operators

#[cfg(test)]
mod tests {
    use rastermatrix::Index2;
    use rastermatrix::io::configuration::{DEFAULT_LOG_SCALE, DEFAULT_LOG_SIZE};
    use rastermatrix::transform::kernels::{
        EdgeOperator, gauss, laplace_gauss, laplace4, laplace8, laplace12, prewitt, roberts,
        sobel,
    };

    #[test]
    fn test_gauss() {
        assert!((gauss(0.0) - 1.0).abs() < f64::EPSILON);
        assert!((gauss(2.0) - (-2.0f64).exp()).abs() < 1e-12);
        assert!((gauss(-1.5) - gauss(1.5)).abs() < f64::EPSILON);
    }

    // Tests the centre, edge and corner values of a unit-scale 3x3 kernel
    #[test]
    fn test_laplace_gauss_values() {
        let k = laplace_gauss(3, 1.0);
        assert_eq!(k.dims(), Index2::new(3, 3));
        assert!(k.get(1, 1).is_some_and(|v| (v + 2.0).abs() < 1e-12));
        assert!(k.get(0, 0).is_some_and(|v| v.abs() < 1e-12));
        let edge = -(-0.5f64).exp();
        assert!(k.get(1, 0).is_some_and(|v| (v - edge).abs() < 1e-12));
        assert!(k.get(0, 1).is_some_and(|v| (v - edge).abs() < 1e-12));
    }

    #[test]
    fn test_laplace_gauss_symmetric() {
        let k = laplace_gauss(9, 1.4);
        let mirrored = k.transpose();
        assert!(
            k.values()
                .zip(mirrored.values())
                .all(|(a, b)| (a - b).abs() < 1e-12)
        );
        assert_eq!(k.get(0, 4), k.get(8, 4));
    }

    // Tests that every derivative operator cancels on flat input
    #[test]
    fn test_operators_sum_to_zero() {
        let sum = |values: Vec<i32>| values.iter().sum::<i32>();
        for k in roberts() {
            assert_eq!(sum(k.to_vec()), 0);
            assert_eq!(k.dims(), Index2::new(2, 2));
        }
        for k in sobel().into_iter().chain(prewitt()) {
            assert_eq!(sum(k.to_vec()), 0);
            assert_eq!(k.dims(), Index2::new(3, 3));
        }
        for k in [laplace4(), laplace8(), laplace12()] {
            assert_eq!(sum(k.to_vec()), 0);
        }
    }

    #[test]
    fn test_laplace_centres() {
        assert_eq!(laplace4().get(1, 1), Some(4));
        assert_eq!(laplace8().get(1, 1), Some(8));
        assert_eq!(laplace12().get(1, 1), Some(12));
        assert_eq!(laplace12().get(1, 0), Some(-2));
        assert_eq!(laplace12().get(0, 0), Some(-1));
    }

    #[test]
    fn test_sobel_orientations_are_rotations() {
        let [horizontal, _, vertical, _] = sobel();
        assert_eq!(horizontal.transpose(), vertical);
    }

    // Tests that each operator exposes its generator's weights as floats
    #[test]
    fn test_edge_operator_kernels() {
        assert_eq!(
            EdgeOperator::Laplace12.kernel(),
            laplace12().map(f64::from)
        );
        assert_eq!(EdgeOperator::Laplace4.kernel(), laplace4().map(f64::from));
        assert_eq!(EdgeOperator::Laplace8.kernel(), laplace8().map(f64::from));
        assert_eq!(
            EdgeOperator::LaplaceGauss.kernel(),
            laplace_gauss(DEFAULT_LOG_SIZE, DEFAULT_LOG_SCALE)
        );
    }
}
