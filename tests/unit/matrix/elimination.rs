//! Tests for elementary transforms, determinant and inverse

#[cfg(test)]
mod tests {
    use rastermatrix::io::error::Cause;
    use rastermatrix::matrix::Axis;
    use rastermatrix::{EngineError, Matrix};

    fn close(a: &Matrix<f64>, b: &Matrix<f64>) -> bool {
        a.dims() == b.dims() && a.values().zip(b.values()).all(|(x, y)| (x - y).abs() < 1e-9)
    }

    #[test]
    fn test_swap_lines() {
        let mut m = Matrix::from_values(2, 3, [1, 2, 3, 4, 5, 6]);
        m.swap_lines(Axis::Row, 0, 2).expect("rows exist");
        assert_eq!(m.to_vec(), vec![5, 6, 3, 4, 1, 2]);
        m.swap_lines(Axis::Column, 0, 1).expect("columns exist");
        assert_eq!(m.to_vec(), vec![6, 5, 4, 3, 2, 1]);

        let err = m.swap_lines(Axis::Column, 0, 2).expect_err("only two columns");
        assert_eq!(err.cause(), Some(Cause::OutOfBounds));
    }

    // Tests that a zero factor is rejected for scaling and ignored for addition
    #[test]
    fn test_scale_and_add_scaled_lines() {
        let mut m = Matrix::from_values(2, 2, [1, 2, 3, 4]);
        m.scale_line(Axis::Row, 1, 2).expect("nonzero factor");
        assert_eq!(m.to_vec(), vec![1, 2, 6, 8]);

        let err = m.scale_line(Axis::Row, 0, 0).expect_err("zero factor");
        assert_eq!(err.cause(), Some(Cause::OutOfBounds));

        m.add_scaled_line(Axis::Column, 1, 0, -2).expect("columns exist");
        assert_eq!(m.to_vec(), vec![1, 0, 6, -4]);

        let before = m.clone();
        m.add_scaled_line(Axis::Row, 0, 1, 0).expect("zero factor is a no-op");
        assert_eq!(m, before);
        assert!(m.add_scaled_line(Axis::Row, 0, 9, 0).is_err());
    }

    #[test]
    fn test_det_closed_forms() {
        assert_eq!(Matrix::<i32>::empty().det().ok(), Some(0));
        assert_eq!(Matrix::uniform(1, 1, 7).det().ok(), Some(7));
        assert_eq!(Matrix::from_values(2, 2, [3, 8, 4, 6]).det().ok(), Some(-14));
    }

    // Tests that integer determinants are exact for sizes above two
    #[test]
    fn test_det_integer_exact() {
        let a = Matrix::from_values(3, 3, [6, 1, 1, 4, -2, 5, 2, 8, 7]);
        assert_eq!(a.det().ok(), Some(-306));

        let b = Matrix::from_values(3, 3, [1, 2, 3, 4, 5, 6, 7, 8, 10]);
        assert_eq!(b.det().ok(), Some(-3));

        let c = Matrix::from_values(4, 4, [0, 2, 1, 3, 1, 0, 2, 1, 3, 1, 0, 2, 2, 3, 1, 0]);
        assert_eq!(c.det().ok(), Some(-62));
    }

    #[test]
    fn test_det_singular_and_identity() {
        let singular = Matrix::from_values(3, 3, [1, 2, 3, 2, 4, 6, 0, 1, 1]);
        assert_eq!(singular.det().ok(), Some(0));
        assert_eq!(Matrix::<i64>::identity(5).det().ok(), Some(1));

        let zero_column = Matrix::from_values(3, 3, [0.0, 1.0, 2.0, 0.0, 3.0, 4.0, 0.0, 5.0, 6.0]);
        assert_eq!(zero_column.det().ok(), Some(0.0));
    }

    #[test]
    fn test_det_not_square() {
        let m: Matrix<i32> = Matrix::new(3, 2);
        let err = m.det().expect_err("not square");
        assert_eq!(err.cause(), Some(Cause::NotSquare));
    }

    #[test]
    fn test_inv_closed_forms() {
        assert_eq!(Matrix::<f64>::empty().inv().ok(), Some(Matrix::empty()));
        assert_eq!(
            Matrix::uniform(1, 1, 4.0).inv().ok().map(|m| m.to_vec()),
            Some(vec![0.25])
        );

        let a = Matrix::from_values(2, 2, [4.0, 7.0, 2.0, 6.0]);
        let expected = Matrix::from_values(2, 2, [0.6, -0.7, -0.2, 0.4]);
        assert!(close(&a.inv().expect("invertible"), &expected));
    }

    // Tests Gauss-Jordan inversion by multiplying back to the identity
    #[test]
    fn test_inv_round_trip() {
        let a = Matrix::from_values(
            4,
            4,
            [0.0, 2.0, 1.0, 3.0, 1.0, 0.0, 2.0, 1.0, 3.0, 1.0, 0.0, 2.0, 2.0, 3.0, 1.0, 0.0],
        );
        let inverse = a.inv().expect("determinant is nonzero");
        let product = a.mul_mat(&inverse).expect("square operands");
        assert!(close(&product, &Matrix::identity(4)));
        // Input is left untouched
        assert_eq!(a.get(0, 0), Some(0.0));
    }

    #[test]
    fn test_inv_singular() {
        let single = Matrix::uniform(1, 1, 0.0);
        assert!(matches!(
            single.inv(),
            Err(EngineError::Irreducible { .. })
        ));

        let pair = Matrix::from_values(2, 2, [1.0, 2.0, 2.0, 4.0]);
        assert!(matches!(pair.inv(), Err(EngineError::Irreducible { .. })));

        let triple = Matrix::from_values(3, 3, [1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 1.0, 1.0]);
        assert!(matches!(
            triple.inv(),
            Err(EngineError::Irreducible { .. })
        ));
    }

    // Tests that a vanishing float quotient eliminates instead of swapping rows
    #[test]
    fn test_det_float_underflow() {
        let triangular = Matrix::from_values(
            3,
            3,
            [1e30, 0.0, 0.0, 1e-300, 1.0, 0.0, 0.0, 0.0, 1.0],
        );
        let det: f64 = triangular.det().expect("square");
        assert!(det.is_finite());
        assert!((det - 1e30).abs() <= 1e30 * 1e-12);
    }

    // Tests partial pivoting when the leading entry is tiny
    #[test]
    fn test_det_float_pivoting() {
        let a = Matrix::from_values(3, 3, [1e-20, 1.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 2.0]);
        let det: f64 = a.det().expect("square");
        assert!((det + 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_det_integer_overflow_wraps() {
        let big = Matrix::from_values(2, 2, [i32::MAX, 0, 0, 2]);
        assert_eq!(big.det().ok(), Some(i32::MAX.wrapping_mul(2)));
    }
}
