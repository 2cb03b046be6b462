//! Tests for strided convolution, its scatter adjoint and same-size filtering

#[cfg(test)]
mod tests {
    use rastermatrix::io::error::Cause;
    use rastermatrix::{Index2, Matrix};

    fn ramp() -> Matrix<i32> {
        Matrix::from_values(4, 4, 0..16)
    }

    #[test]
    fn test_conv_unit_stride() {
        let out = ramp()
            .conv(&Matrix::uniform(2, 2, 1), 1, 1)
            .expect("kernel fits");
        assert_eq!(out.dims(), Index2::new(3, 3));
        assert_eq!(out.get(0, 0), Some(10));
        assert_eq!(out.get(1, 0), Some(14));
        assert_eq!(out.get(2, 2), Some(50));
    }

    // Tests output shape (w - kw) / dx + 1 with a stride of two
    #[test]
    fn test_conv_strided() {
        let out = ramp()
            .conv(&Matrix::uniform(2, 2, 1), 2, 2)
            .expect("kernel fits");
        assert_eq!(out.to_vec(), vec![10, 18, 42, 50]);

        let wide = ramp()
            .conv(&Matrix::uniform(1, 1, 1), 3, 1)
            .expect("kernel fits");
        assert_eq!(wide.dims(), Index2::new(2, 4));
    }

    #[test]
    fn test_conv_errors() {
        let big: Matrix<i32> = Matrix::uniform(5, 1, 1);
        let err = ramp().conv(&big, 1, 1).expect_err("kernel too wide");
        assert_eq!(err.cause(), Some(Cause::LargeKernel));

        let err = ramp()
            .conv(&Matrix::uniform(1, 1, 1), 0, 1)
            .expect_err("zero stride");
        assert_eq!(err.cause(), Some(Cause::InvalidStep));
    }

    // Tests that an empty operand short-circuits before validation
    #[test]
    fn test_conv_empty_operands() {
        let e: Matrix<i32> = Matrix::empty();
        assert_eq!(e.conv(&Matrix::uniform(3, 3, 1), 0, 0).ok(), Some(e.clone()));
        assert_eq!(ramp().conv(&e, 1, 1).ok(), Some(ramp()));
    }

    #[test]
    fn test_deconv_scatters() {
        let one = Matrix::uniform(1, 1, 2);
        let kernel = Matrix::from_values(2, 2, [1, 2, 3, 4]);
        assert_eq!(
            one.deconv(&kernel, 1, 1).expect("valid stride").to_vec(),
            vec![2, 4, 6, 8]
        );

        let pair = Matrix::from_values(2, 1, [1, 1]);
        let overlap = pair
            .deconv(&Matrix::from_values(2, 1, [1, 1]), 1, 1)
            .expect("valid stride");
        assert_eq!(overlap.to_vec(), vec![1, 2, 1]);

        let spaced = pair
            .deconv(&Matrix::from_values(2, 1, [1, 1]), 3, 1)
            .expect("valid stride");
        assert_eq!(spaced.to_vec(), vec![1, 1, 0, 1, 1]);

        assert!(pair.deconv(&kernel, 1, 0).is_err());
    }

    // Tests zero padding at the borders with a centred kernel
    #[test]
    fn test_filter_same_size() {
        let ones: Matrix<i32> = Matrix::uniform(3, 3, 1);
        let out = ones.filter(&Matrix::uniform(3, 3, 1)).expect("kernel fits");
        assert_eq!(out.to_vec(), vec![4, 6, 4, 6, 9, 6, 4, 6, 4]);

        let shift = Matrix::from_values(3, 1, [0, 0, 1]);
        let row = Matrix::from_values(3, 1, [1, 2, 3]);
        assert_eq!(
            row.filter(&shift).expect("kernel fits").to_vec(),
            vec![2, 3, 0]
        );

        let err = row.filter(&Matrix::uniform(3, 3, 1)).expect_err("too tall");
        assert_eq!(err.cause(), Some(Cause::LargeKernel));
    }

    // Tests that integer sums wrap around instead of panicking
    #[test]
    fn test_byte_sums_wrap() {
        let plane: Matrix<u8> = Matrix::uniform(3, 3, 200);
        let ones = Matrix::uniform(3, 3, 1);
        // 9 * 200 = 1800 = 7 * 256 + 8
        assert_eq!(plane.conv(&ones, 1, 1).ok().map(|m| m.to_vec()), Some(vec![8]));
        assert_eq!(plane.filter(&ones).ok().and_then(|m| m.get(1, 1)), Some(8));
        let spread = plane.deconv(&Matrix::uniform(1, 1, 2), 1, 1).expect("valid stride");
        assert_eq!(spread.to_vec(), vec![144; 9]);
    }
}
