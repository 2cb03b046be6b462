//! Tests for scalar, elementwise and product arithmetic including empty-operand rules

#[cfg(test)]
mod tests {
    use rastermatrix::io::error::Cause;
    use rastermatrix::{Index2, Matrix};

    #[test]
    fn test_scalar_operations() {
        let m = Matrix::from_values(2, 2, [1, 2, 3, 4]);
        assert_eq!(m.add_scalar(1).to_vec(), vec![2, 3, 4, 5]);
        assert_eq!(m.sub_scalar(1).to_vec(), vec![0, 1, 2, 3]);
        assert_eq!(m.mul_scalar(3).to_vec(), vec![3, 6, 9, 12]);
        assert_eq!(
            m.div_scalar(2).expect("nonzero divisor").to_vec(),
            vec![0, 1, 1, 2]
        );
        // Receiver is untouched
        assert_eq!(m.to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_div_scalar_by_zero() {
        let m = Matrix::from_values(2, 1, [1.0, 2.0]);
        let cause = m.div_scalar(0.0).err().and_then(|e| e.cause());
        assert_eq!(cause, Some(Cause::DivideBy0));
    }

    // Tests that an empty operand returns a copy of the other one
    #[test]
    fn test_empty_operand_is_absorbing() {
        let m = Matrix::from_values(2, 2, [1, 2, 3, 4]);
        let e: Matrix<i32> = Matrix::empty();

        assert_eq!(m.add_elem(&e).ok(), Some(m.clone()));
        assert_eq!(e.sub_elem(&m).ok(), Some(m.clone()));
        assert_eq!(e.mul_elem(&m).ok(), Some(m.clone()));
        assert_eq!(m.div_elem(&e).ok(), Some(m.clone()));
        assert_eq!(e.add_elem(&e).ok(), Some(Matrix::empty()));
    }

    #[test]
    fn test_elementwise_shape_mismatch() {
        let a = Matrix::from_values(2, 2, [1, 2, 3, 4]);
        let b = Matrix::from_values(3, 1, [1, 2, 3]);
        let err = a.add_elem(&b).expect_err("shapes differ");
        assert_eq!(err.cause(), Some(Cause::Dimensions));
    }

    #[test]
    fn test_elementwise_values() {
        let a = Matrix::from_values(2, 2, [6.0, 8.0, 10.0, 12.0]);
        let b = Matrix::from_values(2, 2, [2.0, 4.0, 5.0, 3.0]);
        assert_eq!(
            a.add_elem(&b).expect("same shape").to_vec(),
            vec![8.0, 12.0, 15.0, 15.0]
        );
        assert_eq!(
            a.sub_elem(&b).expect("same shape").to_vec(),
            vec![4.0, 4.0, 5.0, 9.0]
        );
        assert_eq!(
            a.mul_elem(&b).expect("same shape").to_vec(),
            vec![12.0, 32.0, 50.0, 36.0]
        );
        assert_eq!(
            a.div_elem(&b).expect("no zero divisor").to_vec(),
            vec![3.0, 2.0, 2.0, 4.0]
        );
    }

    // Tests that the first zero divisor is reported as (column, row)
    #[test]
    fn test_div_elem_reports_zero_position() {
        let a = Matrix::from_values(3, 2, [1, 1, 1, 1, 1, 1]);
        let b = Matrix::from_values(3, 2, [1, 1, 1, 1, 0, 0]);
        let err = a.div_elem(&b).expect_err("zero divisor present");
        assert_eq!(err.cause(), Some(Cause::DivideBy0));
        let rastermatrix::EngineError::Dimension(detail) = err else {
            panic!("expected a dimension error");
        };
        assert_eq!(detail.dims(), &[Index2::new(1, 1)]);
    }

    #[test]
    fn test_mul_mat_shape_and_values() {
        // 3 wide, 2 tall times 2 wide, 3 tall
        let a = Matrix::from_values(3, 2, [1, 2, 3, 4, 5, 6]);
        let b = Matrix::from_values(2, 3, [7, 8, 9, 10, 11, 12]);
        let p = a.mul_mat(&b).expect("inner dimensions agree");
        assert_eq!(p.dims(), Index2::new(2, 2));
        assert_eq!(p.to_vec(), vec![58, 64, 139, 154]);

        let err = a.mul_mat(&a).expect_err("inner dimensions differ");
        assert_eq!(err.cause(), Some(Cause::Dimensions));
    }

    #[test]
    fn test_mul_mat_identity() {
        let a = Matrix::from_values(3, 3, [2.0, -1.0, 0.5, 4.0, 3.0, 1.0, 0.0, 7.0, -2.0]);
        let p = a.mul_mat(&Matrix::identity(3)).expect("square operands");
        assert_eq!(p, a);
    }

    // Tests that byte planes wrap around on overflow instead of panicking
    #[test]
    fn test_integer_overflow_wraps() {
        let bytes: Matrix<u8> = Matrix::uniform(2, 2, 100);
        assert_eq!(bytes.add_scalar(200).to_vec(), vec![44; 4]);
        assert_eq!(bytes.sub_scalar(101).to_vec(), vec![255; 4]);
        assert_eq!(bytes.mul_scalar(3).to_vec(), vec![44; 4]);
        assert_eq!(
            bytes.add_elem(&bytes).expect("same shape").to_vec(),
            vec![200; 4]
        );
        assert_eq!(
            bytes.mul_elem(&bytes).expect("same shape").to_vec(),
            vec![16; 4]
        );

        let lowest = Matrix::uniform(1, 1, i32::MIN);
        assert_eq!(
            lowest.div_scalar(-1).expect("nonzero divisor").to_vec(),
            vec![i32::MIN]
        );

        let product = bytes.mul_mat(&bytes).expect("square operands");
        assert_eq!(product.to_vec(), vec![32; 4]);
    }
}
