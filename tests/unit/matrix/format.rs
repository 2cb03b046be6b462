//! Tests for compact, aligned and precision-controlled matrix rendering

#[cfg(test)]
mod tests {
    use rastermatrix::Matrix;

    #[test]
    fn test_compact_form() {
        let m = Matrix::from_values(2, 2, [1, 2, 3, 4]);
        assert_eq!(m.to_string(), "[1,2;3,4]");
        assert_eq!(format!("{m:#}"), "Matrix(2x2)[1,2;3,4]");

        let row = Matrix::from_values(3, 1, [-1, 0, 1]);
        assert_eq!(row.to_string(), "[-1,0,1]");
    }

    #[test]
    fn test_empty_renders_brackets() {
        let e: Matrix<i32> = Matrix::empty();
        assert_eq!(e.to_string(), "[]");
        assert_eq!(format!("{e:#}"), "Matrix(0x0)[]");
    }

    // Tests that precision applies to every element
    #[test]
    fn test_precision() {
        let m = Matrix::from_values(2, 1, [1.0, 2.26]);
        assert_eq!(format!("{m:.1}"), "[1.0,2.3]");
        assert_eq!(format!("{m:.3}"), "[1.000,2.260]");
    }

    // Tests that a width switches to aligned multi-line output
    #[test]
    fn test_width_aligns_rows() {
        let m = Matrix::from_values(2, 2, [1, 20, 300, 4]);
        assert_eq!(format!("{m:2}"), "[  1, 20;\n 300,  4]");
        assert_eq!(format!("{m:4}"), "[   1,  20;\n  300,   4]");
    }
}
