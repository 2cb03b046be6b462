//! Scalar, elementwise and matrix-product arithmetic
//!
//! Every operation returns a fresh matrix; receivers are never modified.
//! Elementwise operations treat an empty operand as absorbing and return a
//! copy of the other operand. Integer elements wrap around on overflow.

use crate::io::error::{Cause, Result, dimension_error};
use crate::matrix::dense::{Index2, Matrix};
use crate::matrix::element::Scalar;

impl<T: Scalar> Matrix<T> {
    /// Add `value` to every element
    pub fn add_scalar(&self, value: T) -> Self {
        self.map(|v| v.add_wrapped(value))
    }

    /// Subtract `value` from every element
    pub fn sub_scalar(&self, value: T) -> Self {
        self.map(|v| v.sub_wrapped(value))
    }

    /// Multiply every element by `value`
    pub fn mul_scalar(&self, value: T) -> Self {
        self.map(|v| v.mul_wrapped(value))
    }

    /// Divide every element by `value`
    ///
    /// # Errors
    ///
    /// Returns `DivideBy0` if `value` is zero
    pub fn div_scalar(&self, value: T) -> Result<Self> {
        if value == T::zero() {
            return Err(dimension_error(
                "Matrix::div_scalar",
                vec![self.dims()],
                Cause::DivideBy0,
            ));
        }
        Ok(self.map(|v| v.div_wrapped(value)))
    }

    /// Elementwise sum
    ///
    /// # Errors
    ///
    /// Returns `Dimensions` if both operands are non-empty with different shapes
    pub fn add_elem(&self, other: &Self) -> Result<Self> {
        self.zip_with("Matrix::add_elem", other, T::add_wrapped)
    }

    /// Elementwise difference
    ///
    /// # Errors
    ///
    /// Returns `Dimensions` if both operands are non-empty with different shapes
    pub fn sub_elem(&self, other: &Self) -> Result<Self> {
        self.zip_with("Matrix::sub_elem", other, T::sub_wrapped)
    }

    /// Elementwise (Hadamard) product
    ///
    /// # Errors
    ///
    /// Returns `Dimensions` if both operands are non-empty with different shapes
    pub fn mul_elem(&self, other: &Self) -> Result<Self> {
        self.zip_with("Matrix::mul_elem", other, T::mul_wrapped)
    }

    /// Elementwise quotient
    ///
    /// # Errors
    ///
    /// Returns `Dimensions` on a shape mismatch and `DivideBy0` carrying the
    /// coordinate of the first zero divisor in row-major order
    pub fn div_elem(&self, other: &Self) -> Result<Self> {
        if !self.is_empty() && !other.is_empty() {
            check_same_shape("Matrix::div_elem", self, other)?;
            if let Some(((row, col), _)) = other
                .cells
                .indexed_iter()
                .find(|(_, value)| **value == T::zero())
            {
                return Err(dimension_error(
                    "Matrix::div_elem",
                    vec![Index2::new(col, row)],
                    Cause::DivideBy0,
                ));
            }
        }
        self.zip_with("Matrix::div_elem", other, T::div_wrapped)
    }

    /// Matrix product `self × other`
    ///
    /// The result is `other.width()` by `self.height()`. Accumulation runs
    /// row-major over `self`, so floating-point sums are reproducible.
    ///
    /// # Errors
    ///
    /// Returns `Dimensions` unless `self.width() == other.height()`
    pub fn mul_mat(&self, other: &Self) -> Result<Self> {
        if self.width() != other.height() {
            return Err(dimension_error(
                "Matrix::mul_mat",
                vec![self.dims(), other.dims()],
                Cause::Dimensions,
            ));
        }
        let mut product = Self::new(other.width(), self.height());
        for ((i, j), &a) in self.cells.indexed_iter() {
            for (k, &b) in other.cells.row(j).iter().enumerate() {
                if let Some(cell) = product.cells.get_mut([i, k]) {
                    *cell = cell.add_wrapped(a.mul_wrapped(b));
                }
            }
        }
        Ok(product)
    }

    fn zip_with<F>(&self, operation: &'static str, other: &Self, mut f: F) -> Result<Self>
    where
        F: FnMut(T, T) -> T,
    {
        if self.is_empty() {
            return Ok(other.clone());
        }
        if other.is_empty() {
            return Ok(self.clone());
        }
        check_same_shape(operation, self, other)?;
        let mut result = self.clone();
        for (cell, &b) in result.cells.iter_mut().zip(other.cells.iter()) {
            *cell = f(*cell, b);
        }
        Ok(result)
    }
}

fn check_same_shape<T: Scalar>(
    operation: &'static str,
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> Result<()> {
    if a.dims() != b.dims() {
        return Err(dimension_error(
            operation,
            vec![a.dims(), b.dims()],
            Cause::Dimensions,
        ));
    }
    Ok(())
}
