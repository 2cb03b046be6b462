//! Elementary row/column transforms, determinant and inverse
//!
//! The three classical elementary transforms mutate the receiver in place.
//! Determinant and inverse work on private copies and never touch their input.

use ndarray::{ArrayView1, ArrayViewMut1};

use crate::io::configuration::MAX_REDUCTION_ROUNDS;
use crate::io::error::{Cause, EngineError, Result, dimension_error};
use crate::matrix::dense::{Index2, Matrix};
use crate::matrix::element::Scalar;

/// Direction an elementary transform acts along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Operate on rows, indexed by `y`
    Row,
    /// Operate on columns, indexed by `x`
    Column,
}

impl<T: Scalar> Matrix<T> {
    fn extent(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.height(),
            Axis::Column => self.width(),
        }
    }

    fn line(&self, axis: Axis, index: usize) -> ArrayView1<'_, T> {
        match axis {
            Axis::Row => self.cells.row(index),
            Axis::Column => self.cells.column(index),
        }
    }

    fn line_mut(&mut self, axis: Axis, index: usize) -> ArrayViewMut1<'_, T> {
        match axis {
            Axis::Row => self.cells.row_mut(index),
            Axis::Column => self.cells.column_mut(index),
        }
    }

    fn check_lines(&self, operation: &'static str, axis: Axis, a: usize, b: usize) -> Result<()> {
        let extent = self.extent(axis);
        if a >= extent || b >= extent {
            return Err(dimension_error(
                operation,
                vec![Index2::new(a, b), self.dims()],
                Cause::OutOfBounds,
            ));
        }
        Ok(())
    }

    /// Swap rows or columns `a` and `b` (first kind)
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either index is outside the matrix
    pub fn swap_lines(&mut self, axis: Axis, a: usize, b: usize) -> Result<()> {
        self.check_lines("Matrix::swap_lines", axis, a, b)?;
        if a == b {
            return Ok(());
        }
        let span = match axis {
            Axis::Row => self.width(),
            Axis::Column => self.height(),
        };
        for k in 0..span {
            match axis {
                Axis::Row => self.cells.swap([a, k], [b, k]),
                Axis::Column => self.cells.swap([k, a], [k, b]),
            }
        }
        Ok(())
    }

    /// Multiply row or column `index` by a nonzero `factor` (second kind)
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `factor` is zero or `index` is outside the matrix
    pub fn scale_line(&mut self, axis: Axis, index: usize, factor: T) -> Result<()> {
        if factor == T::zero() {
            return Err(dimension_error(
                "Matrix::scale_line",
                vec![Index2::new(index, 0)],
                Cause::OutOfBounds,
            ));
        }
        self.check_lines("Matrix::scale_line", axis, index, index)?;
        for cell in &mut self.line_mut(axis, index) {
            *cell = cell.mul_wrapped(factor);
        }
        Ok(())
    }

    /// Add `factor` times line `source` to line `target` (third kind)
    ///
    /// A zero `factor` leaves the matrix unchanged.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either index is outside the matrix
    pub fn add_scaled_line(
        &mut self,
        axis: Axis,
        target: usize,
        source: usize,
        factor: T,
    ) -> Result<()> {
        self.check_lines("Matrix::add_scaled_line", axis, target, source)?;
        if factor == T::zero() {
            return Ok(());
        }
        let source_line = self.line(axis, source).to_owned();
        for (cell, &value) in self.line_mut(axis, target).iter_mut().zip(&source_line) {
            *cell = cell.add_wrapped(factor.mul_wrapped(value));
        }
        Ok(())
    }

    fn check_square(&self, operation: &'static str) -> Result<()> {
        if self.width() != self.height() {
            return Err(dimension_error(
                operation,
                vec![self.dims()],
                Cause::NotSquare,
            ));
        }
        Ok(())
    }

    /// Pick the pivot row for `column` among rows at or below it
    ///
    /// Integer types take the first nonzero entry; other types take the
    /// entry of largest magnitude (partial pivoting).
    fn pivot_row(&self, column: usize) -> Option<usize> {
        let mut candidates =
            (column..self.height()).filter(|&row| self.value_or_zero(column, row) != T::zero());
        if T::INTEGRAL {
            return candidates.next();
        }
        candidates.max_by(|&a, &b| {
            let magnitude = |row| self.value_or_zero(column, row).magnitude();
            magnitude(a).total_cmp(&magnitude(b))
        })
    }

    /// Clear entry `(column, row)` below the pivot on the diagonal
    ///
    /// Integer types use repeated quotient subtraction, swapping the two rows
    /// whenever the truncated quotient vanishes, which keeps the determinant
    /// exact. Other types eliminate in one step and store an exact zero.
    fn eliminate_below(&mut self, column: usize, row: usize, sign: &mut T) -> Result<()> {
        if !T::INTEGRAL {
            let factor = self
                .value_or_zero(column, row)
                .div_wrapped(self.value_or_zero(column, column));
            self.add_scaled_line(Axis::Row, row, column, factor.neg_wrapped())?;
            return self.assign(column, row, T::zero());
        }
        let mut rounds = 0;
        while self.value_or_zero(column, row) != T::zero() {
            if rounds >= MAX_REDUCTION_ROUNDS {
                return self.assign(column, row, T::zero());
            }
            let quotient = self
                .value_or_zero(column, row)
                .div_wrapped(self.value_or_zero(column, column));
            if quotient == T::zero() {
                self.swap_lines(Axis::Row, column, row)?;
                *sign = sign.neg_wrapped();
            } else {
                self.add_scaled_line(Axis::Row, row, column, quotient.neg_wrapped())?;
            }
            rounds += 1;
        }
        Ok(())
    }
}

impl<T: Scalar> Matrix<T> {
    /// Determinant of a square matrix
    ///
    /// Sizes up to two use closed forms; the empty matrix has determinant
    /// zero. Larger matrices are reduced to upper-triangular form: integer
    /// types by repeated quotient subtraction so their determinants stay
    /// exact, other types by elimination with partial pivoting. A singular
    /// matrix yields zero rather than an error.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` if width and height differ
    pub fn det(&self) -> Result<T> {
        self.check_square("Matrix::det")?;
        let v = |x, y| self.value_or_zero(x, y);
        match self.width() {
            0 => return Ok(T::zero()),
            1 => return Ok(v(0, 0)),
            2 => return Ok(det2(v(0, 0), v(1, 0), v(0, 1), v(1, 1))),
            _ => {}
        }

        let mut work = self.clone();
        let mut sign = T::one();
        let n = work.height();
        for i in 0..n {
            let Some(pivot) = work.pivot_row(i) else {
                return Ok(T::zero());
            };
            if pivot != i {
                work.swap_lines(Axis::Row, i, pivot)?;
                sign = sign.neg_wrapped();
            }
            for j in i + 1..n {
                work.eliminate_below(i, j, &mut sign)?;
            }
        }

        Ok((0..n).fold(sign, |acc, i| acc.mul_wrapped(work.value_or_zero(i, i))))
    }

    /// Inverse of a square matrix
    ///
    /// Sizes one and two use closed forms, larger sizes Gauss-Jordan
    /// elimination against an accumulating identity. Integer element types
    /// divide with truncation.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` if width and height differ and `Irreducible` if
    /// no nonzero pivot exists
    pub fn inv(&self) -> Result<Self> {
        self.check_square("Matrix::inv")?;
        let irreducible = || EngineError::Irreducible {
            operation: "Matrix::inv",
        };
        let v = |x, y| self.value_or_zero(x, y);
        match self.width() {
            0 => return Ok(Self::empty()),
            1 => {
                let value = v(0, 0);
                if value == T::zero() {
                    return Err(irreducible());
                }
                return Ok(Self::uniform(1, 1, T::one().div_wrapped(value)));
            }
            2 => {
                let det = det2(v(0, 0), v(1, 0), v(0, 1), v(1, 1));
                if det == T::zero() {
                    return Err(irreducible());
                }
                let adjugate = Self::from_values(2, 2, [v(1, 1), v(1, 0).neg_wrapped(), v(0, 1).neg_wrapped(), v(0, 0)]);
                return adjugate.div_scalar(det);
            }
            _ => {}
        }

        let n = self.width();
        let mut work = self.clone();
        let mut inverse = Self::identity(n);
        for i in 0..n {
            let pivot = work.pivot_row(i).ok_or_else(irreducible)?;
            if pivot != i {
                work.swap_lines(Axis::Row, i, pivot)?;
                inverse.swap_lines(Axis::Row, i, pivot)?;
            }
            let diagonal = work.value_or_zero(i, i);
            for j in (0..n).filter(|&j| j != i) {
                let factor = work.value_or_zero(i, j).div_wrapped(diagonal).neg_wrapped();
                work.add_scaled_line(Axis::Row, j, i, factor)?;
                inverse.add_scaled_line(Axis::Row, j, i, factor)?;
            }
        }

        for i in 0..n {
            let diagonal = work.value_or_zero(i, i);
            if diagonal == T::zero() {
                return Err(irreducible());
            }
            for cell in &mut inverse.line_mut(Axis::Row, i) {
                *cell = cell.div_wrapped(diagonal);
            }
        }
        Ok(inverse)
    }
}

/// Determinant of `[[a, b], [c, d]]` with wrapping integer arithmetic
fn det2<T: Scalar>(a: T, b: T, c: T, d: T) -> T {
    a.mul_wrapped(d).sub_wrapped(b.mul_wrapped(c))
}
