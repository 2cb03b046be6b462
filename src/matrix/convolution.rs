//! Strided convolution, its adjoint and same-size filtering
//!
//! All three correlate without flipping the kernel. An empty matrix or an
//! empty kernel returns a copy of the receiver unchanged. Integer sums wrap
//! around on overflow.

use crate::io::error::{Cause, Result, dimension_error};
use crate::matrix::dense::{Matrix, check_steps};
use crate::matrix::element::Scalar;

impl<T: Scalar> Matrix<T> {
    fn check_kernel(&self, operation: &'static str, kernel: &Self) -> Result<()> {
        if kernel.width() > self.width() || kernel.height() > self.height() {
            return Err(dimension_error(
                operation,
                vec![self.dims(), kernel.dims()],
                Cause::LargeKernel,
            ));
        }
        Ok(())
    }

    /// Valid-region convolution advancing `(dx, dy)` between windows
    ///
    /// The output is `(w - kw) / dx + 1` by `(h - kh) / dy + 1` and each cell is
    /// the inner product of the kernel with the window anchored at
    /// `(x * dx, y * dy)`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStep` for a zero stride and `LargeKernel` if the kernel
    /// does not fit inside the matrix
    pub fn conv(&self, kernel: &Self, dx: usize, dy: usize) -> Result<Self> {
        if self.is_empty() || kernel.is_empty() {
            return Ok(self.clone());
        }
        check_steps("Matrix::conv", dx, dy)?;
        self.check_kernel("Matrix::conv", kernel)?;

        let width = (self.width() - kernel.width()) / dx + 1;
        let height = (self.height() - kernel.height()) / dy + 1;
        let mut output = Self::new(width, height);
        for ((py, px), cell) in output.cells.indexed_iter_mut() {
            let mut sum = T::zero();
            for ((ky, kx), &weight) in kernel.cells.indexed_iter() {
                let value = self.value_or_zero(px * dx + kx, py * dy + ky);
                sum = sum.add_wrapped(value.mul_wrapped(weight));
            }
            *cell = sum;
        }
        Ok(output)
    }

    /// Adjoint of [`Matrix::conv`]: scatter every element through the kernel
    ///
    /// The output is `(w - 1) * dx + kw` by `(h - 1) * dy + kh`; overlapping
    /// contributions add up.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStep` for a zero stride
    pub fn deconv(&self, kernel: &Self, dx: usize, dy: usize) -> Result<Self> {
        if self.is_empty() || kernel.is_empty() {
            return Ok(self.clone());
        }
        check_steps("Matrix::deconv", dx, dy)?;

        let width = (self.width() - 1) * dx + kernel.width();
        let height = (self.height() - 1) * dy + kernel.height();
        let mut output = Self::new(width, height);
        for ((y, x), &value) in self.cells.indexed_iter() {
            for ((ky, kx), &weight) in kernel.cells.indexed_iter() {
                if let Some(cell) = output.cells.get_mut([y * dy + ky, x * dx + kx]) {
                    *cell = cell.add_wrapped(value.mul_wrapped(weight));
                }
            }
        }
        Ok(output)
    }

    /// Same-size correlation with the kernel centred at `(kw / 2, kh / 2)`
    ///
    /// Reads outside the matrix count as zero.
    ///
    /// # Errors
    ///
    /// Returns `LargeKernel` if the kernel does not fit inside the matrix
    pub fn filter(&self, kernel: &Self) -> Result<Self> {
        if self.is_empty() || kernel.is_empty() {
            return Ok(self.clone());
        }
        self.check_kernel("Matrix::filter", kernel)?;

        let (cx, cy) = (kernel.width() / 2, kernel.height() / 2);
        let mut output = Self::new(self.width(), self.height());
        for ((y, x), cell) in output.cells.indexed_iter_mut() {
            let mut sum = T::zero();
            for ((ky, kx), &weight) in kernel.cells.indexed_iter() {
                let (Some(sx), Some(sy)) = ((x + kx).checked_sub(cx), (y + ky).checked_sub(cy))
                else {
                    continue;
                };
                sum = sum.add_wrapped(self.value_or_zero(sx, sy).mul_wrapped(weight));
            }
            *cell = sum;
        }
        Ok(output)
    }
}
