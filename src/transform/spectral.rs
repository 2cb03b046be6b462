//! Separable two-dimensional discrete Fourier transform
//!
//! The transform is two dense products against roots-of-unity matrices, so
//! cost is cubic in the side length. Complex conversion helpers live here too.

use num_complex::Complex64;
use std::f64::consts::TAU;

use crate::io::error::Result;
use crate::matrix::{Matrix, Real};

/// `n` by `n` matrix of roots of unity, entry `(r, c)` at phase `2π·(rc mod n)/n`
pub fn fourier(n: usize) -> Matrix<Complex64> {
    let mut matrix = Matrix::new(n, n);
    for ((row, col), cell) in matrix.cells.indexed_iter_mut() {
        let phase = TAU * ((row * col) % n) as f64 / n as f64;
        *cell = Complex64::from_polar(1.0, phase);
    }
    matrix
}

/// Discrete Fourier transform `F(h) × M × F(w)` of a real matrix
///
/// # Errors
///
/// Propagates product shape errors, which cannot occur for well-formed input
pub fn dft<T: Real>(matrix: &Matrix<T>) -> Result<Matrix<Complex64>> {
    if matrix.is_empty() {
        return Ok(Matrix::empty());
    }
    fourier(matrix.height())
        .mul_mat(&make_complex(matrix))?
        .mul_mat(&fourier(matrix.width()))
}

/// Lift a real matrix onto the real axis
pub fn make_complex<T: Real>(matrix: &Matrix<T>) -> Matrix<Complex64> {
    matrix.map(|v| Complex64::new(v.to_wide(), 0.0))
}

/// Lift a real matrix onto the imaginary axis
pub fn make_imaginary<T: Real>(matrix: &Matrix<T>) -> Matrix<Complex64> {
    matrix.map(|v| Complex64::new(0.0, v.to_wide()))
}

/// Real parts
pub fn real(matrix: &Matrix<Complex64>) -> Matrix<f64> {
    matrix.map(|c| c.re)
}

/// Imaginary parts
pub fn imaginary(matrix: &Matrix<Complex64>) -> Matrix<f64> {
    matrix.map(|c| c.im)
}

/// Arguments in `(-π, π]`
pub fn phase(matrix: &Matrix<Complex64>) -> Matrix<f64> {
    matrix.map(Complex64::arg)
}

/// Moduli
pub fn magnitude(matrix: &Matrix<Complex64>) -> Matrix<f64> {
    matrix.map(Complex64::norm)
}
