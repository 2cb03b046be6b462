//! Kernel generators and classic edge operators

use clap::ValueEnum;

use crate::io::configuration::{DEFAULT_LOG_SCALE, DEFAULT_LOG_SIZE};
use crate::matrix::Matrix;

/// Unnormalized Gaussian bump `exp(-x²/2)`
pub fn gauss(x: f64) -> f64 {
    (-x / 2.0 * x).exp()
}

/// `n` by `n` Laplacian-of-Gaussian kernel at scale `s`
///
/// Each element is `(x² + y² - 2) / s² · g(x) · g(y)` where `x` and `y` are the
/// offsets from the kernel centre divided by `s`.
pub fn laplace_gauss(n: usize, s: f64) -> Matrix<f64> {
    let centre = n.saturating_sub(1) as f64 / 2.0;
    let mut kernel = Matrix::new(n, n);
    for ((row, col), cell) in kernel.cells.indexed_iter_mut() {
        let x = (col as f64 - centre) / s;
        let y = (row as f64 - centre) / s;
        *cell = x.mul_add(x, y * y - 2.0) / s / s * gauss(x) * gauss(y);
    }
    kernel
}

fn kernel3(values: [i32; 9]) -> Matrix<i32> {
    Matrix::from_values(3, 3, values)
}

/// Roberts cross pair (diagonal gradients)
pub fn roberts() -> [Matrix<i32>; 2] {
    [
        Matrix::from_values(2, 2, [1, 0, 0, -1]),
        Matrix::from_values(2, 2, [0, 1, -1, 0]),
    ]
}

/// Sobel operators at 0°, 45°, 90° and 135°
pub fn sobel() -> [Matrix<i32>; 4] {
    [
        kernel3([-1, -2, -1, 0, 0, 0, 1, 2, 1]),
        kernel3([-2, -1, 0, -1, 0, 1, 0, 1, 2]),
        kernel3([-1, 0, 1, -2, 0, 2, -1, 0, 1]),
        kernel3([0, 1, 2, -1, 0, 1, -2, -1, 0]),
    ]
}

/// Prewitt operators at 0°, 45°, 90° and 135°
pub fn prewitt() -> [Matrix<i32>; 4] {
    [
        kernel3([-1, -1, -1, 0, 0, 0, 1, 1, 1]),
        kernel3([-1, -1, 0, -1, 0, 1, 0, 1, 1]),
        kernel3([-1, 0, 1, -1, 0, 1, -1, 0, 1]),
        kernel3([0, 1, 1, -1, 0, 1, -1, -1, 0]),
    ]
}

/// 4-neighbour Laplacian
pub fn laplace4() -> Matrix<i32> {
    kernel3([0, -1, 0, -1, 4, -1, 0, -1, 0])
}

/// 8-neighbour Laplacian
pub fn laplace8() -> Matrix<i32> {
    kernel3([-1, -1, -1, -1, 8, -1, -1, -1, -1])
}

/// Weighted 8-neighbour Laplacian with centre 12
pub fn laplace12() -> Matrix<i32> {
    kernel3([-1, -2, -1, -2, 12, -2, -1, -2, -1])
}

/// Single-kernel operator used to build edge maps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum EdgeOperator {
    /// [`laplace4`]
    Laplace4,
    /// [`laplace8`]
    Laplace8,
    /// [`laplace12`]
    Laplace12,
    /// [`laplace_gauss`] at the default size and scale
    LaplaceGauss,
}

impl EdgeOperator {
    /// Kernel of the operator as floating-point weights
    pub fn kernel(self) -> Matrix<f64> {
        match self {
            Self::Laplace4 => laplace4().convert(),
            Self::Laplace8 => laplace8().convert(),
            Self::Laplace12 => laplace12().convert(),
            Self::LaplaceGauss => laplace_gauss(DEFAULT_LOG_SIZE, DEFAULT_LOG_SCALE),
        }
    }
}
