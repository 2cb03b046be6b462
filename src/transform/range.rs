//! Value-range statistics, remapping and saturating conversion
//!
//! `normalize` stretches `[min, max]` onto `[0, 255]`, while `absolutize` and
//! `log_absolutize` scale magnitudes by the maximum alone so zero stays zero.

use crate::matrix::{Matrix, Real};

impl<T: Real> Matrix<T> {
    /// Smallest and largest element, both zero for an empty matrix
    pub fn min_max(&self) -> (T, T) {
        let mut values = self.values();
        let Some(first) = values.next() else {
            return (T::zero(), T::zero());
        };
        values.fold((first, first), |(lo, hi), v| {
            (if v < lo { v } else { lo }, if v > hi { v } else { hi })
        })
    }

    /// Smallest element, zero for an empty matrix
    pub fn min(&self) -> T {
        self.min_max().0
    }

    /// Largest element, zero for an empty matrix
    pub fn max(&self) -> T {
        self.min_max().1
    }

    /// Convert to another element type, saturating at its bounds
    ///
    /// Fractions truncate toward zero and NaN becomes zero.
    pub fn convert<U: Real>(&self) -> Matrix<U> {
        self.map(|v| U::from_wide(v.to_wide()))
    }
}

/// Stretch the value range onto `[0, 255]`
///
/// A constant matrix has no range and maps to zeros.
pub fn normalize<T: Real>(matrix: &Matrix<T>) -> Matrix<u8> {
    let wide: Matrix<f64> = matrix.convert();
    let (lo, hi) = wide.min_max();
    wide.sub_scalar(lo).mul_scalar(255.0 / (hi - lo)).convert()
}

/// Absolute values scaled so the largest magnitude becomes 255
pub fn absolutize<T: Real>(matrix: &Matrix<T>) -> Matrix<u8> {
    scale_by_max(&matrix.map(|v| v.to_wide().abs()))
}

/// `log1p` of absolute values, scaled so the largest becomes 255
pub fn log_absolutize<T: Real>(matrix: &Matrix<T>) -> Matrix<u8> {
    scale_by_max(&matrix.map(|v| v.to_wide().abs().ln_1p()))
}

fn scale_by_max(magnitudes: &Matrix<f64>) -> Matrix<u8> {
    magnitudes.mul_scalar(255.0 / magnitudes.max()).convert()
}

/// Clamp into `[0, 255]`
pub fn shrink_u8<T: Real>(matrix: &Matrix<T>) -> Matrix<u8> {
    matrix.convert()
}

/// Clamp into `[-128, 127]`
pub fn shrink_i8<T: Real>(matrix: &Matrix<T>) -> Matrix<i8> {
    matrix.convert()
}
