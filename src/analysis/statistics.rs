//! Descriptive statistics over slices of real samples
//!
//! All accumulation happens in `f64`. Empty input yields zero everywhere.

use crate::matrix::{Real, compare_nan_low};

/// Normalization applied by [`variance`] and [`covariance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Estimator {
    /// Divide by `n`
    #[default]
    Population,
    /// Divide by `n - 1` (Bessel's correction)
    Sample,
}

/// Power mean with exponent `p`
///
/// `p = +∞` gives the maximum, `p = -∞` the minimum and `p = 0` the geometric
/// mean; every other exponent gives `(Σ xᵖ / n)` without the outer root.
pub fn mean<E: Real>(p: f64, samples: &[E]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let wide = samples.iter().map(|v| v.to_wide());
    let n = samples.len() as f64;
    if p == f64::INFINITY {
        return wide.fold(f64::NEG_INFINITY, f64::max);
    }
    if p == f64::NEG_INFINITY {
        return wide.fold(f64::INFINITY, f64::min);
    }
    if p == 0.0 {
        return wide.map(|v| v.powf(1.0 / n)).product();
    }
    wide.map(|v| v.powf(p) / n).sum()
}

/// Element at index `len / 2` after sorting (upper middle for even lengths)
pub fn median<E: Real>(samples: &[E]) -> E {
    let mut sorted = samples.to_vec();
    sorted.sort_by(compare_nan_low);
    sorted.get(sorted.len() / 2).copied().unwrap_or_else(E::zero)
}

/// Most frequent value, the smallest one among ties
pub fn mode<E: Real>(samples: &[E]) -> E {
    let mut sorted = samples.to_vec();
    sorted.sort_by(compare_nan_low);

    let mut best = (E::zero(), 0_usize);
    let mut run = (E::zero(), 0_usize);
    for value in sorted {
        if run.1 > 0 && value == run.0 {
            run.1 += 1;
        } else {
            if run.1 > best.1 {
                best = run;
            }
            run = (value, 1);
        }
    }
    if run.1 > best.1 {
        best = run;
    }
    best.0
}

/// Variance of the samples
///
/// A sample estimate needs at least two samples and is zero otherwise.
pub fn variance<E: Real>(estimator: Estimator, samples: &[E]) -> f64 {
    covariance(estimator, samples, samples)
}

/// Covariance over the first `min(x.len(), y.len())` pairs
///
/// A sample estimate needs at least two pairs and is zero otherwise.
pub fn covariance<X: Real, Y: Real>(estimator: Estimator, x: &[X], y: &[Y]) -> f64 {
    let count = x.len().min(y.len());
    if count == 0 || (estimator == Estimator::Sample && count < 2) {
        return 0.0;
    }
    let n = count as f64;
    let (mut sx, mut sy, mut sxy) = (0.0, 0.0, 0.0);
    for (a, b) in x.iter().zip(y) {
        let (a, b) = (a.to_wide(), b.to_wide());
        sxy += a / n * b;
        sx += a / n;
        sy += b / n;
    }
    let population = sx.mul_add(-sy, sxy);
    match estimator {
        Estimator::Population => population,
        Estimator::Sample => population / (1.0 - 1.0 / n),
    }
}
