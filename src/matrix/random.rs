//! Randomly filled matrices drawn from a caller-supplied generator

use rand::Rng;
use rand_distr::{Exp1, StandardNormal};

use crate::matrix::dense::Matrix;

impl Matrix<i64> {
    /// Integers uniform in `[0, n)`, or in `[0, i64::MAX]` when `n <= 0`
    pub fn random_int<R: Rng>(width: usize, height: usize, n: i64, rng: &mut R) -> Self {
        let mut matrix = Self::new(width, height);
        for cell in &mut matrix.cells {
            *cell = if n > 0 {
                rng.random_range(0..n)
            } else {
                rng.random_range(0..=i64::MAX)
            };
        }
        matrix
    }
}

impl Matrix<f64> {
    /// Floats uniform in `[0, 1)`
    pub fn random_float<R: Rng>(width: usize, height: usize, rng: &mut R) -> Self {
        let mut matrix = Self::new(width, height);
        for cell in &mut matrix.cells {
            *cell = rng.random::<f64>();
        }
        matrix
    }

    /// Exponentially distributed floats with rate 1
    pub fn random_exp<R: Rng>(width: usize, height: usize, rng: &mut R) -> Self {
        let mut matrix = Self::new(width, height);
        for cell in &mut matrix.cells {
            *cell = rng.sample(Exp1);
        }
        matrix
    }

    /// Standard normal floats
    pub fn random_norm<R: Rng>(width: usize, height: usize, rng: &mut R) -> Self {
        let mut matrix = Self::new(width, height);
        for cell in &mut matrix.cells {
            *cell = rng.sample(StandardNormal);
        }
        matrix
    }
}
