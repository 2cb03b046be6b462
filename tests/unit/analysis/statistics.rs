//! Tests for power means, order statistics, variance and covariance

#[cfg(test)]
mod tests {
    use rastermatrix::analysis::statistics::{
        Estimator, covariance, mean, median, mode, variance,
    };

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // Tests arithmetic, quadratic, extreme and geometric exponents
    #[test]
    fn test_power_means() {
        let samples = [1, 2, 3, 4];
        assert!(approx(mean(1.0, &samples), 2.5));
        assert!(approx(mean(2.0, &[1.0, 2.0, 3.0]), 14.0 / 3.0));
        assert!(approx(mean(f64::INFINITY, &samples), 4.0));
        assert!(approx(mean(f64::NEG_INFINITY, &samples), 1.0));
        assert!(approx(mean(0.0, &[2u8, 8]), 4.0));
        assert!(approx(mean(1.0, &[] as &[i32]), 0.0));
    }

    #[test]
    fn test_median_upper_middle() {
        assert_eq!(median(&[5, 1, 3]), 3);
        assert_eq!(median(&[4, 1, 3, 2]), 3);
        assert_eq!(median(&[] as &[u8]), 0);
    }

    // Tests that NaN sorts below every number before picking the middle
    #[test]
    fn test_median_with_nan() {
        let m = median(&[2.0, f64::NAN, 1.0]);
        assert!(approx(m, 1.0));
    }

    #[test]
    fn test_mode_ties_and_final_run() {
        assert_eq!(mode(&[3, 1, 3, 1, 2]), 1);
        assert_eq!(mode(&[1, 2, 2]), 2);
        assert_eq!(mode(&[7]), 7);
        assert_eq!(mode(&[] as &[i64]), 0);
    }

    #[test]
    fn test_variance_estimators() {
        let samples = [1.0, 2.0, 3.0, 4.0];
        assert!(approx(variance(Estimator::Population, &samples), 1.25));
        assert!(approx(variance(Estimator::Sample, &samples), 5.0 / 3.0));
        assert!(approx(variance(Estimator::default(), &samples), 1.25));
    }

    // Tests that a sample estimate from fewer than two samples is zero
    #[test]
    fn test_sample_variance_needs_two() {
        assert!(approx(variance(Estimator::Sample, &[5.0]), 0.0));
        assert!(approx(variance(Estimator::Population, &[5.0]), 0.0));
        assert!(approx(variance(Estimator::Sample, &[] as &[f64]), 0.0));
    }

    #[test]
    fn test_covariance_uses_shorter_length() {
        let x = [1, 2, 3, 100];
        let y = [2.0, 4.0, 6.0];
        assert!(approx(covariance(Estimator::Population, &x, &y), 4.0 / 3.0));
        assert!(approx(covariance(Estimator::Sample, &x, &y), 2.0));

        let inverse = [3, 2, 1];
        assert!(covariance(Estimator::Population, &x, &inverse) < 0.0);
        assert!(approx(covariance(Estimator::Population, &x, &[] as &[u8]), 0.0));
    }
}
