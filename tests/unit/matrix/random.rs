//! Tests for seeded random constructors over uniform, exponential and normal draws

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rastermatrix::{Index2, Matrix};

    // Tests reproducibility for a fixed seed
    #[test]
    fn test_seeded_fills_repeat() {
        let a = Matrix::random_float(4, 3, &mut StdRng::seed_from_u64(42));
        let b = Matrix::random_float(4, 3, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert_eq!(a.dims(), Index2::new(4, 3));
    }

    #[test]
    fn test_random_int_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Matrix::random_int(20, 20, 5, &mut rng);
        assert!(m.values().all(|v| (0..5).contains(&v)));

        let full = Matrix::random_int(20, 20, 0, &mut rng);
        assert!(full.values().all(|v| v >= 0));
        assert!(full.values().any(|v| v > i64::from(u32::MAX)));
    }

    #[test]
    fn test_random_float_unit_interval() {
        let m = Matrix::random_float(30, 30, &mut StdRng::seed_from_u64(3));
        assert!(m.values().all(|v| (0.0..1.0).contains(&v)));
    }

    // Tests sample moments loosely against rate-1 exponential and standard normal
    #[test]
    fn test_distribution_moments() {
        let mut rng = StdRng::seed_from_u64(11);
        let exp = Matrix::random_exp(100, 100, &mut rng);
        assert!(exp.values().all(|v| v >= 0.0));
        let exp_mean = exp.values().sum::<f64>() / exp.len() as f64;
        assert!((exp_mean - 1.0).abs() < 0.1, "mean was {exp_mean}");

        let norm = Matrix::random_norm(100, 100, &mut rng);
        let norm_mean = norm.values().sum::<f64>() / norm.len() as f64;
        assert!(norm_mean.abs() < 0.1, "mean was {norm_mean}");
        assert!(norm.values().any(|v| v < 0.0));
    }

    #[test]
    fn test_empty_shapes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(Matrix::random_norm(0, 5, &mut rng).is_empty());
        assert!(Matrix::random_int(5, 0, 3, &mut rng).is_empty());
    }
}
