//! # Cross-Method Agreement
//!
//! The spigot, the BBP series, Monte Carlo sampling, and `elementary-math`
//! all approximate the same constant. These tests check that they agree to
//! the accuracy each method can deliver.

#[cfg(test)]
mod tests {
    use elementary_math::{circle_area, div, factorial};
    use pi_digits::{
        bbp_pi, compute_pi_digits, create_engine, estimate_pi, Backend, PiConfigBuilder,
        RoundingMode,
    };

    #[test]
    fn test_spigot_and_bbp_agree() {
        for p in 0..=12u32 {
            let spigot: f64 = compute_pi_digits(p).parse().unwrap();
            let bbp = bbp_pi(p).unwrap();
            assert_eq!(spigot, bbp, "precision {}", p);
        }
    }

    #[test]
    fn test_spigot_matches_std_constant() {
        let spigot: f64 = compute_pi_digits(15).parse().unwrap();
        assert!((spigot - std::f64::consts::PI).abs() < 1e-15);
    }

    #[test]
    fn test_monte_carlo_brackets_spigot() {
        let config = PiConfigBuilder::new()
            .monte_carlo_samples(200_000)
            .monte_carlo_seed(2024)
            .monte_carlo_batch_size(4_096)
            .build()
            .unwrap();

        let engine = create_engine(Backend::Serial, config.monte_carlo_batch_size).unwrap();
        let estimate = estimate_pi(
            engine.as_ref(),
            config.monte_carlo_samples,
            config.monte_carlo_seed,
            config.monte_carlo_round_places,
        )
        .unwrap();

        let reference: f64 = compute_pi_digits(5).parse().unwrap();
        assert!((estimate.estimate - reference).abs() < 0.04);
    }

    #[test]
    fn test_circle_area_of_unit_circle_is_pi() {
        let area = circle_area(1.0).unwrap();
        let spigot: f64 = compute_pi_digits(10).parse().unwrap();
        assert!((area - spigot).abs() < 1e-10);
    }

    #[test]
    fn test_bigint_and_calculator_compose() {
        // 100! / 98! = 9900, a sanity check that BigUint arithmetic composes
        let ratio = factorial(100) / factorial(98);
        assert_eq!(ratio.to_string(), "9900");

        let truncated = pi_digits::compute_pi_digits_with(4, RoundingMode::Truncate);
        assert_eq!(truncated, "3.1415");
        assert_eq!(div(31415.0, 10_000.0).unwrap(), 3.1415);
    }
}
