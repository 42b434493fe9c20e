//! # Spigot Properties
//!
//! Property tests for the digit-spigot generator:
//!
//! 1. **Shape**: `p` fractional digits, one decimal point iff `p > 0`
//! 2. **Finality**: truncated output for `p` is a prefix of the output for `p + m`
//! 3. **Rounding**: rounded output equals truncated output plus at most one
//!    unit in the last place

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use pi_digits::{
        compute_pi_digits, compute_pi_digits_checked, compute_pi_digits_with, PiConfig, PiError,
        RoundingMode, SpigotDigits,
    };
    use proptest::prelude::*;

    /// "3.1415" -> 31415
    fn as_integer(digits: &str) -> BigUint {
        digits
            .replace('.', "")
            .parse()
            .expect("spigot output is all digits")
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_output_shape(p in 0u32..200) {
            let s = compute_pi_digits(p);
            if p == 0 {
                prop_assert_eq!(s.as_str(), "3");
            } else {
                prop_assert_eq!(s.len(), p as usize + 2);
                prop_assert_eq!(s.matches('.').count(), 1);
                prop_assert!(s.starts_with("3."));
            }
            prop_assert!(s.chars().all(|c| c.is_ascii_digit() || c == '.'));
        }

        #[test]
        fn prop_truncated_digits_are_final(p in 1u32..150, extra in 1u32..50) {
            let short = compute_pi_digits_with(p, RoundingMode::Truncate);
            let long = compute_pi_digits_with(p + extra, RoundingMode::Truncate);
            prop_assert!(long.starts_with(&short));
        }

        #[test]
        fn prop_rounding_adds_at_most_one_unit(p in 0u32..150) {
            let rounded = as_integer(&compute_pi_digits(p));
            let truncated = as_integer(&compute_pi_digits_with(p, RoundingMode::Truncate));
            let diff = rounded - &truncated;
            prop_assert!(diff <= BigUint::from(1u32));
        }

        #[test]
        fn prop_checked_rejects_every_negative(p in i64::MIN..0) {
            prop_assert_eq!(
                compute_pi_digits_checked(p, &PiConfig::default()),
                Err(PiError::NegativePrecision(p))
            );
        }
    }

    #[test]
    fn test_stream_matches_formatted_output() {
        let streamed: String = SpigotDigits::new()
            .take(31)
            .map(|d| char::from(b'0' + d))
            .collect();
        let formatted = compute_pi_digits_with(30, RoundingMode::Truncate).replace('.', "");
        assert_eq!(streamed, formatted);
    }

    #[test]
    fn test_thousand_digits_tail() {
        // Digits 991-1000 of pi after the decimal point
        let s = compute_pi_digits_with(1000, RoundingMode::Truncate);
        assert_eq!(&s[s.len() - 10..], "2164201989");
    }

    #[test]
    fn test_concurrent_calls_agree() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| compute_pi_digits(64)))
            .collect();
        let results: Vec<String> = handles
            .into_iter()
            .map(|h| h.join().expect("spigot thread panicked"))
            .collect();
        assert!(results.windows(2).all(|w| w[0] == w[1]));
    }
}
