//! Digit-spigot generator for the decimal expansion of pi
//!
//! The generator keeps six unbounded integers `q, r, t, k, n, l` describing a
//! continued-fraction approximation of pi. Each step either confirms the
//! candidate digit `n` and emits it, or widens the approximation by one
//! more term.
//!
//! INVARIANTS:
//! - Emitted digits are final; later steps never revise them
//! - All arithmetic is exact; every division is a floor division on `BigInt`

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, ToPrimitive};
use tracing::debug;

use super::precision::Precision;
use crate::config::{PiConfig, RoundingMode};
use crate::error::PiError;

/// Work counters for a spigot run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpigotStats {
    /// Digits confirmed and emitted (the leading 3 included)
    pub digits_emitted: u64,
    /// Continued-fraction refinement steps taken
    pub refinements: u64,
}

/// Infinite iterator over the verified decimal digits of pi: 3, 1, 4, 1, 5, ...
#[derive(Clone, Debug)]
pub struct SpigotDigits {
    q: BigInt,
    r: BigInt,
    t: BigInt,
    k: BigInt,
    n: BigInt,
    l: BigInt,
    stats: SpigotStats,
}

impl SpigotDigits {
    pub fn new() -> Self {
        Self {
            q: BigInt::one(),
            r: BigInt::from(0u32),
            t: BigInt::one(),
            k: BigInt::one(),
            n: BigInt::from(3u32),
            l: BigInt::from(3u32),
            stats: SpigotStats::default(),
        }
    }

    /// Counters accumulated so far
    pub fn stats(&self) -> SpigotStats {
        self.stats
    }

    /// `4q + r - t < n*t`: the candidate digit can no longer change
    fn digit_is_confirmed(&self) -> bool {
        &self.q * 4u32 + &self.r - &self.t < &self.n * &self.t
    }

    fn emit(&mut self) -> Option<u8> {
        // n is in 0..=9 whenever the confirmation test holds
        debug_assert!(
            self.n >= BigInt::from(0u32) && self.n <= BigInt::from(9u32),
            "confirmed spigot digit out of range: {}",
            self.n
        );
        let digit = self.n.to_u8()?;

        let next_r = (&self.r - &self.n * &self.t) * 10u32;
        let next_n = ((&self.q * 3u32 + &self.r) * 10u32).div_floor(&self.t) - &self.n * 10u32;
        self.q *= 10u32;
        self.r = next_r;
        self.n = next_n;

        self.stats.digits_emitted += 1;
        Some(digit)
    }

    fn refine(&mut self) {
        let next_r = (&self.q * 2u32 + &self.r) * &self.l;
        let next_n = (&self.q * (&self.k * 7u32 + 2u32) + &self.r * &self.l)
            .div_floor(&(&self.t * &self.l));
        self.q *= &self.k;
        self.t *= &self.l;
        self.l += 2u32;
        self.k += 1u32;
        self.n = next_n;
        self.r = next_r;

        self.stats.refinements += 1;
    }
}

impl Default for SpigotDigits {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for SpigotDigits {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        loop {
            if self.digit_is_confirmed() {
                return self.emit();
            }
            self.refine();
        }
    }
}

/// Pi to `precision` fractional digits, rounded half-up: `"3.14159"` for 5,
/// `"3.142"` for 3, `"3"` for 0.
pub fn compute_pi_digits(precision: u32) -> String {
    compute_pi_digits_with(precision, RoundingMode::HalfUp)
}

/// Pi to `precision` fractional digits using the given rounding mode
pub fn compute_pi_digits_with(precision: u32, rounding: RoundingMode) -> String {
    let fractional = precision as usize;
    let mut spigot = SpigotDigits::new();

    let digits = match rounding {
        RoundingMode::Truncate => spigot.by_ref().take(fractional.saturating_add(1)).collect(),
        RoundingMode::HalfUp => {
            let mut digits: Vec<u8> = spigot.by_ref().take(fractional.saturating_add(2)).collect();
            let guard = digits.pop().unwrap_or(0);
            round_half_up(&mut digits, guard);
            digits
        }
    };

    let stats = spigot.stats();
    debug!(
        precision,
        ?rounding,
        digits_emitted = stats.digits_emitted,
        refinements = stats.refinements,
        "pi digits computed"
    );

    format_digits(&digits)
}

/// Validating entry point for signed, externally supplied precisions.
///
/// Rejects negative values and values above `config.max_precision` before
/// the recurrence starts, then applies `config.rounding`.
pub fn compute_pi_digits_checked(precision: i64, config: &PiConfig) -> Result<String, PiError> {
    let precision = Precision::try_from(precision)?;
    precision.ensure_at_most(config.max_precision)?;
    Ok(compute_pi_digits_with(precision.get(), config.rounding))
}

/// Pi at `config.default_precision` with `config.rounding`
pub fn compute_pi_default(config: &PiConfig) -> String {
    compute_pi_digits_with(config.default_precision, config.rounding)
}

/// Add one unit in the last place when the guard digit is 5 or more.
///
/// Pi is irrational, so a guard digit of exactly 5 is always followed by a
/// non-zero tail and half-up on one guard digit is round-to-nearest.
fn round_half_up(digits: &mut Vec<u8>, guard: u8) {
    if guard < 5 {
        return;
    }
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

/// `[3, 1, 4]` -> `"3.14"`, `[3]` -> `"3"`
fn format_digits(digits: &[u8]) -> String {
    let mut out = String::with_capacity(digits.len() + 1);
    for (i, digit) in digits.iter().enumerate() {
        out.push(char::from(b'0' + digit));
        if i == 0 && digits.len() > 1 {
            out.push('.');
        }
    }
    out
}
