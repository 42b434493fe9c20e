//! Bailey–Borwein–Plouffe series
//!
//! pi = sum over k of 16^-k * (4/(8k+1) - 2/(8k+4) - 1/(8k+5) - 1/(8k+6))
//!
//! Each term is about 16 times smaller than the last, so a handful of terms
//! reaches the limits of `f64`.

use tracing::debug;

use crate::config::F64_MAX_PLACES;
use crate::error::PiError;

/// Result of a BBP summation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BbpSum {
    /// Sum rounded to the requested places
    pub value: f64,
    /// Unrounded partial sum
    pub raw: f64,
    /// Terms added, the one that crossed the tolerance included
    pub terms: u32,
}

/// k-th term of the series
pub fn bbp_term(k: u32) -> f64 {
    let k8 = 8.0 * f64::from(k);
    let scale = 16f64.powi(-(k as i32));
    scale * (4.0 / (k8 + 1.0) - 2.0 / (k8 + 4.0) - 1.0 / (k8 + 5.0) - 1.0 / (k8 + 6.0))
}

/// Sum terms until one falls below `10^-precision`, then round.
pub fn bbp_sum(precision: u32) -> Result<BbpSum, PiError> {
    if precision > F64_MAX_PLACES {
        return Err(PiError::PrecisionTooHigh {
            requested: u64::from(precision),
            max: u64::from(F64_MAX_PLACES),
        });
    }

    let tolerance = 10f64.powi(-(precision as i32));
    let mut raw = 0.0;
    let mut k = 0u32;

    loop {
        let term = bbp_term(k);
        raw += term;
        k += 1;
        if term.abs() < tolerance {
            break;
        }
    }

    let value = round_places(raw, precision);
    debug!(precision, terms = k, value, "bbp series summed");

    Ok(BbpSum {
        value,
        raw,
        terms: k,
    })
}

/// Pi by the BBP series, rounded to `precision` decimal places
pub fn bbp_pi(precision: u32) -> Result<f64, PiError> {
    bbp_sum(precision).map(|sum| sum.value)
}

/// Round half away from zero to `places` decimal places
pub fn round_places(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}
