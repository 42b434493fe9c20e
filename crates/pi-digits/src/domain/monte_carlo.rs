//! Monte Carlo estimation of pi
//!
//! A square of side 2 holds the unit circle. Uniform points in the square
//! land inside the circle with probability pi/4, so
//! `pi ~= 4 * inside / samples`.
//!
//! Points are drawn in batches. Batch `i` uses a `ChaCha8Rng` seeded from the
//! run seed with stream `i`, so a seeded run gives the same count on every
//! backend and under any thread schedule.

use std::sync::Arc;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::bbp::round_places;
use crate::backends::{auto_detect, Backend, SamplingEngine};
use crate::config::{PiConfig, F64_MAX_PLACES};
use crate::error::PiError;

/// Outcome of a Monte Carlo run
#[derive(Clone, Debug, PartialEq)]
pub struct MonteCarloEstimate {
    /// Points drawn
    pub samples: u64,
    /// Points inside the unit circle
    pub inside: u64,
    /// `4 * inside / samples`
    pub raw: f64,
    /// `raw` rounded to the requested places
    pub estimate: f64,
    /// Backend that drew the points
    pub backend: Backend,
}

impl MonteCarloEstimate {
    /// Absolute distance from `std::f64::consts::PI`
    pub fn abs_error(&self) -> f64 {
        (self.raw - std::f64::consts::PI).abs()
    }
}

/// Work unit for one batch of points
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Batch {
    /// RNG stream selector
    pub stream: u64,
    /// Points in this batch
    pub points: u64,
}

/// Split `samples` into batches of at most `batch_size` points
pub fn plan_batches(samples: u64, batch_size: u64) -> Vec<Batch> {
    let batch_size = batch_size.max(1);
    let full = samples / batch_size;
    let rest = samples % batch_size;

    let mut batches: Vec<Batch> = (0..full)
        .map(|stream| Batch {
            stream,
            points: batch_size,
        })
        .collect();
    if rest > 0 {
        batches.push(Batch {
            stream: full,
            points: rest,
        });
    }
    batches
}

/// Count points of one batch that land inside the unit circle
pub fn count_batch(seed: u64, batch: Batch) -> u64 {
    let range = Uniform::new(-1.0f64, 1.0);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(batch.stream);

    let mut inside = 0;
    for _ in 0..batch.points {
        let x = range.sample(&mut rng);
        let y = range.sample(&mut rng);
        if x * x + y * y <= 1.0 {
            inside += 1;
        }
    }
    inside
}

/// Seed for a run: the fixed one if given, otherwise fresh entropy
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::thread_rng().gen())
}

/// Estimate pi from `samples` points on `engine`
pub fn estimate_pi(
    engine: &dyn SamplingEngine,
    samples: u64,
    seed: Option<u64>,
    round_to: u32,
) -> Result<MonteCarloEstimate, PiError> {
    if samples == 0 {
        return Err(PiError::NoSamples);
    }
    if round_to > F64_MAX_PLACES {
        return Err(PiError::PrecisionTooHigh {
            requested: u64::from(round_to),
            max: u64::from(F64_MAX_PLACES),
        });
    }

    let seed = resolve_seed(seed);
    let inside = engine.count_inside(samples, seed)?;
    let raw = 4.0 * inside as f64 / samples as f64;
    let estimate = round_places(raw, round_to);

    debug!(
        backend = %engine.backend(),
        samples,
        inside,
        estimate,
        "monte carlo estimate"
    );

    Ok(MonteCarloEstimate {
        samples,
        inside,
        raw,
        estimate,
        backend: engine.backend(),
    })
}

/// Estimate pi with the sample count, seed, batching, and rounding from `config`
pub fn estimate_pi_with_config(config: &PiConfig) -> Result<MonteCarloEstimate, PiError> {
    config.validate()?;
    let engine: Arc<dyn SamplingEngine> = auto_detect(config.monte_carlo_batch_size)?;
    estimate_pi(
        engine.as_ref(),
        config.monte_carlo_samples,
        config.monte_carlo_seed,
        config.monte_carlo_round_places,
    )
}
