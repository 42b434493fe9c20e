//! Pi computation configuration
//!
//! Values come from three places, in order of preference:
//!
//! 1. [`PiConfigBuilder`] for programmatic use
//! 2. [`PiConfig::from_toml_str`] for config files
//! 3. [`PiConfig::from_env`] for the process environment
//!
//! # Example
//!
//! ```
//! use pi_digits::{PiConfigBuilder, RoundingMode};
//!
//! let config = PiConfigBuilder::new()
//!     .default_precision(10)
//!     .rounding(RoundingMode::Truncate)
//!     .monte_carlo_seed(42)
//!     .build()
//!     .expect("valid config");
//! assert_eq!(config.default_precision, 10);
//! ```

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::PiError;

/// Largest number of decimal places an `f64` result can carry meaningfully
pub const F64_MAX_PLACES: u32 = f64::DIGITS;

/// How the last emitted fractional digit is chosen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    /// Draw one guard digit and round half-up on it
    #[default]
    HalfUp,
    /// Emit the raw spigot digits
    Truncate,
}

impl std::str::FromStr for RoundingMode {
    type Err = PiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "half-up" | "halfup" | "round" => Ok(RoundingMode::HalfUp),
            "truncate" | "trunc" => Ok(RoundingMode::Truncate),
            other => Err(PiError::InvalidConfig(format!(
                "unknown rounding mode '{}'",
                other
            ))),
        }
    }
}

/// Configuration shared by the pi computations
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PiConfig {
    /// Fractional digits used when the caller does not ask for a precision
    pub default_precision: u32,
    /// Upper bound accepted by the checked spigot entry point
    pub max_precision: u32,
    /// Rounding applied to spigot output
    pub rounding: RoundingMode,
    /// Points drawn by a Monte Carlo estimate
    pub monte_carlo_samples: u64,
    /// Fixed seed for reproducible Monte Carlo runs
    pub monte_carlo_seed: Option<u64>,
    /// Points per parallel batch
    pub monte_carlo_batch_size: u64,
    /// Decimal places kept in the rounded Monte Carlo estimate
    pub monte_carlo_round_places: u32,
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit JSON formatted logs
    pub json_logs: bool,
}

impl Default for PiConfig {
    fn default() -> Self {
        Self {
            default_precision: 6,
            max_precision: 100_000,
            rounding: RoundingMode::HalfUp,
            monte_carlo_samples: 1_000_000,
            monte_carlo_seed: None,
            monte_carlo_batch_size: 10_000,
            monte_carlo_round_places: 5,
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl PiConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), PiError> {
        if self.default_precision > self.max_precision {
            return Err(PiError::InvalidConfig(format!(
                "default_precision {} exceeds max_precision {}",
                self.default_precision, self.max_precision
            )));
        }

        if self.monte_carlo_batch_size == 0 {
            return Err(PiError::InvalidConfig(
                "monte_carlo_batch_size cannot be 0".to_string(),
            ));
        }

        if self.monte_carlo_round_places > F64_MAX_PLACES {
            return Err(PiError::InvalidConfig(format!(
                "monte_carlo_round_places must be at most {}",
                F64_MAX_PLACES
            )));
        }

        Ok(())
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, PiError> {
        let config: PiConfig =
            toml::from_str(content).map_err(|e| PiError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PI_DEFAULT_PRECISION`: Default fractional digits (default: 6)
    /// - `PI_MAX_PRECISION`: Checked-entry upper bound (default: 100000)
    /// - `PI_ROUNDING`: `half-up` or `truncate` (default: half-up)
    /// - `PI_MC_SAMPLES`: Monte Carlo sample count (default: 1000000)
    /// - `PI_MC_SEED`: Monte Carlo seed (default: unset, entropy-seeded)
    /// - `PI_MC_BATCH_SIZE`: Points per parallel batch (default: 10000)
    /// - `PI_MC_ROUND_PLACES`: Places kept in the estimate (default: 5)
    /// - `PI_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `PI_JSON_LOGS`: Enable JSON logs (default: false)
    ///
    /// Unparseable values fall back to their defaults; the result is then
    /// validated.
    pub fn from_env() -> Result<Self, PiError> {
        let defaults = Self::default();

        let config = Self {
            default_precision: parse_var("PI_DEFAULT_PRECISION")
                .unwrap_or(defaults.default_precision),

            max_precision: parse_var("PI_MAX_PRECISION").unwrap_or(defaults.max_precision),

            rounding: parse_var("PI_ROUNDING").unwrap_or(defaults.rounding),

            monte_carlo_samples: parse_var("PI_MC_SAMPLES")
                .unwrap_or(defaults.monte_carlo_samples),

            monte_carlo_seed: parse_var("PI_MC_SEED"),

            monte_carlo_batch_size: parse_var("PI_MC_BATCH_SIZE")
                .unwrap_or(defaults.monte_carlo_batch_size),

            monte_carlo_round_places: parse_var("PI_MC_ROUND_PLACES")
                .unwrap_or(defaults.monte_carlo_round_places),

            log_level: env::var("PI_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            json_logs: env::var("PI_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.json_logs),
        };

        config.validate()?;
        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Builder for PiConfig with validation
#[derive(Default)]
pub struct PiConfigBuilder {
    default_precision: Option<u32>,
    max_precision: Option<u32>,
    rounding: Option<RoundingMode>,
    monte_carlo_samples: Option<u64>,
    monte_carlo_seed: Option<u64>,
    monte_carlo_batch_size: Option<u64>,
    monte_carlo_round_places: Option<u32>,
    log_level: Option<String>,
    json_logs: Option<bool>,
}

impl PiConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_precision(mut self, digits: u32) -> Self {
        self.default_precision = Some(digits);
        self
    }

    pub fn max_precision(mut self, digits: u32) -> Self {
        self.max_precision = Some(digits);
        self
    }

    pub fn rounding(mut self, mode: RoundingMode) -> Self {
        self.rounding = Some(mode);
        self
    }

    pub fn monte_carlo_samples(mut self, samples: u64) -> Self {
        self.monte_carlo_samples = Some(samples);
        self
    }

    pub fn monte_carlo_seed(mut self, seed: u64) -> Self {
        self.monte_carlo_seed = Some(seed);
        self
    }

    pub fn monte_carlo_batch_size(mut self, size: u64) -> Self {
        self.monte_carlo_batch_size = Some(size);
        self
    }

    pub fn monte_carlo_round_places(mut self, places: u32) -> Self {
        self.monte_carlo_round_places = Some(places);
        self
    }

    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = Some(enabled);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<PiConfig, PiError> {
        let defaults = PiConfig::default();

        let config = PiConfig {
            default_precision: self.default_precision.unwrap_or(defaults.default_precision),
            max_precision: self.max_precision.unwrap_or(defaults.max_precision),
            rounding: self.rounding.unwrap_or(defaults.rounding),
            monte_carlo_samples: self
                .monte_carlo_samples
                .unwrap_or(defaults.monte_carlo_samples),
            monte_carlo_seed: self.monte_carlo_seed.or(defaults.monte_carlo_seed),
            monte_carlo_batch_size: self
                .monte_carlo_batch_size
                .unwrap_or(defaults.monte_carlo_batch_size),
            monte_carlo_round_places: self
                .monte_carlo_round_places
                .unwrap_or(defaults.monte_carlo_round_places),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            json_logs: self.json_logs.unwrap_or(defaults.json_logs),
        };

        config.validate()?;
        Ok(config)
    }
}
