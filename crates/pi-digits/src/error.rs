//! Error types for pi computations

use thiserror::Error;

/// Errors that can occur while computing pi
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PiError {
    #[error("Precision must be non-negative, got {0}")]
    NegativePrecision(i64),

    #[error("Precision too high: {requested} > {max}")]
    PrecisionTooHigh { requested: u64, max: u64 },

    #[error("Monte Carlo estimate needs at least one sample")]
    NoSamples,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("Tracing initialization failed: {0}")]
    Telemetry(String),

    #[error("Sampling backend unavailable: {0}")]
    Backend(String),
}
