//! # Pi Digits
//!
//! Three ways to compute pi:
//!
//! | Method | Arithmetic | Output | Limit |
//! |--------|------------|--------|-------|
//! | Digit spigot | `BigInt`, exact | `String`, `"3.14159"` | memory and time |
//! | BBP series | `f64` | `f64`, rounded | 15 places |
//! | Monte Carlo | `f64` sampling | `MonteCarloEstimate` | ~1/sqrt(samples) |
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): the computations, no I/O
//! - **Backends** (`backends/`): Monte Carlo sampling engines (serial, Rayon)
//! - **Config** (`config`): `PiConfig`, builder, TOML and environment loading
//! - **Telemetry** (`telemetry`): `tracing-subscriber` setup
//!
//! ## Invariants
//!
//! - Spigot digits are final once emitted
//! - `compute_pi_digits(p)` has exactly `p` fractional digits, and no decimal
//!   point when `p == 0`
//!
//! ## Usage Example
//!
//! ```
//! use pi_digits::{compute_pi_digits, SpigotDigits};
//!
//! assert_eq!(compute_pi_digits(5), "3.14159");
//! assert_eq!(compute_pi_digits(3), "3.142");
//! assert_eq!(compute_pi_digits(0), "3");
//!
//! let first: Vec<u8> = SpigotDigits::new().take(4).collect();
//! assert_eq!(first, vec![3, 1, 4, 1]);
//! ```

pub mod backends;
pub mod config;
pub mod domain;
pub mod error;
pub mod telemetry;

// Re-exports for convenience
pub use backends::{auto_detect, create_engine, Backend, DeviceInfo, SamplingEngine};
pub use config::{PiConfig, PiConfigBuilder, RoundingMode};
pub use domain::{
    bbp_pi, bbp_sum, compute_pi_default, compute_pi_digits, compute_pi_digits_checked,
    compute_pi_digits_with, estimate_pi, estimate_pi_with_config, BbpSum, MonteCarloEstimate,
    Precision, SpigotDigits, SpigotStats,
};
pub use error::PiError;
pub use telemetry::init_tracing;
