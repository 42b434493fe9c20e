//! Domain Layer - pure computation
//!
//! This layer contains:
//! - The digit-spigot generator (exact, unbounded integers)
//! - The BBP series (floating point)
//! - Monte Carlo sampling primitives
//! - Precision validation
//!
//! RULES:
//! - No I/O operations
//! - No shared mutable state between calls

pub mod bbp;
pub mod monte_carlo;
pub mod precision;
pub mod spigot;

pub use bbp::{bbp_pi, bbp_sum, bbp_term, round_places, BbpSum};
pub use monte_carlo::{estimate_pi, estimate_pi_with_config, MonteCarloEstimate};
pub use precision::Precision;
pub use spigot::{
    compute_pi_default, compute_pi_digits, compute_pi_digits_checked, compute_pi_digits_with,
    SpigotDigits, SpigotStats,
};
