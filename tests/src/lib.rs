//! # Pi-Lab Test Suite
//!
//! Unified test crate for the workspace.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/
//! │   └── pi_benchmarks.rs       # Spigot, BBP, Monte Carlo timings
//! └── src/integration/
//!     ├── cross_method.rs        # Methods agree with each other
//!     └── spigot_properties.rs   # Property tests for the spigot
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p pi-tests
//! cargo test -p pi-tests integration::spigot_properties
//! cargo bench -p pi-tests
//! ```

pub mod integration;
