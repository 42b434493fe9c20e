//! # Elementary Math
//!
//! Small exercises that sit next to the pi computations:
//!
//! - `factorial`: unbounded `n!`
//! - `circle_area`: `pi * r^2` with radius validation
//! - `calculator`: add, sub, mul, and a division that rejects zero

pub mod calculator;
pub mod error;
pub mod factorial;
pub mod geometry;

pub use calculator::{add, div, mul, sub};
pub use error::MathError;
pub use factorial::{factorial, factorial_checked};
pub use geometry::circle_area;
