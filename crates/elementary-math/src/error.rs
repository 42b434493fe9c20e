//! Error types for elementary math exercises

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MathError {
    #[error("Factorial is undefined for negative numbers, got {0}")]
    NegativeInput(i64),

    #[error("Factorial input too large: {0}")]
    TooLarge(i64),

    #[error("Radius must be a non-negative finite number, got {0}")]
    InvalidRadius(f64),

    #[error("Cannot divide by zero")]
    DivisionByZero,
}
