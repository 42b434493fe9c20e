//! Four-function calculator

use std::ops::{Add, Mul, Sub};

use tracing::warn;

use crate::error::MathError;

pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

pub fn sub<T: Sub<Output = T>>(a: T, b: T) -> T {
    a - b
}

pub fn mul<T: Mul<Output = T>>(a: T, b: T) -> T {
    a * b
}

/// `a / b`, rejecting a zero divisor
pub fn div(a: f64, b: f64) -> Result<f64, MathError> {
    if b == 0.0 {
        warn!(dividend = a, "division by zero rejected");
        return Err(MathError::DivisionByZero);
    }
    Ok(a / b)
}
