//! Circle area

use std::f64::consts::PI;

use crate::error::MathError;

/// `pi * r^2`. Negative, NaN, or infinite radii are rejected.
pub fn circle_area(radius: f64) -> Result<f64, MathError> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(MathError::InvalidRadius(radius));
    }
    Ok(PI * radius * radius)
}
