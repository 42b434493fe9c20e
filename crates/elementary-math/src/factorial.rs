//! Factorial over unbounded integers

use num_bigint::BigUint;
use num_traits::One;

use crate::error::MathError;

/// `n!`, with `0! = 1! = 1`
pub fn factorial(n: u32) -> BigUint {
    (2..=n).fold(BigUint::one(), |acc, i| acc * i)
}

/// Factorial for signed, externally supplied input
pub fn factorial_checked(n: i64) -> Result<BigUint, MathError> {
    if n < 0 {
        return Err(MathError::NegativeInput(n));
    }
    let n = u32::try_from(n).map_err(|_| MathError::TooLarge(n))?;
    Ok(factorial(n))
}
