//! Validated precision at the signed-input boundary

use crate::error::PiError;

/// Number of fractional digits, known to be non-negative
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precision(u32);

impl Precision {
    pub fn get(self) -> u32 {
        self.0
    }

    /// Reject precisions above `max`
    pub fn ensure_at_most(self, max: u32) -> Result<Self, PiError> {
        if self.0 > max {
            return Err(PiError::PrecisionTooHigh {
                requested: u64::from(self.0),
                max: u64::from(max),
            });
        }
        Ok(self)
    }
}

impl TryFrom<i64> for Precision {
    type Error = PiError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(PiError::NegativePrecision(value));
        }
        u32::try_from(value)
            .map(Precision)
            .map_err(|_| PiError::PrecisionTooHigh {
                requested: value as u64,
                max: u64::from(u32::MAX),
            })
    }
}
