//! Precision specifications and their resolution into a rounding factor.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{FloatError, FloatResult};

/// How precise a rounding operation should be: either a count of
/// fractional decimal digits, or an explicit rounding step (the smallest
/// increment representable at the desired precision).
///
/// `Digits(2)` and `Step(0.01)` describe the same precision; the step
/// form additionally covers non-decimal increments such as `Step(0.05)`
/// for cash rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Precision {
    /// Number of fractional decimal digits.
    Digits(u32),
    /// Rounding step. Must be strictly positive and finite.
    Step(f64),
}

impl Precision {
    /// Resolve the specification into the rounding factor used by every
    /// rounding primitive.
    ///
    /// `Digits(d)` resolves to `10^(-d)` and cannot fail. `Step(s)`
    /// resolves to `s` itself after validating that it is a strictly
    /// positive finite number.
    pub fn factor(self) -> FloatResult<f64> {
        match self {
            Precision::Digits(digits) => Ok(digits_factor(digits)),
            Precision::Step(step) if step > 0.0 && step.is_finite() => Ok(step),
            Precision::Step(step) => Err(FloatError::InvalidPrecision(format!(
                "rounding step must be a strictly positive finite number, got {step}"
            ))),
        }
    }
}

impl Default for Precision {
    /// Two fractional digits, the conventional monetary precision.
    fn default() -> Self {
        Precision::Digits(2)
    }
}

/// Rounding factor for a digit count: `10^(-digits)`.
pub(crate) fn digits_factor(digits: u32) -> f64 {
    10f64.powi(-(digits.min(1_000) as i32))
}
