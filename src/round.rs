//! The core rounding primitive and its floating-point-error compensation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::FloatResult;
use crate::precision::Precision;

/// Tie-breaking rule applied when a value lands exactly halfway between
/// two rounding candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rounding {
    /// Round to nearest, ties away from zero. The conventional default
    /// for monetary amounts.
    #[default]
    HalfUp,
    /// Round to nearest, ties toward zero.
    HalfDown,
    /// Round to nearest, ties to the even neighbor (banker's rounding).
    HalfEven,
    /// Always round away from zero.
    Up,
    /// Always round toward zero (truncate).
    Down,
}

/// Exact reciprocals of the rounding factors seen in practice: the
/// negative powers of ten and their doubles and halves, down to 1e-10.
/// Covers every decimal digit precision from 1 to 10 plus the usual cash
/// rounding steps (0.05, 0.02, 0.5, ...).
const INVERSE_FACTORS: [(f64, f64); 30] = [
    (1e-1, 1e1),
    (2e-1, 5e0),
    (5e-1, 2e0),
    (1e-2, 1e2),
    (2e-2, 5e1),
    (5e-2, 2e1),
    (1e-3, 1e3),
    (2e-3, 5e2),
    (5e-3, 2e2),
    (1e-4, 1e4),
    (2e-4, 5e3),
    (5e-4, 2e3),
    (1e-5, 1e5),
    (2e-5, 5e4),
    (5e-5, 2e4),
    (1e-6, 1e6),
    (2e-6, 5e5),
    (5e-6, 2e5),
    (1e-7, 1e7),
    (2e-7, 5e6),
    (5e-7, 2e6),
    (1e-8, 1e8),
    (2e-8, 5e7),
    (5e-8, 2e7),
    (1e-9, 1e9),
    (2e-9, 5e8),
    (5e-9, 2e8),
    (1e-10, 1e10),
    (2e-10, 5e9),
    (5e-10, 2e9),
];

/// Accurate reciprocal of a positive rounding factor.
///
/// Common decimal factors hit the exact table above. Anything else is
/// decomposed through its 15-significant-digit scientific representation
/// so the power-of-ten part inverts exactly instead of compounding
/// binary representation error the way a naive `1.0 / x` would.
pub(crate) fn invert(value: f64) -> f64 {
    for &(factor, inverse) in INVERSE_FACTORS.iter() {
        if factor == value {
            return inverse;
        }
    }
    invert_decimal(value).unwrap_or(1.0 / value)
}

/// Mirrors manual long division: `1/(c * 10^e) = (c * 10^-e) / c^2`.
fn invert_decimal(value: f64) -> Option<f64> {
    let formatted = format!("{value:.14e}");
    let (coeff_str, exp_str) = formatted.split_once('e')?;
    let exponent: i32 = exp_str.parse().ok()?;
    let coeff: f64 = coeff_str.parse().ok()?;
    let shifted: f64 = format!("{coeff_str}e{}", -exponent).parse().ok()?;
    Some(shifted / (coeff * coeff))
}

/// Round `value` to the given precision with the selected tie-breaking
/// rule.
///
/// The result is a multiple of the resolved rounding factor, up to
/// binary representation limits. Values that binary floating point
/// stores just short of an exact tie (the classic `2.675` at two digits)
/// round the way their decimal writing says they should.
///
/// NaN and infinities propagate unchanged.
pub fn float_round(value: f64, precision: Precision, rounding: Rounding) -> FloatResult<f64> {
    Ok(round_to_factor(value, precision.factor()?, rounding))
}

/// Core rounder over an already resolved factor. Infallible; the
/// digit-count entry points rely on that.
pub(crate) fn round_to_factor(value: f64, factor: f64, rounding: Rounding) -> f64 {
    if factor == 0.0 || value == 0.0 {
        return 0.0;
    }
    if !value.is_finite() {
        return value;
    }

    // Dividing by a sub-1 factor amplifies representation error more
    // than multiplying by its reciprocal, so fractional factors are
    // inverted up front and the normalize/denormalize roles swapped.
    let inverted = factor < 1.0;
    let scale = if inverted { invert(factor) } else { factor };
    let normalized = if inverted { value * scale } else { value / scale };

    let sign = normalized.signum();
    // The epsilon scales with the operand: large magnitudes carry
    // proportionally large representation error near tie points.
    let epsilon = (normalized.abs().log2() - 50.0).exp2();

    let rounded = match rounding {
        Rounding::HalfUp => (normalized + sign * epsilon).round(),
        Rounding::HalfDown => (normalized - sign * epsilon).round(),
        Rounding::HalfEven => round_half_even(normalized, epsilon),
        Rounding::Up => (normalized + sign * (1.0 - epsilon)).trunc(),
        Rounding::Down => (normalized + sign * epsilon).trunc(),
    };

    if inverted {
        rounded / scale
    } else {
        rounded * scale
    }
}

/// Nearest-integer rounding with ties to the even neighbor. A remainder
/// within `epsilon` of exactly 0.5 counts as a tie.
fn round_half_even(normalized: f64, epsilon: f64) -> f64 {
    let floor = normalized.floor();
    let remainder = normalized - floor;
    if (remainder - 0.5).abs() < epsilon {
        if floor % 2.0 == 0.0 {
            floor
        } else {
            floor + 1.0
        }
    } else {
        normalized.round()
    }
}
