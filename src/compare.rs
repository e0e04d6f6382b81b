//! Zero test and three-way comparison at a given precision.

use std::cmp::Ordering;

use crate::error::FloatResult;
use crate::precision::Precision;
use crate::round::{round_to_factor, Rounding};

/// True when `value` is indistinguishable from zero at the given
/// precision: either exactly zero, or rounding to a magnitude smaller
/// than the rounding factor.
pub fn float_is_zero(value: f64, precision: Precision) -> FloatResult<bool> {
    Ok(is_zero_at(value, precision.factor()?))
}

pub(crate) fn is_zero_at(value: f64, factor: f64) -> bool {
    value == 0.0 || round_to_factor(value, factor, Rounding::HalfUp).abs() < factor
}

/// Order two values by their rounded representations.
///
/// Each operand is rounded independently before comparing, so
/// `float_compare(a, b, p) == Equal` is NOT equivalent to
/// `float_is_zero(a - b, p)`: at two digits, `0.006` and `0.002` compare
/// as different (they round to `0.01` and `0.00`) even though their
/// difference `0.004` rounds to zero. Both behaviors are intentional.
///
/// NaN operands produce an arbitrary non-equal ordering; callers that
/// may hold NaN should test for it first.
pub fn float_compare(value1: f64, value2: f64, precision: Precision) -> FloatResult<Ordering> {
    let factor = precision.factor()?;
    // Equal raw values always round equally.
    if value1 == value2 {
        return Ok(Ordering::Equal);
    }
    let delta = round_to_factor(value1, factor, Rounding::HalfUp)
        - round_to_factor(value2, factor, Rounding::HalfUp);
    if is_zero_at(delta, factor) {
        return Ok(Ordering::Equal);
    }
    Ok(if delta < 0.0 {
        Ordering::Less
    } else {
        Ordering::Greater
    })
}
