//! Canonical fixed-digit string representations and derived helpers.

use crate::compare::is_zero_at;
use crate::precision::digits_factor;
use crate::round::{round_to_factor, Rounding};

/// Format `value` with exactly `digits` fractional digits.
///
/// Values that are zero at that precision are forced to exactly `0.0`
/// before formatting, so a near-zero negative like `-0.0001` prints as
/// `"0.00"` rather than `"-0.00"`. Fixed-point formatting keeps every
/// integral digit of large magnitudes, where significant-digit
/// conversions would silently truncate.
pub fn float_repr(value: f64, digits: u32) -> String {
    let value = if is_zero_at(value, digits_factor(digits)) {
        0.0
    } else {
        value
    };
    format!("{value:.precision$}", precision = digits as usize)
}

/// Split `value`, rounded half-up to `digits`, into its unit and
/// fractional parts as strings.
///
/// The fractional part always has exactly `digits` characters,
/// zero-padded on the right; it is empty when `digits == 0`.
///
/// ```
/// use float_utils::float_split_str;
///
/// assert_eq!(float_split_str(1.432, 2), ("1".to_string(), "43".to_string()));
/// assert_eq!(float_split_str(1.49, 1), ("1".to_string(), "5".to_string()));
/// assert_eq!(float_split_str(1.1, 3), ("1".to_string(), "100".to_string()));
/// assert_eq!(float_split_str(1.12, 0), ("1".to_string(), "".to_string()));
/// ```
pub fn float_split_str(value: f64, digits: u32) -> (String, String) {
    let rounded = round_to_factor(value, digits_factor(digits), Rounding::HalfUp);
    let repr = float_repr(rounded, digits);
    match repr.split_once('.') {
        Some((units, frac)) => (units.to_string(), frac.to_string()),
        None => (repr, String::new()),
    }
}

/// [`float_split_str`] with both parts parsed to integers. The
/// fractional part is `0` when `digits == 0`. Non-finite values split as
/// `(0, 0)`.
pub fn float_split(value: f64, digits: u32) -> (i64, i64) {
    let (units, frac) = float_split_str(value, digits);
    let units = units.parse().unwrap_or(0);
    if digits == 0 {
        return (units, 0);
    }
    (units, frac.parse().unwrap_or(0))
}

/// Round for JSON serialization.
///
/// The returned float's shortest string representation matches the
/// fixed-digit decimal string, so generic serializers emit the rounded
/// value instead of a long binary expansion. The result is meant for
/// serialization only, not further arithmetic.
///
/// Supported rounding methods are [`Rounding::HalfUp`], [`Rounding::Up`]
/// and [`Rounding::Down`]; other rules are accepted but their
/// serialized form is not guaranteed.
pub fn json_float_round(value: f64, digits: u32, rounding: Rounding) -> f64 {
    let rounded = round_to_factor(value, digits_factor(digits), rounding);
    // Rust's float formatting and parsing round-trip shortest forms, so
    // the re-parsed value serializes as the rounded decimal string.
    float_repr(rounded, digits).parse().unwrap_or(rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_repr_pads_to_exact_digit_count() {
        assert_eq!(float_repr(1.5, 3), "1.500");
        assert_eq!(float_repr(0.0, 2), "0.00");
        assert_eq!(float_repr(42.0, 0), "42");
    }

    #[test]
    fn test_repr_forces_near_zero_to_exact_zero() {
        assert_eq!(float_repr(0.0001, 2), "0.00");
        assert_eq!(float_repr(-0.0001, 2), "0.00");
        assert_eq!(float_repr(-0.0, 2), "0.00");
    }

    #[test]
    fn test_repr_keeps_every_integral_digit() {
        assert_eq!(float_repr(1234567890123.4, 1), "1234567890123.4");
    }

    #[test]
    fn test_split_rounds_before_splitting() {
        assert_eq!(float_split(1.432, 2), (1, 43));
        assert_eq!(float_split(1.49, 1), (1, 5));
        assert_eq!(float_split(1.1, 3), (1, 100));
        assert_eq!(float_split(1.12, 0), (1, 0));
    }

    #[test]
    fn test_split_negative_values() {
        assert_eq!(
            float_split_str(-1.432, 2),
            ("-1".to_string(), "43".to_string())
        );
        assert_eq!(float_split(-1.432, 2), (-1, 43));
    }

    #[test]
    fn test_json_round_produces_short_representation() {
        let rounded = json_float_round(0.1 + 0.2, 2, Rounding::HalfUp);
        assert_eq!(format!("{rounded}"), "0.3");
        let rounded = json_float_round(2.675, 2, Rounding::HalfUp);
        assert_eq!(format!("{rounded}"), "2.68");
    }
}
