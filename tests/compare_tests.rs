//! Ordering properties of the precision-aware comparison.

use std::cmp::Ordering;

use float_utils::{float_compare, float_is_zero, FloatError, Precision};

const SAMPLE: [f64; 10] = [
    -1234.5678, -2.675, -0.015, -0.0001, 0.0, 0.0001, 0.006, 1.23, 2.675, 99.99,
];

#[test]
fn test_compare_is_reflexive() {
    for a in SAMPLE {
        assert_eq!(
            float_compare(a, a, Precision::Digits(2)).unwrap(),
            Ordering::Equal
        );
    }
}

#[test]
fn test_compare_is_antisymmetric() {
    for a in SAMPLE {
        for b in SAMPLE {
            let forward = float_compare(a, b, Precision::Digits(2)).unwrap();
            let backward = float_compare(b, a, Precision::Digits(2)).unwrap();
            assert_eq!(forward, backward.reverse(), "compare({a}, {b})");
        }
    }
}

#[test]
fn test_compare_follows_raw_order_for_distinct_rounded_values() {
    let digits2 = Precision::Digits(2);
    assert_eq!(float_compare(1.0, 2.0, digits2).unwrap(), Ordering::Less);
    assert_eq!(float_compare(-1.0, 1.0, digits2).unwrap(), Ordering::Less);
    assert_eq!(
        float_compare(100.005, 100.0, digits2).unwrap(),
        Ordering::Greater
    );
}

/// The documented divergence: operands are rounded independently, so
/// "difference is zero at this precision" does not imply "compares
/// equal". This is intentional and must hold.
#[test]
fn test_is_zero_of_difference_diverges_from_compare() {
    let digits2 = Precision::Digits(2);
    assert!(float_is_zero(0.006 - 0.002, digits2).unwrap());
    assert_ne!(
        float_compare(0.006, 0.002, digits2).unwrap(),
        Ordering::Equal
    );
}

#[test]
fn test_values_rounding_together_compare_equal() {
    let digits2 = Precision::Digits(2);
    assert_eq!(
        float_compare(2.675, 2.68, digits2).unwrap(),
        Ordering::Equal
    );
    assert_eq!(
        float_compare(0.0001, -0.0001, digits2).unwrap(),
        Ordering::Equal
    );
}

#[test]
fn test_is_zero_boundary_is_the_rounding_factor() {
    let digits2 = Precision::Digits(2);
    // 0.005 rounds half-up to 0.01, exactly the factor: not zero
    assert!(!float_is_zero(0.005, digits2).unwrap());
    // 0.00499 rounds to 0.00: zero
    assert!(float_is_zero(0.00499, digits2).unwrap());
}

#[test]
fn test_invalid_step_propagates() {
    assert!(matches!(
        float_is_zero(1.0, Precision::Step(0.0)),
        Err(FloatError::InvalidPrecision(_))
    ));
    assert!(matches!(
        float_compare(1.0, 2.0, Precision::Step(-0.5)),
        Err(FloatError::InvalidPrecision(_))
    ));
}
