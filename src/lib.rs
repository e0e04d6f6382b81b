//! Correctly-rounded decimal-precision arithmetic over native `f64`.
//!
//! Monetary and quantity calculations need decimal semantics ("round to
//! the cent, half away from zero") but are usually carried in binary
//! floating point, where most decimal fractions are not exactly
//! representable. This library rounds, compares and formats `f64`
//! values at a caller-supplied decimal precision while compensating for
//! binary representation error, so `2.675` rounds to `2.68` at two
//! digits instead of the `2.67` a naive scale-round-descale produces.
//!
//! # Features
//!
//! - Five tie-breaking rules (half-up, half-down, half-even, up, down)
//! - Precision as a digit count or an arbitrary rounding step (0.05 cash
//!   rounding, pack sizes, ...)
//! - Precision-aware zero test and three-way comparison
//! - Canonical fixed-digit strings, unit/fraction splitting, and a
//!   JSON-safe rounding variant
//!
//! # Example
//!
//! ```
//! use float_utils::{float_compare, float_is_zero, float_round, Precision, Rounding};
//! use std::cmp::Ordering;
//!
//! let cents = Precision::Digits(2);
//!
//! assert_eq!(float_round(2.675, cents, Rounding::HalfUp)?, 2.68);
//! assert_eq!(float_round(2.675, cents, Rounding::Down)?, 2.67);
//! assert!(float_is_zero(0.0001, cents)?);
//! assert_eq!(float_compare(1.23, 1.229, cents)?, Ordering::Equal);
//! # Ok::<(), float_utils::FloatError>(())
//! ```
//!
//! Comparison rounds each operand independently, so "the difference is
//! zero at this precision" and "the values compare equal" are distinct
//! questions; see [`float_compare`].

pub mod compare;
pub mod error;
pub mod precision;
pub mod repr;
pub mod round;

// Re-export the public API at the crate root
pub use compare::{float_compare, float_is_zero};
pub use error::{FloatError, FloatResult};
pub use precision::Precision;
pub use repr::{float_repr, float_split, float_split_str, json_float_round};
pub use round::{float_round, Rounding};
