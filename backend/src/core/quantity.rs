//! Numeric seam between the float and exact simulators
//!
//! The eating loop only needs a handful of operations on supplies and time:
//! add, subtract, divide by an eater count, compare, and decide whether a
//! supply is used up. [`Quantity`] names exactly those, so one loop serves
//! both `f64` (tolerance-snapped) and [`Fraction`] (exact) arithmetic.

use super::fraction::Fraction;
use std::fmt::Debug;

/// Scalar type the eating loop runs on
///
/// Checked operations return `None` on overflow; `f64` never overflows here
/// and always returns `Some`.
pub trait Quantity: Copy + PartialOrd + Debug {
    fn zero() -> Self;

    fn one() -> Self;

    fn checked_add(self, other: Self) -> Option<Self>;

    fn checked_sub(self, other: Self) -> Option<Self>;

    /// Divide by a positive agent count
    fn checked_div_count(self, count: usize) -> Option<Self>;

    /// Normalize a supply after a phase: values at or below `tolerance`
    /// become exactly zero. Exact types ignore the tolerance.
    fn snap(self, tolerance: f64) -> Self;

    /// True while the supply still has something left to eat
    fn is_positive(self) -> bool;

    fn to_f64(self) -> f64;
}

impl Quantity for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn checked_add(self, other: Self) -> Option<Self> {
        Some(self + other)
    }

    fn checked_sub(self, other: Self) -> Option<Self> {
        Some(self - other)
    }

    fn checked_div_count(self, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        Some(self / count as f64)
    }

    fn snap(self, tolerance: f64) -> Self {
        if self <= tolerance {
            0.0
        } else {
            self
        }
    }

    fn is_positive(self) -> bool {
        self > 0.0
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl Quantity for Fraction {
    fn zero() -> Self {
        Fraction::ZERO
    }

    fn one() -> Self {
        Fraction::ONE
    }

    fn checked_add(self, other: Self) -> Option<Self> {
        Fraction::checked_add(self, other)
    }

    fn checked_sub(self, other: Self) -> Option<Self> {
        Fraction::checked_sub(self, other)
    }

    fn checked_div_count(self, count: usize) -> Option<Self> {
        let count = i128::try_from(count).ok()?;
        self.checked_div_int(count)
    }

    fn snap(self, _tolerance: f64) -> Self {
        self
    }

    fn is_positive(self) -> bool {
        self.numer() > 0
    }

    fn to_f64(self) -> f64 {
        Fraction::to_f64(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_snap() {
        assert_eq!(Quantity::snap(5e-10_f64, 1e-9), 0.0);
        assert_eq!(Quantity::snap(-5e-10_f64, 1e-9), 0.0);
        assert_eq!(Quantity::snap(0.25_f64, 1e-9), 0.25);
    }

    #[test]
    fn test_fraction_snap_is_identity() {
        let tiny = Fraction::new(1, 1_000_000_000_000).unwrap();
        assert_eq!(Quantity::snap(tiny, 1e-9), tiny);
        assert!(Quantity::is_positive(tiny));
    }

    #[test]
    fn test_div_by_zero_count() {
        assert_eq!(1.0_f64.checked_div_count(0), None);
        assert_eq!(Fraction::ONE.checked_div_count(0), None);
    }
}
