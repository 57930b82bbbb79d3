//! Exact rational numbers for epsilon-free simulation
//!
//! Every quantity in a probabilistic serial run is rational: supplies start
//! at 1, eating rates are integer agent counts, and each phase length is a
//! remaining supply divided by a count. [`Fraction`] keeps those values
//! exact so the exact simulator can test "is this house gone" with `== 0`.
//!
//! # Critical Invariants
//!
//! 1. **Reduced**: `gcd(numer, denom) == 1`
//! 2. **Positive denominator**: `denom > 0`; the sign lives in the numerator
//! 3. **No silent overflow**: arithmetic is checked and returns `None`

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Reduced fraction `numer / denom` over `i128`
///
/// # Example
/// ```
/// use probabilistic_serial_core_rs::core::Fraction;
///
/// let third = Fraction::new(1, 3).unwrap();
/// let sum = third.checked_add(third).unwrap().checked_add(third).unwrap();
/// assert_eq!(sum, Fraction::ONE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Fraction {
    numer: i128,
    denom: i128,
}

fn gcd(mut a: i128, mut b: i128) -> i128 {
    a = a.abs();
    b = b.abs();
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

impl Fraction {
    pub const ZERO: Fraction = Fraction { numer: 0, denom: 1 };
    pub const ONE: Fraction = Fraction { numer: 1, denom: 1 };

    /// Build a reduced fraction; `None` if `denom == 0` or on overflow
    pub fn new(numer: i128, denom: i128) -> Option<Self> {
        if denom == 0 {
            return None;
        }
        let g = gcd(numer, denom);
        let (mut numer, mut denom) = (numer / g, denom / g);
        if denom < 0 {
            numer = numer.checked_neg()?;
            denom = denom.checked_neg()?;
        }
        Some(Self { numer, denom })
    }

    /// Whole number `n / 1`
    pub fn from_integer(n: i128) -> Self {
        Self { numer: n, denom: 1 }
    }

    pub fn numer(&self) -> i128 {
        self.numer
    }

    pub fn denom(&self) -> i128 {
        self.denom
    }

    pub fn is_zero(&self) -> bool {
        self.numer == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        let g = gcd(self.denom, other.denom);
        let lhs = self.numer.checked_mul(other.denom / g)?;
        let rhs = other.numer.checked_mul(self.denom / g)?;
        let denom = (self.denom / g).checked_mul(other.denom)?;
        Self::new(lhs.checked_add(rhs)?, denom)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.checked_add(Self {
            numer: other.numer.checked_neg()?,
            denom: other.denom,
        })
    }

    pub fn checked_mul(self, other: Self) -> Option<Self> {
        // Cross-reduce first to keep intermediates small
        let g1 = gcd(self.numer, other.denom).max(1);
        let g2 = gcd(other.numer, self.denom).max(1);
        let numer = (self.numer / g1).checked_mul(other.numer / g2)?;
        let denom = (self.denom / g2).checked_mul(other.denom / g1)?;
        Self::new(numer, denom)
    }

    /// Divide by a positive integer count
    pub fn checked_div_int(self, divisor: i128) -> Option<Self> {
        if divisor == 0 {
            return None;
        }
        let g = gcd(self.numer, divisor).max(1);
        let denom = self.denom.checked_mul(divisor / g)?;
        Self::new(self.numer / g, denom)
    }

    /// Nearest `f64`
    pub fn to_f64(self) -> f64 {
        self.numer as f64 / self.denom as f64
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplication keeps the order.
        // Fall back to f64 if the products overflow.
        match (
            self.numer.checked_mul(other.denom),
            other.numer.checked_mul(self.denom),
        ) {
            (Some(lhs), Some(rhs)) => lhs.cmp(&rhs),
            _ => self
                .to_f64()
                .partial_cmp(&other.to_f64())
                .unwrap_or(Ordering::Equal),
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom == 1 {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}
