//! # A fraction of two 64-bit integers
//!
//! Both fields are public, a value can be built from any pair and is only normalized when asked
//! for. Overflow in the arithmetic is not checked.
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::error::FractionError;
use crate::traits::{Fraction, gcd};

mod rounding;
mod wrapping;

/// A fraction `numerator / denominator` over `i64`.
///
/// Equality and hashing act on the sign rectified pair, see `Fraction::equals`. The ordering is
/// partial: two values that neither differ in sign nor are equal, such as `2/4` and `1/2`, are
/// incomparable.
///
/// Comparing with `<`, `>` or `partial_cmp` subtracts, and so simplifies. For two values with a
/// zero denominator, such as `1/0` and `1/0`, the difference is `0/0` and the comparison panics
/// with `FractionError::ZeroOverZero`, even though `==` holds.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fraction64 {
    /// Carries the sign after rectification.
    pub numerator: i64,
    /// May be negative or zero; nothing is checked on construction.
    pub denominator: i64,
}

impl Fraction64 {
    /// Create a new instance from the two fields, as given.
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        Self { numerator, denominator }
    }

    /// Create a new instance with denominator one.
    pub const fn from_integer(numerator: i64) -> Self {
        Self::new(numerator, 1)
    }
}

impl Fraction for Fraction64 {
    type Integer = i64;

    fn new(numerator: i64, denominator: i64) -> Self {
        Self::new(numerator, denominator)
    }

    fn numerator(&self) -> i64 {
        self.numerator
    }

    fn denominator(&self) -> i64 {
        self.denominator
    }

    fn rectify_sign(&self) -> Self {
        if self.denominator < 0 {
            Self::new(-self.numerator, -self.denominator)
        } else {
            *self
        }
    }

    fn inv(&self) -> Self {
        Self::new(self.denominator, self.numerator)
    }

    fn try_simplify(&self) -> Result<Self, FractionError> {
        let gcd = gcd(self.numerator, self.denominator);
        if gcd == 0 {
            tracing::debug!(value = %self, "no common divisor to simplify by");
            return Err(FractionError::ZeroOverZero);
        }

        Ok(Self::new(self.numerator / gcd, self.denominator / gcd).rectify_sign())
    }

    fn is_negative(&self) -> bool {
        match self.numerator.cmp(&0) {
            Ordering::Greater => self.denominator <= 0,
            Ordering::Less => self.denominator >= 0,
            Ordering::Equal => false,
        }
    }

    fn is_positive(&self) -> bool {
        match self.numerator.cmp(&0) {
            Ordering::Greater => self.denominator > 0,
            Ordering::Less => self.denominator < 0,
            Ordering::Equal => false,
        }
    }

    fn try_div(&self, other: &Self) -> Result<Self, FractionError> {
        if other.numerator == 0 {
            tracing::debug!(dividend = %self, divisor = %other, "division by a zero numerator");
            return Err(FractionError::DivisionByZero);
        }

        Self::new(
            self.numerator * other.denominator,
            self.denominator * other.numerator,
        ).try_simplify()
    }

    fn try_evaluate(&self) -> Result<i64, FractionError> {
        if self.denominator == 0 {
            tracing::debug!(value = %self, "evaluating a zero denominator");
            return Err(FractionError::ZeroDenominator);
        }

        Ok(rounding::round_half_to_even(self.numerator, self.denominator))
    }
}

impl PartialEq for Fraction64 {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Fraction64 {}

// Has to agree with `Eq`, which ignores the denominator of zero values and the placement of the
// sign.
impl Hash for Fraction64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.numerator == 0 {
            0_i64.hash(state);
        } else {
            let rectified = self.rectify_sign();
            rectified.numerator.hash(state);
            rectified.denominator.hash(state);
        }
    }
}

impl PartialOrd for Fraction64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.greater_than(other) {
            Some(Ordering::Greater)
        } else if self.less_than(other) {
            Some(Ordering::Less)
        } else if self.equals(other) {
            Some(Ordering::Equal)
        } else {
            None
        }
    }
}

impl From<i64> for Fraction64 {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<(i64, i64)> for Fraction64 {
    fn from((numerator, denominator): (i64, i64)) -> Self {
        Self::new(numerator, denominator)
    }
}

impl From<Fraction64> for (i64, i64) {
    fn from(value: Fraction64) -> Self {
        (value.numerator, value.denominator)
    }
}
