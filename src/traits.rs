//! # Traits
//!
//! The capabilities of a fraction, independent of the integer type backing the numerator and
//! denominator. Only the representation specific operations need to be implemented; comparison,
//! equality and the panicking variants of the fallible operations are defined here in terms of
//! those.
use std::fmt::{Debug, Display};
use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{CheckedRem, One, Zero};

use crate::error::FractionError;

/// A pair of integers representing `numerator / denominator`.
///
/// Values are not kept normalized. The sign may be carried by either field and common factors
/// are only removed by `simplify`. The arithmetic operators simplify their results, so a value
/// that came out of an operator is always in lowest terms with a positive denominator.
pub trait Fraction:
    Sized +
    PartialEq + // `equals`
    Eq +
    PartialOrd + // `greater_than` and `less_than`
    Zero +
    One +
    Neg<Output=Self> +
    // Operators
    Add<Self, Output=Self> +
    for<'r> Add<&'r Self, Output=Self> +
    Sub<Self, Output=Self> +
    for<'r> Sub<&'r Self, Output=Self> +
    Mul<Self, Output=Self> +
    for<'r> Mul<&'r Self, Output=Self> +
    Div<Self, Output=Self> +
    for<'r> Div<&'r Self, Output=Self> +
    Sum +
    Product +
    // Practicalities
    Clone +
    Display +
    Debug +
{
    /// Type of both the numerator and the denominator.
    type Integer: Clone + Zero + One + PartialEq;

    /// Create a fraction from its two fields, as given.
    fn new(numerator: Self::Integer, denominator: Self::Integer) -> Self;

    /// Create a fraction with denominator one.
    fn from_integer(numerator: Self::Integer) -> Self {
        Self::new(numerator, Self::Integer::one())
    }

    /// The numerator, as stored.
    fn numerator(&self) -> Self::Integer;

    /// The denominator, as stored.
    fn denominator(&self) -> Self::Integer;

    /// Move a negative sign from the denominator to the numerator.
    ///
    /// Only the sign is changed; common factors remain.
    fn rectify_sign(&self) -> Self;

    /// Swap numerator and denominator.
    ///
    /// A zero numerator becomes a zero denominator, which is not checked here.
    fn inv(&self) -> Self;

    /// Reduce to lowest terms with a positive denominator.
    ///
    /// # Errors
    ///
    /// `FractionError::ZeroOverZero` when both fields are zero.
    fn try_simplify(&self) -> Result<Self, FractionError>;

    /// Reduce to lowest terms with a positive denominator.
    ///
    /// # Panics
    ///
    /// When both fields are zero, see `try_simplify`.
    fn simplify(&self) -> Self {
        self.try_simplify().unwrap_or_else(|error| panic!("{}", error))
    }

    /// Whether the value is strictly smaller than zero.
    fn is_negative(&self) -> bool;

    /// Whether the value is strictly larger than zero.
    fn is_positive(&self) -> bool;

    /// Equality on sign rectified values.
    ///
    /// This is not cross multiplication: `2/4` and `1/2` are only equal after simplification.
    /// All values with a zero numerator are equal.
    fn equals(&self, other: &Self) -> bool {
        if self.numerator().is_zero() {
            return other.numerator().is_zero();
        }

        let (left, right) = (self.rectify_sign(), other.rectify_sign());
        left.numerator() == right.numerator() && left.denominator() == right.denominator()
    }

    /// Whether `self - other` is positive.
    fn greater_than(&self, other: &Self) -> bool {
        (self.clone() - other).is_positive()
    }

    /// Whether `self - other` is negative.
    fn less_than(&self, other: &Self) -> bool {
        (self.clone() - other).is_negative()
    }

    /// Divide by `other`, which is multiplication with its inverse.
    ///
    /// # Errors
    ///
    /// `FractionError::DivisionByZero` when `other` has a zero numerator.
    fn try_div(&self, other: &Self) -> Result<Self, FractionError>;

    /// Round to an integer, rounding exact halves to the even neighbour.
    ///
    /// # Errors
    ///
    /// `FractionError::ZeroDenominator` when the denominator is zero.
    fn try_evaluate(&self) -> Result<Self::Integer, FractionError>;

    /// Round to an integer, rounding exact halves to the even neighbour.
    ///
    /// # Panics
    ///
    /// When the denominator is zero, see `try_evaluate`.
    fn evaluate(&self) -> Self::Integer {
        self.try_evaluate().unwrap_or_else(|error| panic!("{}", error))
    }
}

/// Greatest common divisor by repeated remainders, starting from `(numerator, denominator)`.
///
/// The remainder truncates, so the result may be negative. Zero only if both arguments are zero.
/// A remainder that overflows, as `i64::MIN % -1`, is zero.
pub fn gcd<T: Copy + Zero + CheckedRem>(numerator: T, denominator: T) -> T {
    let (mut gcd, mut remainder) = (numerator, denominator);
    while !remainder.is_zero() {
        let next = gcd.checked_rem(&remainder).unwrap_or_else(T::zero);
        (gcd, remainder) = (remainder, next);
    }

    gcd
}
