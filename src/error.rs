//! # Errors in fraction arithmetic
//!
//! Only a few operations on a fraction can fail. Each failure corresponds to a division by zero
//! that can't be given a meaningful value. The panicking operations (`simplify`, `/` and
//! `evaluate`) report these same errors as their panic message.
use std::error::Error;
use std::fmt;

/// A domain error of an operation on a fraction.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum FractionError {
    /// Both numerator and denominator are zero, so there is no greatest common divisor to divide
    /// by.
    ZeroOverZero,
    /// The divisor has a zero numerator.
    ///
    /// Division is multiplication with the inverse, and the inverse of such a value has a zero
    /// denominator.
    DivisionByZero,
    /// The denominator is zero, so the value can't be evaluated to an integer.
    ZeroDenominator,
}

impl fmt::Display for FractionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            FractionError::ZeroOverZero => "can't simplify 0/0: greatest common divisor is zero",
            FractionError::DivisionByZero => "fraction divide by zero error",
            FractionError::ZeroDenominator => "can't evaluate a fraction with a zero denominator",
        })
    }
}

impl Error for FractionError {}
