//! # Operators
//!
//! The field operations, the identities and the formatting of `Fraction64`. All operators
//! simplify their result, except for negation. The operators on references forward to those on
//! values, the type is `Copy`.
use std::fmt;

use crate::fraction::Fraction64;

/// Implement a binary operator for all combinations of values and references.
macro_rules! forward_ref_binop {
    ($imp:ident, $method:ident) => {
        impl std::ops::$imp<&Fraction64> for Fraction64 {
            type Output = Fraction64;

            fn $method(self, rhs: &Fraction64) -> Self::Output {
                std::ops::$imp::$method(self, *rhs)
            }
        }

        impl std::ops::$imp<Fraction64> for &Fraction64 {
            type Output = Fraction64;

            fn $method(self, rhs: Fraction64) -> Self::Output {
                std::ops::$imp::$method(*self, rhs)
            }
        }

        impl std::ops::$imp for &Fraction64 {
            type Output = Fraction64;

            fn $method(self, rhs: Self) -> Self::Output {
                std::ops::$imp::$method(*self, *rhs)
            }
        }
    }
}

mod field {
    mod add {
        use std::iter::Sum;
        use std::ops::Add;

        use num_traits::Zero;

        use crate::fraction::Fraction64;
        use crate::traits::Fraction;

        /// Denominators are compared as stored; only literally equal ones skip the cross
        /// multiplication.
        impl Add for Fraction64 {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                let sum = if self.denominator == rhs.denominator {
                    Self::new(self.numerator + rhs.numerator, self.denominator)
                } else {
                    Self::new(
                        self.numerator * rhs.denominator + rhs.numerator * self.denominator,
                        self.denominator * rhs.denominator,
                    )
                };

                sum.simplify()
            }
        }

        forward_ref_binop!(Add, add);

        impl Sum for Fraction64 {
            fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
                iter.fold(Self::zero(), Add::add)
            }
        }

        impl<'a> Sum<&'a Fraction64> for Fraction64 {
            fn sum<I: Iterator<Item=&'a Self>>(iter: I) -> Self {
                iter.fold(Self::zero(), Add::add)
            }
        }
    }

    mod sub {
        use std::ops::Sub;

        use crate::fraction::Fraction64;
        use crate::traits::Fraction;

        /// Same fast path as addition.
        impl Sub for Fraction64 {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                let difference = if self.denominator == rhs.denominator {
                    Self::new(self.numerator - rhs.numerator, self.denominator)
                } else {
                    Self::new(
                        self.numerator * rhs.denominator - rhs.numerator * self.denominator,
                        self.denominator * rhs.denominator,
                    )
                };

                difference.simplify()
            }
        }

        forward_ref_binop!(Sub, sub);
    }

    mod mul {
        use std::iter::Product;
        use std::ops::Mul;

        use num_traits::One;

        use crate::fraction::Fraction64;
        use crate::traits::Fraction;

        impl Mul for Fraction64 {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self::Output {
                Self::new(
                    self.numerator * rhs.numerator,
                    self.denominator * rhs.denominator,
                ).simplify()
            }
        }

        forward_ref_binop!(Mul, mul);

        impl Product for Fraction64 {
            fn product<I: Iterator<Item=Self>>(iter: I) -> Self {
                iter.fold(Self::one(), Mul::mul)
            }
        }

        impl<'a> Product<&'a Fraction64> for Fraction64 {
            fn product<I: Iterator<Item=&'a Self>>(iter: I) -> Self {
                iter.fold(Self::one(), Mul::mul)
            }
        }
    }

    mod div {
        use std::ops::Div;

        use crate::fraction::Fraction64;
        use crate::traits::Fraction;

        /// # Panics
        ///
        /// When the divisor has a zero numerator, see `Fraction::try_div`.
        impl Div for Fraction64 {
            type Output = Self;

            fn div(self, rhs: Self) -> Self::Output {
                self.try_div(&rhs).unwrap_or_else(|error| panic!("{}", error))
            }
        }

        forward_ref_binop!(Div, div);
    }

    mod neg {
        use std::ops::Neg;

        use crate::fraction::Fraction64;

        /// Negates the numerator only, nothing is simplified.
        impl Neg for Fraction64 {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self::new(-self.numerator, self.denominator)
            }
        }

        impl Neg for &Fraction64 {
            type Output = Fraction64;

            fn neg(self) -> Self::Output {
                Neg::neg(*self)
            }
        }
    }

    mod inv {
        use num_traits::Inv;

        use crate::fraction::Fraction64;
        use crate::traits::Fraction;

        impl Inv for Fraction64 {
            type Output = Self;

            fn inv(self) -> Self::Output {
                <Self as Fraction>::inv(&self)
            }
        }
    }

    mod identities {
        use num_traits::{One, Zero};

        use crate::fraction::Fraction64;

        impl Zero for Fraction64 {
            fn zero() -> Self {
                Self::new(0, 1)
            }

            fn is_zero(&self) -> bool {
                self.numerator == 0
            }
        }

        impl One for Fraction64 {
            fn one() -> Self {
                Self::new(1, 1)
            }
        }
    }
}

/// The fields as stored, `numerator/denominator`.
impl fmt::Display for Fraction64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
