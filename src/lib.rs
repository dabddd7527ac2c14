//! # Exact fractions
//!
//! A fraction is an ordered pair of 64-bit signed integers. Unlike most rational number types,
//! values are not kept in lowest terms automatically: a caller may hold `(-100, -1)` and it stays
//! `(-100, -1)` until it is explicitly simplified. The arithmetic operations do simplify their
//! results.
//!
//! The capabilities of a fraction are described by the [`Fraction`] trait; [`Fraction64`] is the
//! implementation over `i64`.
#![warn(missing_docs)]

pub use error::FractionError;
pub use fraction::Fraction64;
pub use traits::Fraction;

pub mod error;
pub mod fraction;
pub mod traits;
mod macros;
