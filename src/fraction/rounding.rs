//! # Rounding to an integer
//!
//! Banker's rounding, decided on the first decimal digit of the remainder.
//!
//! Only positive remainders below a half are rounded away from zero; a negative value that is not
//! exactly halfway between two integers is truncated towards zero. Exact halves of either sign
//! are rounded to the even neighbour.

/// Round `numerator / denominator` to an integer.
///
/// The denominator should be nonzero, that is checked by the caller.
pub(super) fn round_half_to_even(numerator: i64, denominator: i64) -> i64 {
    let truncated = numerator / denominator;
    if numerator % denominator == 0 {
        return truncated;
    }

    // Widened, the value itself fits but ten times the numerator may not.
    let (wide_numerator, wide_denominator) = (numerator as i128 * 10, denominator as i128);
    let first_digit = wide_numerator / wide_denominator - truncated as i128 * 10;
    let is_last_digit = wide_numerator % wide_denominator == 0;
    if is_last_digit && (first_digit == 5 || first_digit == -5) {
        // The truncating remainder of an odd value is 1 or -1, moving it to the even neighbour
        // away from zero.
        return truncated + truncated % 2;
    }

    if first_digit >= 5 {
        truncated + 1
    } else {
        truncated
    }
}
