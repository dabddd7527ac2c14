/// Shorthand for creating a `Fraction64`.
///
/// With a single argument, the denominator is one. The fields are used as given, nothing is
/// simplified.
///
/// ```
/// use relp_fraction::F64;
///
/// let whole = F64!(-4);
/// assert_eq!((whole.numerator, whole.denominator), (-4, 1));
///
/// let unnormalized = F64!(6, -4);
/// assert_eq!((unnormalized.numerator, unnormalized.denominator), (6, -4));
/// ```
///
/// There is only one denominator:
///
/// ```compile_fail
/// let _ = relp_fraction::F64!(1, 2, 3);
/// ```
#[macro_export]
macro_rules! F64 {
    ($numerator:expr) => {
        $crate::Fraction64::from_integer($numerator)
    };
    ($numerator:expr, $denominator:expr) => {
        $crate::Fraction64::new($numerator, $denominator)
    };
}
