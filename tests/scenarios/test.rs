use relp_fraction::{F64, Fraction, Fraction64, FractionError};

use crate::scenarios::fields;

#[test]
fn three_sevenths_and_seven_thirds() {
    let x = F64!(3, 7);
    let y = F64!(7, 3);

    assert_eq!(fields(x + y), (58, 21));
    assert_eq!(fields(x - y), (-40, 21));
    assert_eq!(fields(x * y), (1, 1));
    assert_eq!(fields(x / y), (9, 49));

    assert!(x < y);
    assert!(y > x);
    assert_ne!(x, y);
}

#[test]
fn simplify() {
    assert_eq!(fields(F64!(69, 3).simplify()), (23, 1));
    assert_eq!(fields(F64!(-10_000_000, 10_000_000).simplify()), (-1, 1));
    assert_eq!(fields(F64!(-100, -1).simplify()), (100, 1));
}

#[test]
fn unnormalized_values_are_kept() {
    let x = F64!(-100, -1);
    assert_eq!(fields(x), (-100, -1));
    assert_eq!(fields(x.rectify_sign()), (100, 1));
    assert_eq!(x, F64!(100));
    assert!(x.is_positive());
}

#[test]
fn evaluate() {
    let evaluated = [(1, 4), (3, 4), (1, 2), (3, 2), (5, 2), (113, 12)]
        .into_iter()
        .map(|(numerator, denominator)| F64!(numerator, denominator).evaluate())
        .collect::<Vec<_>>();
    assert_eq!(evaluated, vec![0, 1, 0, 2, 2, 9]);
}

#[test]
fn errors() {
    assert_eq!(F64!(0, 0).try_simplify(), Err(FractionError::ZeroOverZero));
    assert_eq!(F64!(1, 2).try_div(&F64!(0, 3)), Err(FractionError::DivisionByZero));
    assert_eq!(F64!(1, 0).try_evaluate(), Err(FractionError::ZeroDenominator));

    let inverted_zero = F64!(0, 5).inv();
    assert_eq!(fields(inverted_zero), (5, 0));
    assert_eq!(inverted_zero.try_evaluate(), Err(FractionError::ZeroDenominator));
}

#[test]
#[should_panic(expected = "fraction divide by zero error")]
fn divide_by_zero() {
    let _result = F64!(1, 2) / F64!(0);
}

/// Written only against the trait, so any implementor could be substituted.
#[test]
fn generic_mean() {
    fn mean<F: Fraction<Integer=i64>>(values: &[F]) -> F {
        let count = F::from_integer(values.len() as i64);
        values.iter().cloned().sum::<F>() / count
    }

    let values = [F64!(1, 2), F64!(1, 3), F64!(1, 4)];
    assert_eq!(fields(mean::<Fraction64>(&values)), (13, 36));
}
