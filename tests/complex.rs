#![cfg(feature = "complex")]

use std::str::FromStr;

use exactnum::{
    BigDecimal, BigInt, Complex, ComplexDecimalMatrix, ComplexExt, ComplexIntMatrix,
    DecimalComplexExt, MathContext, Matrix, RoundingMode, Scalar, SqrtContext, Vector,
};

type Gi = Complex<BigInt>;
type Cd = Complex<BigDecimal>;

fn gi(re: i64, im: i64) -> Gi {
    Complex::new(BigInt::from(re), BigInt::from(im))
}

fn cd(re: &str, im: &str) -> Cd {
    Complex::new(
        BigDecimal::from_str(re).unwrap(),
        BigDecimal::from_str(im).unwrap(),
    )
}

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

fn assert_decimal_near(a: &BigDecimal, b: &BigDecimal, tol: &str, msg: &str) {
    let diff = (a - b).abs();
    assert!(diff <= dec(tol), "{msg}: {a} vs {b}");
}

// ── Scalars ──────────────────────────────────────────────────────────

#[test]
fn abs_of_three_plus_four_i() {
    let z = gi(3, 4);
    assert_eq!(z.abs_pow2(), BigInt::from(25));
    assert_eq!(z.abs(), dec("5"));

    let w = cd("3", "4");
    assert_eq!(w.abs_pow2(), dec("25"));
    assert_decimal_near(&w.abs(), &dec("5"), "1e-20", "decimal abs");
}

#[test]
fn abs_of_large_gaussian_integers() {
    let e = 10i64.pow(12);
    assert_eq!(gi(3 * e, 4 * e).abs(), dec("5e12"));
    let v = Vector::from_vec(vec![gi(3 * e, 4 * e), gi(-e, 0)]).unwrap();
    assert_eq!(v.taxicab_norm(), dec("6e12"));
    assert_eq!(v.max_norm(), dec("5e12"));
}

#[test]
fn abs_of_non_square_modulus() {
    // |1 + i| = sqrt(2)
    let z = gi(1, 1);
    let ctx = SqrtContext::default();
    assert_decimal_near(
        &z.abs_with(&ctx),
        &dec("1.41421356237309504880168872"),
        "1e-20",
        "sqrt 2",
    );
}

#[test]
fn divide_decimal() {
    // (1 + 2i) / (3 + 4i) = (11 + 2i) / 25
    let q = cd("1", "2").divide(&cd("3", "4")).unwrap();
    assert_eq!(q, cd("0.44", "0.08"));
    assert!(cd("1", "2").divide(&cd("0", "0")).is_err());
}

#[test]
fn context_twins_round() {
    let ctx = MathContext::new(4, RoundingMode::HalfEven).unwrap();
    let z = cd("1", "1");
    let inv = z.invert_with(&ctx).unwrap();
    assert_eq!(inv, cd("0.5", "-0.5"));

    let third = cd("1", "0").divide_with(&cd("3", "0"), &ctx).unwrap();
    assert_eq!(third, cd("0.3333", "0"));
    assert_eq!(third.re.as_bigint_and_exponent(), (BigInt::from(3333), 4));
    assert_eq!(cd("1.0001", "0").add_with(&cd("0.00004", "0"), &ctx), cd("1.000", "0"));

    let p = cd("1.1", "0").pow_with(3, &ctx).unwrap();
    assert_eq!(p, cd("1.331", "0"));
}

// ── Matrices ─────────────────────────────────────────────────────────

#[test]
fn gaussian_matrix_determinant() {
    let m: ComplexIntMatrix =
        Matrix::from_rows(2, 2, &[gi(1, 1), gi(2, 0), gi(0, 1), gi(1, -1)]).unwrap();
    // (1+i)(1-i) - 2i = 2 - 2i
    assert_eq!(m.determinant().unwrap(), gi(2, -2));
    assert!(!m.is_invertible().unwrap());
}

#[test]
fn gaussian_unit_determinant_is_invertible() {
    let m: ComplexIntMatrix =
        Matrix::from_rows(2, 2, &[gi(0, 1), gi(5, 3), gi(0, 0), gi(1, 0)]).unwrap();
    assert!(m.is_upper_triangular().unwrap());
    assert_eq!(m.determinant().unwrap(), gi(0, 1));
    assert!(m.is_invertible().unwrap());
}

#[test]
fn decimal_complex_invertible_iff_nonzero() {
    let m: ComplexDecimalMatrix =
        Matrix::from_rows(2, 2, &[cd("2", "0"), cd("0", "0"), cd("0", "0"), cd("0", "3")]).unwrap();
    assert!(m.is_invertible().unwrap());
    assert_eq!(m.determinant().unwrap(), cd("0", "6"));

    let singular: ComplexDecimalMatrix =
        Matrix::from_rows(2, 2, &[cd("1", "1"), cd("2", "2"), cd("1", "0"), cd("2", "0")]).unwrap();
    assert!(!singular.is_invertible().unwrap());
}

#[test]
fn gaussian_frobenius_norm() {
    let m: ComplexIntMatrix =
        Matrix::from_rows(2, 2, &[gi(3, 4), gi(0, 0), gi(0, 0), gi(0, 0)]).unwrap();
    assert_eq!(m.frobenius_norm_pow2(), BigInt::from(25));
    assert_eq!(m.frobenius_norm(&SqrtContext::default()), dec("5"));
    assert_eq!(m.max_norm(), dec("5"));
    assert_eq!(m.max_abs_row_sum_norm(), dec("5"));
}

#[test]
fn sarrus_on_gaussian_integers() {
    let m = Matrix::from_rows(
        3,
        3,
        &[
            gi(1, 1), gi(0, 2), gi(3, 0),
            gi(2, -1), gi(1, 0), gi(0, 1),
            gi(0, 0), gi(4, 1), gi(1, -2),
        ],
    )
    .unwrap();
    assert_eq!(m.rule_of_sarrus().unwrap(), m.leibniz_formula().unwrap());
}

#[test]
fn decimal_complex_matrix_context_product() {
    let ctx = MathContext::new(3, RoundingMode::HalfUp).unwrap();
    let a = Matrix::from_rows(1, 2, &[cd("1.11", "0"), cd("0", "1")]).unwrap();
    let b = Matrix::from_rows(2, 1, &[cd("1.11", "0"), cd("0", "1")]).unwrap();
    // 1.11² = 1.2321 -> 1.23, i·i = -1
    let p = a.multiply_with(&b, &ctx).unwrap();
    assert_eq!(p.element(1, 1).unwrap(), &cd("0.23", "0"));
}

// ── Vectors ──────────────────────────────────────────────────────────

#[test]
fn gaussian_vector_norms() {
    let v = Vector::from_vec(vec![gi(3, 4), gi(0, -2)]).unwrap();
    assert_eq!(v.taxicab_norm(), dec("7"));
    assert_eq!(v.max_norm(), dec("5"));
    assert_eq!(v.euclidean_norm_pow2(), BigInt::from(29));
    assert_decimal_near(
        &v.euclidean_norm(&SqrtContext::default()),
        &dec("5.38516480713450403125"),
        "1e-19",
        "sqrt 29",
    );
}

#[test]
fn gaussian_vector_distance() {
    let u = Vector::from_vec(vec![gi(1, 1), gi(2, 0)]).unwrap();
    let v = Vector::from_vec(vec![gi(4, 5), gi(2, 0)]).unwrap();
    assert_eq!(u.max_distance(&v).unwrap(), dec("5"));
    assert_eq!(u.taxicab_distance(&v).unwrap(), u.subtract(&v).unwrap().taxicab_norm());
}

#[test]
fn units_match_domain() {
    assert!(gi(0, -1).is_unit());
    assert!(!gi(1, 1).is_unit());
    assert!(cd("0.001", "0").is_unit());
    assert!(!cd("0", "0").is_unit());
}
