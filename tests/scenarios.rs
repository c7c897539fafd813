use std::str::FromStr;

use exactnum::{
    sqrt, BigDecimal, BigInt, DecimalMatrix, Error, IntMatrix, IntVector, MathContext, Matrix,
    RoundingMode, SqrtContext, Vector,
};

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

fn int_matrix(nrows: usize, ncols: usize, values: &[i64]) -> IntMatrix {
    let values: Vec<BigInt> = values.iter().map(|&v| BigInt::from(v)).collect();
    Matrix::from_rows(nrows, ncols, &values).unwrap()
}

fn int_vector(values: &[i64]) -> IntVector {
    Vector::from_vec(values.iter().map(|&v| BigInt::from(v)).collect()).unwrap()
}

// ── Integer 2x2 ──────────────────────────────────────────────────────

#[test]
fn integer_two_by_two() {
    let m = int_matrix(2, 2, &[1, 2, 3, 4]);
    assert_eq!(m.determinant().unwrap(), BigInt::from(-2));
    assert_eq!(m.trace().unwrap(), BigInt::from(5));
    assert_eq!(m.transpose(), int_matrix(2, 2, &[1, 3, 2, 4]));
    assert!(!m.is_invertible().unwrap());
}

#[test]
fn widened_to_decimal_becomes_invertible() {
    let m = int_matrix(2, 2, &[1, 2, 3, 4]);
    let d: DecimalMatrix = m.map(|x| BigDecimal::from(x.clone()));
    assert_eq!(d.determinant().unwrap(), dec("-2"));
    assert!(d.is_invertible().unwrap());
}

// ── Identity 3x3 ─────────────────────────────────────────────────────

#[test]
fn identity_three_by_three() {
    let m = int_matrix(3, 3, &[1, 0, 0, 0, 1, 0, 0, 0, 1]);
    assert!(m.is_upper_triangular().unwrap());
    assert!(m.is_lower_triangular().unwrap());
    assert!(m.is_diagonal().unwrap());
    assert!(m.is_identity().unwrap());
    assert_eq!(m.determinant().unwrap(), BigInt::from(1));
    assert_eq!(m, Matrix::identity(3).unwrap());
}

// ── Vector [3, 4] ────────────────────────────────────────────────────

#[test]
fn vector_three_four() {
    let v = int_vector(&[3, 4]);
    let ctx = SqrtContext::default();
    assert_eq!(v.taxicab_norm(), BigInt::from(7));
    assert_eq!(v.euclidean_norm_pow2(), BigInt::from(25));
    assert_eq!(v.dot_product(&v).unwrap(), BigInt::from(25));
    let e = v.euclidean_norm(&ctx);
    assert!((e - dec("5")).abs() <= *ctx.abort_criterion());
    assert_eq!(v.max_norm(), BigInt::from(4));
}

#[test]
fn decimal_vector_three_four() {
    let v = Vector::from_vec(vec![dec("3"), dec("4")]).unwrap();
    let ctx = SqrtContext::default();
    let e = v.euclidean_norm(&ctx);
    assert!((e - dec("5")).abs() <= *ctx.abort_criterion());
}

#[test]
fn integer_norms_with_large_entries() {
    let ctx = SqrtContext::default();
    let big = BigInt::from(10u64.pow(12));

    let v = Vector::from_vec(vec![big.clone(), big.clone()]).unwrap();
    let e = v.euclidean_norm(&ctx);
    assert!((e - dec("1414213562373.0950488016887242")).abs() <= dec("1e-12"));

    let w = Vector::from_vec(vec![&big * 3u32, &big * 4u32]).unwrap();
    assert_eq!(w.euclidean_norm(&ctx), dec("5e12"));

    let m = Matrix::from_rows(1, 2, &[&big * 3u32, &big * 4u32]).unwrap();
    assert_eq!(m.frobenius_norm(&ctx), dec("5e12"));
}

// ── Operations across the public surface ─────────────────────────────

#[test]
fn matrix_vector_product_and_dyadic() {
    let m = int_matrix(2, 2, &[2, 0, 1, 3]);
    let v = int_vector(&[1, 2]);
    let mv = m.multiply_vector(&v).unwrap();
    assert_eq!(mv, int_vector(&[2, 7]));

    let outer = v.dyadic_product(&int_vector(&[5, 6]));
    assert_eq!(outer, int_matrix(2, 2, &[5, 6, 10, 12]));
}

#[test]
fn orthogonality() {
    let u = int_vector(&[1, 2, -1]);
    let v = int_vector(&[3, -1, 1]);
    assert!(u.orthogonal_to(&v).unwrap());
    assert!(!u.orthogonal_to(&u).unwrap());
}

#[test]
fn size_mismatch_is_illegal_argument() {
    let u = int_vector(&[1, 2]);
    let v = int_vector(&[1, 2, 3]);
    let err = u.add(&v).unwrap_err();
    assert!(err.is_illegal_argument());
    assert_eq!(err, Error::SizeMismatch { expected: 2, got: 3 });
    assert!(u.euclidean_distance(&v, &SqrtContext::default()).is_err());
}

#[test]
fn non_square_determinant_is_illegal_state() {
    let m = int_matrix(2, 3, &[1, 2, 3, 4, 5, 6]);
    let err = m.determinant().unwrap_err();
    assert!(err.is_illegal_state());
    assert_eq!(err, Error::NotSquare { rows: 2, columns: 3 });
}

#[test]
fn unset_builder_cell_is_missing_element() {
    let mut b = Matrix::<BigInt>::builder(2, 2).unwrap();
    b.put(1, 1, BigInt::from(1)).unwrap();
    let err = b.build().unwrap_err();
    assert!(err.is_missing_element());
    assert!(!err.is_illegal_argument());
}

#[test]
fn five_by_five_leibniz() {
    // dense enough to avoid the triangular path
    let m = Matrix::from_fn(5, 5, |i, j| {
        BigInt::from(if i == j { 2 } else if (i + j) % 3 == 0 { 1 } else { 0 })
    })
    .unwrap();
    assert!(!m.is_triangular().unwrap());
    assert_eq!(m.determinant().unwrap(), m.leibniz_formula().unwrap());

    // expansion by minors along the first column
    let mut expected = BigInt::from(0);
    for i in 1..=5 {
        let term = m.element(i, 1).unwrap() * m.minor(i, 1).unwrap().determinant().unwrap();
        if i % 2 == 1 {
            expected += term;
        } else {
            expected -= term;
        }
    }
    assert_eq!(m.determinant().unwrap(), expected);
}

#[test]
fn context_and_exact_share_dispatch() {
    let rows = ["1.5", "0", "0", "2.5", "3.5", "0", "1", "2", "4.5"];
    let values: Vec<BigDecimal> = rows.iter().map(|s| dec(s)).collect();
    let m = Matrix::from_rows(3, 3, &values).unwrap();
    // lower triangular: exact 1.5 * 3.5 * 4.5 = 23.625
    assert_eq!(m.determinant().unwrap(), dec("23.625"));
    let ctx = MathContext::new(2, RoundingMode::HalfEven).unwrap();
    // 1.5 * 3.5 = 5.25 -> 5.2, 5.2 * 4.5 = 23.4 -> 23
    assert_eq!(m.determinant_with(&ctx).unwrap(), dec("23"));
    assert_eq!(ctx.round(&dec("23.625")), dec("24"));
}

#[test]
fn square_root_engine() {
    let ctx = SqrtContext::default();
    let root = sqrt::sqrt(&dec("0.0625"), &ctx).unwrap();
    assert!((root - dec("0.25")).abs() <= *ctx.abort_criterion());
    assert!(sqrt::sqrt(&dec("-1"), &ctx).unwrap_err().is_illegal_argument());
    assert_eq!(sqrt::sqrt_of_perfect_square(&BigInt::from(1024)), Some(BigInt::from(32)));
    assert_eq!(sqrt::sqrt_of_perfect_square(&BigInt::from(1023)), None);

    let root = BigInt::from(999_999_999_989u64);
    let square = &root * &root;
    assert_eq!(sqrt::sqrt_of_perfect_square(&square), Some(root.clone()));
    assert_eq!(sqrt::sqrt_integer(&square, &ctx).unwrap(), BigDecimal::from(root));
}
