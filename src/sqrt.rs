//! Iterative arbitrary-precision square root.
//!
//! Heron's method: seed `x₀ = (value + 1) / 2` at the context's initial
//! scale, then iterate `x_{n+1} = (x_n² + value) / (2·x_n)` under the
//! context's precision until two successive values differ by at most the
//! abort criterion or the iteration budget runs out.
//!
//! Non-convergence is not an error. The last approximation is returned when
//! the budget is exhausted, and if the divisor `2·x_n` ever rounds to zero the
//! abort criterion itself is returned. Both cases are logged at `warn`.
//!
//! The seed is at least `0.5` and every step rounds to significant digits,
//! so the iterates stay positive and the zero-divisor guard does not trigger
//! for any non-negative input. It stays as the division-by-zero guard.

use bigdecimal::BigDecimal;
use log::{trace, warn};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::context::SqrtContext;
use crate::error::{Error, Result};

/// Square root of a non-negative decimal.
///
/// Fails only for negative input.
///
/// ```
/// use exactnum::{sqrt, BigDecimal, SqrtContext};
///
/// let ctx = SqrtContext::default();
/// let root = sqrt::sqrt(&BigDecimal::from(2), &ctx).unwrap();
/// let err = (&root * &root - BigDecimal::from(2)).abs();
/// assert!(err <= *ctx.abort_criterion());
/// ```
pub fn sqrt(value: &BigDecimal, ctx: &SqrtContext) -> Result<BigDecimal> {
    if value.is_negative() {
        return Err(Error::NegativeValue {
            value: value.clone(),
        });
    }
    Ok(heron(value, ctx))
}

/// Square root of a non-negative integer.
///
/// Perfect squares are answered exactly without iterating.
///
/// ```
/// use exactnum::{sqrt, BigDecimal, BigInt, SqrtContext};
///
/// let root = sqrt::sqrt_integer(&BigInt::from(144), &SqrtContext::default()).unwrap();
/// assert_eq!(root, BigDecimal::from(12));
/// ```
pub fn sqrt_integer(value: &BigInt, ctx: &SqrtContext) -> Result<BigDecimal> {
    if value.is_negative() {
        return Err(Error::NegativeValue {
            value: BigDecimal::from(value.clone()),
        });
    }
    Ok(integer_root(value, ctx))
}

/// Whether `value` is the square of an integer.
///
/// ```
/// use exactnum::{sqrt, BigInt};
/// assert!(sqrt::is_perfect_square(&BigInt::from(49)));
/// assert!(!sqrt::is_perfect_square(&BigInt::from(50)));
/// ```
pub fn is_perfect_square(value: &BigInt) -> bool {
    sqrt_of_perfect_square(value).is_some()
}

/// Largest value checked by odd-number subtraction (roots up to 1024).
pub const ODD_SUBTRACTION_LIMIT: u32 = 1 << 20;

/// Exact root of a perfect square, `None` otherwise.
///
/// Small values subtract consecutive odd numbers `1, 3, 5, …`: the value is
/// a perfect square iff this lands exactly on zero, and the number of
/// subtractions is the root. Beyond [`ODD_SUBTRACTION_LIMIT`] the candidate
/// root comes from the integer square root and is checked by squaring.
pub fn sqrt_of_perfect_square(value: &BigInt) -> Option<BigInt> {
    if value.is_negative() {
        return None;
    }
    if *value <= BigInt::from(ODD_SUBTRACTION_LIMIT) {
        return odd_subtraction_root(value);
    }
    let root = value.sqrt();
    (&root * &root == *value).then_some(root)
}

fn odd_subtraction_root(value: &BigInt) -> Option<BigInt> {
    let mut remainder = value.clone();
    let mut odd = BigInt::one();
    let mut root = BigInt::zero();
    while remainder.is_positive() {
        remainder -= &odd;
        odd += 2u32;
        root += 1u32;
    }
    remainder.is_zero().then_some(root)
}

pub(crate) fn integer_root(value: &BigInt, ctx: &SqrtContext) -> BigDecimal {
    match sqrt_of_perfect_square(value) {
        Some(root) => BigDecimal::from(root),
        None => heron(&BigDecimal::from(value.clone()), ctx),
    }
}

/// Heron iteration for a value already known to be non-negative.
pub(crate) fn heron(value: &BigDecimal, ctx: &SqrtContext) -> BigDecimal {
    if value.is_zero() {
        return BigDecimal::zero();
    }
    let math = ctx.math_context();
    let two = BigDecimal::from(2);
    let half = BigDecimal::new(BigInt::from(5), 1);

    let seed = (value + BigDecimal::one()) * &half;
    let mut x = seed.with_scale_round(ctx.initial_scale(), ctx.rounding());

    for iteration in 1..=ctx.max_iterations() {
        let divisor = math.multiply(&two, &x);
        if divisor.is_zero() {
            warn!(
                "sqrt({value}): divisor rounded to zero at iteration {iteration}, \
                 returning abort criterion"
            );
            return ctx.abort_criterion().clone();
        }
        let numerator = math.add(&math.multiply(&x, &x), value);
        let next = math.quotient(&numerator, &divisor);
        let delta = (&next - &x).abs();
        x = next;
        trace!("sqrt({value}) iteration {iteration}: delta {delta}");
        if delta <= *ctx.abort_criterion() {
            return x;
        }
    }

    warn!(
        "sqrt({value}) did not converge within {} iterations",
        ctx.max_iterations()
    );
    x
}
