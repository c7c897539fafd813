//! Complex numbers over big integers (Gaussian integers) and big decimals.
//!
//! Both domains reuse [`num_complex::Complex`]. [`ComplexExt`] adds the
//! conjugate, absolute value, division, power, and real-matrix embedding;
//! [`DecimalComplexExt`] adds the context-rounded twins and the
//! value-versus-structure equality distinction for decimal components.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{One, Zero};

pub use num_complex::Complex;

use crate::context::{MathContext, Rounding, SqrtContext};
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::traits::{not_invertible, Real, Scalar};

// ── Scalar impls ────────────────────────────────────────────────────

impl Scalar for Complex<BigInt> {
    type Norm = BigDecimal;
    type NormPow2 = BigInt;

    fn modulus_with(&self, ctx: &SqrtContext) -> BigDecimal {
        self.abs_with(ctx)
    }

    fn modulus_pow2(&self) -> BigInt {
        self.abs_pow2()
    }

    /// Units of the Gaussian integers: `1, -1, i, -i`.
    fn is_unit(&self) -> bool {
        self.abs_pow2().is_one()
    }

    fn invert(&self) -> Result<Self> {
        // |u| = 1 so 1/u is the conjugate
        if self.is_unit() {
            Ok(self.conjugate())
        } else {
            Err(not_invertible(self))
        }
    }
}

impl Scalar for Complex<BigDecimal> {
    type Norm = BigDecimal;
    type NormPow2 = BigDecimal;

    fn modulus_with(&self, ctx: &SqrtContext) -> BigDecimal {
        self.abs_with(ctx)
    }

    fn modulus_pow2(&self) -> BigDecimal {
        self.abs_pow2()
    }

    fn is_unit(&self) -> bool {
        !self.is_zero()
    }

    /// `conj(z) / |z|²` at `bigdecimal`'s default division precision.
    fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(not_invertible(self));
        }
        let n = self.abs_pow2();
        Ok(Complex::new(
            self.re.clone() / n.clone(),
            -self.im.clone() / n,
        ))
    }
}

// ── Common operations ───────────────────────────────────────────────

/// Operations shared by both complex domains.
///
/// ```
/// use exactnum::{BigDecimal, BigInt, Complex, ComplexExt};
///
/// let z = Complex::new(BigInt::from(3), BigInt::from(4));
/// assert_eq!(z.abs_pow2(), BigInt::from(25));
/// assert_eq!(z.abs(), BigDecimal::from(5));
/// assert_eq!(z.conjugate(), Complex::new(BigInt::from(3), BigInt::from(-4)));
/// ```
pub trait ComplexExt<T: Real>: Sized {
    /// `re - i·im`.
    fn conjugate(&self) -> Self;

    /// `re² + im²`, exact.
    fn abs_pow2(&self) -> T;

    /// `sqrt(re² + im²)` with the default [`SqrtContext`].
    fn abs(&self) -> BigDecimal {
        self.abs_with(&SqrtContext::default())
    }

    /// `sqrt(re² + im²)`.
    fn abs_with(&self, ctx: &SqrtContext) -> BigDecimal;

    /// `self / divisor`, failing unless `divisor` is invertible in the domain.
    fn divide(&self, divisor: &Self) -> Result<Self>;

    /// `self^exponent` by repeated squaring; `z^0 = 1`.
    ///
    /// Fails for a negative exponent.
    fn pow(&self, exponent: i64) -> Result<Self>;

    /// Embed `a + bi` as the real matrix `[[a, -b], [b, a]]`.
    ///
    /// Matrix addition and multiplication of embeddings agree with complex
    /// addition and multiplication.
    fn to_matrix(&self) -> Matrix<T>;
}

impl<T: Real> ComplexExt<T> for Complex<T>
where
    Complex<T>: Scalar,
{
    fn conjugate(&self) -> Self {
        Complex::new(self.re.clone(), -self.im.clone())
    }

    fn abs_pow2(&self) -> T {
        self.re.clone() * self.re.clone() + self.im.clone() * self.im.clone()
    }

    fn abs_with(&self, ctx: &SqrtContext) -> BigDecimal {
        self.abs_pow2().sqrt_with(ctx)
    }

    fn divide(&self, divisor: &Self) -> Result<Self> {
        let inverse = divisor.invert().map_err(|_| Error::NotInvertibleDivisor {
            divisor: divisor.to_string(),
        })?;
        Ok(self.clone() * inverse)
    }

    fn pow(&self, exponent: i64) -> Result<Self> {
        power(self, exponent, &crate::context::Exact)
    }

    fn to_matrix(&self) -> Matrix<T> {
        // column-major: col0 = [a, b], col1 = [-b, a]
        Matrix::from_parts(
            2,
            2,
            vec![
                self.re.clone(),
                self.im.clone(),
                -self.im.clone(),
                self.re.clone(),
            ],
        )
    }
}

fn power<T: Scalar, P: Rounding<T>>(base: &T, exponent: i64, policy: &P) -> Result<T> {
    if exponent < 0 {
        return Err(Error::NegativeExponent { exponent });
    }
    let mut n = exponent as u64;
    let mut result = T::one();
    let mut square = base.clone();
    while n > 0 {
        if n & 1 == 1 {
            result = policy.multiply(&result, &square);
        }
        n >>= 1;
        if n > 0 {
            square = policy.multiply(&square, &square);
        }
    }
    Ok(result)
}

// ── Decimal complex numbers ─────────────────────────────────────────

impl Rounding<Complex<BigDecimal>> for MathContext {
    fn round(&self, value: Complex<BigDecimal>) -> Complex<BigDecimal> {
        Complex::new(MathContext::round(self, &value.re), MathContext::round(self, &value.im))
    }

    fn add(&self, lhs: &Complex<BigDecimal>, rhs: &Complex<BigDecimal>) -> Complex<BigDecimal> {
        Complex::new(
            MathContext::add(self, &lhs.re, &rhs.re),
            MathContext::add(self, &lhs.im, &rhs.im),
        )
    }

    fn subtract(
        &self,
        lhs: &Complex<BigDecimal>,
        rhs: &Complex<BigDecimal>,
    ) -> Complex<BigDecimal> {
        Complex::new(
            MathContext::subtract(self, &lhs.re, &rhs.re),
            MathContext::subtract(self, &lhs.im, &rhs.im),
        )
    }

    /// `(ac - bd) + (ad + bc)i`, rounding every product and sum.
    fn multiply(
        &self,
        lhs: &Complex<BigDecimal>,
        rhs: &Complex<BigDecimal>,
    ) -> Complex<BigDecimal> {
        let ac = MathContext::multiply(self, &lhs.re, &rhs.re);
        let bd = MathContext::multiply(self, &lhs.im, &rhs.im);
        let ad = MathContext::multiply(self, &lhs.re, &rhs.im);
        let bc = MathContext::multiply(self, &lhs.im, &rhs.re);
        Complex::new(
            MathContext::subtract(self, &ac, &bd),
            MathContext::add(self, &ad, &bc),
        )
    }
}

/// Context-rounded arithmetic and the two equality notions for
/// `Complex<BigDecimal>`.
///
/// `BigDecimal` compares by numeric value, so `==` on complex decimals
/// ignores trailing-zero scale differences; [`identical_to`] does not.
///
/// [`identical_to`]: DecimalComplexExt::identical_to
///
/// ```
/// use exactnum::{BigDecimal, Complex, DecimalComplexExt};
/// use std::str::FromStr;
///
/// let a = Complex::new(BigDecimal::from_str("1.0").unwrap(), BigDecimal::from(2));
/// let b = Complex::new(BigDecimal::from_str("1.00").unwrap(), BigDecimal::from(2));
/// assert!(a.eq_by_value(&b));
/// assert!(!a.identical_to(&b));
/// ```
pub trait DecimalComplexExt: Sized {
    /// Component-wise numeric comparison.
    fn eq_by_value(&self, other: &Self) -> bool;

    /// Component-wise comparison of unscaled value and scale.
    fn identical_to(&self, other: &Self) -> bool;

    fn add_with(&self, other: &Self, ctx: &MathContext) -> Self;

    fn subtract_with(&self, other: &Self, ctx: &MathContext) -> Self;

    fn multiply_with(&self, other: &Self, ctx: &MathContext) -> Self;

    fn abs_pow2_with(&self, ctx: &MathContext) -> BigDecimal;

    /// Rounded `conj(z) / |z|²`; illegal-state error for zero.
    fn invert_with(&self, ctx: &MathContext) -> Result<Self>;

    fn divide_with(&self, divisor: &Self, ctx: &MathContext) -> Result<Self>;

    fn pow_with(&self, exponent: i64, ctx: &MathContext) -> Result<Self>;
}

impl DecimalComplexExt for Complex<BigDecimal> {
    fn eq_by_value(&self, other: &Self) -> bool {
        self.re == other.re && self.im == other.im
    }

    fn identical_to(&self, other: &Self) -> bool {
        self.re.as_bigint_and_exponent() == other.re.as_bigint_and_exponent()
            && self.im.as_bigint_and_exponent() == other.im.as_bigint_and_exponent()
    }

    fn add_with(&self, other: &Self, ctx: &MathContext) -> Self {
        Rounding::add(ctx, self, other)
    }

    fn subtract_with(&self, other: &Self, ctx: &MathContext) -> Self {
        Rounding::subtract(ctx, self, other)
    }

    fn multiply_with(&self, other: &Self, ctx: &MathContext) -> Self {
        Rounding::multiply(ctx, self, other)
    }

    fn abs_pow2_with(&self, ctx: &MathContext) -> BigDecimal {
        ctx.add(
            &ctx.multiply(&self.re, &self.re),
            &ctx.multiply(&self.im, &self.im),
        )
    }

    fn invert_with(&self, ctx: &MathContext) -> Result<Self> {
        if self.is_zero() {
            return Err(not_invertible(self));
        }
        let n = self.abs_pow2_with(ctx);
        Ok(Complex::new(
            ctx.divide(&self.re, &n)?,
            ctx.divide(&-self.im.clone(), &n)?,
        ))
    }

    fn divide_with(&self, divisor: &Self, ctx: &MathContext) -> Result<Self> {
        let inverse = divisor
            .invert_with(ctx)
            .map_err(|_| Error::NotInvertibleDivisor {
                divisor: divisor.to_string(),
            })?;
        Ok(self.multiply_with(&inverse, ctx))
    }

    fn pow_with(&self, exponent: i64, ctx: &MathContext) -> Result<Self> {
        power(self, exponent, ctx)
    }
}
