use core::fmt::{Debug, Display};
use core::ops::{Neg, Sub};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{Num, One, Signed, Zero};

use crate::context::SqrtContext;
use crate::error::{Error, Result};
use crate::sqrt;

/// Algebraic capability shared by every matrix and vector element.
///
/// Implemented independently for each scalar domain: `BigInt`, `BigDecimal`,
/// and (with the `complex` feature) `Complex<BigInt>` and
/// `Complex<BigDecimal>`. Vector and matrix algorithms depend on nothing
/// else.
pub trait Scalar:
    Clone + PartialEq + Debug + Display + Zero + One + Sub<Output = Self> + Neg<Output = Self>
{
    /// Type of `|x|`: `BigInt` for integers, `BigDecimal` otherwise.
    type Norm: Real;

    /// Type of `|x|²`: `BigInt` for both integer domains, `BigDecimal` otherwise.
    type NormPow2: Real;

    /// Absolute value / modulus, using the default [`SqrtContext`] where a
    /// square root is needed.
    fn modulus(&self) -> Self::Norm {
        self.modulus_with(&SqrtContext::default())
    }

    /// Absolute value / modulus.
    fn modulus_with(&self, ctx: &SqrtContext) -> Self::Norm;

    /// Squared absolute value, always exact.
    fn modulus_pow2(&self) -> Self::NormPow2;

    /// Whether the element has a multiplicative inverse in its own domain.
    ///
    /// `±1` for integers, `±1, ±i` for Gaussian integers, anything non-zero
    /// for decimal domains.
    fn is_unit(&self) -> bool;

    /// Multiplicative inverse within the domain.
    ///
    /// Fails with an illegal-state error unless [`is_unit`](Scalar::is_unit).
    fn invert(&self) -> Result<Self>;
}

/// Ordered real scalar, the value type of norms and absolute values.
pub trait Real: Scalar<Norm = Self, NormPow2 = Self> + Ord + Num {
    /// Widen to a decimal.
    fn to_decimal(&self) -> BigDecimal;

    /// Square root of a non-negative value.
    ///
    /// Integers take the exact perfect-square path when possible.
    fn sqrt_with(&self, ctx: &SqrtContext) -> BigDecimal;
}

pub(crate) fn not_invertible<T: Display>(value: &T) -> Error {
    Error::NotInvertible {
        value: value.to_string(),
    }
}

// ── BigInt ──────────────────────────────────────────────────────────

impl Scalar for BigInt {
    type Norm = BigInt;
    type NormPow2 = BigInt;

    #[inline]
    fn modulus_with(&self, _ctx: &SqrtContext) -> BigInt {
        Signed::abs(self)
    }

    #[inline]
    fn modulus_pow2(&self) -> BigInt {
        self * self
    }

    fn is_unit(&self) -> bool {
        Signed::abs(self).is_one()
    }

    fn invert(&self) -> Result<Self> {
        // ±1 are their own inverses
        if self.is_unit() {
            Ok(self.clone())
        } else {
            Err(not_invertible(self))
        }
    }
}

impl Real for BigInt {
    fn to_decimal(&self) -> BigDecimal {
        BigDecimal::from(self.clone())
    }

    fn sqrt_with(&self, ctx: &SqrtContext) -> BigDecimal {
        sqrt::integer_root(self, ctx)
    }
}

// ── BigDecimal ──────────────────────────────────────────────────────

impl Scalar for BigDecimal {
    type Norm = BigDecimal;
    type NormPow2 = BigDecimal;

    #[inline]
    fn modulus_with(&self, _ctx: &SqrtContext) -> BigDecimal {
        BigDecimal::abs(self)
    }

    #[inline]
    fn modulus_pow2(&self) -> BigDecimal {
        self * self
    }

    fn is_unit(&self) -> bool {
        !self.is_zero()
    }

    /// Reciprocal at `bigdecimal`'s default division precision.
    fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(not_invertible(self));
        }
        Ok(BigDecimal::one() / self.clone())
    }
}

impl Real for BigDecimal {
    fn to_decimal(&self) -> BigDecimal {
        self.clone()
    }

    fn sqrt_with(&self, ctx: &SqrtContext) -> BigDecimal {
        sqrt::heron(self, ctx)
    }
}
