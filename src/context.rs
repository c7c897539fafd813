use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::error::{Error, Result};
use crate::traits::Scalar;

// ── MathContext ─────────────────────────────────────────────────────

/// Precision and rounding applied after every elementary decimal step.
///
/// `precision` counts significant digits and is always positive; unlimited
/// precision is expressed with the [`Exact`] policy instead.
///
/// ```
/// use exactnum::{BigDecimal, MathContext, RoundingMode};
/// use std::str::FromStr;
///
/// let ctx = MathContext::new(3, RoundingMode::HalfUp).unwrap();
/// let x = BigDecimal::from_str("3.14159").unwrap();
/// assert_eq!(ctx.round(&x), BigDecimal::from_str("3.14").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathContext {
    precision: u64,
    rounding: RoundingMode,
}

impl MathContext {
    /// IEEE 754R decimal32: 7 digits, half-even.
    pub const DECIMAL32: Self = Self {
        precision: 7,
        rounding: RoundingMode::HalfEven,
    };

    /// IEEE 754R decimal64: 16 digits, half-even.
    pub const DECIMAL64: Self = Self {
        precision: 16,
        rounding: RoundingMode::HalfEven,
    };

    /// IEEE 754R decimal128: 34 digits, half-even.
    pub const DECIMAL128: Self = Self {
        precision: 34,
        rounding: RoundingMode::HalfEven,
    };

    /// Create a context with `precision` significant digits.
    ///
    /// Fails if `precision` is zero.
    pub fn new(precision: u64, rounding: RoundingMode) -> Result<Self> {
        if precision == 0 {
            return Err(Error::InvalidContext {
                reason: "precision must be positive",
                value: precision.to_string(),
            });
        }
        Ok(Self {
            precision,
            rounding,
        })
    }

    /// Significant digits kept by every rounding step.
    #[inline]
    pub fn precision(&self) -> u64 {
        self.precision
    }

    /// Rounding mode applied when digits are dropped.
    #[inline]
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Round `value` to this context's number of significant digits.
    pub fn round(&self, value: &BigDecimal) -> BigDecimal {
        let digits = value.digits();
        if digits <= self.precision {
            return value.clone();
        }
        let (_, scale) = value.as_bigint_and_exponent();
        let excess = (digits - self.precision) as i64;
        value.with_scale_round(scale - excess, self.rounding)
    }

    /// `lhs + rhs`, rounded.
    pub fn add(&self, lhs: &BigDecimal, rhs: &BigDecimal) -> BigDecimal {
        self.round(&(lhs + rhs))
    }

    /// `lhs - rhs`, rounded.
    pub fn subtract(&self, lhs: &BigDecimal, rhs: &BigDecimal) -> BigDecimal {
        self.round(&(lhs - rhs))
    }

    /// `lhs * rhs`, rounded.
    pub fn multiply(&self, lhs: &BigDecimal, rhs: &BigDecimal) -> BigDecimal {
        self.round(&(lhs * rhs))
    }

    /// Quotient rounded to this context.
    ///
    /// Fails if `divisor` is zero.
    ///
    /// ```
    /// use exactnum::{BigDecimal, MathContext, RoundingMode};
    /// use std::str::FromStr;
    ///
    /// let ctx = MathContext::new(5, RoundingMode::HalfEven).unwrap();
    /// let q = ctx.divide(&BigDecimal::from(2), &BigDecimal::from(3)).unwrap();
    /// assert_eq!(q, BigDecimal::from_str("0.66667").unwrap());
    /// ```
    pub fn divide(&self, dividend: &BigDecimal, divisor: &BigDecimal) -> Result<BigDecimal> {
        if divisor.is_zero() {
            return Err(Error::NotInvertibleDivisor {
                divisor: divisor.to_string(),
            });
        }
        Ok(self.quotient(dividend, divisor))
    }

    /// Quotient of two decimals, `divisor` must be non-zero.
    ///
    /// The integer quotient carries at least `precision + 2` digits plus a
    /// sticky digit for a non-zero remainder, so the final rounding is
    /// correct for every rounding mode.
    pub(crate) fn quotient(&self, dividend: &BigDecimal, divisor: &BigDecimal) -> BigDecimal {
        if dividend.is_zero() {
            return BigDecimal::zero();
        }
        let (a, a_scale) = dividend.as_bigint_and_exponent();
        let (b, b_scale) = divisor.as_bigint_and_exponent();
        let shift = (self.precision as i64 + 3 + divisor.digits() as i64 - dividend.digits() as i64).max(0);

        let numerator = &a * BigInt::from(10u32).pow(shift as u32);
        let q = &numerator / &b;
        let r = &numerator % &b;
        let sticky = if r.is_zero() {
            BigInt::zero()
        } else if a.is_negative() != b.is_negative() {
            -BigInt::one()
        } else {
            BigInt::one()
        };
        let unscaled = q * BigInt::from(10u32) + sticky;
        self.round(&BigDecimal::new(unscaled, a_scale - b_scale + shift + 1))
    }
}

impl Default for MathContext {
    fn default() -> Self {
        Self::DECIMAL128
    }
}

// ── Rounding policy ─────────────────────────────────────────────────

/// Per-step rounding policy shared by every vector and matrix algorithm.
///
/// Each algorithm is written once against this trait. [`Exact`] keeps full
/// precision; [`MathContext`] rounds the result of every elementary
/// add/subtract/multiply, so both modes share dispatch order and formulas.
pub trait Rounding<T: Scalar> {
    /// Round a single value.
    fn round(&self, value: T) -> T;

    /// Rounded sum.
    fn add(&self, lhs: &T, rhs: &T) -> T {
        self.round(lhs.clone() + rhs.clone())
    }

    /// Rounded difference.
    fn subtract(&self, lhs: &T, rhs: &T) -> T {
        self.round(lhs.clone() - rhs.clone())
    }

    /// Rounded product.
    fn multiply(&self, lhs: &T, rhs: &T) -> T {
        self.round(lhs.clone() * rhs.clone())
    }
}

/// Unlimited precision: every step is left as computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exact;

impl<T: Scalar> Rounding<T> for Exact {
    #[inline]
    fn round(&self, value: T) -> T {
        value
    }
}

impl Rounding<BigDecimal> for MathContext {
    #[inline]
    fn round(&self, value: BigDecimal) -> BigDecimal {
        MathContext::round(self, &value)
    }
}

// ── SqrtContext ─────────────────────────────────────────────────────

/// Convergence contract for the square-root engine.
///
/// - `abort_criterion`: iteration stops once two successive approximations
///   differ by at most this value; must lie in `(0, 1)`.
/// - `rounding`: rounding mode for the seed and every iteration step.
/// - `initial_scale`: scale of the seed value; must be positive.
/// - `max_iterations`: hard iteration budget; must be positive.
/// - `precision`: significant digits carried by every iteration step.
///
/// ```
/// use exactnum::{BigDecimal, SqrtContext};
/// use std::str::FromStr;
///
/// let ctx = SqrtContext::default()
///     .with_abort_criterion(BigDecimal::from_str("1e-8").unwrap())
///     .unwrap();
/// assert_eq!(ctx.max_iterations(), 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqrtContext {
    abort_criterion: BigDecimal,
    rounding: RoundingMode,
    initial_scale: i64,
    max_iterations: u32,
    math: MathContext,
}

impl SqrtContext {
    /// Create a context, validating every parameter.
    ///
    /// Fails with [`Error::InvalidContext`] naming the rejected value when the
    /// abort criterion lies outside `(0, 1)` or the initial scale, iteration
    /// budget or precision is not positive.
    ///
    /// ```
    /// use exactnum::{BigDecimal, RoundingMode, SqrtContext};
    /// use std::str::FromStr;
    ///
    /// let eps = BigDecimal::from_str("1e-10").unwrap();
    /// assert!(SqrtContext::new(eps.clone(), RoundingMode::HalfUp, 12, 200, 30).is_ok());
    /// assert!(SqrtContext::new(eps, RoundingMode::HalfUp, 0, 200, 30).is_err());
    /// ```
    pub fn new(
        abort_criterion: BigDecimal,
        rounding: RoundingMode,
        initial_scale: i64,
        max_iterations: u32,
        precision: u64,
    ) -> Result<Self> {
        Self::check_abort_criterion(&abort_criterion)?;
        if initial_scale <= 0 {
            return Err(Error::InvalidContext {
                reason: "initial scale must be positive",
                value: initial_scale.to_string(),
            });
        }
        if max_iterations == 0 {
            return Err(Error::InvalidContext {
                reason: "maximum iteration count must be positive",
                value: max_iterations.to_string(),
            });
        }
        Ok(Self {
            abort_criterion,
            rounding,
            initial_scale,
            max_iterations,
            math: MathContext::new(precision, rounding)?,
        })
    }

    fn check_abort_criterion(value: &BigDecimal) -> Result<()> {
        if !value.is_positive() || *value >= BigDecimal::one() {
            return Err(Error::InvalidContext {
                reason: "abort criterion must lie in (0, 1)",
                value: value.to_string(),
            });
        }
        Ok(())
    }

    /// Replace the abort criterion; it must lie in `(0, 1)`.
    pub fn with_abort_criterion(mut self, abort_criterion: BigDecimal) -> Result<Self> {
        Self::check_abort_criterion(&abort_criterion)?;
        self.abort_criterion = abort_criterion;
        Ok(self)
    }

    /// Replace the iteration budget; it must be positive.
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Result<Self> {
        if max_iterations == 0 {
            return Err(Error::InvalidContext {
                reason: "maximum iteration count must be positive",
                value: max_iterations.to_string(),
            });
        }
        self.max_iterations = max_iterations;
        Ok(self)
    }

    /// Replace the significant digits carried per step; must be positive.
    pub fn with_precision(mut self, precision: u64) -> Result<Self> {
        self.math = MathContext::new(precision, self.rounding)?;
        Ok(self)
    }

    /// Replace the rounding mode of the seed and of every step.
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self.math = MathContext {
            precision: self.math.precision,
            rounding,
        };
        self
    }

    /// Largest accepted difference between successive approximations.
    #[inline]
    pub fn abort_criterion(&self) -> &BigDecimal {
        &self.abort_criterion
    }

    /// Rounding mode of the seed and of every step.
    #[inline]
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Decimal places of the seed value.
    #[inline]
    pub fn initial_scale(&self) -> i64 {
        self.initial_scale
    }

    /// Hard iteration budget.
    #[inline]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Arithmetic context used for every iteration step.
    #[inline]
    pub fn math_context(&self) -> &MathContext {
        &self.math
    }
}

impl Default for SqrtContext {
    /// Abort criterion `1E-20`, half-even, initial scale 20,
    /// 1000 iterations, 50 significant digits.
    fn default() -> Self {
        Self {
            abort_criterion: BigDecimal::new(BigInt::one(), 20),
            rounding: RoundingMode::HalfEven,
            initial_scale: 20,
            max_iterations: 1000,
            math: MathContext {
                precision: 50,
                rounding: RoundingMode::HalfEven,
            },
        }
    }
}
