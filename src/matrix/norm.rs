use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::context::{Exact, Rounding, SqrtContext};
use crate::traits::{Real, Scalar};

use super::Matrix;

// ── Matrix norms ────────────────────────────────────────────────────
//
// Norm-valued results live in `T::Norm` (|x|) or `T::NormPow2` (|x|²), so a
// Gaussian-integer matrix has an exact integer Frobenius norm squared.

impl<T: Scalar> Matrix<T> {
    /// Maximum over columns of `Σ |cell|` (the operator 1-norm).
    ///
    /// ```
    /// use exactnum::{BigInt, Matrix};
    /// let m = Matrix::from_rows(2, 2, &[1, -2, -3, 4].map(BigInt::from)).unwrap();
    /// assert_eq!(m.max_abs_column_sum_norm(), BigInt::from(6));
    /// assert_eq!(m.max_abs_row_sum_norm(), BigInt::from(7));
    /// ```
    pub fn max_abs_column_sum_norm(&self) -> T::Norm {
        self.max_abs_column_sum_norm_with(&Exact)
    }

    /// [`max_abs_column_sum_norm`](Self::max_abs_column_sum_norm) under `policy`.
    pub fn max_abs_column_sum_norm_with<P: Rounding<T::Norm>>(&self, policy: &P) -> T::Norm {
        (0..self.ncols)
            .map(|j| self.abs_sum((0..self.nrows).map(|i| self.at(i, j)), policy))
            .max()
            .unwrap_or_else(T::Norm::zero)
    }

    /// Maximum over rows of `Σ |cell|` (the operator infinity-norm).
    pub fn max_abs_row_sum_norm(&self) -> T::Norm {
        self.max_abs_row_sum_norm_with(&Exact)
    }

    /// [`max_abs_row_sum_norm`](Self::max_abs_row_sum_norm), rounding each elementary step with `policy`.
    pub fn max_abs_row_sum_norm_with<P: Rounding<T::Norm>>(&self, policy: &P) -> T::Norm {
        (0..self.nrows)
            .map(|i| self.abs_sum((0..self.ncols).map(|j| self.at(i, j)), policy))
            .max()
            .unwrap_or_else(T::Norm::zero)
    }

    fn abs_sum<'a, P: Rounding<T::Norm>>(
        &'a self,
        cells: impl Iterator<Item = &'a T>,
        policy: &P,
    ) -> T::Norm {
        cells.fold(T::Norm::zero(), |acc, x| {
            policy.add(&acc, &policy.round(x.modulus()))
        })
    }

    /// `Σ |cell|²` over all cells.
    pub fn frobenius_norm_pow2(&self) -> T::NormPow2 {
        self.frobenius_norm_pow2_with(&Exact)
    }

    /// Same as [`frobenius_norm_pow2`](Self::frobenius_norm_pow2) with every step rounded by `policy`.
    pub fn frobenius_norm_pow2_with<P: Rounding<T::NormPow2>>(&self, policy: &P) -> T::NormPow2 {
        self.data.iter().fold(T::NormPow2::zero(), |acc, x| {
            policy.add(&acc, &policy.round(x.modulus_pow2()))
        })
    }

    /// `sqrt(frobenius_norm_pow2())`.
    ///
    /// ```
    /// use exactnum::{BigDecimal, BigInt, Matrix, SqrtContext};
    /// let m = Matrix::from_rows(2, 2, &[1, 2, 2, 4].map(BigInt::from)).unwrap();
    /// assert_eq!(m.frobenius_norm(&SqrtContext::default()), BigDecimal::from(5));
    /// ```
    pub fn frobenius_norm(&self, ctx: &SqrtContext) -> BigDecimal {
        self.frobenius_norm_pow2().sqrt_with(ctx)
    }

    /// [`frobenius_norm`](Self::frobenius_norm) under `policy`.
    pub fn frobenius_norm_with<P: Rounding<T::NormPow2>>(
        &self,
        policy: &P,
        ctx: &SqrtContext,
    ) -> BigDecimal {
        self.frobenius_norm_pow2_with(policy).sqrt_with(ctx)
    }

    /// `max |cell|`.
    pub fn max_norm(&self) -> T::Norm {
        self.max_norm_with(&Exact)
    }

    /// [`max_norm`](Self::max_norm), rounding each elementary step with `policy`.
    pub fn max_norm_with<P: Rounding<T::Norm>>(&self, policy: &P) -> T::Norm {
        self.data
            .iter()
            .map(|x| policy.round(x.modulus()))
            .max()
            .unwrap_or_else(T::Norm::zero)
    }
}
