use log::debug;

use crate::context::{Exact, Rounding};
use crate::error::{Error, Result};
use crate::permutation;
use crate::traits::Scalar;

use super::Matrix;

// ── Structural predicates ───────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// No non-zero cell strictly below the diagonal.
    ///
    /// Fails with an illegal-state error on a non-square matrix, as do all
    /// predicates below.
    pub fn is_upper_triangular(&self) -> Result<bool> {
        self.require_square()?;
        Ok(self.cells().all(|(i, j, x)| i <= j || x.is_zero()))
    }

    /// No non-zero cell strictly above the diagonal.
    pub fn is_lower_triangular(&self) -> Result<bool> {
        self.require_square()?;
        Ok(self.cells().all(|(i, j, x)| i >= j || x.is_zero()))
    }

    /// Upper or lower triangular.
    pub fn is_triangular(&self) -> Result<bool> {
        Ok(self.is_upper_triangular()? || self.is_lower_triangular()?)
    }

    /// Both upper and lower triangular.
    pub fn is_diagonal(&self) -> Result<bool> {
        Ok(self.is_upper_triangular()? && self.is_lower_triangular()?)
    }

    /// Diagonal with every diagonal cell equal to one.
    pub fn is_identity(&self) -> Result<bool> {
        Ok(self.is_diagonal()? && (0..self.nrows).all(|i| self.at(i, i).is_one()))
    }

    /// Whether an inverse exists inside the element domain.
    ///
    /// The determinant must be a unit of the domain: `±1` for integers,
    /// `±1, ±i` for Gaussian integers, anything non-zero for decimals.
    ///
    /// ```
    /// use exactnum::{BigDecimal, BigInt, Matrix};
    /// let m = Matrix::from_rows(2, 2, &[2, 0, 0, 1].map(BigInt::from)).unwrap();
    /// assert!(!m.is_invertible().unwrap());
    /// let d = m.map(|x| BigDecimal::from(x.clone()));
    /// assert!(d.is_invertible().unwrap());
    /// ```
    pub fn is_invertible(&self) -> Result<bool> {
        self.is_invertible_with(&Exact)
    }

    /// [`is_invertible`](Self::is_invertible) with the determinant computed under `policy`.
    pub fn is_invertible_with<P: Rounding<T>>(&self, policy: &P) -> Result<bool> {
        Ok(self.determinant_with(policy)?.is_unit())
    }
}

// ── Trace and determinant ───────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Sum of the diagonal cells.
    ///
    /// ```
    /// use exactnum::{BigInt, Matrix};
    /// let m = Matrix::from_rows(2, 2, &[1, 2, 3, 4].map(BigInt::from)).unwrap();
    /// assert_eq!(m.trace().unwrap(), BigInt::from(5));
    /// ```
    pub fn trace(&self) -> Result<T> {
        self.trace_with(&Exact)
    }

    /// [`trace`](Self::trace), rounding each partial sum.
    pub fn trace_with<P: Rounding<T>>(&self, policy: &P) -> Result<T> {
        self.require_square()?;
        Ok((0..self.nrows).fold(T::zero(), |acc, i| policy.add(&acc, self.at(i, i))))
    }

    /// Determinant, dispatched on structure.
    ///
    /// In order: product of the diagonal for triangular matrices, the direct
    /// formula for 2x2, the rule of Sarrus for 3x3, and the Leibniz formula
    /// otherwise.
    ///
    /// The Leibniz path enumerates all `n!` permutations and has no size
    /// cap. A dense non-triangular 10x10 matrix already needs 3.6 million
    /// terms.
    ///
    /// ```
    /// use exactnum::{BigInt, Matrix};
    /// let m = Matrix::from_rows(3, 3, &[2, 0, 1, 1, 3, 2, 1, 1, 2].map(BigInt::from)).unwrap();
    /// assert_eq!(m.determinant().unwrap(), BigInt::from(6));
    /// ```
    pub fn determinant(&self) -> Result<T> {
        self.determinant_with(&Exact)
    }

    /// [`determinant`](Self::determinant), rounding after every elementary step.
    pub fn determinant_with<P: Rounding<T>>(&self, policy: &P) -> Result<T> {
        self.require_square()?;
        let n = self.nrows;
        if self.is_triangular()? {
            debug!("determinant of {n}x{n}: triangular, product of diagonal");
            return Ok(self.diagonal_product(policy));
        }
        match n {
            2 => {
                debug!("determinant of 2x2: direct formula");
                Ok(policy.subtract(
                    &policy.multiply(self.at(0, 0), self.at(1, 1)),
                    &policy.multiply(self.at(0, 1), self.at(1, 0)),
                ))
            }
            3 => {
                debug!("determinant of 3x3: rule of Sarrus");
                Ok(self.sarrus(policy))
            }
            _ => {
                debug!("determinant of {n}x{n}: Leibniz formula over {n}! permutations");
                Ok(self.leibniz(policy))
            }
        }
    }

    /// Closed-form 3x3 determinant.
    ///
    /// Fails with an illegal-state error unless the matrix is exactly 3x3.
    pub fn rule_of_sarrus(&self) -> Result<T> {
        self.rule_of_sarrus_with(&Exact)
    }

    /// [`rule_of_sarrus`](Self::rule_of_sarrus) under `policy`.
    pub fn rule_of_sarrus_with<P: Rounding<T>>(&self, policy: &P) -> Result<T> {
        self.require_square()?;
        if self.nrows != 3 {
            return Err(Error::UnsupportedSize {
                expected: 3,
                got: self.nrows,
            });
        }
        Ok(self.sarrus(policy))
    }

    /// Determinant as the signed sum over all permutations of the columns.
    ///
    /// Works for every square size; runs in factorial time.
    pub fn leibniz_formula(&self) -> Result<T> {
        self.leibniz_formula_with(&Exact)
    }

    /// [`leibniz_formula`](Self::leibniz_formula) under `policy`.
    pub fn leibniz_formula_with<P: Rounding<T>>(&self, policy: &P) -> Result<T> {
        self.require_square()?;
        Ok(self.leibniz(policy))
    }

    fn diagonal_product<P: Rounding<T>>(&self, policy: &P) -> T {
        let first = policy.round(self.at(0, 0).clone());
        (1..self.nrows).fold(first, |acc, i| policy.multiply(&acc, self.at(i, i)))
    }

    fn sarrus<P: Rounding<T>>(&self, policy: &P) -> T {
        let a = move |i: usize, j: usize| self.at(i - 1, j - 1);
        let triple = |x: &T, y: &T, z: &T| policy.multiply(&policy.multiply(x, y), z);

        let plus = [
            triple(a(1, 1), a(2, 2), a(3, 3)),
            triple(a(1, 2), a(2, 3), a(3, 1)),
            triple(a(1, 3), a(2, 1), a(3, 2)),
        ];
        let minus = [
            triple(a(3, 1), a(2, 2), a(1, 3)),
            triple(a(3, 2), a(2, 3), a(1, 1)),
            triple(a(3, 3), a(2, 1), a(1, 2)),
        ];
        let sum = plus.iter().fold(T::zero(), |acc, t| policy.add(&acc, t));
        minus.iter().fold(sum, |acc, t| policy.subtract(&acc, t))
    }

    fn leibniz<P: Rounding<T>>(&self, policy: &P) -> T {
        let n = self.nrows;
        let mut sum = T::zero();
        permutation::for_each_permutation(n, |sigma| {
            let first = policy.round(self.at(sigma[0], 0).clone());
            let term = (1..n).fold(first, |acc, i| {
                policy.multiply(&acc, self.at(sigma[i], i))
            });
            sum = if permutation::is_even(sigma) {
                policy.add(&sum, &term)
            } else {
                policy.subtract(&sum, &term)
            };
        });
        sum
    }
}

// ── Powers ──────────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Integer matrix power via repeated squaring.
    ///
    /// `pow(0)` is the identity. Fails on a non-square matrix.
    ///
    /// ```
    /// use exactnum::{BigInt, Matrix};
    /// let m = Matrix::from_rows(2, 2, &[1, 1, 0, 1].map(BigInt::from)).unwrap();
    /// let m3 = m.pow(3).unwrap();
    /// assert_eq!(m3.element(1, 2).unwrap(), &BigInt::from(3));
    /// ```
    pub fn pow(&self, exponent: u32) -> Result<Self> {
        self.pow_with(exponent, &Exact)
    }

    /// [`pow`](Self::pow), rounding every product.
    pub fn pow_with<P: Rounding<T>>(&self, mut exponent: u32, policy: &P) -> Result<Self> {
        self.require_square()?;
        let mut result = Self::identity(self.nrows)?;
        let mut base = self.clone();
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = result.multiply_with(&base, policy)?;
            }
            exponent >>= 1;
            if exponent > 0 {
                base = base.multiply_with(&base, policy)?;
            }
        }
        Ok(result)
    }
}
