use core::ops::Neg;

use crate::context::{Exact, Rounding};
use crate::error::{Error, Result};
use crate::traits::Scalar;

use super::vector::Vector;
use super::{sum_of_products, Matrix};

// ── Element-wise arithmetic ─────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Element-wise sum; fails unless both matrices have the same dimensions.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.add_with(other, &Exact)
    }

    /// [`add`](Self::add) under `policy`.
    pub fn add_with<P: Rounding<T>>(&self, other: &Self, policy: &P) -> Result<Self> {
        self.check_same_dimensions(other)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| policy.add(a, b))
            .collect();
        Ok(Matrix::from_parts(self.nrows, self.ncols, data))
    }

    /// Element-wise difference; fails unless both matrices have the same
    /// dimensions.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.subtract_with(other, &Exact)
    }

    /// [`subtract`](Self::subtract), rounding each elementary step with `policy`.
    pub fn subtract_with<P: Rounding<T>>(&self, other: &Self, policy: &P) -> Result<Self> {
        self.check_same_dimensions(other)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| policy.subtract(a, b))
            .collect();
        Ok(Matrix::from_parts(self.nrows, self.ncols, data))
    }

    /// Multiply every cell by `scalar`.
    pub fn scalar_multiply(&self, scalar: &T) -> Self {
        self.scalar_multiply_with(scalar, &Exact)
    }

    /// Same as [`scalar_multiply`](Self::scalar_multiply) with every step rounded by `policy`.
    pub fn scalar_multiply_with<P: Rounding<T>>(&self, scalar: &T, policy: &P) -> Self {
        let data = self.data.iter().map(|x| policy.multiply(scalar, x)).collect();
        Matrix::from_parts(self.nrows, self.ncols, data)
    }

    /// Scalar multiple by `-1`.
    pub fn negate(&self) -> Self {
        self.scalar_multiply(&-T::one())
    }

    /// [`negate`](Self::negate) under `policy`.
    pub fn negate_with<P: Rounding<T>>(&self, policy: &P) -> Self {
        self.scalar_multiply_with(&-T::one(), policy)
    }
}

// ── Products: (M×N) * (N×P) → (M×P), (M×N) * N → M ──────────────────

impl<T: Scalar> Matrix<T> {
    /// Matrix product.
    ///
    /// Fails unless `self.column_size() == other.row_size()`.
    ///
    /// ```
    /// use exactnum::{BigInt, Matrix};
    /// let a = Matrix::from_rows(2, 2, &[1, 2, 3, 4].map(BigInt::from)).unwrap();
    /// let b = Matrix::from_rows(2, 1, &[5, 6].map(BigInt::from)).unwrap();
    /// let c = a.multiply(&b).unwrap();
    /// assert_eq!(c.element(1, 1).unwrap(), &BigInt::from(17));
    /// assert_eq!(c.element(2, 1).unwrap(), &BigInt::from(39));
    /// ```
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        self.multiply_with(other, &Exact)
    }

    /// [`multiply`](Self::multiply), rounding each elementary step with `policy`.
    pub fn multiply_with<P: Rounding<T>>(&self, other: &Self, policy: &P) -> Result<Self> {
        if self.ncols != other.nrows {
            return Err(Error::SizeMismatch {
                expected: self.ncols,
                got: other.nrows,
            });
        }
        let mut data = Vec::with_capacity(self.nrows * other.ncols);
        for j in 0..other.ncols {
            for i in 0..self.nrows {
                data.push(self.multiply_row_with_column(i, other, j, policy));
            }
        }
        Ok(Matrix::from_parts(self.nrows, other.ncols, data))
    }

    /// `Σ_k self[row, k] * other[k, col]`, 0-based indices.
    fn multiply_row_with_column<P: Rounding<T>>(
        &self,
        row: usize,
        other: &Self,
        col: usize,
        policy: &P,
    ) -> T {
        debug_assert_eq!(self.ncols, other.nrows);
        sum_of_products(
            (0..self.ncols).map(|k| self.at(row, k)),
            (0..other.nrows).map(|k| other.at(k, col)),
            policy,
        )
    }

    /// Matrix-vector product; fails unless `column_size() == vector.size()`.
    pub fn multiply_vector(&self, vector: &Vector<T>) -> Result<Vector<T>> {
        self.multiply_vector_with(vector, &Exact)
    }

    /// Same as [`multiply_vector`](Self::multiply_vector) with every step rounded by `policy`.
    pub fn multiply_vector_with<P: Rounding<T>>(
        &self,
        vector: &Vector<T>,
        policy: &P,
    ) -> Result<Vector<T>> {
        if self.ncols != vector.size() {
            return Err(Error::SizeMismatch {
                expected: self.ncols,
                got: vector.size(),
            });
        }
        let data = (0..self.nrows)
            .map(|i| sum_of_products((0..self.ncols).map(|j| self.at(i, j)), vector.iter(), policy))
            .collect();
        Ok(Vector::from_parts(data))
    }
}

// ── Structure ───────────────────────────────────────────────────────

impl<T: Clone> Matrix<T> {
    /// Swap row and column indices.
    ///
    /// ```
    /// use exactnum::{BigInt, Matrix};
    /// let m = Matrix::from_rows(2, 3, &[1, 2, 3, 4, 5, 6].map(BigInt::from)).unwrap();
    /// let t = m.transpose();
    /// assert_eq!(t.row_size(), 3);
    /// assert_eq!(t.element(3, 1).unwrap(), &BigInt::from(3));
    /// assert_eq!(t.transpose(), m);
    /// ```
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        // column j of the transpose is row j of self
        for j in 0..self.nrows {
            for i in 0..self.ncols {
                data.push(self.at(j, i).clone());
            }
        }
        Matrix::from_parts(self.ncols, self.nrows, data)
    }

    /// Remove 1-based row `row` and column `column`, re-indexing the rest
    /// contiguously from 1.
    ///
    /// Fails if the indices are out of range or the result would be empty.
    pub fn minor(&self, row: usize, column: usize) -> Result<Self> {
        if row == 0 || row > self.nrows || column == 0 || column > self.ncols {
            return Err(Error::CellOutOfBounds {
                row,
                column,
                rows: self.nrows,
                columns: self.ncols,
            });
        }
        if self.nrows < 2 || self.ncols < 2 {
            return Err(Error::InvalidSize {
                rows: self.nrows - 1,
                columns: self.ncols - 1,
            });
        }
        let mut data = Vec::with_capacity((self.nrows - 1) * (self.ncols - 1));
        for j in (0..self.ncols).filter(|&j| j != column - 1) {
            for i in (0..self.nrows).filter(|&i| i != row - 1) {
                data.push(self.at(i, j).clone());
            }
        }
        Ok(Matrix::from_parts(self.nrows - 1, self.ncols - 1, data))
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.negate()
    }
}

impl<T: Scalar> Neg for Vector<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl<T: Scalar> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        self.negate()
    }
}
