pub mod aliases;
mod builder;
mod norm;
mod ops;
mod square;
mod vector;

pub use aliases::*;
pub use builder::{MatrixBuilder, VectorBuilder};
pub use vector::Vector;

use crate::context::Rounding;
use crate::error::{Error, Result};
use crate::traits::Scalar;

/// Immutable dense matrix with 1-based indexing.
///
/// Column-major `Vec<T>` storage. Dimensions are fixed at construction and
/// always at least 1x1; every operation returns a new matrix.
///
/// # Examples
///
/// ```
/// use exactnum::{BigInt, Matrix};
///
/// let a = Matrix::from_rows(2, 2, &[1, 2, 3, 4].map(BigInt::from)).unwrap();
/// assert_eq!(a.element(1, 2).unwrap(), &BigInt::from(2));
/// assert_eq!(a.row_size(), 2);
/// assert_eq!(a.column_size(), 2);
/// assert_eq!(a.determinant().unwrap(), BigInt::from(-2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Wrap column-major storage whose length and sizes the caller has
    /// already validated.
    pub(crate) fn from_parts(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        debug_assert!(nrows > 0 && ncols > 0 && data.len() == nrows * ncols);
        Self { data, nrows, ncols }
    }

    pub(crate) fn check_size(nrows: usize, ncols: usize) -> Result<()> {
        if nrows == 0 || ncols == 0 {
            return Err(Error::InvalidSize {
                rows: nrows,
                columns: ncols,
            });
        }
        Ok(())
    }

    /// Create a matrix by calling `f(row, column)` for each cell, 1-based.
    ///
    /// ```
    /// use exactnum::{BigInt, Matrix};
    /// let m = Matrix::from_fn(2, 3, |i, j| BigInt::from(10 * i + j)).unwrap();
    /// assert_eq!(m.element(2, 3).unwrap(), &BigInt::from(23));
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Result<Self> {
        Self::check_size(nrows, ncols)?;
        let mut data = Vec::with_capacity(nrows * ncols);
        for j in 1..=ncols {
            for i in 1..=nrows {
                data.push(f(i, j));
            }
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Number of rows.
    #[inline]
    pub fn row_size(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn column_size(&self) -> usize {
        self.ncols
    }

    /// Whether row count equals column count.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Cell at 0-based `(row, col)`, unchecked beyond slice bounds.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> &T {
        &self.data[col * self.nrows + row]
    }

    /// Cell at 1-based `(row, column)`.
    pub fn element(&self, row: usize, column: usize) -> Result<&T> {
        if row == 0 || row > self.nrows || column == 0 || column > self.ncols {
            return Err(Error::CellOutOfBounds {
                row,
                column,
                rows: self.nrows,
                columns: self.ncols,
            });
        }
        Ok(self.at(row - 1, column - 1))
    }

    /// Iterate over `(row, column, element)` in row-major order, 1-based.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        (0..self.nrows)
            .flat_map(move |i| (0..self.ncols).map(move |j| (i + 1, j + 1, self.at(i, j))))
    }

    /// Iterate over elements in row-major order.
    pub fn elements(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells().map(|(_, _, x)| x)
    }

    /// Apply a function to every cell, producing a new matrix.
    ///
    /// ```
    /// use exactnum::{BigDecimal, BigInt, Matrix};
    /// let m = Matrix::from_rows(1, 2, &[BigInt::from(1), BigInt::from(2)]).unwrap();
    /// let d = m.map(|x| BigDecimal::from(x.clone()));
    /// assert_eq!(d.element(1, 2).unwrap(), &BigDecimal::from(2));
    /// ```
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Matrix<U> {
        Matrix {
            data: self.data.iter().map(f).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    pub(crate) fn check_same_dimensions(&self, other: &Self) -> Result<()> {
        if (self.nrows, self.ncols) != (other.nrows, other.ncols) {
            return Err(Error::DimensionMismatch {
                expected: (self.nrows, self.ncols),
                got: (other.nrows, other.ncols),
            });
        }
        Ok(())
    }

    pub(crate) fn require_square(&self) -> Result<()> {
        if !self.is_square() {
            return Err(Error::NotSquare {
                rows: self.nrows,
                columns: self.ncols,
            });
        }
        Ok(())
    }
}

impl<T: Scalar> Matrix<T> {
    /// Start a builder for an `nrows x ncols` matrix.
    pub fn builder(nrows: usize, ncols: usize) -> Result<MatrixBuilder<T>> {
        MatrixBuilder::new(nrows, ncols)
    }

    /// Create a matrix from a row-major slice.
    ///
    /// Fails if either size is zero or `row_major.len() != nrows * ncols`.
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Result<Self> {
        Self::check_size(nrows, ncols)?;
        if row_major.len() != nrows * ncols {
            return Err(Error::SizeMismatch {
                expected: nrows * ncols,
                got: row_major.len(),
            });
        }
        Self::from_fn(nrows, ncols, |i, j| row_major[(i - 1) * ncols + (j - 1)].clone())
    }

    /// All-zero `nrows x ncols` matrix.
    pub fn zero(nrows: usize, ncols: usize) -> Result<Self> {
        let mut builder = MatrixBuilder::new(nrows, ncols)?;
        builder.put_all(T::zero());
        builder.build()
    }

    /// `n x n` identity matrix.
    ///
    /// ```
    /// use exactnum::{BigDecimal, Matrix};
    /// let id: Matrix<BigDecimal> = Matrix::identity(3).unwrap();
    /// assert!(id.is_identity().unwrap());
    /// ```
    pub fn identity(n: usize) -> Result<Self> {
        let mut builder = MatrixBuilder::new(n, n)?;
        builder.put_all(T::zero());
        for i in 1..=n {
            builder.put(i, i, T::one())?;
        }
        builder.build()
    }

    /// Row `row` (1-based) as a vector of size `column_size()`.
    pub fn row(&self, row: usize) -> Result<Vector<T>> {
        if row == 0 || row > self.nrows {
            return Err(Error::IndexOutOfBounds {
                index: row,
                bound: self.nrows,
            });
        }
        Ok(Vector::from_parts(
            (0..self.ncols).map(|j| self.at(row - 1, j).clone()).collect(),
        ))
    }

    /// Column `column` (1-based) as a vector of size `row_size()`.
    pub fn column(&self, column: usize) -> Result<Vector<T>> {
        if column == 0 || column > self.ncols {
            return Err(Error::IndexOutOfBounds {
                index: column,
                bound: self.ncols,
            });
        }
        let start = (column - 1) * self.nrows;
        Ok(Vector::from_parts(self.data[start..start + self.nrows].to_vec()))
    }
}

/// `Σ lhs[k] * rhs[k]`, each product and partial sum passed through `policy`.
pub(crate) fn sum_of_products<'a, T, P>(
    lhs: impl Iterator<Item = &'a T>,
    rhs: impl Iterator<Item = &'a T>,
    policy: &P,
) -> T
where
    T: Scalar + 'a,
    P: Rounding<T>,
{
    lhs.zip(rhs)
        .fold(T::zero(), |acc, (a, b)| policy.add(&acc, &policy.multiply(a, b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn int_matrix(nrows: usize, ncols: usize, values: &[i64]) -> Matrix<BigInt> {
        let values: Vec<BigInt> = values.iter().map(|&v| BigInt::from(v)).collect();
        Matrix::from_rows(nrows, ncols, &values).unwrap()
    }

    #[test]
    fn from_rows() {
        let m = int_matrix(2, 3, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(m.row_size(), 2);
        assert_eq!(m.column_size(), 3);
        assert_eq!(m.element(1, 1).unwrap(), &BigInt::from(1));
        assert_eq!(m.element(1, 3).unwrap(), &BigInt::from(3));
        assert_eq!(m.element(2, 1).unwrap(), &BigInt::from(4));
        assert_eq!(m.element(2, 3).unwrap(), &BigInt::from(6));
    }

    #[test]
    fn from_rows_wrong_length() {
        let values = vec![BigInt::from(1); 3];
        let err = Matrix::from_rows(2, 2, &values).unwrap_err();
        assert_eq!(err, Error::SizeMismatch { expected: 4, got: 3 });
    }

    #[test]
    fn zero_sizes_rejected() {
        assert!(Matrix::<BigInt>::zero(0, 3).is_err());
        assert!(Matrix::<BigInt>::identity(0).is_err());
        assert!(Matrix::from_fn(2, 0, |_, _| BigInt::from(0)).is_err());
    }

    #[test]
    fn element_out_of_range() {
        let m = int_matrix(2, 2, &[1, 2, 3, 4]);
        for (i, j) in [(0, 1), (1, 0), (3, 1), (1, 3)] {
            let err = m.element(i, j).unwrap_err();
            assert!(err.is_illegal_argument());
            assert_eq!(
                err,
                Error::CellOutOfBounds {
                    row: i,
                    column: j,
                    rows: 2,
                    columns: 2
                }
            );
        }
    }

    #[test]
    fn zero_and_identity() {
        let z = Matrix::<BigInt>::zero(2, 3).unwrap();
        assert!(z.cells().all(|(_, _, x)| x == &BigInt::from(0)));
        assert_eq!(z.cells().count(), 6);

        let id = Matrix::<BigInt>::identity(3).unwrap();
        for (i, j, x) in id.cells() {
            let expected = if i == j { 1 } else { 0 };
            assert_eq!(x, &BigInt::from(expected));
        }
    }

    #[test]
    fn rows_and_columns() {
        let m = int_matrix(2, 3, &[1, 2, 3, 4, 5, 6]);
        let r = m.row(2).unwrap();
        assert_eq!(r.size(), 3);
        assert_eq!(r.element(3).unwrap(), &BigInt::from(6));
        let c = m.column(2).unwrap();
        assert_eq!(c.size(), 2);
        assert_eq!(c.element(1).unwrap(), &BigInt::from(2));
        assert_eq!(c.element(2).unwrap(), &BigInt::from(5));
        assert!(m.row(3).is_err());
        assert!(m.column(0).is_err());
    }

    #[test]
    fn cells_row_major() {
        let m = int_matrix(2, 2, &[1, 2, 3, 4]);
        let order: Vec<(usize, usize)> = m.cells().map(|(i, j, _)| (i, j)).collect();
        assert_eq!(order, vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn is_square() {
        assert!(int_matrix(2, 2, &[1, 2, 3, 4]).is_square());
        assert!(!int_matrix(1, 2, &[1, 2]).is_square());
    }

    #[test]
    fn clone_eq() {
        let a = int_matrix(2, 2, &[1, 2, 3, 4]);
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, int_matrix(2, 2, &[1, 2, 3, 5]));
    }
}
