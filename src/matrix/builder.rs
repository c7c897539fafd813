use crate::error::{Error, Result};
use crate::traits::Scalar;

use super::vector::Vector;
use super::Matrix;

/// Mutable staging table for a [`Matrix`].
///
/// Owns one grid of optional cells that is converted into an immutable
/// matrix exactly once by [`build`](MatrixBuilder::build).
///
/// ```
/// use exactnum::{BigInt, Matrix};
///
/// let mut b = Matrix::builder(2, 2).unwrap();
/// b.put_all(BigInt::from(0));
/// b.put(1, 2, BigInt::from(7)).unwrap();
/// let m = b.build().unwrap();
/// assert_eq!(m.element(1, 2).unwrap(), &BigInt::from(7));
/// assert_eq!(m.element(2, 1).unwrap(), &BigInt::from(0));
/// ```
#[derive(Debug, Clone)]
pub struct MatrixBuilder<T> {
    cells: Vec<Option<T>>,
    nrows: usize,
    ncols: usize,
}

impl<T: Scalar> MatrixBuilder<T> {
    /// Fails if either size is zero.
    pub fn new(nrows: usize, ncols: usize) -> Result<Self> {
        Matrix::<T>::check_size(nrows, ncols)?;
        Ok(Self {
            cells: vec![None; nrows * ncols],
            nrows,
            ncols,
        })
    }

    #[inline]
    pub fn row_size(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn column_size(&self) -> usize {
        self.ncols
    }

    /// Set the cell at 1-based `(row, column)`, replacing any earlier value.
    pub fn put(&mut self, row: usize, column: usize, element: T) -> Result<&mut Self> {
        if row == 0 || row > self.nrows || column == 0 || column > self.ncols {
            return Err(Error::CellOutOfBounds {
                row,
                column,
                rows: self.nrows,
                columns: self.ncols,
            });
        }
        self.cells[(column - 1) * self.nrows + (row - 1)] = Some(element);
        Ok(self)
    }

    /// Set every cell to `element`.
    pub fn put_all(&mut self, element: T) -> &mut Self {
        for cell in &mut self.cells {
            *cell = Some(element.clone());
        }
        self
    }

    /// Freeze into a matrix.
    ///
    /// Fails with a missing-element error naming the first unset cell in
    /// row-major order.
    pub fn build(self) -> Result<Matrix<T>> {
        if let Some(pos) = first_unset_row_major(&self.cells, self.nrows, self.ncols) {
            return Err(Error::MissingElement {
                row: pos.0,
                column: pos.1,
            });
        }
        let data = self.cells.into_iter().flatten().collect();
        Ok(Matrix::from_parts(self.nrows, self.ncols, data))
    }
}

fn first_unset_row_major<T>(cells: &[Option<T>], nrows: usize, ncols: usize) -> Option<(usize, usize)> {
    for i in 0..nrows {
        for j in 0..ncols {
            if cells[j * nrows + i].is_none() {
                return Some((i + 1, j + 1));
            }
        }
    }
    None
}

/// Mutable staging table for a [`Vector`].
///
/// ```
/// use exactnum::{BigInt, Vector};
///
/// let mut b = Vector::builder(3).unwrap();
/// b.push(BigInt::from(1)).unwrap();
/// b.put(3, BigInt::from(3)).unwrap();
/// b.push(BigInt::from(2)).unwrap();
/// let v = b.build().unwrap();
/// assert_eq!(v.element(2).unwrap(), &BigInt::from(2));
/// ```
#[derive(Debug, Clone)]
pub struct VectorBuilder<T> {
    cells: Vec<Option<T>>,
}

impl<T: Scalar> VectorBuilder<T> {
    /// Fails if `size` is zero.
    pub fn new(size: usize) -> Result<Self> {
        Matrix::<T>::check_size(1, size)?;
        Ok(Self {
            cells: vec![None; size],
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Set the element at 1-based `index`, replacing any earlier value.
    pub fn put(&mut self, index: usize, element: T) -> Result<&mut Self> {
        if index == 0 || index > self.cells.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                bound: self.cells.len(),
            });
        }
        self.cells[index - 1] = Some(element);
        Ok(self)
    }

    /// Set the lowest index that is still unset.
    pub fn push(&mut self, element: T) -> Result<&mut Self> {
        match self.cells.iter().position(Option::is_none) {
            Some(free) => {
                self.cells[free] = Some(element);
                Ok(self)
            }
            None => Err(Error::VectorFull {
                size: self.cells.len(),
            }),
        }
    }

    /// Set every element to `element`.
    pub fn put_all(&mut self, element: T) -> &mut Self {
        for cell in &mut self.cells {
            *cell = Some(element.clone());
        }
        self
    }

    /// Freeze into a vector; fails on the first unset index.
    pub fn build(self) -> Result<Vector<T>> {
        if let Some(free) = self.cells.iter().position(Option::is_none) {
            return Err(Error::MissingVectorElement { index: free + 1 });
        }
        Ok(Vector::from_parts(self.cells.into_iter().flatten().collect()))
    }
}
