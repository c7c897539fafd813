use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::context::{Exact, Rounding, SqrtContext};
use crate::error::{Error, Result};
use crate::traits::{Real, Scalar};

use super::builder::VectorBuilder;
use super::{sum_of_products, Matrix};

/// Immutable vector with 1-based indexing (wraps a 1×N [`Matrix`]).
///
/// Every method with a `_with` suffix takes a [`Rounding`] policy and
/// rounds each elementary step; the plain method is the same algorithm
/// under [`Exact`].
///
/// # Examples
///
/// ```
/// use exactnum::{BigDecimal, BigInt, SqrtContext, Vector};
///
/// let v = Vector::from_vec(vec![BigInt::from(3), BigInt::from(4)]).unwrap();
/// assert_eq!(v.taxicab_norm(), BigInt::from(7));
/// assert_eq!(v.euclidean_norm_pow2(), BigInt::from(25));
/// assert_eq!(v.euclidean_norm(&SqrtContext::default()), BigDecimal::from(5));
/// assert_eq!(v.max_norm(), BigInt::from(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vector<T> {
    pub(crate) inner: Matrix<T>,
}

impl<T> Vector<T> {
    pub(crate) fn from_parts(data: Vec<T>) -> Self {
        let n = data.len();
        Self {
            inner: Matrix::from_parts(1, n, data),
        }
    }

    /// Create a vector by calling `f(index)` for each 1-based index.
    pub fn from_fn(size: usize, f: impl Fn(usize) -> T) -> Result<Self> {
        Ok(Self {
            inner: Matrix::from_fn(1, size, |_, j| f(j))?,
        })
    }

    /// Number of elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.inner.column_size()
    }

    /// Element at 1-based `index`.
    pub fn element(&self, index: usize) -> Result<&T> {
        if index == 0 || index > self.size() {
            return Err(Error::IndexOutOfBounds {
                index,
                bound: self.size(),
            });
        }
        Ok(self.inner.at(0, index - 1))
    }

    /// Iterate over the elements in index order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.inner.data.iter()
    }

    /// Elements as a slice, index `i` at position `i - 1`.
    #[inline]
    pub fn elements(&self) -> &[T] {
        &self.inner.data
    }

    /// Apply `f` to every element.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Vector<U> {
        Vector {
            inner: self.inner.map(f),
        }
    }

    fn check_same_size(&self, other: &Self) -> Result<()> {
        if self.size() != other.size() {
            return Err(Error::SizeMismatch {
                expected: self.size(),
                got: other.size(),
            });
        }
        Ok(())
    }
}

// ── Construction ────────────────────────────────────────────────────

impl<T: Scalar> Vector<T> {
    /// Staging builder for a vector of `size` elements.
    ///
    /// ```
    /// use exactnum::{BigInt, Vector};
    /// let mut b = Vector::builder(2).unwrap();
    /// b.push(BigInt::from(1)).unwrap().push(BigInt::from(2)).unwrap();
    /// assert_eq!(b.build().unwrap().element(2).unwrap(), &BigInt::from(2));
    /// ```
    pub fn builder(size: usize) -> Result<VectorBuilder<T>> {
        VectorBuilder::new(size)
    }

    /// Fails if `elements` is empty.
    pub fn from_vec(elements: Vec<T>) -> Result<Self> {
        Matrix::<T>::check_size(1, elements.len())?;
        Ok(Self::from_parts(elements))
    }

    /// All-zero vector of length `size`.
    pub fn zero(size: usize) -> Result<Self> {
        let mut builder = VectorBuilder::new(size)?;
        builder.put_all(T::zero());
        builder.build()
    }
}

// ── Arithmetic ──────────────────────────────────────────────────────

impl<T: Scalar> Vector<T> {
    /// Element-wise sum; fails unless both vectors have the same size.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.add_with(other, &Exact)
    }

    /// [`add`](Self::add) under `policy`.
    pub fn add_with<P: Rounding<T>>(&self, other: &Self, policy: &P) -> Result<Self> {
        self.check_same_size(other)?;
        Ok(Self::from_parts(
            self.iter().zip(other.iter()).map(|(a, b)| policy.add(a, b)).collect(),
        ))
    }

    /// Element-wise difference; fails unless both vectors have the same size.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.subtract_with(other, &Exact)
    }

    /// [`subtract`](Self::subtract), rounding each elementary step with `policy`.
    pub fn subtract_with<P: Rounding<T>>(&self, other: &Self, policy: &P) -> Result<Self> {
        self.check_same_size(other)?;
        Ok(Self::from_parts(
            self.iter()
                .zip(other.iter())
                .map(|(a, b)| policy.subtract(a, b))
                .collect(),
        ))
    }

    /// Multiply every element by `scalar`.
    pub fn scalar_multiply(&self, scalar: &T) -> Self {
        self.scalar_multiply_with(scalar, &Exact)
    }

    /// Same as [`scalar_multiply`](Self::scalar_multiply) with every step rounded by `policy`.
    pub fn scalar_multiply_with<P: Rounding<T>>(&self, scalar: &T, policy: &P) -> Self {
        Self::from_parts(self.iter().map(|x| policy.multiply(scalar, x)).collect())
    }

    /// Scalar multiple by `-1`.
    pub fn negate(&self) -> Self {
        self.scalar_multiply(&-T::one())
    }

    /// [`negate`](Self::negate) under `policy`.
    pub fn negate_with<P: Rounding<T>>(&self, policy: &P) -> Self {
        self.scalar_multiply_with(&-T::one(), policy)
    }

    /// `Σ self[i] * other[i]`.
    pub fn dot_product(&self, other: &Self) -> Result<T> {
        self.dot_product_with(other, &Exact)
    }

    /// [`dot_product`](Self::dot_product), rounding each elementary step with `policy`.
    pub fn dot_product_with<P: Rounding<T>>(&self, other: &Self, policy: &P) -> Result<T> {
        self.check_same_size(other)?;
        Ok(sum_of_products(self.iter(), other.iter(), policy))
    }

    /// Outer product: a `self.size() x other.size()` matrix with cell
    /// `(i, j) = self[i] * other[j]`.
    ///
    /// ```
    /// use exactnum::{BigInt, Vector};
    /// let u = Vector::from_vec(vec![BigInt::from(1), BigInt::from(2)]).unwrap();
    /// let v = Vector::from_vec(vec![BigInt::from(3), BigInt::from(4), BigInt::from(5)]).unwrap();
    /// let m = u.dyadic_product(&v);
    /// assert_eq!(m.row_size(), 2);
    /// assert_eq!(m.column_size(), 3);
    /// assert_eq!(m.element(2, 3).unwrap(), &BigInt::from(10));
    /// ```
    pub fn dyadic_product(&self, other: &Self) -> Matrix<T> {
        self.dyadic_product_with(other, &Exact)
    }

    /// Same as [`dyadic_product`](Self::dyadic_product) with every step rounded by `policy`.
    pub fn dyadic_product_with<P: Rounding<T>>(&self, other: &Self, policy: &P) -> Matrix<T> {
        let mut data = Vec::with_capacity(self.size() * other.size());
        for b in other.iter() {
            for a in self.iter() {
                data.push(policy.multiply(a, b));
            }
        }
        Matrix::from_parts(self.size(), other.size(), data)
    }

    /// Whether the dot product with `other` equals zero.
    pub fn orthogonal_to(&self, other: &Self) -> Result<bool> {
        self.orthogonal_to_with(other, &Exact)
    }

    /// [`orthogonal_to`](Self::orthogonal_to) under `policy`.
    pub fn orthogonal_to_with<P: Rounding<T>>(&self, other: &Self, policy: &P) -> Result<bool> {
        Ok(self.dot_product_with(other, policy)?.is_zero())
    }
}

// ── Norms ───────────────────────────────────────────────────────────

impl<T: Scalar> Vector<T> {
    /// `Σ |x|`.
    pub fn taxicab_norm(&self) -> T::Norm {
        self.taxicab_norm_with(&Exact)
    }

    /// [`taxicab_norm`](Self::taxicab_norm), rounding each elementary step with `policy`.
    pub fn taxicab_norm_with<P: Rounding<T::Norm>>(&self, policy: &P) -> T::Norm {
        self.iter().fold(T::Norm::zero(), |acc, x| {
            policy.add(&acc, &policy.round(x.modulus()))
        })
    }

    /// `Σ |x|²`; equal to `dot_product(self)` for real domains.
    pub fn euclidean_norm_pow2(&self) -> T::NormPow2 {
        self.euclidean_norm_pow2_with(&Exact)
    }

    /// Same as [`euclidean_norm_pow2`](Self::euclidean_norm_pow2) with every step rounded by `policy`.
    pub fn euclidean_norm_pow2_with<P: Rounding<T::NormPow2>>(&self, policy: &P) -> T::NormPow2 {
        self.iter().fold(T::NormPow2::zero(), |acc, x| {
            policy.add(&acc, &policy.round(x.modulus_pow2()))
        })
    }

    /// `sqrt(euclidean_norm_pow2())`.
    pub fn euclidean_norm(&self, ctx: &SqrtContext) -> BigDecimal {
        self.euclidean_norm_pow2().sqrt_with(ctx)
    }

    /// [`euclidean_norm`](Self::euclidean_norm) under `policy`.
    pub fn euclidean_norm_with<P: Rounding<T::NormPow2>>(
        &self,
        policy: &P,
        ctx: &SqrtContext,
    ) -> BigDecimal {
        self.euclidean_norm_pow2_with(policy).sqrt_with(ctx)
    }

    /// `max |x|`.
    pub fn max_norm(&self) -> T::Norm {
        self.max_norm_with(&Exact)
    }

    /// [`max_norm`](Self::max_norm), rounding each elementary step with `policy`.
    pub fn max_norm_with<P: Rounding<T::Norm>>(&self, policy: &P) -> T::Norm {
        self.iter()
            .map(|x| policy.round(x.modulus()))
            .max()
            .unwrap_or_else(T::Norm::zero)
    }
}

// ── Distances ───────────────────────────────────────────────────────
//
// Always `subtract` then the matching norm, so each distance agrees with
// its norm by construction.

impl<T: Scalar> Vector<T> {
    /// `taxicab_norm(self - other)`.
    pub fn taxicab_distance(&self, other: &Self) -> Result<T::Norm> {
        Ok(self.subtract(other)?.taxicab_norm())
    }

    /// Same as [`taxicab_distance`](Self::taxicab_distance) with every step rounded by `policy`.
    pub fn taxicab_distance_with<P>(&self, other: &Self, policy: &P) -> Result<T::Norm>
    where
        P: Rounding<T> + Rounding<T::Norm>,
    {
        Ok(self.subtract_with(other, policy)?.taxicab_norm_with(policy))
    }

    /// `euclidean_norm(self - other)`.
    pub fn euclidean_distance(&self, other: &Self, ctx: &SqrtContext) -> Result<BigDecimal> {
        Ok(self.subtract(other)?.euclidean_norm(ctx))
    }

    /// [`euclidean_distance`](Self::euclidean_distance) under `policy`.
    pub fn euclidean_distance_with<P>(
        &self,
        other: &Self,
        policy: &P,
        ctx: &SqrtContext,
    ) -> Result<BigDecimal>
    where
        P: Rounding<T> + Rounding<T::NormPow2>,
    {
        Ok(self.subtract_with(other, policy)?.euclidean_norm_with(policy, ctx))
    }

    /// `max_norm(self - other)`.
    pub fn max_distance(&self, other: &Self) -> Result<T::Norm> {
        Ok(self.subtract(other)?.max_norm())
    }

    /// [`max_distance`](Self::max_distance), rounding each elementary step with `policy`.
    pub fn max_distance_with<P>(&self, other: &Self, policy: &P) -> Result<T::Norm>
    where
        P: Rounding<T> + Rounding<T::Norm>,
    {
        Ok(self.subtract_with(other, policy)?.max_norm_with(policy))
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl<T> From<Vector<T>> for Matrix<T> {
    /// A vector as a 1×N row matrix.
    fn from(v: Vector<T>) -> Self {
        v.inner
    }
}

impl<T: Clone> From<&Vector<T>> for Matrix<T> {
    fn from(v: &Vector<T>) -> Self {
        v.inner.clone()
    }
}
