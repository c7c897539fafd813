//! # exactnum
//!
//! Arbitrary-precision numeric algebra: immutable matrices and vectors over
//! big integers, big decimals, and complex numbers built on each, with an
//! iterative decimal square root behind every Euclidean-type norm.
//!
//! ## Quick start
//!
//! ```
//! use exactnum::{BigDecimal, BigInt, Matrix, SqrtContext, Vector};
//!
//! let a = Matrix::from_rows(2, 2, &[1, 2, 3, 4].map(BigInt::from)).unwrap();
//! assert_eq!(a.determinant().unwrap(), BigInt::from(-2));
//! assert_eq!(a.trace().unwrap(), BigInt::from(5));
//! assert!(!a.is_invertible().unwrap()); // -2 is not a unit of the integers
//!
//! let v = Vector::from_vec(vec![BigInt::from(3), BigInt::from(4)]).unwrap();
//! assert_eq!(v.taxicab_norm(), BigInt::from(7));
//! assert_eq!(v.euclidean_norm(&SqrtContext::default()), BigDecimal::from(5));
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: [`Matrix<T>`] and [`Vector<T>`], 1-based, immutable,
//!   heap-allocated. Element-wise arithmetic, products, transpose, minors,
//!   trace, determinant, structural predicates, norms, and distances.
//!   [`MatrixBuilder`] / [`VectorBuilder`] stage values before freezing.
//!
//! - [`traits`]: Element trait hierarchy:
//!   - [`Scalar`]: every matrix element (`BigInt`, `BigDecimal`,
//!     `Complex<BigInt>`, `Complex<BigDecimal>`)
//!   - [`Real`]: the ordered value type of norms (`BigInt`, `BigDecimal`)
//!
//! - [`context`]: [`MathContext`] (significant digits + rounding mode),
//!   [`SqrtContext`] (convergence contract of the square root), and the
//!   [`Rounding`] policy every algorithm is written against. [`Exact`] keeps
//!   full precision.
//!
//! - [`sqrt`]: Heron square root for decimals and integers, perfect-square
//!   detection.
//!
//! - [`complex`]: Gaussian integers and complex decimals: conjugate,
//!   absolute value, division, powers, real 2x2 embedding.
//!
//! ## Exact and context arithmetic
//!
//! Every vector and matrix operation has a `_with` twin taking a
//! [`Rounding`] policy. Passing a [`MathContext`] rounds the result of each
//! elementary add, subtract, and multiply step:
//!
//! ```
//! use exactnum::{BigDecimal, Matrix, MathContext, RoundingMode};
//! use std::str::FromStr;
//!
//! let d = |s: &str| BigDecimal::from_str(s).unwrap();
//! let m = Matrix::from_rows(2, 2, &[d("1.11"), d("2.22"), d("3.33"), d("4.44")]).unwrap();
//! let ctx = MathContext::new(3, RoundingMode::HalfUp).unwrap();
//! assert_eq!(m.determinant().unwrap(), d("-2.4642"));
//! assert_eq!(m.determinant_with(&ctx).unwrap(), d("-2.46"));
//! ```
//!
//! ## Cargo features
//!
//! | Feature   | Default | Description |
//! |-----------|---------|-------------|
//! | `complex` | yes     | `Complex<BigInt>` / `Complex<BigDecimal>` domains via `num-complex` |

pub mod context;
pub mod error;
pub mod matrix;
mod permutation;
pub mod sqrt;
pub mod traits;

#[cfg(feature = "complex")]
pub mod complex;

pub use context::{Exact, MathContext, Rounding, SqrtContext};
pub use error::{Error, Result};
pub use matrix::{
    DecimalMatrix, DecimalVector, IntMatrix, IntVector, Matrix, MatrixBuilder, Vector,
    VectorBuilder,
};
#[cfg(feature = "complex")]
pub use matrix::{ComplexDecimalMatrix, ComplexDecimalVector, ComplexIntMatrix, ComplexIntVector};
pub use traits::{Real, Scalar};

pub use bigdecimal::{BigDecimal, RoundingMode};
pub use num_bigint::BigInt;

#[cfg(feature = "complex")]
pub use complex::{Complex, ComplexExt, DecimalComplexExt};
