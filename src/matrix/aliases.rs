//! Type aliases for the four element domains.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use super::{Matrix, Vector};

// ── Real domains ────────────────────────────────────────────────────

/// Matrix over arbitrary-precision integers.
pub type IntMatrix = Matrix<BigInt>;
/// Matrix over arbitrary-precision decimals.
pub type DecimalMatrix = Matrix<BigDecimal>;

/// Vector over arbitrary-precision integers.
pub type IntVector = Vector<BigInt>;
/// Vector over arbitrary-precision decimals.
pub type DecimalVector = Vector<BigDecimal>;

// ── Complex domains (behind `complex` feature) ──────────────────────

/// Matrix over Gaussian integers.
#[cfg(feature = "complex")]
pub type ComplexIntMatrix = Matrix<num_complex::Complex<BigInt>>;
/// Matrix over complex decimals.
#[cfg(feature = "complex")]
pub type ComplexDecimalMatrix = Matrix<num_complex::Complex<BigDecimal>>;

/// Vector over Gaussian integers.
#[cfg(feature = "complex")]
pub type ComplexIntVector = Vector<num_complex::Complex<BigInt>>;
/// Vector over complex decimals.
#[cfg(feature = "complex")]
pub type ComplexDecimalVector = Vector<num_complex::Complex<BigDecimal>>;
