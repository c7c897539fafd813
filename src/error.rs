use bigdecimal::BigDecimal;
use thiserror::Error;

/// All errors returned by `exactnum`.
///
/// Variants fall into three classes:
/// - missing element: a builder cell was never populated,
/// - illegal argument: the caller passed something that violates a
///   precondition (mismatched sizes, out-of-range index, bad context),
/// - illegal state: the operation is undefined for this value
///   (determinant of a non-square matrix, inverse of a non-unit).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A matrix builder cell was never set before `build()`.
    #[error("matrix element ({row}, {column}) was never set")]
    MissingElement { row: usize, column: usize },

    /// A vector builder index was never set before `build()`.
    #[error("vector element {index} was never set")]
    MissingVectorElement { index: usize },

    /// Operand row/column counts do not match.
    #[error(
        "dimension mismatch: expected {}x{}, got {}x{}",
        .expected.0, .expected.1, .got.0, .got.1
    )]
    DimensionMismatch {
        /// Expected `(rows, columns)`.
        expected: (usize, usize),
        /// Got `(rows, columns)`.
        got: (usize, usize),
    },

    /// Vector sizes (or a matrix column count and a vector size) do not match.
    #[error("size mismatch: expected {expected}, got {got}")]
    SizeMismatch { expected: usize, got: usize },

    /// A 1-based vector index lies outside `[1, bound]`.
    #[error("index {index} out of range [1, {bound}]")]
    IndexOutOfBounds { index: usize, bound: usize },

    /// A 1-based matrix cell lies outside the matrix.
    #[error("cell ({row}, {column}) out of range for {rows}x{columns} matrix")]
    CellOutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    /// Matrices and vectors need at least one row and one column.
    #[error("invalid size {rows}x{columns}: sizes must be positive")]
    InvalidSize { rows: usize, columns: usize },

    /// `push` on a vector builder with every index already set.
    #[error("vector builder of size {size} has no free index")]
    VectorFull { size: usize },

    /// Square root of a negative number.
    #[error("negative value {value} has no real square root")]
    NegativeValue { value: BigDecimal },

    #[error("negative exponent {exponent}")]
    NegativeExponent { exponent: i64 },

    /// Division by an element that has no inverse in its domain.
    #[error("divisor {divisor} is not invertible")]
    NotInvertibleDivisor { divisor: String },

    /// A `MathContext` or `SqrtContext` parameter is out of range.
    #[error("invalid context: {reason}, got {value}")]
    InvalidContext { reason: &'static str, value: String },

    /// The operation is only defined for square matrices.
    #[error("operation requires a square matrix, got {rows}x{columns}")]
    NotSquare { rows: usize, columns: usize },

    /// The element has no inverse in its domain.
    #[error("{value} is not invertible")]
    NotInvertible { value: String },

    /// The operation is only defined for one particular square size.
    #[error("operation requires a {expected}x{expected} matrix, got {got}x{got}")]
    UnsupportedSize { expected: usize, got: usize },
}

impl Error {
    /// Whether this error reports an unset builder cell.
    pub fn is_missing_element(&self) -> bool {
        matches!(
            self,
            Self::MissingElement { .. } | Self::MissingVectorElement { .. }
        )
    }

    /// Whether this error reports an operation that is undefined for the
    /// receiver's current value.
    pub fn is_illegal_state(&self) -> bool {
        matches!(
            self,
            Self::NotSquare { .. } | Self::NotInvertible { .. } | Self::UnsupportedSize { .. }
        )
    }

    /// Whether this error reports a violated argument precondition.
    pub fn is_illegal_argument(&self) -> bool {
        !self.is_missing_element() && !self.is_illegal_state()
    }
}

/// Convenience alias used throughout `exactnum`.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_both_sizes() {
        let err = Error::DimensionMismatch {
            expected: (2, 3),
            got: (3, 2),
        };
        assert_eq!(err.to_string(), "dimension mismatch: expected 2x3, got 3x2");

        let err = Error::SizeMismatch { expected: 4, got: 5 };
        assert_eq!(err.to_string(), "size mismatch: expected 4, got 5");
    }

    #[test]
    fn classification() {
        assert!(Error::MissingElement { row: 1, column: 2 }.is_missing_element());
        assert!(Error::NotSquare { rows: 2, columns: 3 }.is_illegal_state());
        assert!(Error::IndexOutOfBounds { index: 0, bound: 3 }.is_illegal_argument());
        assert!(!Error::NotInvertible { value: "2".into() }.is_illegal_argument());
        assert!(Error::NegativeExponent { exponent: -1 }.is_illegal_argument());
    }

    #[test]
    fn invalid_context_names_rejected_value() {
        let err = Error::InvalidContext {
            reason: "precision must be positive",
            value: "0".into(),
        };
        assert!(err.is_illegal_argument());
        assert_eq!(err.to_string(), "invalid context: precision must be positive, got 0");
    }
}
