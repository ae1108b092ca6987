// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for sequence construction and term production.
//!
//! Generators only fail in these ways:
//! - At construction, when the configuration is malformed ([`ConfigurationError`]).
//! - At construction, when a recurrence skip-ahead power does not fit in `i64`
//!   ([`SequenceError::PowerOverflow`]).
//! - Mid-stream, when the next term no longer fits the native integer type
//!   ([`SequenceError::Overflow`]).
//!
//! Overflow is always reported, never wrapped. A generator that reports overflow
//! leaves its state untouched, so asking again reports the same error.

use thiserror::Error;

/// Malformed generator configuration, detected at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The recurrence has a different number of coefficients and initial terms.
    #[error("recurrence has {coefficients} coefficients but {initial} initial terms")]
    LengthMismatch { coefficients: usize, initial: usize },

    /// The recurrence has order zero.
    #[error("recurrence order must be at least 1")]
    EmptyRecurrence,

    /// The Kolakoski generating pattern has no values.
    #[error("generating pattern must not be empty")]
    EmptyPattern,

    /// A Kolakoski generating pattern value is zero.
    #[error("generating pattern value at position {position} must be positive")]
    NonPositivePatternValue { position: usize },

    /// A Kolakoski generating pattern value is a longer run than is allowed.
    #[error("generating pattern value {value} at position {position} exceeds the maximum run length {max}")]
    PatternValueTooLarge { position: usize, value: u64, max: u64 },

    /// A look-and-say seed is empty or contains a non-digit.
    #[error("look-and-say seed {seed:?} must be a non-empty string of decimal digits")]
    InvalidSeed { seed: String },
}

/// Errors from matrix construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// `left.cols != right.rows` in a product.
    #[error("cannot multiply {left_rows}x{left_cols} matrix by {right_rows}x{right_cols} matrix")]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// Exponentiation requested on a non-square matrix.
    #[error("matrix power requires a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Rows of different lengths passed to [`crate::matrix::Matrix::from_rows`].
    #[error("row {row} has {found} entries, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A matrix with no rows or no columns.
    #[error("matrix must have at least one row and one column")]
    Empty,

    /// An entry of the result does not fit in `i64`.
    #[error("matrix entry overflowed i64")]
    Overflow,
}

/// Errors surfaced by [`crate::engine::Producer`] implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Matrix(#[from] MatrixError),

    /// Term `index` (zero-based, counted from the first emitted term) does not
    /// fit in the generator's integer type.
    #[error("{sequence}: term {index} overflows the native integer type")]
    Overflow { sequence: &'static str, index: u64 },

    /// The companion matrix power `M^exponent` has an entry outside `i64`.
    ///
    /// Only skip-ahead reports this; the terms being skipped to may still fit.
    #[error("{sequence}: companion matrix power {exponent} overflows i64")]
    PowerOverflow {
        sequence: &'static str,
        exponent: u64,
    },

    /// A self-referential lookup reached past the end of the memo.
    ///
    /// This is an internal invariant violation and is never expected.
    #[error("{sequence}: memo lookup at {index} but only {len} entries exist")]
    MemoIndex {
        sequence: &'static str,
        index: usize,
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_display() {
        let err = ConfigurationError::LengthMismatch {
            coefficients: 2,
            initial: 3,
        };
        assert_eq!(
            err.to_string(),
            "recurrence has 2 coefficients but 3 initial terms"
        );
    }

    #[test]
    fn test_configuration_converts_into_sequence_error() {
        let err: SequenceError = ConfigurationError::EmptyPattern.into();
        assert_eq!(
            err.to_string(),
            "invalid configuration: generating pattern must not be empty"
        );
    }

    #[test]
    fn test_matrix_error_is_transparent() {
        let err: SequenceError = MatrixError::DimensionMismatch {
            left_rows: 2,
            left_cols: 3,
            right_rows: 2,
            right_cols: 2,
        }
        .into();
        assert_eq!(err.to_string(), "cannot multiply 2x3 matrix by 2x2 matrix");
    }

    #[test]
    fn test_overflow_display() {
        let err = SequenceError::Overflow {
            sequence: "Catalan",
            index: 37,
        };
        assert_eq!(
            err.to_string(),
            "Catalan: term 37 overflows the native integer type"
        );
    }

    #[test]
    fn test_power_overflow_display() {
        let err = SequenceError::PowerOverflow {
            sequence: "LinearRecurrence",
            exponent: 100,
        };
        assert_eq!(
            err.to_string(),
            "LinearRecurrence: companion matrix power 100 overflows i64"
        );
    }
}
