// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integer matrices with checked arithmetic.
//!
//! [`Matrix`] is the foundation of the linear-recurrence engine: the companion
//! matrix of a recurrence, raised to the n-th power, advances the recurrence's
//! state by n steps.
//!
//! Matrices are immutable values. [`Matrix::mul`] and [`Matrix::pow`] return new
//! matrices and never modify their operands.
//!
//! # Overflow
//!
//! Entries are `i64`. Each dot product is accumulated in `i128` and narrowed
//! once at the end, so intermediate cancellation never causes a spurious
//! overflow. A result entry outside the `i64` range is reported as
//! [`MatrixError::Overflow`].
//!
//! # Example
//!
//! ```
//! use lazy_sequences::matrix::Matrix;
//!
//! // Fibonacci Q-matrix: Q^n = [[F(n+1), F(n)], [F(n), F(n-1)]]
//! let q = Matrix::from_rows(vec![vec![1, 1], vec![1, 0]]).unwrap();
//! let q10 = q.pow(10).unwrap();
//!
//! assert_eq!(q10.get(0, 0), 89);
//! assert_eq!(q10.get(0, 1), 55);
//! ```

use std::fmt;

use crate::error::MatrixError;

/// A rectangular matrix of `i64`, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// Create a `rows x cols` matrix of zeros.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Empty`] if either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::Empty);
        }
        Ok(Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        })
    }

    /// Create the `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = 1;
        }
        Ok(m)
    }

    /// Create a matrix from a list of equally long rows.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, MatrixError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        let mut m = Self::zeros(rows.len(), cols)?;
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::Ragged {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            m.data[r * cols..(r + 1) * cols].copy_from_slice(&row);
        }
        Ok(m)
    }

    /// Create a column vector (`values.len() x 1`).
    pub fn column(values: &[i64]) -> Result<Self, MatrixError> {
        let mut m = Self::zeros(values.len(), 1)?;
        m.data.copy_from_slice(values);
        Ok(m)
    }

    /// Create the companion matrix of a linear recurrence.
    ///
    /// For coefficients `c[0..d]` the result is `d x d`: row 0 holds the
    /// coefficients, and row `i` (for `i >= 1`) has a single 1 in column
    /// `i - 1`. Multiplying it by the state vector `[f(n+d-1), ..., f(n)]`
    /// yields `[f(n+d), ..., f(n+1)]`.
    ///
    /// ```text
    /// | c0 c1 c2 |
    /// | 1  0  0  |
    /// | 0  1  0  |
    /// ```
    pub fn companion(coefficients: &[i64]) -> Result<Self, MatrixError> {
        let d = coefficients.len();
        let mut m = Self::zeros(d, d)?;
        m.data[..d].copy_from_slice(coefficients);
        for i in 1..d {
            m.data[i * d + (i - 1)] = 1;
        }
        Ok(m)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Get the entry at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()` or `col >= self.cols()`.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        assert!(
            row < self.rows && col < self.cols,
            "Matrix index ({}, {}) out of range for {}x{}",
            row,
            col,
            self.rows,
            self.cols
        );
        self.data[row * self.cols + col]
    }

    /// Borrow one row.
    pub fn row(&self, row: usize) -> &[i64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Matrix product `self * other`.
    ///
    /// # Errors
    ///
    /// - [`MatrixError::DimensionMismatch`] if `self.cols() != other.rows()`
    /// - [`MatrixError::Overflow`] if an entry of the product does not fit in `i64`
    pub fn mul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: other.rows,
                right_cols: other.cols,
            });
        }

        let mut data = Vec::with_capacity(self.rows * other.cols);
        for r in 0..self.rows {
            let lhs = self.row(r);
            for c in 0..other.cols {
                let mut sum: i128 = 0;
                for (k, &a) in lhs.iter().enumerate() {
                    let b = other.data[k * other.cols + c];
                    sum = sum
                        .checked_add(i128::from(a) * i128::from(b))
                        .ok_or(MatrixError::Overflow)?;
                }
                data.push(i64::try_from(sum).map_err(|_| MatrixError::Overflow)?);
            }
        }

        Ok(Matrix {
            rows: self.rows,
            cols: other.cols,
            data,
        })
    }

    /// Raise a square matrix to the `n`-th power by repeated squaring.
    ///
    /// Uses O(log n) multiplications. `pow(0)` is the identity. The base is only
    /// squared while higher bits of `n` remain, so no power larger than the
    /// result is ever formed.
    ///
    /// # Errors
    ///
    /// - [`MatrixError::NotSquare`] for non-square matrices
    /// - [`MatrixError::Overflow`] if the result does not fit in `i64`
    pub fn pow(&self, mut n: u64) -> Result<Matrix, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let mut result = Matrix::identity(self.rows)?;
        let mut base = self.clone();
        while n > 0 {
            if n & 1 == 1 {
                result = result.mul(&base)?;
            }
            n >>= 1;
            if n > 0 {
                base = base.mul(&base)?;
            }
        }
        Ok(result)
    }
}

impl fmt::Display for Matrix {
    /// Format one bracketed row per line, e.g. "[1 1]\n[1 0]".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (c, value) in self.row(r).iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fib_q() -> Matrix {
        Matrix::from_rows(vec![vec![1, 1], vec![1, 0]]).unwrap()
    }

    #[test]
    fn test_zeros_rejects_empty() {
        assert_eq!(Matrix::zeros(0, 3), Err(MatrixError::Empty));
        assert_eq!(Matrix::zeros(3, 0), Err(MatrixError::Empty));
        assert_eq!(Matrix::from_rows(vec![]), Err(MatrixError::Empty));
    }

    #[test]
    fn test_identity() {
        let id = Matrix::identity(3).unwrap();
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(id.get(r, c), i64::from(r == c));
            }
        }
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Matrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_companion_layout() {
        let m = Matrix::companion(&[2, 3, 5]).unwrap();
        assert_eq!(m.row(0), &[2, 3, 5]);
        assert_eq!(m.row(1), &[1, 0, 0]);
        assert_eq!(m.row(2), &[0, 1, 0]);
    }

    #[test]
    fn test_companion_order_one() {
        let m = Matrix::companion(&[3]).unwrap();
        assert_eq!(m, Matrix::from_rows(vec![vec![3]]).unwrap());
    }

    #[test]
    fn test_mul_rectangular() {
        let a = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let b = Matrix::column(&[1, 0, -1]).unwrap();
        let p = a.mul(&b).unwrap();
        assert_eq!((p.rows(), p.cols()), (2, 1));
        assert_eq!(p.get(0, 0), -2);
        assert_eq!(p.get(1, 0), -2);
    }

    #[test]
    fn test_mul_dimension_mismatch() {
        let a = Matrix::zeros(2, 3).unwrap();
        let b = Matrix::zeros(2, 2).unwrap();
        assert_eq!(
            a.mul(&b),
            Err(MatrixError::DimensionMismatch {
                left_rows: 2,
                left_cols: 3,
                right_rows: 2,
                right_cols: 2
            })
        );
    }

    #[test]
    fn test_mul_does_not_mutate_operands() {
        let a = fib_q();
        let b = fib_q();
        let _ = a.mul(&b).unwrap();
        assert_eq!(a, fib_q());
        assert_eq!(b, fib_q());
    }

    #[test]
    fn test_pow_zero_is_identity() {
        assert_eq!(fib_q().pow(0).unwrap(), Matrix::identity(2).unwrap());
    }

    #[test]
    fn test_pow_fibonacci() {
        let q = fib_q().pow(90).unwrap();
        assert_eq!(q.get(0, 1), 2_880_067_194_370_816_120);
        assert_eq!(q.get(0, 0), 4_660_046_610_375_530_309);
    }

    #[test]
    fn test_pow_largest_fitting_fibonacci() {
        // Q^91 holds F(92), the largest Fibonacci number below i64::MAX
        let q = fib_q().pow(91).unwrap();
        assert_eq!(q.get(0, 0), 7_540_113_804_746_346_429);
    }

    #[test]
    fn test_pow_overflow() {
        assert_eq!(fib_q().pow(92), Err(MatrixError::Overflow));
    }

    #[test]
    fn test_pow_not_square() {
        let m = Matrix::zeros(2, 3).unwrap();
        assert_eq!(m.pow(2), Err(MatrixError::NotSquare { rows: 2, cols: 3 }));
    }

    #[test]
    fn test_mul_cancellation_does_not_overflow() {
        // i64::MAX * 1 + i64::MAX * -1 = 0, even though the partial sum exceeds i64
        let a = Matrix::from_rows(vec![vec![i64::MAX, i64::MAX]]).unwrap();
        let b = Matrix::column(&[1, -1]).unwrap();
        assert_eq!(a.mul(&b).unwrap().get(0, 0), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", fib_q()), "[1 1]\n[1 0]");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_out_of_range() {
        fib_q().get(2, 0);
    }

    proptest! {
        #[test]
        fn test_pow_adds_exponents(
            a in -3i64..=3,
            b in -3i64..=3,
            c in -3i64..=3,
            m in 0u64..12,
            n in 0u64..12,
        ) {
            let base = Matrix::companion(&[a, b, c]).unwrap();
            let lhs = base.pow(m + n);
            let rhs = base.pow(m).and_then(|x| base.pow(n).and_then(|y| x.mul(&y)));
            prop_assert_eq!(lhs, rhs);
        }
    }
}
