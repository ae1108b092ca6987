// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Linear-recurrence generator driven by matrix exponentiation.
//!
//! # Algorithm
//!
//! Given a [`RecurrenceSpec`] of order `d`:
//!
//! 1. Build the `d x d` companion matrix `M` once, and the `d x 1` column of
//!    initial terms `b`.
//! 2. Start the current power at `P = M^jump`, computed by repeated squaring in
//!    O(log jump) matrix products.
//! 3. Term `n` (counted from the first emitted term) is row 0 of `P * b`, with
//!    `P = M^(jump + n)`. Before each term after the first, `P` is advanced by
//!    one right multiplication by `M`.
//! 4. The entries of `P` can leave `i64` long before the terms do (a constant
//!    sequence can have an exponentially growing companion power). From then on
//!    the generator drops `P` and advances the state column `s = P * b`, which
//!    holds the `d` most recent terms, by `s <- M * s`. Every row but the first
//!    is a copy of an earlier term, so an overflow there is a genuine term
//!    overflow.
//!
//! The result matches unrolling the recurrence directly (see
//! [`RecurrenceSpec::unrolled`]), but skipping ahead is logarithmic rather than
//! linear in `jump`.
//!
//! # Example
//!
//! ```
//! use lazy_sequences::engine::Producer;
//! use lazy_sequences::recurrence::{LinearRecurrence, RecurrenceSpec};
//!
//! let spec = RecurrenceSpec::new([1, 1], [1, 0]).unwrap();
//!
//! let mut fib = LinearRecurrence::new(spec.clone()).unwrap();
//! assert_eq!(fib.take(5).unwrap(), vec![1, 1, 2, 3, 5]);
//!
//! // Skip the first ten terms in O(log 10) matrix products.
//! let mut skipped = LinearRecurrence::with_jump(spec, 10).unwrap();
//! assert_eq!(skipped.next_term().unwrap(), 89);
//! ```

pub mod spec;

pub use spec::RecurrenceSpec;

use tracing::debug;

use crate::engine::Producer;
use crate::error::{MatrixError, SequenceError};
use crate::matrix::Matrix;

const NAME: &str = "LinearRecurrence";

/// Produces the terms of a linear recurrence, starting at index `jump`.
///
/// # State
///
/// - `companion`: the companion matrix `M`, built once and never modified
/// - `base`: the column of initial terms
/// - `power`: `M^jump` before the first term, then `M^(jump + emitted - 1)`,
///   the power used for the most recent term; `None` once it no longer fits
///   in `i64`
/// - `state`: the column `[f(k), f(k-1), ...]` for the most recent term `k`
///   (the initial column before the first term)
///
/// `power` is advanced lazily, just before it is needed, so a term that fits
/// in `i64` is never blocked by an overflow in the term after it.
#[derive(Debug, Clone)]
pub struct LinearRecurrence {
    spec: RecurrenceSpec,
    companion: Matrix,
    base: Matrix,
    power: Option<Matrix>,
    state: Matrix,
    jump: u64,
    emitted: u64,
}

impl LinearRecurrence {
    /// Create a generator starting at the first term of the recurrence.
    pub fn new(spec: RecurrenceSpec) -> Result<Self, SequenceError> {
        Self::with_jump(spec, 0)
    }

    /// Create a generator whose first term is term `jump` of the recurrence.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::PowerOverflow`] if an entry of `M^jump` does
    /// not fit in `i64`. This can happen even when the skipped-to terms are
    /// small.
    pub fn with_jump(spec: RecurrenceSpec, jump: u64) -> Result<Self, SequenceError> {
        let companion = Matrix::companion(spec.coefficients())?;
        let base = Matrix::column(spec.initial())?;
        let power = companion.pow(jump).map_err(|e| match e {
            MatrixError::Overflow => SequenceError::PowerOverflow {
                sequence: NAME,
                exponent: jump,
            },
            other => other.into(),
        })?;

        debug!(order = spec.order(), jump, "Created linear recurrence");

        Ok(Self {
            spec,
            companion,
            state: base.clone(),
            base,
            power: Some(power),
            jump,
            emitted: 0,
        })
    }

    pub fn spec(&self) -> &RecurrenceSpec {
        &self.spec
    }

    /// The companion matrix `M`.
    pub fn companion(&self) -> &Matrix {
        &self.companion
    }

    /// The power matrix used for the most recent term, `M^(jump + emitted - 1)`,
    /// or `M^jump` before the first term.
    ///
    /// `None` once the power has outgrown `i64` and terms are advanced from the
    /// state column instead.
    pub fn power(&self) -> Option<&Matrix> {
        self.power.as_ref()
    }

    /// Number of leading terms skipped at construction.
    pub fn jump(&self) -> u64 {
        self.jump
    }

    /// The next power (if it still fits) and state column, without committing
    /// either.
    fn advance(&self, index: u64) -> Result<(Option<Matrix>, Matrix), MatrixError> {
        let Some(power) = &self.power else {
            return Ok((None, self.companion.mul(&self.state)?));
        };
        if index == 0 {
            return Ok((Some(power.clone()), power.mul(&self.base)?));
        }
        match power.mul(&self.companion) {
            Ok(next) => {
                let state = next.mul(&self.base)?;
                Ok((Some(next), state))
            }
            Err(MatrixError::Overflow) => {
                debug!(index, "Companion power left i64, stepping the state column");
                Ok((None, self.companion.mul(&self.state)?))
            }
            Err(other) => Err(other),
        }
    }
}

/// Map a matrix overflow onto the index of the term being produced.
fn overflow_at(error: MatrixError, index: u64) -> SequenceError {
    match error {
        MatrixError::Overflow => SequenceError::Overflow {
            sequence: NAME,
            index,
        },
        other => other.into(),
    }
}

impl Producer for LinearRecurrence {
    type Item = i64;

    fn next_term(&mut self) -> Result<i64, SequenceError> {
        let index = self.emitted;
        let (power, state) = self.advance(index).map_err(|e| overflow_at(e, index))?;
        let term = state.get(0, 0);

        self.power = power;
        self.state = state;
        self.emitted += 1;
        Ok(term)
    }

    fn name(&self) -> &str {
        NAME
    }
}
