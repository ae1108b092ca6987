// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Validated definition of a linear recurrence.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ConfigurationError, SequenceError};

/// Coefficients and initial terms of an order-`d` linear recurrence.
///
/// Both lists are ordered newest first. With coefficients `c[0..d]` and
/// state window `w = [f(n+d-1), ..., f(n)]`, the next term is
///
/// ```text
/// f(n+d) = c[0]*f(n+d-1) + c[1]*f(n+d-2) + ... + c[d-1]*f(n)
/// ```
///
/// The generated sequence starts with `initial[0]`. For example Fibonacci is
/// `coefficients = [1, 1]`, `initial = [1, 0]`, producing `1, 1, 2, 3, 5, ...`.
///
/// Invariants (checked by [`RecurrenceSpec::new`]): `d >= 1` and
/// `coefficients.len() == initial.len()`. Deserialization goes through the same
/// check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RecurrenceSpec {
    coefficients: Vec<i64>,
    initial: Vec<i64>,
}

/// Unvalidated wire form of [`RecurrenceSpec`].
#[derive(Deserialize)]
struct RawRecurrenceSpec {
    coefficients: Vec<i64>,
    initial: Vec<i64>,
}

impl RecurrenceSpec {
    /// Validate and build a recurrence definition.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::EmptyRecurrence`] if both lists are empty
    /// - [`ConfigurationError::LengthMismatch`] if the lists differ in length
    pub fn new(
        coefficients: impl Into<Vec<i64>>,
        initial: impl Into<Vec<i64>>,
    ) -> Result<Self, ConfigurationError> {
        let coefficients = coefficients.into();
        let initial = initial.into();
        if coefficients.len() != initial.len() {
            return Err(ConfigurationError::LengthMismatch {
                coefficients: coefficients.len(),
                initial: initial.len(),
            });
        }
        if coefficients.is_empty() {
            return Err(ConfigurationError::EmptyRecurrence);
        }
        Ok(Self {
            coefficients,
            initial,
        })
    }

    /// Fibonacci numbers 1, 1, 2, 3, 5, ... (OEIS A000045 from F(1)).
    pub fn fibonacci() -> Self {
        Self {
            coefficients: vec![1, 1],
            initial: vec![1, 0],
        }
    }

    /// Lucas numbers 2, 1, 3, 4, 7, ... (OEIS A000032).
    pub fn lucas() -> Self {
        Self {
            coefficients: vec![1, 1],
            initial: vec![2, -1],
        }
    }

    /// The order `d` of the recurrence.
    pub fn order(&self) -> usize {
        self.coefficients.len()
    }

    pub fn coefficients(&self) -> &[i64] {
        &self.coefficients
    }

    pub fn initial(&self) -> &[i64] {
        &self.initial
    }

    /// Compute term `n` by unrolling the recurrence one step at a time.
    ///
    /// This is the O(n*d) reference against which the matrix engine is checked.
    pub fn unrolled(&self, n: u64) -> Result<i64, SequenceError> {
        let overflow = |index| SequenceError::Overflow {
            sequence: "RecurrenceSpec::unrolled",
            index,
        };

        let mut window = self.initial.clone();
        for step in 0..n {
            let mut next: i128 = 0;
            for (&c, &f) in self.coefficients.iter().zip(&window) {
                next = next
                    .checked_add(i128::from(c) * i128::from(f))
                    .ok_or_else(|| overflow(step + 1))?;
            }
            let next = i64::try_from(next).map_err(|_| overflow(step + 1))?;
            window.rotate_right(1);
            window[0] = next;
        }
        Ok(window[0])
    }
}

impl<'de> Deserialize<'de> for RecurrenceSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawRecurrenceSpec::deserialize(deserializer)?;
        Self::new(raw.coefficients, raw.initial).map_err(serde::de::Error::custom)
    }
}
