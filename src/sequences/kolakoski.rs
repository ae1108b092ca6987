// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Kolakoski sequence over an arbitrary generating pattern.
//!
//! The sequence is self-describing: read as a list of run lengths, it reproduces
//! itself, while the values of successive runs cycle through the generating
//! pattern. With the default pattern `{1, 2}`:
//!
//! ```text
//! sequence:  1 2 2 1 1 2 1 2 2 1 2 2 1 1 2 1 ...
//! runs:      1|2 2|1 1|2|1|2 2|1|2 2|1 1|2|1 ...
//! lengths:   1  2   2  1 1  2  1  2   2  1 ...   (= the sequence)
//! values:    1  2   1  2 1  2  1  2   1  2 ...   (= the pattern, cycled)
//! ```
//!
//! # Algorithm
//!
//! The memo is extended one run at a time. Step `read`:
//!
//! 1. Take the value `v = pattern[read % pattern.len()]` and append it at
//!    position `write`.
//! 2. Read the run length `r = memo[read]`. The entry exists because every step
//!    appends at least one value, and may be the value just appended.
//! 3. Append `r - 1` further copies of `v`, completing a run of length `r`.
//!
//! [`Kolakoski::next_term`] returns `memo[emit]`, first extending the memo as
//! many steps as needed. Extension is a loop; it never recurses.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, trace};

use crate::engine::Producer;
use crate::error::{ConfigurationError, SequenceError};
use crate::memo::MemoTable;

const NAME: &str = "Kolakoski";

/// A non-empty list of positive integers, used cyclically as run values.
///
/// Every value is also a run length that is written out in full, so values are
/// capped at [`KolakoskiPattern::MAX_RUN_LENGTH`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct KolakoskiPattern(Vec<u64>);

impl KolakoskiPattern {
    /// Largest allowed pattern value, and so the longest single run.
    pub const MAX_RUN_LENGTH: u64 = 1 << 20;

    /// Validate a generating pattern.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::EmptyPattern`] if `values` is empty
    /// - [`ConfigurationError::NonPositivePatternValue`] if any value is zero
    /// - [`ConfigurationError::PatternValueTooLarge`] if any value exceeds
    ///   [`Self::MAX_RUN_LENGTH`]
    pub fn new(values: impl Into<Vec<u64>>) -> Result<Self, ConfigurationError> {
        let values = values.into();
        if values.is_empty() {
            return Err(ConfigurationError::EmptyPattern);
        }
        for (position, &value) in values.iter().enumerate() {
            if value == 0 {
                return Err(ConfigurationError::NonPositivePatternValue { position });
            }
            if value > Self::MAX_RUN_LENGTH {
                return Err(ConfigurationError::PatternValueTooLarge {
                    position,
                    value,
                    max: Self::MAX_RUN_LENGTH,
                });
            }
        }
        Ok(Self(values))
    }

    pub fn values(&self) -> &[u64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; an empty pattern cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The run value for run number `run`, cycling through the pattern.
    pub fn value_for_run(&self, run: usize) -> u64 {
        self.0[run % self.0.len()]
    }
}

impl Default for KolakoskiPattern {
    /// The classical pattern `{1, 2}`.
    fn default() -> Self {
        Self(vec![1, 2])
    }
}

impl<'de> Deserialize<'de> for KolakoskiPattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<u64>::deserialize(deserializer)?;
        Self::new(values).map_err(serde::de::Error::custom)
    }
}

/// Cursor positions into the Kolakoski memo.
///
/// All three only ever increase, and `emit <= write` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KolakoskiCursor {
    /// Next memo position to append to (equal to the memo length).
    pub write: usize,
    /// Memo position holding the length of the next run to append.
    pub read: usize,
    /// Next memo position to hand to the consumer.
    pub emit: usize,
}

/// Produces the Kolakoski sequence for a generating pattern.
///
/// # Example
///
/// ```
/// use lazy_sequences::engine::Producer;
/// use lazy_sequences::sequences::{Kolakoski, KolakoskiPattern};
///
/// let mut classic = Kolakoski::new();
/// assert_eq!(classic.take(8).unwrap(), vec![1, 2, 2, 1, 1, 2, 1, 2]);
///
/// let pattern = KolakoskiPattern::new([1, 3]).unwrap();
/// let mut one_three = Kolakoski::with_pattern(pattern);
/// assert_eq!(one_three.take(8).unwrap(), vec![1, 3, 3, 3, 1, 1, 1, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Kolakoski {
    pattern: KolakoskiPattern,
    memo: MemoTable<u64>,
    read: usize,
    emit: usize,
}

impl Kolakoski {
    /// The classical Kolakoski sequence, pattern `{1, 2}`.
    pub fn new() -> Self {
        Self::with_pattern(KolakoskiPattern::default())
    }

    pub fn with_pattern(pattern: KolakoskiPattern) -> Self {
        debug!(pattern = ?pattern.values(), "Created Kolakoski generator");
        Self {
            pattern,
            memo: MemoTable::new(),
            read: 0,
            emit: 0,
        }
    }

    pub fn pattern(&self) -> &KolakoskiPattern {
        &self.pattern
    }

    /// Current cursor positions.
    pub fn cursor(&self) -> KolakoskiCursor {
        KolakoskiCursor {
            write: self.memo.len(),
            read: self.read,
            emit: self.emit,
        }
    }

    /// Terms generated so far, including any not yet emitted.
    pub fn memo(&self) -> &MemoTable<u64> {
        &self.memo
    }

    /// Append one complete run to the memo.
    fn extend_run(&mut self) -> Result<(), SequenceError> {
        let value = self.pattern.value_for_run(self.read);
        self.memo.push(value);

        let length = *self.memo.get(self.read).ok_or(SequenceError::MemoIndex {
            sequence: NAME,
            index: self.read,
            len: self.memo.len(),
        })?;
        let repeats = usize::try_from(length - 1).map_err(|_| SequenceError::Overflow {
            sequence: NAME,
            index: self.memo.len() as u64,
        })?;
        self.memo.push_repeated(value, repeats);

        trace!(
            run = self.read,
            value,
            length,
            write = self.memo.len(),
            "Extended Kolakoski memo"
        );
        self.read += 1;
        Ok(())
    }
}

impl Default for Kolakoski {
    fn default() -> Self {
        Self::new()
    }
}

impl Producer for Kolakoski {
    type Item = u64;

    fn next_term(&mut self) -> Result<u64, SequenceError> {
        while self.emit >= self.memo.len() {
            self.extend_run()?;
        }
        let term = self.memo[self.emit];
        self.emit += 1;
        Ok(term)
    }

    fn name(&self) -> &str {
        NAME
    }
}
