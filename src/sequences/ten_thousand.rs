// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The Hofstadter-Conway "$10000 sequence" (OEIS A004001).
//!
//! With 0-based indexing into the memo:
//!
//! ```text
//! a(0) = a(1) = 1
//! a(n) = a(a(n-1) - 1) + a(n - a(n-1))      for n >= 2
//! ```
//!
//! The recurrence uses its own earlier values as indices. For `n >= 2` both
//! lookups land inside the memo, because `1 <= a(n-1) <= n-1`. Each lookup is
//! checked anyway; a miss is reported as [`SequenceError::MemoIndex`].

use crate::engine::Producer;
use crate::error::SequenceError;
use crate::memo::MemoTable;

const NAME: &str = "TenThousand";

/// Produces 1, 1, 2, 2, 3, 4, 4, 4, 5, 6, 7, 7, 8, ...
///
/// # Example
///
/// ```
/// use lazy_sequences::engine::Producer;
/// use lazy_sequences::sequences::TenThousand;
///
/// let mut seq = TenThousand::new();
/// assert_eq!(seq.take(10).unwrap(), vec![1, 1, 2, 2, 3, 4, 4, 4, 5, 6]);
/// ```
#[derive(Debug, Clone)]
pub struct TenThousand {
    memo: MemoTable<u64>,
    next_index: usize,
}

impl TenThousand {
    pub fn new() -> Self {
        Self {
            memo: MemoTable::seeded([1, 1]),
            next_index: 0,
        }
    }

    /// Values computed so far, starting at a(0).
    pub fn memo(&self) -> &MemoTable<u64> {
        &self.memo
    }

    fn lookup(&self, index: usize) -> Result<u64, SequenceError> {
        self.memo
            .get(index)
            .copied()
            .ok_or(SequenceError::MemoIndex {
                sequence: NAME,
                index,
                len: self.memo.len(),
            })
    }

    /// Compute a(n) for `n = memo.len()`.
    fn compute_next(&self) -> Result<u64, SequenceError> {
        let n = self.memo.len();
        let previous = self.lookup(n - 1)?;
        let bad_index = SequenceError::MemoIndex {
            sequence: NAME,
            index: n,
            len: n,
        };
        let previous = usize::try_from(previous).map_err(|_| bad_index.clone())?;

        let left = self.lookup(previous.checked_sub(1).ok_or_else(|| bad_index.clone())?)?;
        let right = self.lookup(n.checked_sub(previous).ok_or(bad_index)?)?;
        left.checked_add(right).ok_or(SequenceError::Overflow {
            sequence: NAME,
            index: n as u64,
        })
    }
}

impl Default for TenThousand {
    fn default() -> Self {
        Self::new()
    }
}

impl Producer for TenThousand {
    type Item = u64;

    fn next_term(&mut self) -> Result<u64, SequenceError> {
        if self.next_index == self.memo.len() {
            let value = self.compute_next()?;
            self.memo.push(value);
        }
        let value = self.memo[self.next_index];
        self.next_index += 1;
        Ok(value)
    }

    fn name(&self) -> &str {
        NAME
    }
}
