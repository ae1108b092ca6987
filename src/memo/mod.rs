// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Append-only memo tables.
//!
//! Self-referential generators (Catalan, Kolakoski, the $10000 sequence) compute
//! each new value from values they produced earlier. They keep those values in a
//! [`MemoTable`], which only ever grows: an entry, once pushed, is read but never
//! rewritten.
//!
//! Each generator owns its table outright. Tables are never shared between
//! generator instances, so two instances of the same sequence cannot observe each
//! other.
//!
//! # Example
//!
//! ```
//! use lazy_sequences::memo::MemoTable;
//!
//! let mut memo = MemoTable::seeded([1u64, 1]);
//! let index = memo.push(2);
//!
//! assert_eq!(index, 2);
//! assert_eq!(memo.get(2), Some(&2));
//! assert_eq!(memo.as_slice(), &[1, 1, 2]);
//! ```

use std::ops::Index;

/// An append-only, 0-indexed sequence of previously produced values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoTable<T> {
    entries: Vec<T>,
}

impl<T> MemoTable<T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a table holding `seed` in order.
    pub fn seeded(seed: impl IntoIterator<Item = T>) -> Self {
        Self {
            entries: seed.into_iter().collect(),
        }
    }

    /// Append a value, returning the index it was stored at.
    pub fn push(&mut self, value: T) -> usize {
        self.entries.push(value);
        self.entries.len() - 1
    }

    /// Look up an entry, or `None` if the table is not that long yet.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    /// The most recently appended entry.
    pub fn last(&self) -> Option<&T> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }
}

impl<T: Clone> MemoTable<T> {
    /// Append `count` copies of `value`.
    pub fn push_repeated(&mut self, value: T, count: usize) {
        self.entries.extend(std::iter::repeat(value).take(count));
    }
}

impl<T> Default for MemoTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for MemoTable<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= self.len()`. Use [`MemoTable::get`] where the
    /// index is not already known to be in range.
    fn index(&self, index: usize) -> &T {
        &self.entries[index]
    }
}

impl<'a, T> IntoIterator for &'a MemoTable<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let memo: MemoTable<u64> = MemoTable::new();
        assert!(memo.is_empty());
        assert_eq!(memo.len(), 0);
        assert_eq!(memo.last(), None);
        assert_eq!(memo.get(0), None);
    }

    #[test]
    fn test_push_returns_index() {
        let mut memo = MemoTable::new();
        assert_eq!(memo.push('a'), 0);
        assert_eq!(memo.push('b'), 1);
        assert_eq!(memo.len(), 2);
        assert_eq!(memo[1], 'b');
        assert_eq!(memo.last(), Some(&'b'));
    }

    #[test]
    fn test_seeded_preserves_order() {
        let memo = MemoTable::seeded(vec![3, 1, 4]);
        assert_eq!(memo.as_slice(), &[3, 1, 4]);
        let collected: Vec<_> = memo.iter().copied().collect();
        assert_eq!(collected, vec![3, 1, 4]);
    }

    #[test]
    fn test_push_repeated() {
        let mut memo = MemoTable::seeded([1u64]);
        memo.push_repeated(2, 3);
        memo.push_repeated(9, 0);
        assert_eq!(memo.as_slice(), &[1, 2, 2, 2]);
    }

    #[test]
    fn test_earlier_entries_unchanged_by_growth() {
        let mut memo = MemoTable::seeded([10u64, 20]);
        let before = memo.as_slice().to_vec();
        for value in 0..100 {
            memo.push(value);
        }
        assert_eq!(&memo.as_slice()[..2], before.as_slice());
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let memo = MemoTable::seeded([1u64]);
        let _ = memo[1];
    }
}
