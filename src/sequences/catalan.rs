// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Catalan numbers via the convolution recurrence.
//!
//! ```text
//! C(0) = 1
//! C(k+1) = sum_{i=0}^{k} C(i) * C(k-i)
//! ```
//!
//! Every value is kept in a private [`MemoTable`], so producing the first `n`
//! terms costs O(n^2) multiply-adds. Terms are computed when requested, so
//! every Catalan number that fits in `u64` (up to C(36)) can be produced.

use crate::engine::Producer;
use crate::error::SequenceError;
use crate::memo::MemoTable;

const NAME: &str = "Catalan";

/// Produces 1, 1, 2, 5, 14, 42, 132, 429, ...
///
/// # Example
///
/// ```
/// use lazy_sequences::engine::Producer;
/// use lazy_sequences::sequences::Catalan;
///
/// let mut catalan = Catalan::new();
/// assert_eq!(catalan.take(6).unwrap(), vec![1, 1, 2, 5, 14, 42]);
/// ```
#[derive(Debug, Clone)]
pub struct Catalan {
    memo: MemoTable<u64>,
    next_index: usize,
}

impl Catalan {
    pub fn new() -> Self {
        Self {
            memo: MemoTable::seeded([1]),
            next_index: 0,
        }
    }

    /// Catalan numbers computed so far, starting at C(0).
    pub fn memo(&self) -> &MemoTable<u64> {
        &self.memo
    }

    /// Compute C(k) for `k = memo.len()` from the memo.
    fn convolve(&self) -> Result<u64, SequenceError> {
        let k = self.memo.len();
        let values = self.memo.as_slice();
        let overflow = SequenceError::Overflow {
            sequence: NAME,
            index: k as u64,
        };

        let mut sum: u128 = 0;
        for (&low, &high) in values.iter().zip(values.iter().rev()) {
            let product = u128::from(low) * u128::from(high);
            sum = sum.checked_add(product).ok_or_else(|| overflow.clone())?;
        }
        u64::try_from(sum).map_err(|_| overflow)
    }
}

impl Default for Catalan {
    fn default() -> Self {
        Self::new()
    }
}

impl Producer for Catalan {
    type Item = u64;

    fn next_term(&mut self) -> Result<u64, SequenceError> {
        if self.next_index == self.memo.len() {
            let value = self.convolve()?;
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

#[cfg(test)]
mod tests {
    use super::*;

    /// binomial(2n, n) / (n + 1), computed exactly in u128.
    fn closed_form(n: u64) -> u128 {
        let mut binomial: u128 = 1;
        for i in 0..n {
            binomial = binomial * u128::from(2 * n - i) / u128::from(i + 1);
        }
        binomial / u128::from(n + 1)
    }

    #[test]
    fn test_first_eight() {
        assert_eq!(
            Catalan::new().take(8).unwrap(),
            vec![1, 1, 2, 5, 14, 42, 132, 429]
        );
    }

    #[test]
    fn test_matches_closed_form() {
        let terms = Catalan::new().take(30).unwrap();
        for (n, &term) in terms.iter().enumerate() {
            assert_eq!(u128::from(term), closed_form(n as u64), "C({})", n);
        }
    }

    #[test]
    fn test_largest_representable_and_overflow() {
        let mut catalan = Catalan::new();
        let terms = catalan.take(37).unwrap();
        assert_eq!(terms[36], 11_959_798_385_860_453_492);
        assert_eq!(
            catalan.next_term(),
            Err(SequenceError::Overflow {
                sequence: NAME,
                index: 37
            })
        );
        // The failed computation left the memo untouched.
        assert_eq!(catalan.memo().len(), 37);
        assert!(catalan.next_term().is_err());
    }

    #[test]
    fn test_instances_do_not_share_memo() {
        let mut a = Catalan::new();
        a.take(10).unwrap();
        let mut b = Catalan::new();
        assert_eq!(b.memo().as_slice(), &[1]);
        assert_eq!(b.take(3).unwrap(), vec![1, 1, 2]);
        assert_eq!(a.next_term().unwrap(), 16796);
    }
}
