// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Incremental prime generator.
//!
//! Candidates 2, 3, 4, ... are tested in order by trial division against the
//! primes discovered so far, stopping at the first prime whose square exceeds the
//! candidate. A candidate divisible by none of those is prime; it is emitted and
//! added to the list used for all later candidates.
//!
//! This is trial division against a growing list, not a bit sieve: the cost per
//! candidate grows with the number of known primes up to its square root. The
//! list is owned by the generator instance; independent generators never share
//! it.

use tracing::trace;

use crate::engine::Producer;
use crate::error::SequenceError;

const NAME: &str = "Primes";

/// Produces 2, 3, 5, 7, 11, ...
///
/// # Example
///
/// ```
/// use lazy_sequences::engine::Producer;
/// use lazy_sequences::sequences::Primes;
///
/// let mut primes = Primes::new();
/// assert_eq!(primes.take(5).unwrap(), vec![2, 3, 5, 7, 11]);
/// ```
#[derive(Debug, Clone)]
pub struct Primes {
    /// Every prime emitted so far, ascending.
    known: Vec<u64>,
    /// Next number to test.
    candidate: u64,
}

impl Primes {
    pub fn new() -> Self {
        Self {
            known: Vec::new(),
            candidate: 2,
        }
    }

    /// The primes emitted so far, in ascending order.
    pub fn known_primes(&self) -> &[u64] {
        &self.known
    }

    /// Whether `candidate` is divisible by none of the known primes.
    ///
    /// Once a known prime's square exceeds the candidate, no larger known prime
    /// can be its smallest factor, so the scan stops there.
    fn passes_known_primes(&self, candidate: u64) -> bool {
        self.known
            .iter()
            .take_while(|&&p| p.saturating_mul(p) <= candidate)
            .all(|&p| candidate % p != 0)
    }
}

impl Default for Primes {
    fn default() -> Self {
        Self::new()
    }
}

impl Producer for Primes {
    type Item = u64;

    fn next_term(&mut self) -> Result<u64, SequenceError> {
        let overflow = SequenceError::Overflow {
            sequence: NAME,
            index: self.known.len() as u64,
        };

        let mut candidate = self.candidate;
        while !self.passes_known_primes(candidate) {
            candidate = candidate.checked_add(1).ok_or_else(|| overflow.clone())?;
        }
        let next_candidate = candidate.checked_add(1).ok_or(overflow)?;

        self.known.push(candidate);
        self.candidate = next_candidate;
        trace!(prime = candidate, count = self.known.len(), "Discovered prime");
        Ok(candidate)
    }

    fn name(&self) -> &str {
        NAME
    }
}
