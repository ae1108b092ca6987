// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Producer trait for lazy, infinite sequences.
//!
//! Every generator in this crate is an explicit state machine implementing
//! [`Producer`]. Each call to [`Producer::next_term`] advances the generator's
//! private state by exactly one term. Sequences never end: the caller decides how
//! many terms to consume.
//!
//! # Example
//!
//! ```
//! use lazy_sequences::engine::Producer;
//! use lazy_sequences::SequenceError;
//!
//! /// The natural numbers 0, 1, 2, ...
//! #[derive(Debug, Default)]
//! struct Naturals {
//!     next: u64,
//! }
//!
//! impl Producer for Naturals {
//!     type Item = u64;
//!
//!     fn next_term(&mut self) -> Result<u64, SequenceError> {
//!         let term = self.next;
//!         self.next = term.checked_add(1).ok_or(SequenceError::Overflow {
//!             sequence: "Naturals",
//!             index: term,
//!         })?;
//!         Ok(term)
//!     }
//! }
//!
//! let mut naturals = Naturals::default();
//! assert_eq!(naturals.take(3).unwrap(), vec![0, 1, 2]);
//! assert_eq!(naturals.take(2).unwrap(), vec![3, 4]);
//! ```

use std::fmt::Debug;

use crate::error::SequenceError;

/// A lazy producer of an infinite sequence of `Item`s.
///
/// # Contract
///
/// - `next_term` may be called an unbounded number of times. It only fails
///   when the next term no longer fits the item type; in that case the
///   generator's state is left as it was.
/// - Each instance owns its state exclusively. Advancing one instance never
///   influences another.
/// - Consuming a prefix and discarding the producer is indistinguishable from
///   consuming more, apart from which terms were seen.
pub trait Producer: Debug {
    /// The type of the terms produced.
    type Item;

    /// Produce the next term and advance.
    fn next_term(&mut self) -> Result<Self::Item, SequenceError>;

    /// Produce the next `n` terms, in order.
    ///
    /// On error, the terms produced before the failing one are lost to the
    /// caller but have still been consumed.
    fn take(&mut self, n: usize) -> Result<Vec<Self::Item>, SequenceError> {
        let mut terms = Vec::with_capacity(n);
        for _ in 0..n {
            terms.push(self.next_term()?);
        }
        Ok(terms)
    }

    /// Discard the next `n` terms.
    ///
    /// This is linear in `n`. Generators with a faster skip-ahead expose it
    /// at construction (see [`crate::recurrence::LinearRecurrence::with_jump`]).
    fn skip_terms(&mut self, n: usize) -> Result<(), SequenceError> {
        for _ in 0..n {
            self.next_term()?;
        }
        Ok(())
    }

    /// Optional: Get a name for this producer (for diagnostics).
    ///
    /// Default implementation returns the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Turn this producer into a standard [`Iterator`].
    ///
    /// The iterator never returns `None` on its own; bound it with
    /// [`Iterator::take`]. After yielding an error it is exhausted.
    fn terms(self) -> Terms<Self>
    where
        Self: Sized,
    {
        Terms {
            producer: self,
            failed: false,
        }
    }
}

impl<P: Producer + ?Sized> Producer for Box<P> {
    type Item = P::Item;

    fn next_term(&mut self) -> Result<Self::Item, SequenceError> {
        (**self).next_term()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Iterator adapter returned by [`Producer::terms`].
#[derive(Debug)]
pub struct Terms<P> {
    producer: P,
    failed: bool,
}

impl<P> Terms<P> {
    /// Recover the underlying producer.
    pub fn into_inner(self) -> P {
        self.producer
    }
}

impl<P: Producer> Iterator for Terms<P> {
    type Item = Result<P::Item, SequenceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = self.producer.next_term();
        self.failed = result.is_err();
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts up from zero, failing once it reaches `limit`.
    #[derive(Debug)]
    struct CountTo {
        next: u64,
        limit: u64,
    }

    impl Producer for CountTo {
        type Item = u64;

        fn next_term(&mut self) -> Result<u64, SequenceError> {
            if self.next >= self.limit {
                return Err(SequenceError::Overflow {
                    sequence: "CountTo",
                    index: self.next,
                });
            }
            self.next += 1;
            Ok(self.next - 1)
        }

        fn name(&self) -> &str {
            "CountTo"
        }
    }

    #[test]
    fn test_take_continues_where_it_left_off() {
        let mut p = CountTo { next: 0, limit: 100 };
        assert_eq!(p.take(3).unwrap(), vec![0, 1, 2]);
        assert_eq!(p.take(0).unwrap(), Vec::<u64>::new());
        assert_eq!(p.take(2).unwrap(), vec![3, 4]);
    }

    #[test]
    fn test_skip_terms() {
        let mut p = CountTo { next: 0, limit: 100 };
        p.skip_terms(10).unwrap();
        assert_eq!(p.next_term().unwrap(), 10);
    }

    #[test]
    fn test_take_propagates_error() {
        let mut p = CountTo { next: 0, limit: 2 };
        let err = p.take(5).unwrap_err();
        assert_eq!(
            err,
            SequenceError::Overflow {
                sequence: "CountTo",
                index: 2
            }
        );
    }

    #[test]
    fn test_terms_iterator_stops_after_error() {
        let p = CountTo { next: 0, limit: 2 };
        let collected: Vec<_> = p.terms().collect();
        assert_eq!(collected.len(), 3);
        assert_eq!(collected[0], Ok(0));
        assert_eq!(collected[1], Ok(1));
        assert!(collected[2].is_err());
    }

    #[test]
    fn test_boxed_producer_forwards() {
        let mut boxed: Box<dyn Producer<Item = u64>> =
            Box::new(CountTo { next: 5, limit: 100 });
        assert_eq!(boxed.name(), "CountTo");
        assert_eq!(boxed.take(2).unwrap(), vec![5, 6]);
    }
}
