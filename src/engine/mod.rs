// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lazy sequence engine.
//!
//! This module defines the uniform abstraction that every generator exposes,
//! and a small set of adapters over it.
//!
//! # Architecture
//!
//! A generator is an explicit state machine. All of its state (matrices, memo
//! tables, cursors) lives in ordinary struct fields, so it can be inspected,
//! cloned, and dropped like any other value. There is no hidden closure state and
//! no process-wide cache.
//!
//! The engine follows a pull model:
//! 1. The caller asks a [`Producer`] for its next term
//! 2. The producer extends its private memo only as far as needed
//! 3. The term is returned, or an overflow error if it does not fit
//!
//! Bounding the sequence is the caller's job, via [`Producer::take`] or by
//! limiting the [`Terms`] iterator.
//!
//! # Example
//!
//! ```
//! use lazy_sequences::engine::{Producer, Rendered};
//! use lazy_sequences::sequences::Catalan;
//!
//! let mut catalan = Rendered::new(Catalan::new());
//! assert_eq!(catalan.take(4).unwrap(), vec!["1", "1", "2", "5"]);
//! ```

pub mod producer;

pub use producer::{Producer, Terms};

use std::fmt::Display;

use crate::error::SequenceError;

/// Adapter formatting every term of a producer with [`Display`].
///
/// Used to drive producers with different item types through a single
/// `Box<dyn Producer<Item = String>>`.
#[derive(Debug)]
pub struct Rendered<P> {
    inner: P,
}

impl<P> Rendered<P>
where
    P: Producer,
    P::Item: Display,
{
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    /// Recover the wrapped producer.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P> Producer for Rendered<P>
where
    P: Producer,
    P::Item: Display,
{
    type Item = String;

    fn next_term(&mut self) -> Result<String, SequenceError> {
        self.inner.next_term().map(|term| term.to_string())
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
