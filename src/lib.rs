// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lazy, on-demand generators for classical integer and combinatorial sequences.
//!
//! Each generator produces its terms one at a time, indefinitely, without
//! precomputing a bound: linear recurrences, primes, Thue-Morse, Catalan numbers,
//! look-and-say, Kolakoski, and the Hofstadter-Conway $10000 sequence.
//!
//! # Architecture
//!
//! The implementation uses a two-tier state model per generator:
//!
//! ## Tier 1: Fixed configuration (Immutable)
//!
//! Built once at construction and never changed:
//! - Companion matrix of a linear recurrence
//! - Kolakoski generating pattern
//! - Recurrence coefficients and initial terms
//!
//! ## Tier 2: Progress state (Mutable)
//!
//! Advanced by every call to [`Producer::next_term`]:
//! - Current matrix power of a linear recurrence
//! - Append-only memo tables (Catalan, Kolakoski, $10000 sequence)
//! - Cursors into those tables
//!
//! All state belongs to exactly one generator instance. There is no global
//! cache, so independent generators can be advanced in any interleaving, or from
//! different threads, without observing each other.
//!
//! # Generators
//!
//! 1. **LinearRecurrence**: O(d^3) per term, O(d^3 log jump) skip-ahead
//! 2. **Primes**: trial division by the known primes up to the candidate's square root
//! 3. **ThueMorse / ThueMorseClosedForm**: two derivations of one sequence
//! 4. **Catalan**: convolution recurrence, O(n) per term
//! 5. **LookAndSay**: string-valued, grows about 30% per term
//! 6. **Kolakoski**: self-describing run lengths over any pattern
//! 7. **TenThousand**: a(n) = a(a(n-1)) + a(n - a(n-1))
//!
//! # Overflow
//!
//! Terms are native integers. A term that does not fit is reported as
//! [`SequenceError::Overflow`], never wrapped.
//!
//! A linear recurrence also keeps the companion power `M^n`, whose entries can
//! outgrow `i64` long before the terms do. Sequential generation then carries on
//! from the last `d` terms, so it fails only on a genuine term overflow. A
//! skip-ahead cannot: if `M^jump` does not fit, construction fails with
//! [`SequenceError::PowerOverflow`].
//!
//! # Example
//!
//! ```
//! use lazy_sequences::{Kolakoski, Primes, Producer};
//!
//! let mut primes = Primes::new();
//! assert_eq!(primes.take(4).unwrap(), vec![2, 3, 5, 7]);
//!
//! let mut kolakoski = Kolakoski::new();
//! assert_eq!(kolakoski.take(6).unwrap(), vec![1, 2, 2, 1, 1, 2]);
//! ```

pub mod catalog;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod memo;
pub mod recurrence;
pub mod sequences;

// Re-export commonly used types
pub use catalog::{SequenceKind, SequenceOptions};
pub use engine::{Producer, Rendered, Terms};
pub use error::{ConfigurationError, MatrixError, SequenceError};
pub use matrix::Matrix;
pub use memo::MemoTable;
pub use recurrence::{LinearRecurrence, RecurrenceSpec};
pub use sequences::{
    Catalan, Kolakoski, KolakoskiCursor, KolakoskiPattern, LookAndSay, Primes, TenThousand,
    ThueMorse, ThueMorseClosedForm,
};
