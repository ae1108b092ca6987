// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generators for classical integer and combinatorial sequences.
//!
//! Every generator implements [`crate::engine::Producer`] and owns all of its
//! state:
//! - `Primes`: trial division against the primes found so far
//! - `ThueMorse` / `ThueMorseClosedForm`: doubling construction and popcount parity
//! - `Catalan`: convolution recurrence over a memo
//! - `LookAndSay`: run-length description of the previous term
//! - `Kolakoski`: self-describing run-length sequence over a generating pattern
//! - `TenThousand`: the Hofstadter-Conway $10000 sequence
//!
//! Linear recurrences live in [`crate::recurrence`].

pub mod catalan;
pub mod kolakoski;
pub mod look_and_say;
pub mod primes;
pub mod ten_thousand;
pub mod thue_morse;

// Re-export for convenience
pub use catalan::Catalan;
pub use kolakoski::{Kolakoski, KolakoskiCursor, KolakoskiPattern};
pub use look_and_say::{look_and_say, LookAndSay};
pub use primes::Primes;
pub use ten_thousand::TenThousand;
pub use thue_morse::{thue_morse_bit, ThueMorse, ThueMorseClosedForm};
