// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Catalog of every available sequence, addressable by name.
//!
//! [`SequenceKind`] enumerates the generators and parses their kebab-case names
//! ("linear-recurrence", "thue-morse-closed-form", ...). Together with
//! [`SequenceOptions`] it builds a type-erased producer whose terms are already
//! formatted as strings, which is all a presentation layer needs.
//!
//! # Example
//!
//! ```
//! use lazy_sequences::catalog::{SequenceKind, SequenceOptions};
//! use lazy_sequences::engine::Producer;
//!
//! let kind: SequenceKind = "look-and-say".parse().unwrap();
//! let mut producer = kind.build(&SequenceOptions::default()).unwrap();
//! assert_eq!(producer.take(3).unwrap(), vec!["1", "11", "21"]);
//! ```

use strum::EnumMessage;
use strum_macros::{
    Display, EnumCount as EnumCountMacro, EnumIter, EnumMessage as EnumMessageMacro, EnumString,
};

use crate::engine::{Producer, Rendered};
use crate::error::SequenceError;
use crate::recurrence::{LinearRecurrence, RecurrenceSpec};
use crate::sequences::{
    Catalan, Kolakoski, KolakoskiPattern, LookAndSay, Primes, TenThousand, ThueMorse,
    ThueMorseClosedForm,
};

/// Every sequence the crate can generate.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumCountMacro,
    EnumIter,
    EnumMessageMacro,
    EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum SequenceKind {
    #[strum(message = "order-d linear recurrence via companion-matrix powers")]
    LinearRecurrence,
    #[strum(message = "prime numbers by trial division")]
    Primes,
    #[strum(message = "Thue-Morse sequence by repeated complement doubling")]
    ThueMorse,
    #[strum(message = "Thue-Morse sequence by popcount parity")]
    ThueMorseClosedForm,
    #[strum(message = "Catalan numbers by convolution")]
    Catalan,
    #[strum(message = "Conway's look-and-say sequence")]
    LookAndSay,
    #[strum(message = "self-describing run-length sequence")]
    Kolakoski,
    #[strum(message = "Hofstadter-Conway $10000 sequence")]
    TenThousand,
}

/// Construction parameters, each used by the kinds that need it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceOptions {
    /// Recurrence coefficients, newest first.
    pub coefficients: Vec<i64>,
    /// Recurrence initial terms, newest first.
    pub initial: Vec<i64>,
    /// Leading recurrence terms to skip.
    pub jump: u64,
    /// Kolakoski generating pattern.
    pub pattern: Vec<u64>,
    /// Look-and-say starting term.
    pub seed: String,
}

impl Default for SequenceOptions {
    /// Fibonacci recurrence, no jump, pattern `{1, 2}`, seed "1".
    fn default() -> Self {
        let fibonacci = RecurrenceSpec::fibonacci();
        Self {
            coefficients: fibonacci.coefficients().to_vec(),
            initial: fibonacci.initial().to_vec(),
            jump: 0,
            pattern: KolakoskiPattern::default().values().to_vec(),
            seed: String::from("1"),
        }
    }
}

impl SequenceKind {
    /// Build a producer for this kind, formatting each term as a string.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Configuration`] if the options relevant to this
    /// kind are invalid, or [`SequenceError::PowerOverflow`] if the recurrence jump
    /// cannot be represented.
    pub fn build(
        self,
        options: &SequenceOptions,
    ) -> Result<Box<dyn Producer<Item = String>>, SequenceError> {
        let producer: Box<dyn Producer<Item = String>> = match self {
            Self::LinearRecurrence => {
                let spec =
                    RecurrenceSpec::new(options.coefficients.clone(), options.initial.clone())?;
                Box::new(Rendered::new(LinearRecurrence::with_jump(
                    spec,
                    options.jump,
                )?))
            }
            Self::Primes => Box::new(Rendered::new(Primes::new())),
            Self::ThueMorse => Box::new(Rendered::new(ThueMorse::new())),
            Self::ThueMorseClosedForm => Box::new(Rendered::new(ThueMorseClosedForm::new())),
            Self::Catalan => Box::new(Rendered::new(Catalan::new())),
            Self::LookAndSay => Box::new(LookAndSay::with_seed(&options.seed)?),
            Self::Kolakoski => {
                let pattern = KolakoskiPattern::new(options.pattern.clone())?;
                Box::new(Rendered::new(Kolakoski::with_pattern(pattern)))
            }
            Self::TenThousand => Box::new(Rendered::new(TenThousand::new())),
        };
        Ok(producer)
    }

    /// One-line description of the sequence.
    pub fn description(self) -> &'static str {
        self.get_message().unwrap_or_default()
    }
}
