// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Conway's look-and-say sequence.
//!
//! Each term describes the previous one: "1" is read as "one 1" giving "11",
//! which is read as "two 1s" giving "21", then "1211", "111221", ...
//!
//! Terms grow by roughly 30% per step (Conway's constant), so they are produced
//! as strings rather than integers.

use crate::engine::Producer;
use crate::error::{ConfigurationError, SequenceError};

/// Apply one look-and-say step: each maximal run of a repeated digit becomes
/// `<count><digit>`.
///
/// ```
/// use lazy_sequences::sequences::look_and_say;
///
/// assert_eq!(look_and_say("1211"), "111221");
/// assert_eq!(look_and_say("3333333333"), "103");
/// ```
pub fn look_and_say(term: &str) -> String {
    let bytes = term.as_bytes();
    let mut next = String::with_capacity(bytes.len() * 2);
    let mut start = 0;
    while start < bytes.len() {
        let digit = bytes[start];
        let run = bytes[start..]
            .iter()
            .take_while(|&&b| b == digit)
            .count();
        next.push_str(&run.to_string());
        next.push(char::from(digit));
        start += run;
    }
    next
}

/// Produces "1", "11", "21", "1211", "111221", ...
///
/// # Example
///
/// ```
/// use lazy_sequences::engine::Producer;
/// use lazy_sequences::sequences::LookAndSay;
///
/// let mut las = LookAndSay::new();
/// assert_eq!(las.take(4).unwrap(), vec!["1", "11", "21", "1211"]);
/// ```
#[derive(Debug, Clone)]
pub struct LookAndSay {
    current: String,
}

impl LookAndSay {
    /// Start from the conventional seed "1".
    pub fn new() -> Self {
        Self {
            current: String::from("1"),
        }
    }

    /// Start from another string of decimal digits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidSeed`] if `seed` is empty or contains
    /// anything other than ASCII digits.
    pub fn with_seed(seed: &str) -> Result<Self, ConfigurationError> {
        if seed.is_empty() || !seed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfigurationError::InvalidSeed {
                seed: seed.to_string(),
            });
        }
        Ok(Self {
            current: seed.to_string(),
        })
    }
}

impl Default for LookAndSay {
    fn default() -> Self {
        Self::new()
    }
}

impl Producer for LookAndSay {
    type Item = String;

    fn next_term(&mut self) -> Result<String, SequenceError> {
        let successor = look_and_say(&self.current);
        Ok(std::mem::replace(&mut self.current, successor))
    }

    fn name(&self) -> &str {
        "LookAndSay"
    }
}
