// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Thue-Morse sequence, two ways.
//!
//! - [`ThueMorse`] follows the definition: start from the word "0" and
//!   repeatedly append its bitwise complement ("0" → "01" → "0110" → ...).
//! - [`ThueMorseClosedForm`] computes term `n` directly as the parity of the
//!   number of 1-bits in `n`.
//!
//! The two derivations agree term for term, which the tests check.

use tracing::trace;

use crate::engine::Producer;
use crate::error::SequenceError;

/// Term `n` of the Thue-Morse sequence: the parity of `n`'s population count.
///
/// ```
/// use lazy_sequences::sequences::thue_morse_bit;
///
/// let prefix: Vec<u8> = (0..8).map(thue_morse_bit).collect();
/// assert_eq!(prefix, vec![0, 1, 1, 0, 1, 0, 0, 1]);
/// ```
pub fn thue_morse_bit(n: u64) -> u8 {
    (n.count_ones() % 2) as u8
}

/// Thue-Morse by repeated doubling.
///
/// # State
///
/// - `word`: the constructed prefix; its length is always a power of two
/// - `cursor`: index of the next bit to emit
///
/// When the cursor reaches the end of the word, the word is doubled in place by
/// appending its complement. This happens in a loop, never by recursion.
///
/// # Example
///
/// ```
/// use lazy_sequences::engine::Producer;
/// use lazy_sequences::sequences::ThueMorse;
///
/// let mut tm = ThueMorse::new();
/// assert_eq!(tm.take(8).unwrap(), vec![0, 1, 1, 0, 1, 0, 0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct ThueMorse {
    word: Vec<u8>,
    cursor: usize,
}

impl ThueMorse {
    pub fn new() -> Self {
        Self {
            word: vec![0],
            cursor: 0,
        }
    }

    /// Length of the constructed prefix.
    pub fn buffer_len(&self) -> usize {
        self.word.len()
    }

    /// Append the complement of the word to itself.
    fn double(&mut self) {
        let len = self.word.len();
        self.word.reserve(len);
        for i in 0..len {
            let bit = self.word[i];
            self.word.push(1 - bit);
        }
        trace!(len = self.word.len(), "Doubled Thue-Morse word");
    }
}

impl Default for ThueMorse {
    fn default() -> Self {
        Self::new()
    }
}

impl Producer for ThueMorse {
    type Item = u8;

    fn next_term(&mut self) -> Result<u8, SequenceError> {
        while self.cursor >= self.word.len() {
            self.double();
        }
        let bit = self.word[self.cursor];
        self.cursor += 1;
        Ok(bit)
    }

    fn name(&self) -> &str {
        "ThueMorse"
    }
}

/// Thue-Morse from the closed form, needing only the current index.
#[derive(Debug, Clone, Default)]
pub struct ThueMorseClosedForm {
    index: u64,
}

impl ThueMorseClosedForm {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Producer for ThueMorseClosedForm {
    type Item = u8;

    fn next_term(&mut self) -> Result<u8, SequenceError> {
        let next = self
            .index
            .checked_add(1)
            .ok_or(SequenceError::Overflow {
                sequence: "ThueMorseClosedForm",
                index: self.index,
            })?;
        let bit = thue_morse_bit(self.index);
        self.index = next;
        Ok(bit)
    }

    fn name(&self) -> &str {
        "ThueMorseClosedForm"
    }
}
