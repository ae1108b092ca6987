// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use lazy_sequences::Producer;

/// Take `n` terms, panicking with the producer name on error.
pub fn prefix<P: Producer>(producer: &mut P, n: usize) -> Vec<P::Item> {
    let name = producer.name().to_string();
    producer
        .take(n)
        .unwrap_or_else(|e| panic!("{} failed within {} terms: {}", name, n, e))
}

/// Split a prefix into (value, length) runs. The last run may be incomplete.
pub fn run_lengths(terms: &[u64]) -> Vec<(u64, u64)> {
    let mut runs: Vec<(u64, u64)> = Vec::new();
    for &t in terms {
        match runs.last_mut() {
            Some((value, length)) if *value == t => *length += 1,
            _ => runs.push((t, 1)),
        }
    }
    runs
}

/// binomial(2n, n) / (n + 1), computed by the product formula in u128.
pub fn catalan_closed_form(n: u64) -> u128 {
    let mut c: u128 = 1;
    for k in 0..n as u128 {
        c = c * 2 * (2 * k + 1) / (k + 2);
    }
    c
}

/// Primality by plain trial division, independent of the generator.
pub fn is_prime(n: u64) -> bool {
    n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}
