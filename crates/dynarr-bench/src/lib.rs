//! Benchmark inputs for the dynarr crates.
//!
//! Inputs are drawn from a seeded ChaCha8 stream so every run measures the
//! same data.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `len` values in `[0, modulus)`, deterministic for a given `seed`.
///
/// A small `modulus` produces many duplicates, which is what the
/// remove-by-value benchmarks want.
pub fn seeded_values(seed: u64, len: usize, modulus: u32) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.next_u32() % modulus.max(1)).collect()
}

/// `count` indices, each valid for a sequence that shrinks by one per
/// removal starting from `start_len`.
pub fn shrinking_indices(seed: u64, start_len: usize, count: usize) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count.min(start_len))
        .map(|i| rng.next_u64() as usize % (start_len - i))
        .collect()
}
