//! Benchmark workloads for the dynbuf growable buffer.
//!
//! Provides deterministic input generators so bench runs are comparable
//! across machines and commits:
//!
//! - [`prefilled`]: a buffer with `n` sequential values already pushed
//! - [`random_indices`]: a seeded stream of write indices for sparse-set
//!   workloads

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynbuf::I64Buffer;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Build a buffer with `n` sequential values pushed from empty.
///
/// Starts at zero capacity so construction itself exercises the full
/// growth sequence.
pub fn prefilled(n: usize) -> I64Buffer {
    let mut buf = I64Buffer::new();
    for v in 0..n as i64 {
        buf.push(v).expect("default policy always grows");
    }
    buf
}

/// Generate `count` write indices in `0..max`, deterministic per seed.
pub fn random_indices(count: usize, max: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.random_range(0..max)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefilled_has_expected_contents() {
        let buf = prefilled(100);
        assert_eq!(buf.len(), 100);
        assert_eq!(buf.get(99), Some(99));
    }

    #[test]
    fn random_indices_deterministic_per_seed() {
        assert_eq!(random_indices(50, 1000, 7), random_indices(50, 1000, 7));
        assert_ne!(random_indices(50, 1000, 7), random_indices(50, 1000, 8));
    }
}
