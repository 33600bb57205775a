//! Deterministic key workloads.
//!
//! Keys are the integers `0..size` shuffled by a seeded `StdRng`, so the same
//! `(size, seed)` always yields the same insertion and query orders for a
//! given `rand` release.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Multiplier separating the query stream's seed from the insertion seed.
pub const QUERY_SEED_STRIDE: u64 = 101;

/// The integers `[0, n)` in an order fixed by `seed`.
pub fn shuffled_keys(n: usize, seed: u64) -> Vec<u64> {
    let mut keys: Vec<u64> = (0..n as u64).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    keys.shuffle(&mut rng);
    keys
}

/// Seed used for the insertion order of a given size.
pub fn insertion_seed(seed: u64, size: usize) -> u64 {
    seed.wrapping_add(size as u64)
}

/// Seed used for the query order of a given size.
pub fn query_seed(seed: u64, size: usize) -> u64 {
    seed.wrapping_add((size as u64).wrapping_mul(QUERY_SEED_STRIDE))
}

/// Insertion and query sequences over the same key set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    keys: Vec<u64>,
    queries: Vec<u64>,
}

impl Workload {
    pub fn generate(size: usize, seed: u64) -> Self {
        let keys = shuffled_keys(size, insertion_seed(seed, size));
        let mut queries = keys.clone();
        let mut rng = StdRng::seed_from_u64(query_seed(seed, size));
        queries.shuffle(&mut rng);
        Self { keys, queries }
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> &[u64] {
        &self.keys
    }

    /// Keys in lookup order.
    pub fn queries(&self) -> &[u64] {
        &self.queries
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffled_keys_is_permutation() {
        let mut keys = shuffled_keys(1000, 7);
        assert_eq!(keys.len(), 1000);
        keys.sort_unstable();
        assert!(keys.iter().copied().eq(0..1000u64));
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(shuffled_keys(500, 1), shuffled_keys(500, 2));
    }

    #[test]
    fn test_query_order_is_decorrelated() {
        let workload = Workload::generate(1000, 1337);
        assert_ne!(workload.keys(), workload.queries());

        let mut queries = workload.queries().to_vec();
        queries.sort_unstable();
        assert!(queries.iter().copied().eq(0..1000u64));
    }

    #[test]
    fn test_seed_derivation() {
        assert_eq!(insertion_seed(1337, 100), 1437);
        assert_eq!(query_seed(1337, 100), 1337 + 10_100);
        assert_eq!(insertion_seed(u64::MAX, 1), 0);
    }

    #[test]
    fn test_tiny_workloads() {
        let empty = Workload::generate(0, 42);
        assert!(empty.is_empty());
        assert!(empty.queries().is_empty());

        let single = Workload::generate(1, 42);
        assert_eq!(single.keys(), &[0]);
        assert_eq!(single.queries(), &[0]);
    }
}
