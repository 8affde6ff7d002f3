//! # Identifier Generation
//!
//! Every entity kind gets a uniformly random id from its configured
//! closed range. Generation retries while the owning collection
//! already contains the candidate, so sibling ids are genuinely
//! unique and can serve as binary-search keys.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// Random identifier source for the whole ledger.
///
/// Seedable so tests get a deterministic id sequence.
#[derive(Debug)]
pub struct IdGenerator {
    rng: StdRng,
}

impl IdGenerator {
    /// Generator backed by OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for tests.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw an id from `range`, retrying while `taken` reports a
    /// collision with an existing sibling.
    pub fn generate<F>(&mut self, range: &RangeInclusive<u32>, mut taken: F) -> u32
    where
        F: FnMut(u32) -> bool,
    {
        loop {
            let candidate = self.rng.gen_range(range.clone());
            if !taken(candidate) {
                return candidate;
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_in_range() {
        let mut ids = IdGenerator::from_seed(7);
        for _ in 0..1_000 {
            let id = ids.generate(&(1_000..=9_999), |_| false);
            assert!((1_000..=9_999).contains(&id));
        }
    }

    #[test]
    fn retries_until_free() {
        let mut ids = IdGenerator::from_seed(7);
        // Only one free slot in the range; the generator must land on it.
        let id = ids.generate(&(1..=10), |candidate| candidate != 4);
        assert_eq!(id, 4);
    }

    #[test]
    fn seeded_sequence_is_deterministic() {
        let mut a = IdGenerator::from_seed(42);
        let mut b = IdGenerator::from_seed(42);
        for _ in 0..10 {
            assert_eq!(
                a.generate(&(1_000_000..=9_999_999), |_| false),
                b.generate(&(1_000_000..=9_999_999), |_| false)
            );
        }
    }
}
