//! Injected randomness.

use std::sync::Mutex;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
pub trait RandomSource: Send + Sync {
    /// Returns a value in `[0, bound)`, or 0 when `bound` is 0.
    fn next(&self, bound: u64) -> u64;
}

/// Seeded random source.
pub struct ChaChaRandomSource {
    rng: Mutex<ChaCha8Rng>,
}

impl ChaChaRandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for ChaChaRandomSource {
    fn next(&self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }

        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn stays_in_bounds() {
        for seed in 0..50 {
            let source = ChaChaRandomSource::new(seed);
            for bound in [1, 2, 1000, 600_000] {
                assert!(source.next(bound) < bound);
            }
        }
    }

    #[test]
    fn zero_bound() {
        assert_eq!(ChaChaRandomSource::new(1).next(0), 0);
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = ChaChaRandomSource::new(42);
        let b = ChaChaRandomSource::new(42);
        let left: Vec<_> = (0..10).map(|_| a.next(1_000_000)).collect();
        let right: Vec<_> = (0..10).map(|_| b.next(1_000_000)).collect();
        assert_eq!(left, right);
    }
}
