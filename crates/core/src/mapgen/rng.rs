//! Random sources for maze generation.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

pub trait MazeRng {
    /// Uniform integer in the inclusive range `[min, max]`.
    fn random_value(&mut self, min: i32, max: i32) -> i32;

    /// Uniformly random permutation of `0..count`.
    fn random_sequence(&mut self, count: usize) -> Vec<usize> {
        let mut sequence: Vec<usize> = (0..count).collect();
        for i in (1..count).rev() {
            let j = self.random_value(0, i as i32) as usize;
            sequence.swap(i, j);
        }
        sequence
    }
}

impl<R: MazeRng + ?Sized> MazeRng for &mut R {
    fn random_value(&mut self, min: i32, max: i32) -> i32 {
        (**self).random_value(min, max)
    }

    fn random_sequence(&mut self, count: usize) -> Vec<usize> {
        (**self).random_sequence(count)
    }
}

/// ChaCha8-backed source; the same seed always yields the same stream.
pub struct SeededRng {
    inner: ChaCha8Rng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl MazeRng for SeededRng {
    fn random_value(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max);
        if min >= max {
            return min;
        }
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        // Rejection sampling keeps the draw unbiased for spans that do not divide 2^64.
        let limit = u64::MAX - (u64::MAX % span);
        loop {
            let raw = self.inner.next_u64();
            if raw < limit {
                return (i64::from(min) + (raw % span) as i64) as i32;
            }
        }
    }
}
