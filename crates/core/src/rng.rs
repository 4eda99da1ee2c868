//! Seedable random source injected into generation and reveal.
//!
//! Callers never reach for a global RNG: the session owns one [`SeededRng`] and lends it to the
//! generator and the fog revealer, so a fixed seed reproduces room placement and carve order.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Uniform-ish value in `0..bound`. A zero bound yields zero.
    fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        (self.next_u64() % bound as u64) as usize
    }

    fn range_inclusive(&mut self, min_value: usize, max_value: usize) -> usize {
        debug_assert!(min_value <= max_value);
        min_value + self.below(max_value - min_value + 1)
    }

    /// Fisher-Yates from the back, the order the carve and room shuffle depend on.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }
}

pub struct SeededRng {
    inner: ChaCha8Rng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl RandomSource for SeededRng {
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }
}

#[cfg(test)]
pub(crate) struct ScriptedRng {
    values: Vec<u64>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedRng {
    /// Replays `values` in a loop.
    pub(crate) fn new(values: Vec<u64>) -> Self {
        Self { values, cursor: 0 }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRng {
    fn next_u64(&mut self) -> u64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
