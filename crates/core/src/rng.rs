//! Injectable randomness seam for generation and goal selection.
//! This module exists so every random decision can be replayed by tests.
//! It does not own seed entropy; callers provide seeds.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

/// Uniform random primitive used by the generator, the wall builder, and
/// goal placement. Default methods derive everything from `next_u32` so a
/// scripted test source only has to supply raw words.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Uniform index in `0..bound`. `bound` must be non-zero.
    fn pick_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        (self.next_u32() as usize) % bound
    }

    /// Uniform value in `[0, 1)`.
    fn unit_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1_u32 << 24) as f32
    }

    /// Uniform value in `[-magnitude, magnitude]`.
    fn jitter(&mut self, magnitude: f32) -> f32 {
        (self.unit_f32() * 2.0 - 1.0) * magnitude
    }
}

/// Production source backed by ChaCha8.
pub struct ChaChaSource {
    rng: ChaCha8Rng,
}

impl ChaChaSource {
    pub fn seeded(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl RandomSource for ChaChaSource {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }
}

/// Replays a fixed word sequence, cycling when exhausted.
#[cfg(test)]
pub struct ScriptedSource {
    words: Vec<u32>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new(words: Vec<u32>) -> Self {
        assert!(!words.is_empty(), "scripted source needs at least one word");
        Self { words, cursor: 0 }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn next_u32(&mut self) -> u32 {
        let word = self.words[self.cursor % self.words.len()];
        self.cursor += 1;
        word
    }
}
