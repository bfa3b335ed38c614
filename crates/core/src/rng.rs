//! RNG module - seeded randomness for dealing boards
//!
//! Wraps ChaCha8 so a deal is fully determined by its seed (useful for tests
//! and for reproducing a reported layout), while still giving uniform
//! Fisher-Yates shuffles through `rand::seq::SliceRandom`.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::{FACE_TINT_MAX, FACE_TINT_MIN};

/// Deterministic RNG used to shuffle cards and pick face tints.
#[derive(Debug, Clone)]
pub struct DealRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DealRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this RNG was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniformly shuffle a slice in place (Fisher-Yates)
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Random face tint, each channel in `FACE_TINT_MIN..=FACE_TINT_MAX`
    pub fn tint(&mut self) -> (u8, u8, u8) {
        (
            self.inner.gen_range(FACE_TINT_MIN..=FACE_TINT_MAX),
            self.inner.gen_range(FACE_TINT_MIN..=FACE_TINT_MAX),
            self.inner.gen_range(FACE_TINT_MIN..=FACE_TINT_MAX),
        )
    }
}

impl Default for DealRng {
    fn default() -> Self {
        Self::new(1)
    }
}
