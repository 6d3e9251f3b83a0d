//! Random sources for cassette generation.
//!
//! Generation never touches a global generator. Every planner draws from a
//! [`RandomSource`] passed in by the caller, so a run is fully determined by
//! the sequence of draws it receives. [`DeterministicRng`] is the PCG32-backed
//! source used for seeded generation.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Supplier of uniform draws.
///
/// The draw order of the generator is stable, so replaying the same
/// sequence of draws reproduces the same cassette bit for bit.
pub trait RandomSource {
    /// Uniform float in [0.0, 1.0).
    fn value(&mut self) -> f64;

    /// Uniform integer in `[min, max)`.
    fn range(&mut self, min: i32, max: i32) -> i32;

    /// Uniform integer in `[min, max]`.
    fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        self.range(min, max.saturating_add(1))
    }

    /// Fair coin, true when a uniform draw exceeds one half.
    fn coin(&mut self) -> bool {
        self.value() > 0.5
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn value(&mut self) -> f64 {
        (**self).value()
    }

    fn range(&mut self, min: i32, max: i32) -> i32 {
        (**self).range(min, max)
    }

    fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        (**self).range_inclusive(min, max)
    }
}

/// Wrapper around PCG32 for deterministic random number generation.
#[derive(Clone)]
pub struct DeterministicRng {
    inner: Pcg32,
}

impl DeterministicRng {
    /// Create a new RNG from a 32-bit seed.
    ///
    /// The seed is expanded to 64 bits by duplicating the bits.
    pub fn new(seed: u32) -> Self {
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            inner: Pcg32::seed_from_u64(seed64),
        }
    }

    /// Derive the seed of the cassette at `index` within a batch using BLAKE3.
    pub fn derive_cassette_seed(base_seed: u32, index: u32) -> u32 {
        let mut input = [0u8; 8];
        input[..4].copy_from_slice(&base_seed.to_le_bytes());
        input[4..].copy_from_slice(&index.to_le_bytes());
        let hash = blake3::hash(&input);
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&hash.as_bytes()[..4]);
        u32::from_le_bytes(bytes)
    }
}

impl RandomSource for DeterministicRng {
    #[inline]
    fn value(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Returns `min` when the range is empty. Debug builds assert instead.
    #[inline]
    fn range(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(max > min, "empty range [{min}, {max})");
        if max <= min {
            return min;
        }
        self.inner.gen_range(min..max)
    }

    #[inline]
    fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(max >= min, "empty range [{min}, {max}]");
        if max <= min {
            return min;
        }
        self.inner.gen_range(min..=max)
    }
}
