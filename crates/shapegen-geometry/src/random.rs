//! Random sources for the samplers.
//!
//! Sampling functions take a `&mut impl RandomSource` rather than reaching
//! for a global generator, so tests can pass [`seeded`] generators and get
//! reproducible geometry. Every [`rand::Rng`] is a `RandomSource`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform integer and real draws.
pub trait RandomSource {
    /// Uniform integer in `[min, max]`, both inclusive.
    ///
    /// Returns `min` when the range is empty (`max < min`).
    fn random_int(&mut self, min: i64, max: i64) -> i64;

    /// Uniform real in `[min, max)`.
    ///
    /// Returns `min` when the range is empty (`max <= min`).
    fn random_float(&mut self, min: f64, max: f64) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn random_int(&mut self, min: i64, max: i64) -> i64 {
        if max < min {
            return min;
        }
        self.gen_range(min..=max)
    }

    fn random_float(&mut self, min: f64, max: f64) -> f64 {
        if max <= min {
            return min;
        }
        self.gen_range(min..max)
    }
}

/// A deterministic generator for reproducible output.
#[must_use]
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A generator seeded from operating-system entropy.
#[must_use]
pub fn from_entropy() -> StdRng {
    StdRng::from_entropy()
}

/// Integer displacement in `[-floor(amplitude), floor(amplitude)]`.
///
/// `amplitude` must already be validated as finite and non-negative.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub(crate) fn jitter<R: RandomSource + ?Sized>(rng: &mut R, amplitude: f64) -> f64 {
    let a = amplitude.floor() as i64;
    rng.random_int(-a, a) as f64
}
