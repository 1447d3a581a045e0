//! Gaussian noise sources for the synthetic series
//!
//! Every weather variable is a seasonal base plus an independent zero-mean
//! Gaussian perturbation. The source of those perturbations is injected so
//! that:
//! - demo runs can draw from OS entropy (fresh table on every run)
//! - tests and reproducible reports use a seeded `ChaCha8Rng` stream
//! - formula tests can pin every deviation to a fixed z-score
//!
//! `ChaCha8Rng` is used for seeded runs because its output is stable across
//! platforms and `rand` releases, unlike `StdRng`.

use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

/// Producer of zero-mean Gaussian deviations
pub trait NoiseSource {
    /// Draw one sample from N(0, sigma²)
    fn gaussian(&mut self, sigma: f64) -> f64;
}

impl<N: NoiseSource + ?Sized> NoiseSource for &mut N {
    fn gaussian(&mut self, sigma: f64) -> f64 {
        (**self).gaussian(sigma)
    }
}

/// Gaussian noise drawn from any `rand` generator
///
/// # Example
///
/// ```
/// use hotspot_core::core_types::noise::{GaussianNoise, NoiseSource};
///
/// let mut a = GaussianNoise::seeded(7);
/// let mut b = GaussianNoise::seeded(7);
/// assert_eq!(a.gaussian(8.0), b.gaussian(8.0));
/// ```
#[derive(Debug, Clone)]
pub struct GaussianNoise<R> {
    rng: R,
}

impl<R: Rng> GaussianNoise<R> {
    /// Wrap an existing generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl GaussianNoise<ChaCha8Rng> {
    /// Reproducible stream for a given seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl GaussianNoise<ThreadRng> {
    /// Unseeded stream backed by the thread-local generator
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> NoiseSource for GaussianNoise<R> {
    fn gaussian(&mut self, sigma: f64) -> f64 {
        let z: f64 = self.rng.sample(StandardNormal);
        z * sigma
    }
}

/// Every draw sits exactly `z` standard deviations from the mean
///
/// `FixedDeviation::zero()` turns the generator into the bare seasonal formula;
/// large negative `z` values exercise the clamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedDeviation {
    /// Z-score applied to every draw
    pub z: f64,
}

impl FixedDeviation {
    /// No noise at all
    #[must_use]
    pub const fn zero() -> Self {
        Self { z: 0.0 }
    }

    /// Fixed z-score
    #[must_use]
    pub const fn new(z: f64) -> Self {
        Self { z }
    }
}

impl NoiseSource for FixedDeviation {
    fn gaussian(&mut self, sigma: f64) -> f64 {
        self.z * sigma
    }
}
