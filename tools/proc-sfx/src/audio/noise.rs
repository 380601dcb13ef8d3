//! Seeded noise source
//!
//! Wraps a PCG generator so every noisy cue is reproducible from a single
//! `u64` seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Seeded random source for noise and sparse impulses
#[derive(Debug, Clone)]
pub struct NoiseSource {
    rng: Pcg64,
}

impl NoiseSource {
    /// Create a noise source from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// White noise sample, uniform in -1.0..1.0
    pub fn white(&mut self) -> f64 {
        self.rng.random_range(-1.0..1.0)
    }

    /// Returns true with probability `p`
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.random_bool(p.clamp(0.0, 1.0))
    }

    /// Impulse with magnitude in `min..max` and a random sign
    pub fn impulse(&mut self, min: f64, max: f64) -> f64 {
        let magnitude = if max > min {
            self.rng.random_range(min..max)
        } else {
            min
        };
        if self.rng.random_bool(0.5) {
            magnitude
        } else {
            -magnitude
        }
    }
}
