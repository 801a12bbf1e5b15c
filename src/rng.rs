// src/rng.rs
//! Random sources for path generation
//!
//! # Design Philosophy
//!
//! The generator never reaches for a process-wide RNG. Every call receives its
//! source of normal draws explicitly, which gives:
//! 1. **Reproducibility**: same seed → same path
//! 2. **Parallel safety**: each ensemble row owns an independent stream
//! 3. **Replay**: a recorded sequence of draws reproduces a known realization
//!
//! # Normal draws
//!
//! Any [`rand::Rng`] acts as a [`NormalSource`] by scaling a standard normal:
//! ```text
//! X = μ + σ Z,   Z ~ N(0,1)
//! ```

use crate::error::{WalkError, WalkResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Supplier of normally distributed samples
pub trait NormalSource {
    /// Draw one sample from N(mean, std_dev²)
    fn sample_normal(&mut self, mean: f64, std_dev: f64) -> f64;

    /// Draw `count` samples, failing if the source cannot supply them all.
    ///
    /// Unbounded sources never fail; the default implementation simply
    /// collects `count` draws.
    fn try_sample_normals(&mut self, count: usize, mean: f64, std_dev: f64) -> WalkResult<Vec<f64>> {
        Ok((0..count).map(|_| self.sample_normal(mean, std_dev)).collect())
    }
}

impl<R: Rng + ?Sized> NormalSource for R {
    fn sample_normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        mean + std_dev * get_normal_draw(self)
    }
}

/// Replays a recorded sequence of draws verbatim
///
/// The recorded values are returned as-is; the requested mean and standard
/// deviation are ignored, since the recording already carries them.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    draws: Vec<f64>,
    position: usize,
}

impl ReplaySource {
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, position: 0 }
    }

    /// Draws not yet consumed
    pub fn remaining(&self) -> usize {
        self.draws.len() - self.position
    }
}

impl NormalSource for ReplaySource {
    /// Panics once the recording is exhausted; use
    /// [`NormalSource::try_sample_normals`] for a checked draw.
    fn sample_normal(&mut self, _mean: f64, _std_dev: f64) -> f64 {
        let draw = self
            .draws
            .get(self.position)
            .copied()
            .unwrap_or_else(|| {
                panic!(
                    "replay source exhausted after {} recorded draws",
                    self.draws.len()
                )
            });
        self.position += 1;
        draw
    }

    fn try_sample_normals(&mut self, count: usize, _mean: f64, _std_dev: f64) -> WalkResult<Vec<f64>> {
        if count > self.remaining() {
            return Err(WalkError::SourceExhausted {
                requested: count,
                available: self.remaining(),
            });
        }
        let start = self.position;
        self.position += count;
        Ok(self.draws[start..self.position].to_vec())
    }
}

/// RNG factory for reproducible parallel simulations
#[derive(Debug, Clone, Copy)]
pub struct RngFactory {
    base_seed: u64,
}

impl RngFactory {
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    /// Create a standard RNG for a specific path
    pub fn create_std_rng(&self, path_id: u64) -> StdRng {
        StdRng::seed_from_u64(self.base_seed.wrapping_add(path_id))
    }
}

pub fn seed_rng_from_u64(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}
