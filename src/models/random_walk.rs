// src/models/random_walk.rs
//! Discrete Random Walk as a Wiener Process Stand-in
//!
//! # Mathematical Framework
//!
//! On the integer grid `t = 0, 1, ..., N` the walk is
//! ```text
//! X_0 = x0
//! X_i = X_{i-1} + ε_i,   ε_i ~ N(0, dt²) i.i.d.
//! ```
//!
//! The increment standard deviation is `dt` itself, not `√dt`. With
//! `√dt` the sum of N increments would have variance `N·dt = T`, matching
//! `W_T ~ N(0, T)`; here `Var[X_N - x0] = N·dt²`. The literal scaling is kept
//! so recorded walks reproduce exactly.

use super::model::PathModel;
use crate::error::{validation::*, WalkResult};
use crate::path::Path;
use crate::rng::NormalSource;
use tracing::debug;

/// Parameters of a single random walk
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomWalk {
    dt: f64,
    x0: f64,
}

impl RandomWalk {
    /// Create a walk with increment standard deviation `dt` starting at `x0`.
    ///
    /// # Errors
    ///
    /// `InvalidParameters` if `dt` is not a finite positive number or `x0`
    /// is not finite.
    pub fn new(dt: f64, x0: f64) -> WalkResult<Self> {
        validate_positive("dt", dt)?;
        validate_finite("dt", dt)?;
        validate_finite("x0", x0)?;
        Ok(RandomWalk { dt, x0 })
    }

    /// Walk starting at zero
    pub fn standard(dt: f64) -> WalkResult<Self> {
        Self::new(dt, 0.0)
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn x0(&self) -> f64 {
        self.x0
    }

    /// Generate one realization with `steps` increments.
    ///
    /// All `steps` draws are taken from `source` before the path is built;
    /// if the source cannot supply them, nothing is consumed and the error
    /// is returned.
    pub fn generate<S: NormalSource + ?Sized>(&self, steps: usize, source: &mut S) -> WalkResult<Path> {
        validate_step_count(steps)?;
        debug!(dt = self.dt, x0 = self.x0, steps, "generating random walk");

        let increments = source.try_sample_normals(steps, 0.0, self.dt)?;
        Ok(self.path_from_increments(&increments))
    }
}

impl PathModel for RandomWalk {
    fn initial_value(&self) -> f64 {
        self.x0
    }

    fn increment_std_dev(&self) -> f64 {
        self.dt
    }
}

/// Generate one random-walk path from raw parameters.
///
/// Accepts a signed step count so that a negative `steps` is reported as
/// `InvalidParameters` rather than being unrepresentable. Every parameter is
/// validated before the first draw.
pub fn generate_path<S: NormalSource + ?Sized>(
    dt: f64,
    x0: f64,
    steps: i64,
    source: &mut S,
) -> WalkResult<Path> {
    let steps = validate_steps(steps)?;
    RandomWalk::new(dt, x0)?.generate(steps, source)
}
