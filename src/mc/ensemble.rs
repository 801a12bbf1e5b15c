// src/mc/ensemble.rs
//! Parallel generation of many independent walks.
//!
//! Row `p` of the ensemble is drawn from `RngFactory::create_std_rng(p)`, so
//! every row depends only on `(base_seed, p)` and the ensemble is identical no
//! matter how rayon schedules the rows.

use crate::error::{validation::*, WalkResult};
use crate::models::model::PathModel;
use crate::path::Path;
use crate::rng::{NormalSource, RngFactory};
use ndarray::{Array1, Array2, Axis};
use rayon::prelude::*;
use statrs::statistics::Statistics;
use tracing::{debug, trace};

/// `paths × (steps + 1)` matrix of walk values on a shared time grid
#[derive(Debug, Clone, PartialEq)]
pub struct PathEnsemble {
    values: Array2<f64>,
}

impl PathEnsemble {
    pub fn paths(&self) -> usize {
        self.values.nrows()
    }

    pub fn steps(&self) -> usize {
        self.values.ncols() - 1
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Row `index` as a standalone path
    pub fn path(&self, index: usize) -> Option<Path> {
        if index >= self.paths() {
            return None;
        }
        Some(Path::from_values(self.values.row(index).to_vec()))
    }

    pub fn terminal_values(&self) -> Vec<f64> {
        self.values.column(self.steps()).to_vec()
    }

    /// Sample mean and unbiased variance of the terminal values.
    ///
    /// The variance is zero for a single-path ensemble.
    pub fn terminal_moments(&self) -> (f64, f64) {
        let terminal = self.terminal_values();
        let mean = terminal.iter().mean();
        let variance = if terminal.len() > 1 {
            terminal.iter().variance()
        } else {
            0.0
        };
        (mean, variance)
    }
}

/// Generate `paths` independent walks of `steps` increments each.
///
/// # Errors
///
/// `InvalidConfiguration` if `paths` is zero or above the cap, `steps`
/// exceeds the step cap, or the whole matrix would exceed
/// `MAX_ENSEMBLE_POINTS` values. All checks run before allocation.
pub fn generate_ensemble<M: PathModel + Sync>(
    model: &M,
    steps: usize,
    paths: usize,
    base_seed: u64,
) -> WalkResult<PathEnsemble> {
    validate_paths(paths)?;
    validate_step_count(steps)?;
    validate_ensemble_size(paths, steps)?;
    debug!(paths, steps, base_seed, "generating path ensemble");

    let factory = RngFactory::new(base_seed);
    let std_dev = model.increment_std_dev();
    let mut values = Array2::<f64>::zeros((paths, steps + 1));

    values
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(p, mut row)| {
            trace!(path = p, "simulating ensemble row");
            let mut rng = factory.create_std_rng(p as u64);
            let increments: Vec<f64> = (0..steps).map(|_| rng.sample_normal(0.0, std_dev)).collect();
            let path = model.path_from_increments(&increments);
            row.assign(&Array1::from(path.into_values()));
        });

    Ok(PathEnsemble { values })
}
